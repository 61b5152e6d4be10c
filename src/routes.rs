//! Role-to-route policy table.
//!
//! Static configuration consumed by the route tree in [`crate::app`] and by
//! the navbar for link filtering. `None` means any authenticated role may
//! view the route.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Role;

/// Roles that may open the grading, attendance, participation, subject, and
/// prediction surfaces.
pub const DOCENTES: &[Role] = &[Role::Profesor, Role::Administrativo];

/// Roles that may manage students and courses.
pub const ADMIN: &[Role] = &[Role::Administrativo];

/// Path → allowed roles, one entry per page the app serves.
pub const POLICY: &[(&str, Option<&'static [Role]>)] = &[
    ("/", None),
    ("/notas", Some(DOCENTES)),
    ("/asistencias", Some(DOCENTES)),
    ("/participaciones", Some(DOCENTES)),
    ("/prediccion-rendimiento", Some(DOCENTES)),
    ("/materias", Some(DOCENTES)),
    ("/estudiantes", Some(ADMIN)),
    ("/cursos", Some(ADMIN)),
];

/// Look up the declared role set for a route path. `None` if the path is
/// not in the table.
pub fn policy(path: &str) -> Option<Option<&'static [Role]>> {
    POLICY
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, roles)| *roles)
}
