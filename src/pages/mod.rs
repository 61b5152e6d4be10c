//! Application pages.
//!
//! Pages are leaf consumers of the session: they read `user` for display
//! and role checks but never mutate session state. Access control lives in
//! the route tree, not here.

pub mod asistencias;
pub mod cursos;
pub mod dashboard;
pub mod estudiantes;
pub mod login;
pub mod materias;
pub mod notas;
pub mod participaciones;
pub mod prediccion;
pub mod unauthorized;
