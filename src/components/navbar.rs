//! Top navigation bar with role-filtered links and logout.

use leptos::prelude::*;

use crate::guard::{GuardOutcome, decide};
use crate::routes;
use crate::state::store::SessionStore;

const LINKS: &[(&str, &str)] = &[
    ("Dashboard", "/"),
    ("Estudiantes", "/estudiantes"),
    ("Cursos", "/cursos"),
    ("Materias", "/materias"),
    ("Notas", "/notas"),
    ("Asistencias", "/asistencias"),
    ("Participaciones", "/participaciones"),
    ("Predicción", "/prediccion-rendimiento"),
];

/// Navigation bar for the authenticated area.
///
/// Links are filtered through the same policy table the route gates use, so
/// a user never sees a link their role cannot open.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();

    let visible_links = move || {
        let state = state.get();
        LINKS
            .iter()
            .filter(|(_, path)| {
                let roles = routes::policy(path).flatten();
                decide(&state, roles) == GuardOutcome::Allow
            })
            .map(|(label, path)| {
                view! {
                    <a class="navbar__link" href=*path>
                        {*label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    let user_line = move || {
        state.get().user.map_or_else(String::new, |u| {
            format!("{} · {}", u.full_name(), u.role.label())
        })
    };

    let on_logout = {
        let session = session.clone();
        move |_| {
            session.logout();
            #[cfg(feature = "hydrate")]
            {
                // Hard navigation for a clean state after logout.
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            }
        }
    };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Académico"</span>
            <div class="navbar__links">{visible_links}</div>
            <span class="navbar__spacer"></span>
            <span class="navbar__user">{user_line}</span>
            <button class="btn navbar__logout" on:click=on_logout>
                "Salir"
            </button>
        </nav>
    }
}
