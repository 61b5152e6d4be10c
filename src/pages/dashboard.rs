//! Dashboard landing page.

use leptos::prelude::*;

use crate::state::store::SessionStore;

/// Greets the signed-in user. Open to any authenticated role.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();

    let greeting = move || {
        state
            .get()
            .user
            .map_or_else(String::new, |u| format!("Hola, {}.", u.first_name))
    };
    let role_line = move || {
        state
            .get()
            .user
            .map_or_else(String::new, |u| format!("Rol: {}", u.role.label()))
    };

    view! {
        <div class="dashboard-page">
            <h1>{greeting}</h1>
            <p class="dashboard-page__role">{role_line}</p>
            <p>"Usa la barra de navegación para abrir las secciones disponibles para tu rol."</p>
        </div>
    }
}
