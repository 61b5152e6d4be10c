//! Denial surface for valid sessions with an insufficient role.

use leptos::prelude::*;

/// Distinct from the login page: the user's credentials are fine, their
/// role just does not cover the requested view.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Acceso denegado"</h1>
            <p>"Tu rol no tiene permiso para ver esta página."</p>
            <a class="btn" href="/">
                "Volver al dashboard"
            </a>
        </div>
    }
}
