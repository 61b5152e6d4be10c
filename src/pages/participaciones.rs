//! Class participation recording page.

use leptos::prelude::*;

#[component]
pub fn ParticipacionesPage() -> impl IntoView {
    view! {
        <div class="section-page">
            <h1>"Participaciones"</h1>
            <p>"Registro de participación en clase."</p>
        </div>
    }
}
