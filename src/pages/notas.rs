//! Grade recording page.

use leptos::prelude::*;

#[component]
pub fn NotasPage() -> impl IntoView {
    view! {
        <div class="section-page">
            <h1>"Notas"</h1>
            <p>"Registro y consulta de calificaciones por materia."</p>
        </div>
    }
}
