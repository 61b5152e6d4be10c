//! Subject administration page.

use leptos::prelude::*;

#[component]
pub fn MateriasPage() -> impl IntoView {
    view! {
        <div class="section-page">
            <h1>"Materias"</h1>
            <p>"Gestión de materias y docentes asignados."</p>
        </div>
    }
}
