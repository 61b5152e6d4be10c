//! Student administration page. Admin only.

use leptos::prelude::*;

#[component]
pub fn EstudiantesPage() -> impl IntoView {
    view! {
        <div class="section-page">
            <h1>"Estudiantes"</h1>
            <p>"Alta, edición y baja de estudiantes."</p>
        </div>
    }
}
