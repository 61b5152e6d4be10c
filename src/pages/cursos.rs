//! Course administration page. Admin only.

use leptos::prelude::*;

#[component]
pub fn CursosPage() -> impl IntoView {
    view! {
        <div class="section-page">
            <h1>"Cursos"</h1>
            <p>"Gestión de cursos y asignación de estudiantes."</p>
        </div>
    }
}
