//! Attendance recording page.

use leptos::prelude::*;

#[component]
pub fn AsistenciasPage() -> impl IntoView {
    view! {
        <div class="section-page">
            <h1>"Asistencias"</h1>
            <p>"Registro de asistencia por curso y fecha."</p>
        </div>
    }
}
