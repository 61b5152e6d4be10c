//! Performance prediction page.
//!
//! Thin consumer of the remote prediction service: picks a subject, fetches
//! the predicted grades for its roster, and lists them. If the backend
//! answers 401 the fetch helper has already forced a logout.

use leptos::prelude::*;

use crate::net::prediccion::fetch_predicciones;
use crate::state::store::SessionStore;

#[component]
pub fn PrediccionPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let materia_id = RwSignal::new(String::new());
    // Bumped by the submit button; the resource refetches when it changes.
    let consulta = RwSignal::new(None::<i64>);

    let predicciones = LocalResource::new(move || {
        let session = session.clone();
        let materia = consulta.get();
        async move {
            match materia {
                Some(id) => fetch_predicciones(&session, id).await.unwrap_or_default(),
                None => Vec::new(),
            }
        }
    });

    let on_consultar = move |_| {
        if let Ok(id) = materia_id.get_untracked().trim().parse::<i64>() {
            consulta.set(Some(id));
        }
    };

    view! {
        <div class="section-page prediccion-page">
            <h1>"Predicción de rendimiento"</h1>
            <div class="prediccion-page__controls">
                <label>
                    "Materia (id)"
                    <input
                        type="text"
                        prop:value=move || materia_id.get()
                        on:input=move |ev| materia_id.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" on:click=on_consultar>
                    "Consultar"
                </button>
            </div>
            <Suspense fallback=move || view! { <p>"Consultando..."</p> }>
                {move || {
                    predicciones
                        .get()
                        .map(|rows| {
                            view! {
                                <ul class="prediccion-page__rows">
                                    {rows
                                        .into_iter()
                                        .map(|p| {
                                            view! {
                                                <li class="prediccion-page__row">
                                                    <span>{p.estudiante}</span>
                                                    <span>{format!("{:.1}", p.nota_predicha)}</span>
                                                    <span>{p.nivel_riesgo}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
