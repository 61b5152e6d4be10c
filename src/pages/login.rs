//! Login page with the credential form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Credentials;
use crate::state::store::SessionStore;

/// Credential form. Submit is disabled while a login is in flight; the last
/// failure message is rendered under the form from session state.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let is_loading = move || state.get().is_loading;

    let on_submit = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if state.get_untracked().is_loading {
                return;
            }
            let credentials = Credentials {
                username: username.get_untracked(),
                password: password.get_untracked(),
            };
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if session.login(&credentials).await {
                    navigate("/", NavigateOptions::default());
                }
            });
        }
    };

    view! {
        <div class="login-page">
            <h1>"Académico"</h1>
            <p>"Gestión académica"</p>
            <form class="login-page__form" on:submit=on_submit>
                <label class="login-page__label">
                    "Usuario"
                    <input
                        class="login-page__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    "Contraseña"
                    <input
                        class="login-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" prop:disabled=is_loading>
                    {move || if is_loading() { "Ingresando..." } else { "Ingresar" }}
                </button>
            </form>
            <Show when=move || state.get().error.is_some()>
                <p class="login-page__error">{move || state.get().error.unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
