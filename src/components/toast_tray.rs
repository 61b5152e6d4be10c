//! Toast list rendered in a fixed corner of the viewport.

use leptos::prelude::*;

use crate::notify::{Toast, ToastVariant};

/// Renders the shared toast list; each toast can be dismissed by click and
/// the oldest one auto-dismisses after a few seconds in the browser.
#[component]
pub fn ToastTray() -> impl IntoView {
    let toasts = expect_context::<RwSignal<Vec<Toast>>>();

    // Auto-dismiss: each new toast schedules one removal of the oldest.
    #[cfg(feature = "hydrate")]
    Effect::new(move |prev: Option<usize>| {
        let count = toasts.with(Vec::len);
        if count > prev.unwrap_or(0) {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
                toasts.update(|t| {
                    if !t.is_empty() {
                        t.remove(0);
                    }
                });
            });
        }
        count
    });

    view! {
        <div class="toast-tray">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.variant {
                            ToastVariant::Default => "toast",
                            ToastVariant::Destructive => "toast toast--destructive",
                        };
                        let dismissed = toast.clone();
                        view! {
                            <div
                                class=class
                                on:click=move |_| {
                                    toasts
                                        .update(|t| {
                                            if let Some(pos) = t.iter().position(|x| *x == dismissed)
                                            {
                                                t.remove(pos);
                                            }
                                        });
                                }
                            >
                                <strong class="toast__title">{toast.title.clone()}</strong>
                                <span class="toast__description">{toast.description.clone()}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
