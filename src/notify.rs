//! Toast notification sink.
//!
//! The session store reports every transition boundary (login success or
//! failure, logout, revoked session) through a fire-and-forget [`Notifier`].
//! The UI implementation pushes onto a shared signal rendered by
//! [`crate::components::toast_tray::ToastTray`]; tests substitute a
//! recording sink.

use leptos::prelude::*;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// One user-facing notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            variant: ToastVariant::Destructive,
        }
    }
}

/// Fire-and-forget notification sink.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Pushes toasts onto the shared signal the tray renders from.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<Vec<Toast>>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.update(|t| t.push(toast));
    }
}
