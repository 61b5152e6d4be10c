#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::session::{SessionAction, SessionState, User, reduce};
use crate::net::api::{self, ApiError};
use crate::net::types::{Credentials, LoginResponse};
use crate::notify::{Notifier, Toast};
use crate::storage::{self, KeyValueStore};

/// Cloneable handle to the single application session.
///
/// Constructed once at startup with its storage and notification
/// collaborators injected, then provided via context. Consumers read the
/// session reactively through [`SessionStore::state`]; every mutation goes
/// through one of the named operations below, each of which dispatches a
/// [`SessionAction`] into the pure reducer.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<SessionState>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            storage,
            notifier,
        }
    }

    /// Read-only reactive view of the session.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Current state without subscribing. Used by the network layer and by
    /// event handlers that must not track.
    pub fn snapshot(&self) -> SessionState {
        self.state.get_untracked()
    }

    /// The held credential, if any, for `Authorization` headers.
    pub fn access_token(&self) -> Option<String> {
        self.state.get_untracked().access_token
    }

    fn dispatch(&self, action: SessionAction) {
        self.state.update(|s| *s = reduce(s, action));
    }

    /// Startup restore, run once per process lifetime.
    ///
    /// Both the token and a well-formed serialized user must be present;
    /// anything else (partial record, parse failure) clears all three slots
    /// and leaves the session empty. Never surfaced to the user.
    pub fn restore(&self) {
        let token = self.storage.get(storage::ACCESS_TOKEN_KEY);
        let raw_user = self.storage.get(storage::USER_KEY);
        match (token, raw_user) {
            (Some(access_token), Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => self.dispatch(SessionAction::Restore { user, access_token }),
                Err(err) => {
                    leptos::logging::warn!("stored session did not parse, clearing: {err}");
                    self.clear_slots();
                }
            },
            (None, None) => {}
            _ => self.clear_slots(),
        }
    }

    /// Send credentials to the auth endpoint and settle the session.
    ///
    /// Resolves to `true` on success, `false` on any failure; no error
    /// crosses this boundary. Failure copy follows a fixed priority: the
    /// server's `detail` verbatim, then the no-response copy, then the
    /// generic copy.
    pub async fn login(&self, credentials: &Credentials) -> bool {
        self.dispatch(SessionAction::LoginStart);
        let outcome = api::post_login(credentials).await;
        self.finish_login(outcome)
    }

    /// Settle a login attempt from the transport outcome. Split from
    /// [`SessionStore::login`] so the whole settlement path is testable
    /// without a browser.
    fn finish_login(&self, outcome: Result<LoginResponse, ApiError>) -> bool {
        let validated = outcome
            .map_err(login_error_message)
            .and_then(validate_login_response);
        match validated {
            Ok((user, access_token, refresh_token)) => {
                self.storage.set(storage::ACCESS_TOKEN_KEY, &access_token);
                if let Some(refresh) = refresh_token {
                    self.storage.set(storage::REFRESH_TOKEN_KEY, &refresh);
                }
                self.persist_user(&user);
                let description = format!("Bienvenido, {}.", user.first_name);
                self.dispatch(SessionAction::LoginSuccess { user, access_token });
                self.notifier
                    .notify(Toast::new("Inicio de sesión", &description));
                true
            }
            Err(message) => {
                self.dispatch(SessionAction::LoginFailure {
                    message: message.clone(),
                });
                self.notifier
                    .notify(Toast::destructive("Error de autenticación", &message));
                false
            }
        }
    }

    /// Clear the session. Idempotent; safe when already logged out.
    pub fn logout(&self) {
        self.clear_slots();
        self.dispatch(SessionAction::Logout);
        self.notifier
            .notify(Toast::new("Sesión cerrada", "Has salido del sistema."));
    }

    /// Replace the identity after an out-of-band profile edit. Does not
    /// re-validate the token.
    pub fn update_user(&self, user: User) {
        self.persist_user(&user);
        self.dispatch(SessionAction::UpdateUser(user));
    }

    /// Forced logout: the backend rejected the held credential on some
    /// endpoint. Funnels through the reducer like every other mutation.
    pub fn access_revoked(&self) {
        self.clear_slots();
        self.dispatch(SessionAction::AccessRevoked);
        self.notifier.notify(Toast::destructive(
            "Sesión expirada",
            "Vuelve a iniciar sesión.",
        ));
    }

    fn persist_user(&self, user: &User) {
        if let Ok(raw) = serde_json::to_string(user) {
            self.storage.set(storage::USER_KEY, &raw);
        }
    }

    fn clear_slots(&self) {
        self.storage.remove(storage::ACCESS_TOKEN_KEY);
        self.storage.remove(storage::REFRESH_TOKEN_KEY);
        self.storage.remove(storage::USER_KEY);
    }
}

/// Failure copy priority: server detail verbatim, then the fixed
/// no-response copy, then the generic copy. The order encodes what this
/// backend actually sends; keep it.
fn login_error_message(err: ApiError) -> String {
    match err {
        ApiError::Rejected {
            detail: Some(detail),
            ..
        } => detail,
        ApiError::NoResponse => "No se pudo conectar con el servidor.".to_owned(),
        _ => "Error al iniciar sesión.".to_owned(),
    }
}

/// A 2xx login body missing the token or the identity is a contract
/// violation reported locally, never accepted in part.
fn validate_login_response(resp: LoginResponse) -> Result<(User, String, Option<String>), String> {
    let access = resp
        .access
        .ok_or_else(|| "La respuesta del servidor no incluye el token de acceso.".to_owned())?;
    let user = resp
        .user
        .ok_or_else(|| "La respuesta del servidor no incluye la información del usuario.".to_owned())?;
    Ok((user, access, resp.refresh))
}
