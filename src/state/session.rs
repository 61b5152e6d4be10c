#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Roles recognized by the backend. Closed set; the wire encoding is the
/// uppercase form the API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ADMINISTRATIVO")]
    Administrativo,
    #[serde(rename = "PROFESOR")]
    Profesor,
    #[serde(rename = "ESTUDIANTE")]
    Estudiante,
}

impl Role {
    /// Display label for navbars and greetings.
    pub fn label(self) -> &'static str {
        match self {
            Role::Administrativo => "Administrativo",
            Role::Profesor => "Profesor",
            Role::Estudiante => "Estudiante",
        }
    }
}

/// Identity record returned by the auth endpoint and persisted across
/// reloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// In-memory session record. There is exactly one per application, owned by
/// [`super::store::SessionStore`].
///
/// Authentication is derived, never stored: a state is authenticated iff it
/// holds both the identity and the credential, so the two can never drift
/// apart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub access_token: Option<String>,
    /// True only while a login call is in flight.
    pub is_loading: bool,
    /// Last login failure, cleared on a new attempt or on success.
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }
}

/// Closed action set. Every session mutation, including the forced logout
/// triggered by a 401 from any endpoint, funnels through [`reduce`].
#[derive(Clone, Debug)]
pub enum SessionAction {
    LoginStart,
    LoginSuccess { user: User, access_token: String },
    LoginFailure { message: String },
    Logout,
    UpdateUser(User),
    /// Durable storage held a valid-looking record at startup.
    Restore { user: User, access_token: String },
    /// The backend rejected the held credential; the session is dead.
    AccessRevoked,
}

/// Pure transition function for the session state machine.
pub fn reduce(state: &SessionState, action: SessionAction) -> SessionState {
    match action {
        SessionAction::LoginStart => SessionState {
            is_loading: true,
            error: None,
            ..state.clone()
        },
        SessionAction::LoginSuccess { user, access_token }
        | SessionAction::Restore { user, access_token } => SessionState {
            user: Some(user),
            access_token: Some(access_token),
            is_loading: false,
            error: None,
        },
        SessionAction::LoginFailure { message } => SessionState {
            user: None,
            access_token: None,
            is_loading: false,
            error: Some(message),
        },
        SessionAction::Logout | SessionAction::AccessRevoked => SessionState::default(),
        SessionAction::UpdateUser(user) => SessionState {
            user: Some(user),
            ..state.clone()
        },
    }
}
