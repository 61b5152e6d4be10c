use super::*;

fn user(role: Role) -> User {
    User {
        id: 1,
        username: "ana".to_owned(),
        email: "ana@colegio.edu".to_owned(),
        first_name: "Ana".to_owned(),
        last_name: "Pérez".to_owned(),
        role,
    }
}

fn authenticated() -> SessionState {
    reduce(
        &SessionState::default(),
        SessionAction::LoginSuccess {
            user: user(Role::Profesor),
            access_token: "tok123".to_owned(),
        },
    )
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert!(!state.is_authenticated());
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn login_start_sets_loading_and_clears_previous_error() {
    let failed = reduce(
        &SessionState::default(),
        SessionAction::LoginFailure {
            message: "Invalid credentials".to_owned(),
        },
    );
    let state = reduce(&failed, SessionAction::LoginStart);
    assert!(state.is_loading);
    assert!(state.error.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn login_success_settles_authenticated() {
    let loading = reduce(&SessionState::default(), SessionAction::LoginStart);
    let state = reduce(
        &loading,
        SessionAction::LoginSuccess {
            user: user(Role::Profesor),
            access_token: "tok123".to_owned(),
        },
    );
    assert!(state.is_authenticated());
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(state.access_token.as_deref(), Some("tok123"));
}

#[test]
fn login_failure_clears_identity_and_records_message() {
    let loading = reduce(&authenticated(), SessionAction::LoginStart);
    let state = reduce(
        &loading,
        SessionAction::LoginFailure {
            message: "Invalid credentials".to_owned(),
        },
    );
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn logout_resets_to_initial_state() {
    let state = reduce(&authenticated(), SessionAction::Logout);
    assert_eq!(state, SessionState::default());
}

#[test]
fn access_revoked_resets_like_logout() {
    let state = reduce(&authenticated(), SessionAction::AccessRevoked);
    assert_eq!(state, SessionState::default());
}

#[test]
fn update_user_replaces_identity_only() {
    let before = authenticated();
    let mut edited = user(Role::Profesor);
    edited.first_name = "Anabel".to_owned();
    let state = reduce(&before, SessionAction::UpdateUser(edited.clone()));
    assert_eq!(state.user, Some(edited));
    assert_eq!(state.access_token, before.access_token);
    assert_eq!(state.is_loading, before.is_loading);
    assert_eq!(state.error, before.error);
}

#[test]
fn restore_authenticates_without_loading_or_error() {
    let state = reduce(
        &SessionState::default(),
        SessionAction::Restore {
            user: user(Role::Administrativo),
            access_token: "tok456".to_owned(),
        },
    );
    assert!(state.is_authenticated());
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

// =============================================================
// Invariant: settled authenticated states carry no loading/error
// =============================================================

#[test]
fn authenticated_states_are_settled_across_action_sequences() {
    let script = [
        SessionAction::LoginStart,
        SessionAction::LoginFailure {
            message: "m".to_owned(),
        },
        SessionAction::LoginStart,
        SessionAction::LoginSuccess {
            user: user(Role::Estudiante),
            access_token: "t".to_owned(),
        },
        SessionAction::UpdateUser(user(Role::Estudiante)),
        SessionAction::AccessRevoked,
        SessionAction::Restore {
            user: user(Role::Profesor),
            access_token: "t2".to_owned(),
        },
        SessionAction::Logout,
    ];
    let mut state = SessionState::default();
    for action in script {
        state = reduce(&state, action);
        if state.is_authenticated() {
            assert!(!state.is_loading);
            assert!(state.error.is_none());
        }
    }
}

// =============================================================
// Wire encoding
// =============================================================

#[test]
fn role_round_trips_through_wire_encoding() {
    let json = serde_json::to_string(&Role::Administrativo).expect("serialize");
    assert_eq!(json, "\"ADMINISTRATIVO\"");
    let back: Role = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, Role::Administrativo);
}

#[test]
fn user_deserializes_from_backend_shape() {
    let raw = r#"{
        "id": 7,
        "username": "ana",
        "email": "ana@colegio.edu",
        "first_name": "Ana",
        "last_name": "Pérez",
        "role": "PROFESOR"
    }"#;
    let parsed: User = serde_json::from_str(raw).expect("well-formed user");
    assert_eq!(parsed.role, Role::Profesor);
    assert_eq!(parsed.full_name(), "Ana Pérez");
}
