use super::*;
use crate::state::session::{SessionAction, User, reduce};

fn session_as(role: Role) -> SessionState {
    reduce(
        &SessionState::default(),
        SessionAction::LoginSuccess {
            user: User {
                id: 1,
                username: "ana".to_owned(),
                email: "ana@colegio.edu".to_owned(),
                first_name: "Ana".to_owned(),
                last_name: "Pérez".to_owned(),
                role,
            },
            access_token: "tok123".to_owned(),
        },
    )
}

// =============================================================
// Unauthenticated: the outer gate always wins
// =============================================================

#[test]
fn unauthenticated_goes_to_login() {
    let state = SessionState::default();
    assert_eq!(decide(&state, None), GuardOutcome::RedirectToLogin);
}

#[test]
fn unauthenticated_never_reaches_the_role_check() {
    // Even with a declared role set the answer is login, not unauthorized.
    let state = SessionState::default();
    assert_eq!(
        decide(&state, Some(&[Role::Profesor, Role::Administrativo])),
        GuardOutcome::RedirectToLogin
    );
}

#[test]
fn loading_session_is_still_unauthenticated() {
    let state = reduce(&SessionState::default(), SessionAction::LoginStart);
    assert_eq!(decide(&state, None), GuardOutcome::RedirectToLogin);
}

// =============================================================
// Authenticated
// =============================================================

#[test]
fn any_authenticated_role_passes_an_open_gate() {
    for role in [Role::Administrativo, Role::Profesor, Role::Estudiante] {
        assert_eq!(decide(&session_as(role), None), GuardOutcome::Allow);
    }
}

#[test]
fn member_role_is_allowed() {
    let state = session_as(Role::Profesor);
    assert_eq!(
        decide(&state, Some(&[Role::Profesor, Role::Administrativo])),
        GuardOutcome::Allow
    );
}

#[test]
fn wrong_role_goes_to_unauthorized_not_login() {
    let state = session_as(Role::Estudiante);
    assert_eq!(
        decide(&state, Some(&[Role::Profesor, Role::Administrativo])),
        GuardOutcome::RedirectToUnauthorized
    );
}

#[test]
fn empty_role_set_denies_every_role() {
    let state = session_as(Role::Administrativo);
    assert_eq!(
        decide(&state, Some(&[])),
        GuardOutcome::RedirectToUnauthorized
    );
}
