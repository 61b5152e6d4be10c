//! Access decision for role-gated routes.
//!
//! The decision is pure and re-evaluated on every navigation by
//! [`crate::components::protected_route::ProtectedRoute`]. Guards nest
//! outside-in: the authenticated-area gate (no role set) sits on the parent
//! route and must pass before any inner role gate is looked at.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{Role, SessionState};

/// Outcome of an access check for one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    /// No valid session. The attempted destination is discarded.
    RedirectToLogin,
    /// Valid session, insufficient role.
    RedirectToUnauthorized,
}

/// Decide whether the current session may view a route.
///
/// `allowed_roles = None` means any authenticated role. The unauthenticated
/// check always runs first, so an unauthenticated request never reaches a
/// role comparison.
pub fn decide(state: &SessionState, allowed_roles: Option<&[Role]>) -> GuardOutcome {
    if !state.is_authenticated() {
        return GuardOutcome::RedirectToLogin;
    }
    match (allowed_roles, state.user.as_ref()) {
        (Some(roles), Some(user)) if !roles.contains(&user.role) => {
            GuardOutcome::RedirectToUnauthorized
        }
        _ => GuardOutcome::Allow,
    }
}
