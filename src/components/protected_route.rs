//! Route-time access gate.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::{GuardOutcome, decide};
use crate::state::session::Role;
use crate::state::store::SessionStore;

/// Gate wrapping a route's view.
///
/// Re-evaluates the access decision whenever the session changes: allowed
/// sessions render the children, unauthenticated ones are sent to the login
/// surface, wrong-role ones to the unauthorized surface. Gates nest
/// outside-in — the authenticated-area gate on the parent route runs before
/// any role gate declared on an inner route.
#[component]
pub fn ProtectedRoute(
    /// Roles permitted to view the wrapped route; `None` admits any
    /// authenticated role.
    #[prop(optional)]
    allowed_roles: Option<&'static [Role]>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();
    let navigate = use_navigate();

    let outcome = Memo::new(move |_| decide(&state.get(), allowed_roles));

    Effect::new(move || match outcome.get() {
        GuardOutcome::RedirectToLogin => navigate("/login", NavigateOptions::default()),
        GuardOutcome::RedirectToUnauthorized => {
            navigate("/unauthorized", NavigateOptions::default());
        }
        GuardOutcome::Allow => {}
    });

    view! {
        <Show when=move || outcome.get() == GuardOutcome::Allow>
            {children()}
        </Show>
    }
}
