//! REST helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`ApiError::NoResponse`] since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`ApiError`] values; nothing here panics. A 401
//! from any authorized call is intercepted centrally: the session store is
//! told the credential is dead and the page is hard-redirected to the login
//! surface, because at that point the whole authenticated application state
//! is invalid.

#![allow(clippy::unused_async)]

use serde::de::DeserializeOwned;

use super::types::{Credentials, LoginResponse};
use crate::state::store::SessionStore;

/// Failure of a REST call, before normalization into user-facing copy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// No HTTP response was received at all.
    NoResponse,
    /// The server answered with a non-success status.
    Rejected { status: u16, detail: Option<String> },
    /// The body did not decode as the expected shape.
    Decode(String),
    /// The held credential was rejected; a forced logout already ran.
    Unauthorized,
}

/// POST credentials to the auth endpoint.
///
/// # Errors
///
/// `NoResponse` if the server is unreachable, `Rejected` with the backend's
/// `detail` message (when it sent one) for non-2xx answers, `Decode` for a
/// 2xx body that is not valid JSON of the expected shape.
pub async fn post_login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|_| ApiError::NoResponse)?;
        if resp.ok() {
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            let detail = resp
                .json::<super::types::ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.detail);
            Err(ApiError::Rejected {
                status: resp.status(),
                detail,
            })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::NoResponse)
    }
}

/// Bearer-authorized GET returning decoded JSON.
///
/// Any 401 forces [`SessionStore::access_revoked`] and a hard redirect to
/// `/login` before surfacing [`ApiError::Unauthorized`].
///
/// # Errors
///
/// Same taxonomy as [`post_login`], plus `Unauthorized` on 401.
pub async fn get_json<T: DeserializeOwned>(
    session: &SessionStore,
    path: &str,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let token = session.access_token().unwrap_or_default();
        let resp = gloo_net::http::Request::get(path)
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|_| ApiError::NoResponse)?;
        if resp.status() == 401 {
            session.access_revoked();
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            let detail = resp
                .json::<super::types::ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.detail);
            return Err(ApiError::Rejected {
                status: resp.status(),
                detail,
            });
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, path);
        Err(ApiError::NoResponse)
    }
}
