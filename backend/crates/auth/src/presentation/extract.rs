//! Identity extractor

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;

use crate::application::access_policy::LOGIN_PATH;
use crate::domain::entity::identity::Identity;

/// Identity attached by the access guard.
///
/// Rejects with a redirect to the login page when the request carries none,
/// which only happens on routes the guard leaves open.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentIdentity)
            .ok_or_else(|| Redirect::to(LOGIN_PATH))
    }
}
