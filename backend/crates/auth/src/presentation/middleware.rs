//! Access Guard Middleware
//!
//! Resolves the request's identity (session cookie first, then the
//! auto-login guest), applies the route table, and hands the identity to
//! downstream handlers through request extensions.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use platform::cookie::extract_cookie;

use crate::application::access_policy::{Decision, LOGIN_PATH, RouteTable};
use crate::application::config::AuthConfig;
use crate::application::CheckSessionUseCase;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::SessionStore;
use crate::presentation::handlers::access_denied_view;

/// Middleware state
pub struct AccessGuardState<S> {
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
    pub table: RouteTable,
}

impl<S> Clone for AccessGuardState<S> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            config: Arc::clone(&self.config),
            table: self.table,
        }
    }
}

impl<S> AccessGuardState<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    pub fn new(sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            sessions,
            config,
            table: RouteTable::standard(),
        }
    }

    async fn resolve_identity(&self, headers: &HeaderMap) -> Option<Identity> {
        if let Some(token) = extract_cookie(headers, &self.config.session_cookie_name) {
            let use_case = CheckSessionUseCase::new(self.sessions.clone(), self.config.clone());
            match use_case.execute(&token).await {
                Ok(identity) => return Some(identity),
                Err(e) => e.log(),
            }
        }

        self.config.mode.guest_identity()
    }
}

/// Route-table enforcement for every request
pub async fn access_guard<S>(
    State(state): State<AccessGuardState<S>>,
    mut req: Request,
    next: Next,
) -> Response
where
    S: SessionStore + Send + Sync + 'static,
{
    let identity = state.resolve_identity(req.headers()).await;

    match state.table.decide(req.uri().path(), identity.as_ref()) {
        Decision::Allow => {}
        Decision::RequireLogin => {
            tracing::debug!(path = %req.uri().path(), "Unauthenticated request sent to login");
            return Redirect::to(LOGIN_PATH).into_response();
        }
        Decision::Forbidden => {
            tracing::warn!(
                path = %req.uri().path(),
                principal = identity.as_ref().map(|i| i.principal.as_str()).unwrap_or_default(),
                "Access denied"
            );
            return access_denied_view().into_response();
        }
    }

    if let Some(identity) = identity {
        req.extensions_mut().insert(identity);
    }

    next.run(req).await
}
