//! Auth Router

use std::sync::Arc;

use axum::{
    Router,
    middleware,
    routing::get,
};

use crate::application::config::AuthConfig;
use crate::domain::repository::{CredentialStore, SessionStore};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AccessGuardState, access_guard};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, config: Arc<AuthConfig>) -> Router {
    let repo = Arc::new(repo);
    auth_router_generic(repo.clone(), repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// `POST /login` is only mounted when form login is enabled.
pub fn auth_router_generic<C, S>(
    credentials: Arc<C>,
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
) -> Router
where
    C: CredentialStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let form_login = config.mode.accepts_form_login();
    let state = AuthAppState {
        credentials,
        sessions,
        config,
    };

    let login = if form_login {
        get(handlers::login_page::<C, S>).post(handlers::login_submit::<C, S>)
    } else {
        get(handlers::login_page::<C, S>)
    };

    Router::new()
        .route("/login", login)
        .route(
            "/logout",
            get(handlers::logout::<C, S>).post(handlers::logout::<C, S>),
        )
        .route("/error", get(handlers::error_page))
        .with_state(state)
}

/// Wrap `router` in the access guard.
///
/// Apply last, so the guard sees every route of the application.
pub fn with_access_guard<S>(router: Router, sessions: Arc<S>, config: Arc<AuthConfig>) -> Router
where
    S: SessionStore + Send + Sync + 'static,
{
    let state = AccessGuardState::new(sessions, config);
    router.layer(middleware::from_fn_with_state(state, access_guard::<S>))
}
