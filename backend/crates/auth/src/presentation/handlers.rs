//! HTTP Handlers

use std::sync::Arc;

use axum::Form;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};
use platform::cookie::extract_cookie;
use platform::view::View;
use serde::Deserialize;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignOutUseCase};
use crate::domain::repository::{CredentialStore, SessionStore};
use crate::error::{AuthError, AuthResult};

pub const ACCESS_DENIED_MESSAGE: &str = "You are not authorized for the requested data.";

/// Shared state for auth handlers
pub struct AuthAppState<C, S> {
    pub credentials: Arc<C>,
    pub sessions: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<C, S> Clone for AuthAppState<C, S> {
    fn clone(&self) -> Self {
        Self {
            credentials: Arc::clone(&self.credentials),
            sessions: Arc::clone(&self.sessions),
            config: Arc::clone(&self.config),
        }
    }
}

/// `?error` and `?logout` flags; only presence matters
#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub error: Option<String>,
    pub logout: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// The `403` page
pub fn access_denied_view() -> View {
    View::new("403")
        .with("errorMessage", ACCESS_DENIED_MESSAGE)
        .with_status(StatusCode::FORBIDDEN)
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page<C, S>(
    State(state): State<AuthAppState<C, S>>,
    Query(query): Query<LoginQuery>,
) -> View
where
    C: Send + Sync + 'static,
    S: Send + Sync + 'static,
{
    View::new("login")
        .with("loginError", query.error.is_some())
        .with("loggedOut", query.logout.is_some())
        .with("formLogin", state.config.mode.accepts_form_login())
}

/// POST /login
pub async fn login_submit<C, S>(
    State(state): State<AuthAppState<C, S>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<Response>
where
    C: CredentialStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.credentials.clone(),
        state.sessions.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        username: form.username,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let mut response = Redirect::to(&state.config.landing_path).into_response();
            response.headers_mut().append(
                header::SET_COOKIE,
                state.config.session_cookie().set_header(&output.session_token),
            );
            Ok(response)
        }
        Err(AuthError::InvalidCredentials) => {
            AuthError::InvalidCredentials.log();
            Ok(Redirect::to("/login?error").into_response())
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET|POST /logout
pub async fn logout<C, S>(State(state): State<AuthAppState<C, S>>, headers: HeaderMap) -> Response
where
    C: Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
{
    if let Some(token) = extract_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = SignOutUseCase::new(state.sessions.clone(), state.config.clone());
        // The cookie is cleared either way
        if let Err(e) = use_case.execute(&token).await {
            e.log();
        }
    }

    let mut response = Redirect::to("/login?logout").into_response();
    response.headers_mut().append(
        header::SET_COOKIE,
        state.config.session_cookie().delete_header(),
    );
    response
}

// ============================================================================
// Error page
// ============================================================================

/// GET /error
pub async fn error_page() -> View {
    access_denied_view().with_status(StatusCode::OK)
}
