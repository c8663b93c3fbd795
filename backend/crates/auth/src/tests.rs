//! Unit tests for Auth crate

#[cfg(test)]
mod support {
    use std::collections::HashMap;
    use std::sync::Arc;

    use platform::password::ClearTextPassword;

    use crate::application::config::AuthConfig;
    use crate::domain::repository::CredentialStore;
    use crate::domain::{Role, User};
    use crate::error::AuthResult;

    pub const PASSWORD: &str = "Passw0rd!";

    /// Fixed set of users keyed by username
    #[derive(Default)]
    pub struct StaticCredentials {
        users: HashMap<String, User>,
    }

    impl StaticCredentials {
        pub fn with_user(mut self, username: &str, role: &str) -> Self {
            let hash = ClearTextPassword::new(PASSWORD)
                .unwrap()
                .hash(None)
                .unwrap();
            let mut user = User::new(username, hash, "Test User", Role::new(role));
            user.id = Some(self.users.len() as i32 + 1);
            self.users.insert(username.to_string(), user);
            self
        }
    }

    impl CredentialStore for StaticCredentials {
        async fn find_by_username(&self, username: &str) -> AuthResult<Option<User>> {
            Ok(self.users.get(username).cloned())
        }
    }

    pub fn test_config() -> Arc<AuthConfig> {
        Arc::new(AuthConfig::development())
    }
}

#[cfg(test)]
mod config_tests {
    use crate::application::config::*;
    use crate::domain::Role;

    #[test]
    fn test_default_config_values() {
        let config = AuthConfig::default();
        assert_eq!(config.mode, AuthMode::Form);
        assert_eq!(config.session_cookie_name, "auth_session");
        assert_eq!(config.session_ttl.as_secs(), 12 * 3600);
        assert!(config.cookie_secure);
        assert_eq!(config.landing_path, "/bidList/list");
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_random_secret_differs() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.session_secret, b.session_secret);
        assert!(!AuthConfig::development().cookie_secure);
    }

    #[test]
    fn test_guest_mode_identity() {
        let mode = AuthMode::guest();
        assert!(!mode.accepts_form_login());

        let identity = mode.guest_identity().unwrap();
        assert_eq!(identity.principal, DEFAULT_GUEST_PRINCIPAL);
        assert_eq!(identity.authorities, vec![Role::new(DEFAULT_GUEST_ROLE)]);

        assert!(AuthMode::Form.guest_identity().is_none());
        assert!(AuthMode::Form.accepts_form_login());
    }

    #[test]
    fn test_session_cookie_attributes() {
        let config = AuthConfig::development();
        let cookie = config.session_cookie().build_set_cookie("token");
        assert!(cookie.starts_with("auth_session=token"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=43200"));
        assert!(!cookie.contains("Secure"));
    }
}

#[cfg(test)]
mod sign_in_tests {
    use std::sync::Arc;

    use super::support::*;
    use crate::application::config::AuthConfig;
    use crate::application::{
        CheckSessionUseCase, SignInInput, SignInUseCase, SignOutUseCase, session_token,
    };
    use crate::error::AuthError;
    use crate::infra::memory::MemorySessionStore;

    fn sign_in(
        sessions: Arc<MemorySessionStore>,
        config: Arc<AuthConfig>,
    ) -> SignInUseCase<StaticCredentials, MemorySessionStore> {
        let credentials = Arc::new(StaticCredentials::default().with_user("alice", "USER"));
        SignInUseCase::new(credentials, sessions, config)
    }

    #[tokio::test]
    async fn test_valid_credentials_open_session() {
        let sessions = Arc::new(MemorySessionStore::new());
        let output = sign_in(sessions.clone(), test_config())
            .execute(SignInInput {
                username: "alice".into(),
                password: PASSWORD.into(),
            })
            .await
            .unwrap();

        assert_eq!(output.identity.principal, "alice");
        assert!(output.identity.has_role("USER"));
        assert_eq!(sessions.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
        let sessions = Arc::new(MemorySessionStore::new());
        let use_case = sign_in(sessions.clone(), test_config());

        let unknown = use_case.authenticate("mallory", PASSWORD).await.unwrap_err();
        let wrong = use_case.authenticate("alice", "Wrong0ne!").await.unwrap_err();

        assert!(matches!(unknown, AuthError::InvalidCredentials));
        assert!(matches!(wrong, AuthError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert_eq!(sessions.len().await, 0);
    }

    #[tokio::test]
    async fn test_username_is_case_sensitive() {
        let use_case = sign_in(Arc::new(MemorySessionStore::new()), test_config());
        assert!(use_case.authenticate("Alice", PASSWORD).await.is_err());
    }

    #[tokio::test]
    async fn test_session_round_trip_and_sign_out() {
        let sessions = Arc::new(MemorySessionStore::new());
        let config = test_config();
        let output = sign_in(sessions.clone(), config.clone())
            .execute(SignInInput {
                username: "alice".into(),
                password: PASSWORD.into(),
            })
            .await
            .unwrap();

        let check = CheckSessionUseCase::new(sessions.clone(), config.clone());
        let identity = check.execute(&output.session_token).await.unwrap();
        assert_eq!(identity, output.identity);

        SignOutUseCase::new(sessions.clone(), config)
            .execute(&output.session_token)
            .await
            .unwrap();
        assert!(matches!(
            check.execute(&output.session_token).await,
            Err(AuthError::SessionInvalid)
        ));
    }

    #[tokio::test]
    async fn test_tampered_token_rejected() {
        let config = test_config();
        let token = session_token::issue(&config, uuid::Uuid::new_v4());
        let tampered = format!("{}x", token);
        assert!(session_token::parse(&config, &token).is_ok());
        assert!(session_token::parse(&config, &tampered).is_err());
        assert!(session_token::parse(&config, "not-a-token").is_err());
    }
}

#[cfg(test)]
mod session_tests {
    use chrono::Duration;

    use crate::domain::repository::SessionStore;
    use crate::domain::{AuthSession, Role};
    use crate::infra::memory::MemorySessionStore;

    #[tokio::test]
    async fn test_cleanup_removes_only_expired() {
        let store = MemorySessionStore::new();
        let live = AuthSession::new("alice", Role::new("USER"), Duration::hours(1));
        let dead = AuthSession::new("bob", Role::new("USER"), Duration::hours(-1));
        store.create(&live).await.unwrap();
        store.create(&dead).await.unwrap();

        assert_eq!(store.cleanup_expired().await.unwrap(), 1);
        assert!(store.find_by_id(live.session_id).await.unwrap().is_some());
        assert!(store.find_by_id(dead.session_id).await.unwrap().is_none());
    }
}

#[cfg(test)]
mod error_tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::error::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::SessionInvalid, StatusCode::UNAUTHORIZED),
            (
                AuthError::CorruptCredential,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_into_app_error_keeps_kind() {
        let app = AuthError::InvalidCredentials.into_app_error();
        assert_eq!(app.kind(), crate::ErrorKind::Unauthorized);
    }
}

#[cfg(test)]
mod guard_tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use axum::routing::get;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::support::*;
    use crate::application::config::{AuthConfig, AuthMode};
    use crate::infra::memory::MemorySessionStore;
    use crate::presentation::extract::CurrentIdentity;
    use crate::presentation::router::{auth_router_generic, with_access_guard};

    async fn whoami(CurrentIdentity(identity): CurrentIdentity) -> String {
        identity.principal
    }

    fn app(config: Arc<AuthConfig>) -> Router {
        let credentials = Arc::new(
            StaticCredentials::default()
                .with_user("alice", "USER")
                .with_user("admin", "ADMIN"),
        );
        let sessions = Arc::new(MemorySessionStore::new());

        let router = auth_router_generic(credentials, sessions.clone(), config.clone())
            .route("/bidList/list", get(whoami))
            .route("/user/list", get(whoami))
            .route("/css/app.css", get(|| async { "css" }));
        with_access_guard(router, sessions, config)
    }

    async fn send(app: &Router, request: Request<Body>) -> Response {
        app.clone().oneshot(request).await.unwrap()
    }

    fn get_request(path: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn login(app: &Router, username: &str, password: &str) -> Response {
        let body = format!("username={}&password={}", username, password.replace('!', "%21"));
        let request = Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        send(app, request).await
    }

    fn session_cookie(response: &Response) -> String {
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_anonymous_redirected_to_login() {
        let app = app(test_config());
        let response = send(&app, get_request("/bidList/list", None)).await;
        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    async fn test_open_routes_need_no_identity() {
        let app = app(test_config());
        assert_eq!(
            send(&app, get_request("/login", None)).await.status(),
            StatusCode::OK
        );
        assert_eq!(
            send(&app, get_request("/css/app.css", None)).await.status(),
            StatusCode::OK
        );
        assert_eq!(
            send(&app, get_request("/error", None)).await.status(),
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_login_failure_redirects_with_error_flag() {
        let app = app(test_config());
        let response = login(&app, "alice", "Wrong0ne!").await;
        assert!(response.status().is_redirection());
        assert_eq!(location(&response), "/login?error");

        let page = send(&app, get_request("/login?error", None)).await;
        let body: Value = serde_json::from_str(&body_text(page).await).unwrap();
        assert_eq!(body["view"], "login");
        assert_eq!(body["model"]["loginError"], true);
    }

    #[tokio::test]
    async fn test_user_reaches_catalog_but_not_user_admin() {
        let app = app(test_config());
        let response = login(&app, "alice", PASSWORD).await;
        assert_eq!(location(&response), "/bidList/list");
        let cookie = session_cookie(&response);

        let list = send(&app, get_request("/bidList/list", Some(&cookie))).await;
        assert_eq!(list.status(), StatusCode::OK);
        assert_eq!(body_text(list).await, "alice");

        let denied = send(&app, get_request("/user/list", Some(&cookie))).await;
        assert_eq!(denied.status(), StatusCode::FORBIDDEN);
        let body: Value = serde_json::from_str(&body_text(denied).await).unwrap();
        assert_eq!(body["view"], "403");
        assert_eq!(
            body["model"]["errorMessage"],
            "You are not authorized for the requested data."
        );
    }

    #[tokio::test]
    async fn test_admin_reaches_user_admin() {
        let app = app(test_config());
        let cookie = session_cookie(&login(&app, "admin", PASSWORD).await);

        let response = send(&app, get_request("/user/list", Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "admin");
    }

    #[tokio::test]
    async fn test_logout_invalidates_session() {
        let app = app(test_config());
        let cookie = session_cookie(&login(&app, "alice", PASSWORD).await);

        let response = send(&app, get_request("/logout", Some(&cookie))).await;
        assert_eq!(location(&response), "/login?logout");
        assert!(
            response.headers()[header::SET_COOKIE]
                .to_str()
                .unwrap()
                .contains("Max-Age=0")
        );

        let after = send(&app, get_request("/bidList/list", Some(&cookie))).await;
        assert_eq!(location(&after), "/login");
    }

    #[tokio::test]
    async fn test_auto_login_runs_as_guest() {
        let config = Arc::new(AuthConfig {
            mode: AuthMode::guest(),
            ..AuthConfig::development()
        });
        let app = app(config);

        let response = send(&app, get_request("/bidList/list", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "guestUser");

        let denied = send(&app, get_request("/user/list", None)).await;
        assert_eq!(denied.status(), StatusCode::FORBIDDEN);

        // Form login is not mounted in this mode
        let post = login(&app, "alice", PASSWORD).await;
        assert_eq!(post.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
