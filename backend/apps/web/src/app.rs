//! Application Wiring
//!
//! Assembles the auth and catalog routers behind the access guard, plus the
//! startup chores that run before the listener opens.

use std::sync::Arc;

use auth::application::access_policy::ADMIN_ROLE;
use auth::{
    AuthConfig, CredentialStore, CurrentIdentity, Role, SessionStore, auth_router_generic,
    with_access_guard,
};
use axum::{Router, routing::get};
use catalog::domain::entity::User;
use catalog::{CatalogConfig, CatalogStore, Repository, catalog_router_generic};
use platform::password::ClearTextPassword;
use platform::view::View;
use tower_http::trace::TraceLayer;

pub const BOOTSTRAP_ADMIN_USERNAME: &str = "admin";

/// Full application router over the given stores.
///
/// The access guard wraps every route, including the login pages.
pub fn build_router<C, S, K>(
    credentials: Arc<C>,
    sessions: Arc<S>,
    store: Arc<K>,
    auth: Arc<AuthConfig>,
    catalog: &CatalogConfig,
) -> Router
where
    C: CredentialStore + Send + Sync + 'static,
    S: SessionStore + Send + Sync + 'static,
    K: CatalogStore,
{
    let app = Router::new()
        .route("/", get(home))
        .route("/home", get(home))
        .merge(auth_router_generic(credentials, sessions.clone(), auth.clone()))
        .merge(catalog_router_generic(store, catalog));

    with_access_guard(app, sessions, auth).layer(TraceLayer::new_for_http())
}

/// GET / and GET /home
async fn home(CurrentIdentity(identity): CurrentIdentity) -> View {
    View::new("home").with("username", &identity.principal)
}

/// Create the `admin` user unless one exists. Returns whether it was created.
pub async fn bootstrap_admin<R>(
    users: &R,
    password: &str,
    pepper: Option<&[u8]>,
) -> anyhow::Result<bool>
where
    R: Repository<User>,
{
    if users
        .find_by_natural_key(BOOTSTRAP_ADMIN_USERNAME)
        .await?
        .is_some()
    {
        return Ok(false);
    }

    let hash = ClearTextPassword::new(password)?.hash(pepper)?;
    let admin = User::new(
        BOOTSTRAP_ADMIN_USERNAME,
        hash,
        "Administrator",
        Role::new(ADMIN_ROLE),
    );
    users.save(admin).await?;

    Ok(true)
}

/// Delete expired sessions. Failure is logged and startup continues.
pub async fn cleanup_sessions<S>(sessions: &S)
where
    S: SessionStore,
{
    match sessions.cleanup_expired().await {
        Ok(deleted) => {
            tracing::info!(sessions_deleted = deleted, "Auth session cleanup completed");
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Auth session cleanup failed, continuing anyway"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use auth::{AuthMode, MemorySessionStore};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use catalog::MemoryCatalog;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    const ADMIN_PASSWORD: &str = "Adm1n-pass";

    async fn app(mode: AuthMode) -> Router {
        let catalog = Arc::new(MemoryCatalog::new());
        assert!(
            bootstrap_admin(&catalog.users, ADMIN_PASSWORD, None)
                .await
                .unwrap()
        );
        let auth = Arc::new(AuthConfig {
            mode,
            ..AuthConfig::development()
        });
        build_router(
            catalog.clone(),
            Arc::new(MemorySessionStore::new()),
            catalog,
            auth,
            &CatalogConfig::development(),
        )
    }

    async fn send(app: &Router, path: &str, cookie: Option<&str>) -> Response {
        let mut request = Request::builder().uri(path);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        app.clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn login(app: &Router, username: &str, password: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri("/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!(
                "username={}&password={}",
                username, password
            )))
            .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    fn session_cookie(response: &Response) -> String {
        response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .split(';')
            .next()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_anonymous_home_redirects_to_login() {
        let app = app(AuthMode::Form).await;

        let response = send(&app, "/", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");

        let response = send(&app, "/login", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["view"], "login");
    }

    #[tokio::test]
    async fn test_admin_login_reaches_every_area() {
        let app = app(AuthMode::Form).await;

        let response = login(&app, BOOTSTRAP_ADMIN_USERNAME, ADMIN_PASSWORD).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/bidList/list");
        let cookie = session_cookie(&response);

        let home = send(&app, "/home", Some(&cookie)).await;
        assert_eq!(home.status(), StatusCode::OK);
        let body = json(home).await;
        assert_eq!(body["view"], "home");
        assert_eq!(body["model"]["username"], "admin");

        let users = send(&app, "/user/list", Some(&cookie)).await;
        assert_eq!(users.status(), StatusCode::OK);
        let body = json(users).await;
        assert_eq!(body["model"]["users"][0]["username"], "admin");
        assert_eq!(body["model"]["users"][0]["role"], "ADMIN");
    }

    #[tokio::test]
    async fn test_wrong_password_is_rejected() {
        let app = app(AuthMode::Form).await;

        let response = login(&app, BOOTSTRAP_ADMIN_USERNAME, "nope").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login?error");
    }

    #[tokio::test]
    async fn test_auto_login_guest() {
        let app = app(AuthMode::guest()).await;

        let home = send(&app, "/", None).await;
        assert_eq!(home.status(), StatusCode::OK);
        assert_eq!(json(home).await["model"]["username"], "guestUser");

        let trades = send(&app, "/trade/list", None).await;
        assert_eq!(trades.status(), StatusCode::OK);

        let users = send(&app, "/user/list", None).await;
        assert_eq!(users.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_bootstrap_admin_runs_once() {
        let catalog = MemoryCatalog::new();
        assert!(bootstrap_admin(&catalog.users, ADMIN_PASSWORD, None).await.unwrap());
        assert!(!bootstrap_admin(&catalog.users, "Other-pa55", None).await.unwrap());
        assert_eq!(catalog.users.len().await, 1);

        let weak = MemoryCatalog::new();
        assert!(bootstrap_admin(&weak.users, "short", None).await.is_err());
    }
}
