//! Sign In Use Case
//!
//! Checks a username/password pair against the credential store and opens
//! a server-side session for the resulting identity.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::{auth_session::AuthSession, identity::Identity};
use crate::domain::repository::{CredentialStore, SessionStore};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub identity: Identity,
}

/// Sign in use case
pub struct SignInUseCase<C, S>
where
    C: CredentialStore,
    S: SessionStore,
{
    credentials: Arc<C>,
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<C, S> SignInUseCase<C, S>
where
    C: CredentialStore,
    S: SessionStore,
{
    pub fn new(credentials: Arc<C>, sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            credentials,
            sessions,
            config,
        }
    }

    /// Verify credentials without opening a session.
    ///
    /// Unknown user and wrong password both yield `InvalidCredentials`.
    pub async fn authenticate(&self, username: &str, password: &str) -> AuthResult<Identity> {
        let user = self
            .credentials
            .find_by_username(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let password = ClearTextPassword::for_verification(password);
        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user.identity())
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let identity = self.authenticate(&input.username, &input.password).await?;

        let role = identity
            .primary_role()
            .cloned()
            .ok_or_else(|| AuthError::Internal("Identity without role".to_string()))?;
        let session = AuthSession::new(
            identity.principal.clone(),
            role,
            self.config.session_ttl_chrono(),
        );
        self.sessions.create(&session).await?;

        tracing::info!(
            principal = %identity.principal,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token: session_token::issue(&self.config, session.session_id),
            identity,
        })
    }
}
