//! Check Session Use Case
//!
//! Resolves a session cookie back to the identity it was issued for.

use std::sync::Arc;

use chrono::Utc;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::SessionStore;
use crate::error::{AuthError, AuthResult};

/// Check session use case
pub struct CheckSessionUseCase<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    sessions: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<S> CheckSessionUseCase<S>
where
    S: SessionStore + Send + Sync + 'static,
{
    pub fn new(sessions: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self { sessions, config }
    }

    /// Identity behind `session_token`.
    ///
    /// An expired session is deleted on sight.
    pub async fn execute(&self, session_token: &str) -> AuthResult<Identity> {
        let session_id = session_token::parse(&self.config, session_token)?;

        let session = self
            .sessions
            .find_by_id(session_id)
            .await?
            .ok_or(AuthError::SessionInvalid)?;

        if session.is_expired() {
            self.sessions.delete(session_id).await?;
            tracing::debug!(session_id = %session_id, "Removed expired session");
            return Err(AuthError::SessionInvalid);
        }

        // Update in background
        let sessions = Arc::clone(&self.sessions);
        tokio::spawn(async move {
            if let Err(e) = sessions.touch(session_id, Utc::now()).await {
                tracing::warn!(error = %e, "Failed to update session activity");
            }
        });

        Ok(session.identity())
    }
}
