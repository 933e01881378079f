//! Authentication port interface

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::config::VideoConfig;

use super::CollaboratorError;

/// Port for OAuth credentials and tokens
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Report whether credentials and token are usable.
    async fn auth_status(&self, config: &VideoConfig) -> Result<Value, CollaboratorError>;

    /// Run the interactive OAuth flow and store the resulting token.
    async fn run_oauth_flow(&self, config: &VideoConfig) -> Result<Value, CollaboratorError>;

    /// Force a token refresh even if the current token is still valid.
    async fn refresh_token(&self, config: &VideoConfig) -> Result<(), CollaboratorError>;
}
