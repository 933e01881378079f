//! auth_status / auth_oauth / auth_refresh handlers

use crate::application::error::BridgeError;
use crate::application::ports::AuthService;
use crate::domain::config::VideoConfig;
use crate::domain::value::ResultValue;

pub async fn auth_status<A: AuthService + ?Sized>(
    auth: &A,
    config: &VideoConfig,
) -> Result<ResultValue, BridgeError> {
    Ok(auth.auth_status(config).await?.into())
}

pub async fn auth_oauth<A: AuthService + ?Sized>(
    auth: &A,
    config: &VideoConfig,
) -> Result<ResultValue, BridgeError> {
    Ok(auth.run_oauth_flow(config).await?.into())
}

pub async fn auth_refresh<A: AuthService + ?Sized>(
    auth: &A,
    config: &VideoConfig,
) -> Result<ResultValue, BridgeError> {
    auth.refresh_token(config).await?;
    Ok(ResultValue::object([(
        "message",
        ResultValue::from("Token refresh successful."),
    )]))
}
