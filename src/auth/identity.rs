use async_trait::async_trait;

use crate::errors::AppResult;

/// A caller whose bearer token was accepted by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
}

impl Identity {
    pub fn new(uid: &str) -> Self {
        Self {
            uid: uid.to_string(),
        }
    }
}

/// Turns a bearer token into a verified identity.
///
/// Every failure, whether the token is bad or the provider could not be
/// reached, is reported as `AppError::InvalidToken`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> AppResult<Identity>;
}
