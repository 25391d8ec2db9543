use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims of a token signed with the local shared secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user id)
    pub exp: usize,  // Expiration time (as UTC timestamp)
    pub iat: usize,  // Issued at (as UTC timestamp)
}

impl Claims {
    pub fn new(subject: &str, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: subject.to_string(),
            iat: now.timestamp() as usize,
            exp: exp.timestamp() as usize,
        }
    }
}

/// Claims of a Firebase ID token. `aud` and `iss` are checked by the
/// decoder's `Validation` and are not needed afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct FirebaseClaims {
    pub sub: String, // Firebase uid
    #[serde(default)]
    pub email: Option<String>,
    pub exp: usize,
    pub iat: usize,
}
