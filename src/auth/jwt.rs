use async_trait::async_trait;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::{
        claims::Claims,
        identity::{Identity, IdentityVerifier},
    },
    config::Config,
    errors::{AppError, AppResult},
};

/// HS256 tokens signed with a shared secret, used in place of the identity
/// provider for local development.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: i64,
}

impl JwtService {
    pub fn new(secret: &SecretString, expiration_hours: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation: Validation::default(),
            expiration_hours,
        }
    }

    pub fn create_token(&self, subject: &str) -> AppResult<String> {
        let claims = Claims::new(subject, self.expiration_hours);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to create JWT: {}", e)))
    }

    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::warn!("Rejected token: {}", e);
                AppError::InvalidToken
            })
    }
}

/// Mints a bearer token accepted by the shared-secret verifier, for calling
/// the protected routes locally. Refused whenever the server would not accept it.
pub fn issue_dev_token(config: &Config, subject: &str) -> AppResult<String> {
    if config.is_production() || config.firebase_project_id.is_some() {
        return Err(AppError::Internal(
            "Development tokens are only accepted when FIREBASE_PROJECT_ID is unset".to_string(),
        ));
    }
    if subject.trim().is_empty() {
        return Err(AppError::MissingSubject);
    }

    JwtService::new(&config.jwt_secret, config.jwt_expiration_hours).create_token(subject)
}

#[async_trait]
impl IdentityVerifier for JwtService {
    async fn verify(&self, token: &str) -> AppResult<Identity> {
        let claims = self.validate_token(token)?;
        Ok(Identity { uid: claims.sub })
    }
}
