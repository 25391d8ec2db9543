use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use reqwest::header::CACHE_CONTROL;
use tokio::sync::RwLock;

use crate::{
    auth::{
        claims::FirebaseClaims,
        identity::{Identity, IdentityVerifier},
    },
    errors::{AppError, AppResult},
};

pub const FIREBASE_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

const DEFAULT_KEYS_TTL: Duration = Duration::from_secs(60 * 60);
/// Unknown `kid`s do not trigger a new fetch within this long of the last one.
const MIN_REFETCH_INTERVAL: Duration = Duration::from_secs(60);

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
    expires_at: Instant,
}

/// Verifies Firebase ID tokens against Google's published signing keys.
pub struct FirebaseVerifier {
    http: reqwest::Client,
    jwks_url: String,
    validation: Validation,
    keys: RwLock<Option<CachedKeys>>,
}

impl FirebaseVerifier {
    pub fn new(project_id: &str) -> Self {
        Self::with_jwks_url(project_id, FIREBASE_JWKS_URL)
    }

    pub fn with_jwks_url(project_id: &str, jwks_url: &str) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[project_id]);
        validation.set_issuer(&[format!("https://securetoken.google.com/{}", project_id)]);
        validation.set_required_spec_claims(&["exp", "sub", "aud", "iss"]);

        Self {
            http: reqwest::Client::new(),
            jwks_url: jwks_url.to_string(),
            validation,
            keys: RwLock::new(None),
        }
    }

    async fn decoding_key(&self, kid: &str) -> AppResult<DecodingKey> {
        {
            let cached = self.keys.read().await;
            if let Some(cache) = cached
                .as_ref()
                .filter(|cache| cache.expires_at > Instant::now())
            {
                match cache.keys.find(kid) {
                    Some(jwk) => return DecodingKey::from_jwk(jwk).map_err(reject),
                    None if cache.fetched_at.elapsed() < MIN_REFETCH_INTERVAL => {
                        return Err(reject(format!("no signing key with kid {}", kid)));
                    }
                    None => {}
                }
            }
        }

        // Missing or stale cache, or the key was rotated since the last fetch.
        let fresh = self.fetch_keys().await?;
        let key = fresh
            .keys
            .find(kid)
            .ok_or_else(|| reject(format!("no signing key with kid {}", kid)))
            .and_then(|jwk| DecodingKey::from_jwk(jwk).map_err(reject));

        *self.keys.write().await = Some(fresh);
        key
    }

    async fn fetch_keys(&self) -> AppResult<CachedKeys> {
        log::debug!("Fetching identity provider keys from {}", self.jwks_url);

        let response = self
            .http
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                log::error!("Failed to fetch identity provider keys: {}", e);
                AppError::InvalidToken
            })?;

        let ttl = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_max_age)
            .unwrap_or(DEFAULT_KEYS_TTL);

        let keys = response.json::<JwkSet>().await.map_err(|e| {
            log::error!("Failed to parse identity provider keys: {}", e);
            AppError::InvalidToken
        })?;

        let fetched_at = Instant::now();
        Ok(CachedKeys {
            keys,
            fetched_at,
            expires_at: fetched_at + ttl,
        })
    }
}

#[async_trait]
impl IdentityVerifier for FirebaseVerifier {
    async fn verify(&self, token: &str) -> AppResult<Identity> {
        let header = decode_header(token).map_err(reject)?;
        if header.alg != Algorithm::RS256 {
            return Err(reject(format!("unexpected algorithm {:?}", header.alg)));
        }
        let kid = header
            .kid
            .ok_or_else(|| reject("token header has no kid"))?;

        let key = self.decoding_key(&kid).await?;
        let claims = decode::<FirebaseClaims>(token, &key, &self.validation)
            .map_err(reject)?
            .claims;

        Ok(Identity { uid: claims.sub })
    }
}

fn reject(reason: impl std::fmt::Display) -> AppError {
    log::warn!("Rejected ID token: {}", reason);
    AppError::InvalidToken
}

/// Reads `max-age` out of a `Cache-Control` header value.
fn parse_max_age(cache_control: &str) -> Option<Duration> {
    cache_control
        .split(',')
        .filter_map(|directive| directive.trim().strip_prefix("max-age="))
        .find_map(|seconds| seconds.parse().ok())
        .map(Duration::from_secs)
}
