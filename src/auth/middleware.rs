use std::sync::Arc;

use actix_web::{dev::Payload, http::header::Header, web, FromRequest, HttpRequest};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};
use futures::future::LocalBoxFuture;

use crate::{
    app_state::AppState,
    auth::identity::{Identity, IdentityVerifier},
    errors::AppError,
};

// Extractor for authenticated callers in handlers.
// A missing header, a non-Bearer scheme and a rejected token all end up as
// `AppError::InvalidToken`.
pub struct AuthenticatedUser(pub Identity);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token = Authorization::<Bearer>::parse(req)
            .map(|auth| auth.into_scheme().token().to_string());

        let verifier: Option<Arc<dyn IdentityVerifier>> = req
            .app_data::<web::Data<AppState>>()
            .map(|state| Arc::clone(&state.identity_verifier));

        Box::pin(async move {
            let token = token.map_err(|_| {
                log::warn!("Rejected request without a bearer token");
                AppError::InvalidToken
            })?;

            let verifier = verifier
                .ok_or_else(|| AppError::Internal("Identity verifier not configured".to_string()))?;

            let identity = verifier.verify(&token).await?;
            Ok(AuthenticatedUser(identity))
        })
    }
}
