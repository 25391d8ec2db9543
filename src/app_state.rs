use std::sync::Arc;

use crate::{
    auth::{FirebaseVerifier, IdentityVerifier, JwtService},
    config::Config,
    errors::AppResult,
    repositories::MongoQuizRepository,
    services::QuizService,
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub identity_verifier: Arc<dyn IdentityVerifier>,
}

impl AppState {
    pub async fn new(config: &Config) -> AppResult<Self> {
        let quiz_repository = Arc::new(MongoQuizRepository::connect(config).await?);
        let quiz_service = Arc::new(QuizService::new(quiz_repository));

        Ok(Self::from_parts(quiz_service, identity_verifier(config)))
    }

    pub fn from_parts(
        quiz_service: Arc<QuizService>,
        identity_verifier: Arc<dyn IdentityVerifier>,
    ) -> Self {
        Self {
            quiz_service,
            identity_verifier,
        }
    }
}

fn identity_verifier(config: &Config) -> Arc<dyn IdentityVerifier> {
    match &config.firebase_project_id {
        Some(project_id) => {
            log::info!("Verifying ID tokens for Firebase project '{}'", project_id);
            Arc::new(FirebaseVerifier::new(project_id))
        }
        None => {
            log::warn!("FIREBASE_PROJECT_ID not set, verifying tokens with the shared JWT secret");
            Arc::new(JwtService::new(&config.jwt_secret, config.jwt_expiration_hours))
        }
    }
}
