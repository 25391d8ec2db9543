use std::sync::Arc;
use uuid::Uuid;

use crate::{
    auth::Identity,
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizSummary},
    repositories::QuizRepository,
    services::quiz_validator::validate_quiz,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    /// Validates and stores a quiz owned by `owner`, returning the new id.
    ///
    /// A client-supplied perma-URL is kept; a missing or blank one is
    /// replaced with a generated slug.
    pub async fn create_quiz(&self, owner: &Identity, mut quiz: Quiz) -> AppResult<String> {
        validate_quiz(&quiz)?;

        quiz.id = None;
        quiz.uid = Some(owner.uid.clone());
        if quiz.perma_url.as_deref().map_or(true, |url| url.trim().is_empty()) {
            quiz.perma_url = Some(Uuid::new_v4().simple().to_string());
        }

        let id = self.repository.create(quiz).await.inspect_err(|e| {
            log::error!("Failed to store quiz for {}: {}", owner.uid, e);
        })?;

        log::info!("Quiz {} created by {}", id, owner.uid);
        Ok(id)
    }

    pub async fn list_quizzes(&self, owner: &Identity) -> AppResult<Vec<QuizSummary>> {
        if owner.uid.is_empty() {
            return Err(AppError::MissingSubject);
        }

        self.repository.list_by_owner(&owner.uid).await
    }

    /// Returns the full stored record, without its internal document id.
    pub async fn get_quiz_by_perma_url(&self, perma_url: &str) -> AppResult<Quiz> {
        let mut quiz = self
            .repository
            .find_by_perma_url(perma_url)
            .await?
            .ok_or(AppError::NotFound)?;

        quiz.id = None;
        Ok(quiz)
    }

    // Any verified caller may delete any quiz; ownership is not checked.
    pub async fn delete_quiz(&self, id: &str) -> AppResult<()> {
        self.repository.delete(id).await?;
        log::info!("Quiz {} deleted", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repositories::MockQuizRepository,
        services::quiz_validator::QuizRejection,
        test_utils::fixtures::{capitals_quiz, stored_quiz},
    };

    fn service(repository: MockQuizRepository) -> QuizService {
        QuizService::new(Arc::new(repository))
    }

    #[actix_web::test]
    async fn test_create_quiz_attaches_owner_and_returns_id() {
        let mut repository = MockQuizRepository::new();
        repository
            .expect_create()
            .withf(|quiz| {
                quiz.uid.as_deref() == Some("owner-1")
                    && quiz.perma_url.as_deref() == Some("capitals")
                    && quiz.id.is_none()
            })
            .times(1)
            .returning(|_| Ok("quiz-1".to_string()));

        let quiz = capitals_quiz().with_perma_url("capitals");
        let id = service(repository)
            .create_quiz(&Identity::new("owner-1"), quiz)
            .await
            .unwrap();

        assert_eq!(id, "quiz-1");
    }

    #[actix_web::test]
    async fn test_create_quiz_overrides_client_supplied_owner() {
        let mut repository = MockQuizRepository::new();
        repository
            .expect_create()
            .withf(|quiz| quiz.uid.as_deref() == Some("owner-1"))
            .returning(|_| Ok("quiz-1".to_string()));

        let mut quiz = capitals_quiz();
        quiz.uid = Some("someone-else".to_string());

        service(repository)
            .create_quiz(&Identity::new("owner-1"), quiz)
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_create_quiz_generates_missing_perma_url() {
        let mut repository = MockQuizRepository::new();
        repository
            .expect_create()
            .withf(|quiz| quiz.perma_url.as_deref().is_some_and(|url| url.len() == 32))
            .returning(|_| Ok("quiz-1".to_string()));

        let mut quiz = capitals_quiz();
        quiz.perma_url = Some("  ".to_string());

        service(repository)
            .create_quiz(&Identity::new("owner-1"), quiz)
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_create_invalid_quiz_never_reaches_store() {
        let mut repository = MockQuizRepository::new();
        repository.expect_create().never();

        let mut quiz = capitals_quiz();
        quiz.description = Some(String::new());

        let result = service(repository)
            .create_quiz(&Identity::new("owner-1"), quiz)
            .await;

        assert!(matches!(
            result,
            Err(AppError::Validation(QuizRejection::MissingDescription))
        ));
    }

    #[actix_web::test]
    async fn test_create_quiz_propagates_store_failure() {
        let mut repository = MockQuizRepository::new();
        repository
            .expect_create()
            .returning(|_| Err(AppError::Store("write conflict".to_string())));

        let result = service(repository)
            .create_quiz(&Identity::new("owner-1"), capitals_quiz())
            .await;

        assert!(matches!(result, Err(AppError::Store(msg)) if msg == "write conflict"));
    }

    #[actix_web::test]
    async fn test_list_quizzes_is_scoped_to_owner() {
        let mut repository = MockQuizRepository::new();
        repository
            .expect_list_by_owner()
            .withf(|uid| uid == "owner-1")
            .returning(|_| Ok(vec![QuizSummary::from(&stored_quiz("quiz-1", "owner-1", "capitals"))]));

        let quizzes = service(repository)
            .list_quizzes(&Identity::new("owner-1"))
            .await
            .unwrap();

        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].id, "quiz-1");
    }

    #[actix_web::test]
    async fn test_list_quizzes_without_subject() {
        let mut repository = MockQuizRepository::new();
        repository.expect_list_by_owner().never();

        let result = service(repository).list_quizzes(&Identity::new("")).await;
        assert!(matches!(result, Err(AppError::MissingSubject)));
    }

    #[actix_web::test]
    async fn test_get_quiz_by_perma_url_hides_document_id() {
        let mut repository = MockQuizRepository::new();
        repository
            .expect_find_by_perma_url()
            .withf(|perma_url| perma_url == "capitals")
            .returning(|_| Ok(Some(stored_quiz("quiz-1", "owner-1", "capitals"))));

        let quiz = service(repository)
            .get_quiz_by_perma_url("capitals")
            .await
            .unwrap();

        assert_eq!(quiz.id, None);
        assert_eq!(quiz.uid.as_deref(), Some("owner-1"));
    }

    #[actix_web::test]
    async fn test_get_quiz_by_perma_url_not_found() {
        let mut repository = MockQuizRepository::new();
        repository
            .expect_find_by_perma_url()
            .returning(|_| Ok(None));

        let result = service(repository).get_quiz_by_perma_url("missing").await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[actix_web::test]
    async fn test_delete_quiz_forwards_id() {
        let mut repository = MockQuizRepository::new();
        repository
            .expect_delete()
            .withf(|id| id == "quiz-1")
            .times(1)
            .returning(|_| Ok(()));

        service(repository).delete_quiz("quiz-1").await.unwrap();
    }
}
