#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Answer, Question, QuestionType, Quiz};

    /// A single-question quiz that passes validation
    pub fn capitals_quiz() -> Quiz {
        Quiz::new(
            "Capitals",
            vec![Question::new(
                "Capital of France?",
                Some(QuestionType::SingleSelect),
                vec![Answer::new("Paris", true), Answer::new("Lyon", false)],
            )],
        )
    }

    /// A quiz as it comes back from the store
    pub fn stored_quiz(id: &str, uid: &str, perma_url: &str) -> Quiz {
        let mut quiz = capitals_quiz().with_perma_url(perma_url);
        quiz.id = Some(id.to_string());
        quiz.uid = Some(uid.to_string());
        quiz
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use crate::{
        app_state::AppState,
        auth::{Identity, MockIdentityVerifier},
        errors::AppError,
        repositories::MockQuizRepository,
        services::QuizService,
    };

    /// Verifier accepting exactly `valid_token` as the caller `uid`
    pub fn verifier_accepting(valid_token: &'static str, uid: &'static str) -> MockIdentityVerifier {
        let mut verifier = MockIdentityVerifier::new();
        verifier.expect_verify().returning(move |token| {
            if token == valid_token {
                Ok(Identity::new(uid))
            } else {
                Err(AppError::InvalidToken)
            }
        });
        verifier
    }

    pub fn app_state(repository: MockQuizRepository, verifier: MockIdentityVerifier) -> AppState {
        AppState::from_parts(
            Arc::new(QuizService::new(Arc::new(repository))),
            Arc::new(verifier),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::validate_quiz;

    #[test]
    fn test_fixtures_capitals_quiz_is_valid() {
        assert!(validate_quiz(&capitals_quiz()).is_ok());
    }

    #[test]
    fn test_fixtures_stored_quiz() {
        let quiz = stored_quiz("quiz-1", "owner-1", "capitals");
        assert_eq!(quiz.id.as_deref(), Some("quiz-1"));
        assert_eq!(quiz.uid.as_deref(), Some("owner-1"));
        assert_eq!(quiz.perma_url.as_deref(), Some("capitals"));
    }
}
