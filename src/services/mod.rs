pub mod quiz_service;
pub mod quiz_validator;

pub use quiz_service::QuizService;
pub use quiz_validator::{validate_quiz, QuizRejection};
