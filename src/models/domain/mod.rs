pub mod quiz;
pub mod quiz_question;
pub use quiz::{Quiz, QuizSummary};
pub use quiz_question::{Answer, Question, QuestionType};
