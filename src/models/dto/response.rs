use serde::Serialize;

use crate::models::domain::{Quiz, QuizSummary};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }

    pub fn quiz_created(id: &str) -> Self {
        Self::new(format!("New quiz created with ID: {}", id))
    }

    pub fn quiz_deleted(id: &str) -> Self {
        Self::new(format!("Quiz with ID: {} has been deleted.", id))
    }
}

#[derive(Debug, Serialize)]
pub struct QuizListResponse {
    pub quizzes: Vec<QuizSummary>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub quiz: Quiz,
}
