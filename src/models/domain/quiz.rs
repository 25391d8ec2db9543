use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::Question;

/// A quiz document as submitted by a client and as stored in the `quizzes`
/// collection.
///
/// Every field is optional on the wire so that an incomplete payload still
/// deserializes and can be rejected by the validator with a readable reason.
/// Top-level fields this type does not model are kept in `extra` and stored
/// untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Quiz {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>, // Set by the repository on insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>, // Owner, set from the verified token subject
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "permaUrl", default, skip_serializing_if = "Option::is_none")]
    pub perma_url: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Quiz {
    pub fn new(description: &str, questions: Vec<Question>) -> Self {
        Quiz {
            description: Some(description.to_string()),
            questions: Some(questions),
            ..Default::default()
        }
    }

    /// Questions in submission order; a missing list reads as empty.
    pub fn questions(&self) -> &[Question] {
        self.questions.as_deref().unwrap_or_default()
    }

    pub fn with_perma_url(mut self, perma_url: &str) -> Self {
        self.perma_url = Some(perma_url.to_string());
        self
    }
}

/// The subset of a stored quiz returned when an owner lists their quizzes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizSummary {
    #[serde(rename(serialize = "id", deserialize = "_id"))]
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "permaUrl", default)]
    pub perma_url: Option<String>,
}

impl From<&Quiz> for QuizSummary {
    fn from(quiz: &Quiz) -> Self {
        QuizSummary {
            id: quiz.id.clone().unwrap_or_default(),
            description: quiz.description.clone(),
            perma_url: quiz.perma_url.clone(),
        }
    }
}
