use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

const MULTI_SELECT_TAG: &str = "QuestionType.multiSelect";
const SINGLE_SELECT_TAG: &str = "QuestionType.singleSelect";

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Question {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub question_type: Option<QuestionType>,
    #[serde(default)]
    pub answers: Option<Vec<Answer>>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Question {
    pub fn new(text: &str, question_type: Option<QuestionType>, answers: Vec<Answer>) -> Self {
        Question {
            text: Some(text.to_string()),
            question_type,
            answers: Some(answers),
            ..Default::default()
        }
    }

    pub fn answers(&self) -> &[Answer] {
        self.answers.as_deref().unwrap_or_default()
    }

    pub fn is_multi_select(&self) -> bool {
        matches!(self.question_type, Some(QuestionType::MultiSelect))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Answer {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
    #[serde(flatten)]
    pub extra: Document,
}

impl Answer {
    pub fn new(text: &str, correct: bool) -> Self {
        Answer {
            text: Some(text.to_string()),
            correct: Some(correct),
            ..Default::default()
        }
    }

    /// An absent `correct` flag counts as incorrect.
    pub fn is_correct(&self) -> bool {
        self.correct.unwrap_or(false)
    }
}

/// Question kind as tagged by the client app.
///
/// Only `MultiSelect` changes validation; any tag other than the two known
/// ones is carried through as `Other` so stored documents keep their exact
/// wire value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    SingleSelect,
    MultiSelect,
    Other(String),
}

impl QuestionType {
    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::SingleSelect => SINGLE_SELECT_TAG,
            QuestionType::MultiSelect => MULTI_SELECT_TAG,
            QuestionType::Other(tag) => tag,
        }
    }
}

impl From<String> for QuestionType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            MULTI_SELECT_TAG => QuestionType::MultiSelect,
            SINGLE_SELECT_TAG => QuestionType::SingleSelect,
            _ => QuestionType::Other(tag),
        }
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}
