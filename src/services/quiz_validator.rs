use thiserror::Error;

use crate::models::domain::{Question, Quiz};

pub const MIN_QUESTIONS: usize = 1;
pub const MAX_QUESTIONS: usize = 10;
pub const MIN_ANSWERS: usize = 1;
pub const MAX_ANSWERS: usize = 5;

/// First structural problem found in a submitted quiz.
///
/// Question and answer indices are 1-based; the answer index restarts at 1
/// for every question. Clients match on these messages, so the wording is
/// fixed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizRejection {
    #[error("Quiz description is not filled.")]
    MissingDescription,

    #[error("Number of questions should be between 1 and 10.")]
    QuestionCount,

    #[error("The text for Question {question} is not filled.")]
    MissingQuestionText { question: usize },

    #[error("Number of answers for Question {question} should be between 1 and 5.")]
    AnswerCount { question: usize },

    #[error("No correct answer is marked for Question {question}.")]
    NoCorrectAnswer { question: usize },

    #[error("The text for Answer {answer} of Question {question} is not filled.")]
    MissingAnswerText { answer: usize, question: usize },
}

/// Checks a quiz before it is persisted, stopping at the first violation.
///
/// Multi-select questions may have no correct answer at all.
pub fn validate_quiz(quiz: &Quiz) -> Result<(), QuizRejection> {
    if is_blank(quiz.description.as_deref()) {
        return Err(QuizRejection::MissingDescription);
    }

    let questions = quiz.questions();
    if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&questions.len()) {
        return Err(QuizRejection::QuestionCount);
    }

    for (index, question) in questions.iter().enumerate() {
        validate_question(question, index + 1)?;
    }

    Ok(())
}

fn validate_question(question: &Question, number: usize) -> Result<(), QuizRejection> {
    if is_blank(question.text.as_deref()) {
        return Err(QuizRejection::MissingQuestionText { question: number });
    }

    let answers = question.answers();
    if !(MIN_ANSWERS..=MAX_ANSWERS).contains(&answers.len()) {
        return Err(QuizRejection::AnswerCount { question: number });
    }

    if !question.is_multi_select() && !answers.iter().any(|a| a.is_correct()) {
        return Err(QuizRejection::NoCorrectAnswer { question: number });
    }

    if let Some(index) = answers.iter().position(|a| is_blank(a.text.as_deref())) {
        return Err(QuizRejection::MissingAnswerText {
            answer: index + 1,
            question: number,
        });
    }

    Ok(())
}

fn is_blank(text: Option<&str>) -> bool {
    text.map_or(true, |t| t.trim().is_empty())
}
