// src/quiz.rs
//! Embedded quiz bank and answer checking.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static QUESTIONS: Lazy<Vec<QuizQuestion>> = Lazy::new(|| {
    let raw = include_str!("../quiz_questions.json");
    serde_json::from_str::<Vec<QuizQuestion>>(raw).expect("valid quiz question bank")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

/// Question view served to the UI: the answer and explanation stay
/// server-side until the player submits a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestionPublic {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuizQuestion> for QuizQuestionPublic {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            id: q.id,
            question: q.question.clone(),
            options: q.options.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerCheck {
    pub correct: bool,
    pub correct_answer: usize,
    pub explanation: String,
}

pub fn all() -> &'static [QuizQuestion] {
    &QUESTIONS
}

pub fn public_list() -> Vec<QuizQuestionPublic> {
    QUESTIONS.iter().map(Into::into).collect()
}

pub fn get(id: u32) -> Option<&'static QuizQuestion> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Check a submitted choice against the bank. `None` for an unknown id.
pub fn check_answer(id: u32, choice: usize) -> Option<AnswerCheck> {
    get(id).map(|q| AnswerCheck {
        correct: choice == q.correct_answer,
        correct_answer: q.correct_answer,
        explanation: q.explanation.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_loads_and_is_well_formed() {
        let qs = all();
        assert!(!qs.is_empty());
        for q in qs {
            assert!(q.correct_answer < q.options.len(), "question {} answer out of range", q.id);
            assert!(!q.explanation.is_empty());
        }
    }

    #[test]
    fn correct_choice_passes() {
        let q = &all()[0];
        let check = check_answer(q.id, q.correct_answer).expect("known id");
        assert!(check.correct);
        assert_eq!(check.correct_answer, q.correct_answer);
    }

    #[test]
    fn wrong_choice_reports_correct_index() {
        let q = &all()[0];
        let wrong = (q.correct_answer + 1) % q.options.len();
        let check = check_answer(q.id, wrong).expect("known id");
        assert!(!check.correct);
        assert_eq!(check.correct_answer, q.correct_answer);
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(check_answer(9999, 0).is_none());
        assert!(get(9999).is_none());
    }

    #[test]
    fn public_view_withholds_answers() {
        let v = serde_json::to_value(public_list()).unwrap();
        let first = &v[0];
        assert!(first.get("question").is_some());
        assert!(first.get("correct_answer").is_none());
        assert!(first.get("explanation").is_none());
    }
}
