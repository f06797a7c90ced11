//! Comprehension check state
//!
//! Each question accepts exactly one answer. Once answered it is locked and
//! its options are marked so the correct one stands out from a wrong pick.

use std::collections::HashMap;

use legalai_common::QuizQuestion;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("No question at index {0}")]
    NoSuchQuestion(usize),

    #[error("Question {0} has already been answered")]
    AlreadyAnswered(usize),

    #[error("\"{0}\" is not one of the options")]
    UnknownOption(String),
}

/// How a single option is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Question not answered yet; option can be clicked
    Selectable,
    /// The correct answer, shown once the question is answered
    Correct,
    /// The user's wrong pick
    Incorrect,
    /// Neither picked nor correct
    Muted,
}

#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
    selections: HashMap<usize, String>,
}

impl Quiz {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            selections: HashMap::new(),
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn is_locked(&self, question: usize) -> bool {
        self.selections.contains_key(&question)
    }

    pub fn selection(&self, question: usize) -> Option<&str> {
        self.selections.get(&question).map(String::as_str)
    }

    /// Record an answer; returns whether it was correct
    pub fn select(&mut self, question: usize, answer: &str) -> Result<bool, QuizError> {
        let q = self
            .questions
            .get(question)
            .ok_or(QuizError::NoSuchQuestion(question))?;

        if self.is_locked(question) {
            return Err(QuizError::AlreadyAnswered(question));
        }
        if !q.options.iter().any(|o| o == answer) {
            return Err(QuizError::UnknownOption(answer.to_string()));
        }

        let correct = q.correct_answer == answer;
        self.selections.insert(question, answer.to_string());
        Ok(correct)
    }

    /// Display state of every option of a question, in option order
    pub fn option_states(&self, question: usize) -> Vec<OptionState> {
        let Some(q) = self.questions.get(question) else {
            return Vec::new();
        };

        let Some(selected) = self.selections.get(&question) else {
            return vec![OptionState::Selectable; q.options.len()];
        };

        q.options
            .iter()
            .map(|option| {
                if *option == q.correct_answer {
                    OptionState::Correct
                } else if option == selected {
                    OptionState::Incorrect
                } else {
                    OptionState::Muted
                }
            })
            .collect()
    }

    /// (correct answers, total questions)
    pub fn score(&self) -> (usize, usize) {
        let correct = self
            .selections
            .iter()
            .filter(|(i, answer)| {
                self.questions
                    .get(**i)
                    .is_some_and(|q| &q.correct_answer == *answer)
            })
            .count();
        (correct, self.questions.len())
    }

    pub fn is_complete(&self) -> bool {
        self.selections.len() == self.questions.len()
    }
}
