use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{MAX_OPTIONS, MIN_OPTIONS};

const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,
    #[error("{0} options given, expected {min} to {max}", min = MIN_OPTIONS, max = MAX_OPTIONS)]
    OptionCount(usize),
    #[error("correct answer {index} is out of range for {options} options")]
    CorrectIndex { index: usize, options: usize },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read question file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed question file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("question #{index} is invalid: {source}")]
    Invalid { index: usize, source: QuestionError },
}

/// Position of a question inside its [`QuestionBank`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
    category: String,
    used: bool,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        category: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()) {
            return Err(QuestionError::OptionCount(options.len()));
        }
        if correct_index >= options.len() {
            return Err(QuestionError::CorrectIndex { index: correct_index, options: options.len() });
        }

        Ok(Self {
            text,
            options,
            correct_index,
            category: category.into(),
            used: false,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_used(&self) -> bool {
        self.used
    }
}

/// On-disk shape of one question
#[derive(Debug, Deserialize)]
struct QuestionRecord {
    question: String,
    options: Vec<String>,
    correct_answer: usize,
    #[serde(default)]
    category: Option<String>,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(
            record.question,
            record.options,
            record.correct_answer,
            record.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        )
    }
}

fn builtin(text: &str, options: [&str; 4], correct: usize) -> Question {
    Question {
        text: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_index: correct,
        category: DEFAULT_CATEGORY.to_string(),
        used: false,
    }
}

/// Pool of questions for a session. Questions are never removed; `used` is a
/// tombstone cleared by [`QuestionBank::reset`].
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Bank holding only the built-in questions
    pub fn with_defaults() -> Self {
        Self {
            questions: vec![
                builtin("Which language inspired C++?", ["C", "Java", "Python", "Assembly"], 0),
                builtin("Which Linux command lists files?", ["dir", "ls", "list", "show"], 1),
                builtin("What is Python's package manager?", ["pip", "npm", "apt", "yum"], 0),
            ],
        }
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Parse a JSON array of question records. All or nothing.
    pub fn parse(json: &str) -> Result<Vec<Question>, LoadError> {
        let records: Vec<QuestionRecord> = serde_json::from_str(json)?;
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Question::try_from(record).map_err(|source| LoadError::Invalid { index, source }))
            .collect()
    }

    pub fn read(path: &Path) -> Result<Vec<Question>, LoadError> {
        let json = fs::read_to_string(path)?;
        Self::parse(&json)
    }

    /// Append questions from `path`. Never fails: a missing or malformed file
    /// is logged and contributes nothing. Returns how many were added.
    pub fn load(&mut self, path: &Path) -> usize {
        match Self::read(path) {
            Ok(extra) => {
                let added = extra.len();
                self.questions.extend(extra);
                info!(path=%path.display(), added, total=self.questions.len(), "loaded questions");
                added
            }
            Err(e) => {
                warn!(path=%path.display(), error=%e, "ignoring question file, using built-in questions");
                0
            }
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(id.0)
    }

    pub fn all_unused(&self) -> Vec<QuestionId> {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, q)| !q.used)
            .map(|(i, _)| QuestionId(i))
            .collect()
    }

    pub fn mark_used(&mut self, ids: &[QuestionId]) {
        for id in ids {
            if let Some(q) = self.questions.get_mut(id.0) {
                q.used = true;
            }
        }
    }

    /// Clear every `used` flag, making the whole pool eligible again
    pub fn reset(&mut self) {
        for q in &mut self.questions {
            q.used = false;
        }
    }
}
