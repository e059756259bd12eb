use crate::games::quiz::question::QuestionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    score: u32,
    correct_count: u32,
    assigned: Vec<QuestionId>,
    progress: usize,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            correct_count: 0,
            assigned: Vec::new(),
            progress: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    /// Scores only go up, one correct answer at a time
    pub(crate) fn credit(&mut self, points: u32) {
        self.score += points;
        self.correct_count += 1;
    }

    pub fn assigned(&self) -> &[QuestionId] {
        &self.assigned
    }

    /// Replace the question queue and rewind to its start
    pub fn assign(&mut self, ids: Vec<QuestionId>) {
        self.assigned = ids;
        self.progress = 0;
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Next unanswered question, `None` once the queue is exhausted
    pub fn current(&self) -> Option<QuestionId> {
        self.assigned.get(self.progress).copied()
    }

    pub fn is_exhausted(&self) -> bool {
        self.progress >= self.assigned.len()
    }

    /// Move past the current question. Never runs past the end of the queue.
    pub fn advance(&mut self) {
        if self.progress < self.assigned.len() {
            self.progress += 1;
        }
    }
}
