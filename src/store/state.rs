use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum QuizStatus {
    InProgress,
    Completed,
}

/// One recorded selection per question; `None` is the unanswered marker.
pub type Answers = Vec<Option<usize>>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizState {
    pub current_question_index: usize,
    pub answers: Answers,
    pub status: QuizStatus,
}

impl QuizState {
    pub fn initial(question_count: usize) -> Self {
        Self {
            current_question_index: 0,
            answers: vec![None; question_count],
            status: QuizStatus::InProgress,
        }
    }

    pub fn question_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_completed(&self) -> bool {
        self.status == QuizStatus::Completed
    }
}
