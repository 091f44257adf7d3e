use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum QuizAction {
    #[serde(rename_all = "camelCase")]
    SelectAnswer {
        question_index: usize,
        answer_index: usize,
    },
    NextQuestion,
    PreviousQuestion,
    #[serde(rename_all = "camelCase")]
    JumpToQuestion { question_index: usize },
    SubmitQuiz,
    RestartQuiz,
}
