use std::fmt;

use serde::{Deserialize, Serialize};

use crate::views::{question_card::QuestionCardView, score_screen::ScoreScreenView};

/// A user input event. Indices are 0-based here; the text shorthand parsed in
/// `helpers` is 1-based like the rendered screens.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "command", content = "data", rename_all = "camelCase")]
pub enum Command {
    #[serde(rename_all = "camelCase")]
    SelectAnswer { answer_index: usize },
    Next,
    Previous,
    #[serde(rename_all = "camelCase")]
    JumpTo { question_index: usize },
    Submit,
    Restart,
    Show,
    Help,
    Quit,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "response", content = "data", rename_all = "camelCase")]
pub enum Response {
    QuestionCard(QuestionCardView),
    ScoreScreen(ScoreScreenView),
    Help {
        commands: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    ErrorResponse {
        error_text: String,
    },
    Goodbye,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::QuestionCard(card) => write!(f, "{}", card),
            Response::ScoreScreen(score) => write!(f, "{}", score),
            Response::Help { commands } => {
                writeln!(f, "Commands:")?;
                write!(f, "{}", commands.join("\n"))
            }
            Response::ErrorResponse { error_text } => write!(f, "! {}", error_text),
            Response::Goodbye => write!(f, "Bye!"),
        }
    }
}
