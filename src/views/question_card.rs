use std::fmt;

use serde::Serialize;

use super::{navbar::NavbarView, quiz_navigation::QuizNavigationView};
use crate::handlers::session_handler::QuizSession;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptionView {
    pub index: usize,
    pub label: String,
    pub selected: bool,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCardView {
    pub question_number: usize,
    pub total_questions: usize,
    pub question_text: String,
    pub options: Vec<OptionView>,
    pub navbar: NavbarView,
    pub navigation: QuizNavigationView,
}

impl QuestionCardView {
    pub fn from_session(session: &QuizSession) -> Self {
        let state = session.state();
        let question = session.current_question();
        let selected = state.answers[state.current_question_index];

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(index, label)| OptionView {
                index,
                label: label.clone(),
                selected: selected == Some(index),
            })
            .collect();

        Self {
            question_number: state.current_question_index + 1,
            total_questions: session.questions().len(),
            question_text: question.question_text.clone(),
            options,
            navbar: NavbarView::from_session(session),
            navigation: QuizNavigationView::from_session(session),
        }
    }
}

impl fmt::Display for QuestionCardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.navbar)?;
        writeln!(
            f,
            "Question {}/{}",
            self.question_number, self.total_questions
        )?;
        writeln!(f, "{}", self.question_text)?;
        writeln!(f, "Choose an answer:")?;
        for option in &self.options {
            let mark = if option.selected { "x" } else { " " };
            writeln!(f, "  ({}) {}. {}", mark, option.index + 1, option.label)?;
        }
        write!(f, "{}", self.navigation)
    }
}
