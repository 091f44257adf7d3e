use std::fmt;

use serde::Serialize;

use crate::handlers::session_handler::QuizSession;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TabView {
    pub index: usize,
    pub label: String,
    pub active: bool,
    pub disabled: bool,
}

/// One tab per question; tabs past the first unanswered question are locked.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavbarView {
    pub tabs: Vec<TabView>,
    pub highest_allowed_index: usize,
}

impl NavbarView {
    pub fn from_session(session: &QuizSession) -> Self {
        let highest_allowed_index = session.highest_allowed_index();
        let current = session.state().current_question_index;
        let tabs = (0..session.questions().len())
            .map(|index| TabView {
                index,
                label: format!("Question {}", index + 1),
                active: index == current,
                disabled: index > highest_allowed_index,
            })
            .collect();

        Self {
            tabs,
            highest_allowed_index,
        }
    }
}

impl fmt::Display for NavbarView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tabs: Vec<String> = self
            .tabs
            .iter()
            .map(|tab| {
                let number = tab.index + 1;
                if tab.active {
                    format!("[{}]", number)
                } else if tab.disabled {
                    format!("-{}-", number)
                } else {
                    format!(" {} ", number)
                }
            })
            .collect();
        write!(f, "Questions: {}", tabs.join(" "))
    }
}
