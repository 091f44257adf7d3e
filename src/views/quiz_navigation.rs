use std::fmt;

use serde::Serialize;

use crate::handlers::session_handler::QuizSession;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PrimaryButton {
    Next,
    Submit,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuizNavigationView {
    pub previous_enabled: bool,
    pub primary: PrimaryButton,
    pub primary_enabled: bool,
}

impl QuizNavigationView {
    pub fn from_session(session: &QuizSession) -> Self {
        let current = session.state().current_question_index;
        let is_last_question = current + 1 == session.questions().len();

        Self {
            previous_enabled: current > 0,
            primary: if is_last_question {
                PrimaryButton::Submit
            } else {
                PrimaryButton::Next
            },
            primary_enabled: session.is_answer_selected(current),
        }
    }
}

impl fmt::Display for QuizNavigationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let primary = match self.primary {
            PrimaryButton::Next => "next",
            PrimaryButton::Submit => "submit",
        };
        let mut controls = Vec::new();
        if self.previous_enabled {
            controls.push("prev".to_string());
        }
        if self.primary_enabled {
            controls.push(primary.to_string());
        } else {
            controls.push(format!("{} (select an answer first)", primary));
        }
        write!(f, "Controls: {}", controls.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::game::default_pack, store::QuizAction};

    #[test]
    fn first_question_hides_previous_and_waits_for_answer() {
        let session = QuizSession::new(default_pack()).unwrap();
        let navigation = QuizNavigationView::from_session(&session);

        assert!(!navigation.previous_enabled);
        assert_eq!(navigation.primary, PrimaryButton::Next);
        assert!(!navigation.primary_enabled);
        assert_eq!(
            navigation.to_string(),
            "Controls: next (select an answer first)"
        );
    }

    #[test]
    fn last_question_offers_submit() {
        let mut session = QuizSession::new(default_pack()).unwrap();
        for question_index in 0..5 {
            session.dispatch(QuizAction::SelectAnswer {
                question_index,
                answer_index: 0,
            });
            session.dispatch(QuizAction::NextQuestion);
        }

        let navigation = QuizNavigationView::from_session(&session);
        assert!(navigation.previous_enabled);
        assert_eq!(navigation.primary, PrimaryButton::Submit);
        assert!(navigation.primary_enabled);
        assert_eq!(navigation.to_string(), "Controls: prev | submit");
    }
}
