use std::fmt;

use serde::Serialize;

use crate::handlers::session_handler::QuizSession;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreScreenView {
    pub score: usize,
    pub total_questions: usize,
    pub score_percentage: u32,
}

impl ScoreScreenView {
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            score: session.score(),
            total_questions: session.questions().len(),
            score_percentage: session.score_percentage(),
        }
    }
}

impl fmt::Display for ScoreScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quiz Complete!")?;
        writeln!(f, "Your Score:")?;
        writeln!(f, "{}%", self.score_percentage)?;
        writeln!(
            f,
            "{} of {} correct",
            self.score, self.total_questions
        )?;
        write!(f, "Type `restart` to try again.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::game::default_pack, store::QuizAction};

    #[test]
    fn score_screen_after_partial_run() {
        let mut session = QuizSession::new(default_pack()).unwrap();
        session.dispatch(QuizAction::SelectAnswer {
            question_index: 0,
            answer_index: 0,
        });
        session.dispatch(QuizAction::SelectAnswer {
            question_index: 1,
            answer_index: 1,
        });
        session.dispatch(QuizAction::SubmitQuiz);

        let view = ScoreScreenView::from_session(&session);
        assert_eq!(view.score, 1);
        assert_eq!(view.total_questions, 5);
        assert_eq!(view.score_percentage, 20);
        assert_eq!(
            view.to_string(),
            "Quiz Complete!\nYour Score:\n20%\n1 of 5 correct\nType `restart` to try again."
        );
    }
}
