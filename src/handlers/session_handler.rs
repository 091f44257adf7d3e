use log::{debug, info};
use uuid::Uuid;

use crate::{
    error::{QuizError, Result},
    models::game::{Pack, Question},
    store::{
        quiz_reducer,
        selectors::{self, score},
        state::Answers,
        QuizAction, QuizState,
    },
};

/// Score cached against the answers it was computed from.
struct ScoreMemo {
    answers: Answers,
    score: usize,
}

impl ScoreMemo {
    fn new(pack: &Pack, answers: &Answers) -> Self {
        Self {
            answers: answers.clone(),
            score: score(&pack.questions, answers),
        }
    }

    fn refresh(&mut self, pack: &Pack, answers: &Answers) {
        if &self.answers != answers {
            *self = Self::new(pack, answers);
        }
    }
}

pub struct QuizSession {
    id: Uuid,
    pack: Pack,
    state: QuizState,
    score: ScoreMemo,
}

impl QuizSession {
    /// Validates the pack before starting, so a session always has at least
    /// one question for `current_question_index` to point at.
    pub fn new(pack: Pack) -> Result<Self> {
        pack.validate()?;

        let state = QuizState::initial(pack.len());
        let score = ScoreMemo::new(&pack, &state.answers);
        let session = Self {
            id: Uuid::new_v4(),
            pack,
            state,
            score,
        };
        info!(
            "Session {} started with pack '{}' ({} questions)",
            session.id,
            session.pack.name,
            session.pack.len()
        );
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn questions(&self) -> &[Question] {
        &self.pack.questions
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn dispatch(&mut self, action: QuizAction) -> &QuizState {
        debug!("Session {} dispatch: {:?}", self.id, action);

        let next = quiz_reducer(&self.state, &action);
        if next != self.state {
            debug!(
                "Session {} now at question {} ({:?})",
                self.id,
                next.current_question_index + 1,
                next.status
            );
        }
        if action == QuizAction::RestartQuiz {
            info!("Session {} restarted", self.id);
        }

        self.state = next;
        self.score.refresh(&self.pack, &self.state.answers);
        &self.state
    }

    pub fn current_question(&self) -> &Question {
        &self.pack.questions[self.state.current_question_index]
    }

    pub fn highest_allowed_index(&self) -> usize {
        selectors::highest_allowed_index(&self.state)
    }

    pub fn is_answer_selected(&self, index: usize) -> bool {
        selectors::is_answer_selected(&self.state, index)
    }

    pub fn score(&self) -> usize {
        self.score.score
    }

    pub fn score_percentage(&self) -> u32 {
        selectors::score_percentage(self.score(), self.pack.len())
    }
}

/// Owner of the running session. Reaching for the session before `start`
/// is an integration bug and surfaces as [`QuizError::NoSession`].
#[derive(Default)]
pub struct SessionHost {
    session: Option<QuizSession>,
}

impl SessionHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, pack: Pack) -> Result<&mut QuizSession> {
        Ok(self.session.insert(QuizSession::new(pack)?))
    }

    pub fn is_started(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Result<&QuizSession> {
        self.session.as_ref().ok_or(QuizError::NoSession)
    }

    pub fn session_mut(&mut self) -> Result<&mut QuizSession> {
        self.session.as_mut().ok_or(QuizError::NoSession)
    }

    pub fn dispatch(&mut self, action: QuizAction) -> Result<&QuizState> {
        Ok(self.session_mut()?.dispatch(action))
    }
}
