use log::{info, warn};

use crate::{
    error::{QuizError, Result},
    handlers::session_handler::{QuizSession, SessionHost},
    helpers::HELP_LINES,
    models::communication::{Command, Response},
    store::QuizAction,
    views::{question_card::QuestionCardView, score_screen::ScoreScreenView},
};

/// Runs one command against the hosted session and renders the screen that
/// follows it. Commands aimed at a control the current screen keeps disabled
/// are answered with an error response and never dispatched.
///
/// Only a missing session is returned as `Err`.
pub fn execute_command(command: Command, host: &mut SessionHost) -> Result<Response> {
    let session = host.session_mut()?;

    let action = match command {
        Command::Show => return Ok(render(session)),
        Command::Help => {
            return Ok(Response::Help {
                commands: HELP_LINES.iter().map(|line| line.to_string()).collect(),
            })
        }
        Command::Quit => {
            info!("Session {} quit", session.id());
            return Ok(Response::Goodbye);
        }
        command => match guard(command, session) {
            Ok(action) => action,
            Err(error) => {
                warn!("Session {} rejected {:?}: {}", session.id(), command, error);
                return Ok(Response::ErrorResponse {
                    error_text: error.to_string(),
                });
            }
        },
    };

    session.dispatch(action);
    Ok(render(session))
}

pub fn render(session: &QuizSession) -> Response {
    if session.state().is_completed() {
        Response::ScoreScreen(ScoreScreenView::from_session(session))
    } else {
        Response::QuestionCard(QuestionCardView::from_session(session))
    }
}

fn disabled(message: impl Into<String>) -> QuizError {
    QuizError::ControlDisabled(message.into())
}

/// Maps a command to the action its control would dispatch, if that control
/// is enabled on the current screen.
fn guard(command: Command, session: &QuizSession) -> Result<QuizAction> {
    let state = session.state();
    let current = state.current_question_index;
    let question_count = session.questions().len();
    let is_last_question = current + 1 == question_count;

    if state.is_completed() {
        return match command {
            Command::Restart => Ok(QuizAction::RestartQuiz),
            _ => Err(disabled(
                "the quiz is already submitted, use `restart` to try again",
            )),
        };
    }

    match command {
        Command::SelectAnswer { answer_index } => {
            let option_count = session.current_question().options.len();
            if answer_index >= option_count {
                return Err(disabled(format!(
                    "question {} has only {} options",
                    current + 1,
                    option_count
                )));
            }
            Ok(QuizAction::SelectAnswer {
                question_index: current,
                answer_index,
            })
        }
        Command::Next => {
            if is_last_question {
                return Err(disabled("this is the last question, use `submit`"));
            }
            if !session.is_answer_selected(current) {
                return Err(disabled("select an answer before moving on"));
            }
            Ok(QuizAction::NextQuestion)
        }
        Command::Previous => {
            if current == 0 {
                return Err(disabled("this is the first question"));
            }
            Ok(QuizAction::PreviousQuestion)
        }
        Command::JumpTo { question_index } => {
            if question_index >= question_count {
                return Err(disabled(format!(
                    "there is no question {}",
                    question_index + 1
                )));
            }
            if question_index > session.highest_allowed_index() {
                return Err(disabled(format!(
                    "question {} is locked until the questions before it are answered",
                    question_index + 1
                )));
            }
            Ok(QuizAction::JumpToQuestion { question_index })
        }
        Command::Submit => {
            if !is_last_question {
                return Err(disabled("submit is only available on the last question"));
            }
            if !session.is_answer_selected(current) {
                return Err(disabled("select an answer before submitting"));
            }
            Ok(QuizAction::SubmitQuiz)
        }
        Command::Restart => Err(disabled("restart is available once the quiz is submitted")),
        Command::Show | Command::Help | Command::Quit => {
            Err(disabled("this command does not change the quiz"))
        }
    }
}
