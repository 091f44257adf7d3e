use super::{
    actions::QuizAction,
    state::{QuizState, QuizStatus},
};

/// Computes the state that follows `state` once `action` is applied.
///
/// The function is total: navigation whose precondition does not hold leaves
/// the state unchanged instead of failing. The question count is the length of
/// `state.answers`, which no action ever resizes.
pub fn quiz_reducer(state: &QuizState, action: &QuizAction) -> QuizState {
    let question_count = state.question_count();

    match *action {
        QuizAction::SelectAnswer {
            question_index,
            answer_index,
        } => {
            // Outside the answer list there is no slot to overwrite.
            if question_index >= question_count {
                return state.clone();
            }
            let mut answers = state.answers.clone();
            answers[question_index] = Some(answer_index);
            QuizState {
                answers,
                ..state.clone()
            }
        }
        QuizAction::NextQuestion => {
            if state.current_question_index + 1 < question_count {
                return QuizState {
                    current_question_index: state.current_question_index + 1,
                    ..state.clone()
                };
            }
            state.clone()
        }
        QuizAction::PreviousQuestion => {
            if state.current_question_index > 0 {
                return QuizState {
                    current_question_index: state.current_question_index - 1,
                    ..state.clone()
                };
            }
            state.clone()
        }
        // Forward jumps need a recorded answer on the target, backward jumps
        // are always allowed.
        QuizAction::JumpToQuestion { question_index } => {
            let answered = matches!(state.answers.get(question_index), Some(Some(_)));
            if answered || question_index < state.current_question_index {
                return QuizState {
                    current_question_index: question_index,
                    ..state.clone()
                };
            }
            state.clone()
        }
        QuizAction::SubmitQuiz => QuizState {
            status: QuizStatus::Completed,
            ..state.clone()
        },
        QuizAction::RestartQuiz => QuizState::initial(question_count),
    }
}
