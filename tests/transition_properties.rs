//! Property tests for the quiz transition function.
//!
//! Random action sequences, including out-of-range indices, are replayed from
//! the initial state; every intermediate state must keep the quiz invariants.

use proptest::prelude::*;
use quiz_app_rust::store::{quiz_reducer, QuizAction, QuizState, QuizStatus};

fn action_strategy(question_count: usize) -> impl Strategy<Value = QuizAction> {
    // indices go a little past the end to exercise the no-op paths
    let index = 0..question_count + 3;
    prop_oneof![
        (index.clone(), 0..6usize).prop_map(|(question_index, answer_index)| {
            QuizAction::SelectAnswer {
                question_index,
                answer_index,
            }
        }),
        Just(QuizAction::NextQuestion),
        Just(QuizAction::PreviousQuestion),
        index.prop_map(|question_index| QuizAction::JumpToQuestion { question_index }),
        Just(QuizAction::SubmitQuiz),
        Just(QuizAction::RestartQuiz),
    ]
}

fn scenario() -> impl Strategy<Value = (usize, Vec<QuizAction>)> {
    (0..8usize).prop_flat_map(|question_count| {
        (
            Just(question_count),
            prop::collection::vec(action_strategy(question_count), 0..60),
        )
    })
}

fn check_invariants(state: &QuizState, question_count: usize) -> Result<(), TestCaseError> {
    prop_assert_eq!(state.answers.len(), question_count);
    if question_count == 0 {
        prop_assert_eq!(state.current_question_index, 0);
    } else {
        prop_assert!(state.current_question_index < question_count);
    }
    Ok(())
}

proptest! {
    #[test]
    fn transitions_preserve_invariants((question_count, actions) in scenario()) {
        let mut state = QuizState::initial(question_count);
        for action in &actions {
            let before = state.clone();
            let next = quiz_reducer(&state, action);
            check_invariants(&next, question_count)?;

            // completion is only left through a restart
            if before.status == QuizStatus::Completed && *action != QuizAction::RestartQuiz {
                prop_assert_eq!(next.status, QuizStatus::Completed);
            }
            // the previous state is never modified
            prop_assert_eq!(&state, &before);
            state = next;
        }
    }

    #[test]
    fn restart_from_any_reachable_state_is_initial((question_count, actions) in scenario()) {
        let state = actions
            .iter()
            .fold(QuizState::initial(question_count), |state, action| quiz_reducer(&state, action));
        prop_assert_eq!(
            quiz_reducer(&state, &QuizAction::RestartQuiz),
            QuizState::initial(question_count)
        );
    }

    #[test]
    fn transitions_are_deterministic((question_count, actions) in scenario()) {
        let replay = |actions: &[QuizAction]| {
            actions
                .iter()
                .fold(QuizState::initial(question_count), |state, action| quiz_reducer(&state, action))
        };
        prop_assert_eq!(replay(&actions), replay(&actions));
    }

    #[test]
    fn select_answer_is_overwrite_idempotent(
        (question_count, actions) in scenario(),
        question_index in 0..8usize,
        answer_index in 0..6usize,
    ) {
        let state = actions
            .iter()
            .fold(QuizState::initial(question_count), |state, action| quiz_reducer(&state, action));
        let select = QuizAction::SelectAnswer { question_index, answer_index };

        let once = quiz_reducer(&state, &select);
        let twice = quiz_reducer(&once, &select);
        prop_assert_eq!(&once, &twice);

        for (index, answer) in once.answers.iter().enumerate() {
            if index == question_index {
                prop_assert_eq!(*answer, Some(answer_index));
            } else {
                prop_assert_eq!(*answer, state.answers[index]);
            }
        }
        prop_assert_eq!(once.current_question_index, state.current_question_index);
        prop_assert_eq!(once.status, state.status);
    }
}
