use crate::models::game::Question;

use super::state::QuizState;

pub fn current_question<'a>(questions: &'a [Question], state: &QuizState) -> Option<&'a Question> {
    questions.get(state.current_question_index)
}

/// Furthest index reachable by a direct jump: the first unanswered question,
/// or the last question once everything is answered.
pub fn highest_allowed_index(state: &QuizState) -> usize {
    match state.answers.iter().position(Option::is_none) {
        Some(first_unanswered) => first_unanswered,
        None => state.question_count().saturating_sub(1),
    }
}

pub fn is_answer_selected(state: &QuizState, index: usize) -> bool {
    matches!(state.answers.get(index), Some(Some(_)))
}

pub fn score(questions: &[Question], answers: &[Option<usize>]) -> usize {
    answers
        .iter()
        .zip(questions)
        .filter(|(answer, question)| **answer == Some(question.correct_answer_index))
        .count()
}

pub fn score_percentage(score: usize, question_count: usize) -> u32 {
    if question_count == 0 {
        return 0;
    }
    ((score as f64 / question_count as f64) * 100.0).round() as u32
}
