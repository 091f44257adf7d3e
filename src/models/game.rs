use std::fs;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer_index: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Pack {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Pack {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Checks the pack against the question schema. Sessions rely on this:
    /// a validated pack is never empty and every `correct_answer_index`
    /// points at one of its options.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(QuizError::InvalidPack(format!(
                "pack '{}' has no questions",
                self.name
            )));
        }

        for (position, question) in self.questions.iter().enumerate() {
            let expected_id = position as u32 + 1;
            if question.id != expected_id {
                return Err(QuizError::InvalidPack(format!(
                    "question at position {} has id {}, expected {}",
                    position + 1,
                    question.id,
                    expected_id
                )));
            }
            if question.question_text.trim().is_empty() {
                return Err(QuizError::InvalidPack(format!(
                    "question {} has empty text",
                    question.id
                )));
            }
            if question.options.len() < 2 {
                return Err(QuizError::InvalidPack(format!(
                    "question {} needs at least 2 options, got {}",
                    question.id,
                    question.options.len()
                )));
            }
            if question.options.iter().any(|option| option.trim().is_empty()) {
                return Err(QuizError::InvalidPack(format!(
                    "question {} has an empty option",
                    question.id
                )));
            }
            if question.correct_answer_index >= question.options.len() {
                return Err(QuizError::InvalidPack(format!(
                    "question {} has correct answer {} but only {} options",
                    question.id,
                    question.correct_answer_index,
                    question.options.len()
                )));
            }
        }

        Ok(())
    }
}

pub fn load_pack(path: &str) -> Result<Pack> {
    info!("Loading pack from: {}", path);

    let data = fs::read_to_string(path).map_err(|source| QuizError::PackIo {
        path: path.to_string(),
        source,
    })?;
    let pack: Pack = serde_json::from_str(&data)?;
    pack.validate()?;

    info!(
        "Loading pack success: '{}' with {} questions",
        pack.name,
        pack.len()
    );
    Ok(pack)
}

fn question(id: u32, text: &str, options: [&str; 4], correct_answer_index: usize) -> Question {
    Question {
        id,
        question_text: text.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        correct_answer_index,
    }
}

pub fn default_pack() -> Pack {
    Pack {
        name: "React basics".to_string(),
        questions: vec![
            question(
                1,
                "What does JSX stand for?",
                [
                    "JavaScript XML",
                    "JavaScript Extension",
                    "JSON Syntax Extension",
                    "Java Syntax XML",
                ],
                0,
            ),
            question(
                2,
                "What is the primary difference between props and state?",
                [
                    "Props are mutable, state is immutable",
                    "State is passed from parent to child, props are managed internally",
                    "Props are for external configuration, state is for internal component data",
                    "There is no difference",
                ],
                2,
            ),
            question(
                3,
                "What is the purpose of the `useEffect` hook in React?",
                [
                    "To perform side effects in function components",
                    "To manage component's internal state",
                    "To replace `useState` for complex state logic",
                    "To directly manipulate the DOM",
                ],
                0,
            ),
            question(
                4,
                "Why are `keys` important when rendering a list of elements in React?",
                [
                    "They are a required prop for all components",
                    "They help React identify which items have changed, are added, or are removed",
                    "They provide a unique CSS selector for styling",
                    "They are used to pass data to child components",
                ],
                1,
            ),
            question(
                5,
                "Which of the following is a primary cause for a React component to re-render?",
                [
                    "The component's props have not changed",
                    "A call to an external API",
                    "A change in the component's state",
                    "The browser window is resized",
                ],
                2,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pack_is_valid() {
        let pack = default_pack();
        assert!(pack.validate().is_ok());
        assert_eq!(pack.len(), 5);
        let correct: Vec<usize> = pack
            .questions
            .iter()
            .map(|q| q.correct_answer_index)
            .collect();
        assert_eq!(correct, vec![0, 2, 0, 1, 2]);
    }

    #[test]
    fn default_pack_ids_follow_positions() {
        for (position, question) in default_pack().questions.iter().enumerate() {
            assert_eq!(question.id as usize, position + 1);
            assert!(question.options.len() >= 3);
        }
    }

    #[test]
    fn empty_pack_is_rejected() {
        let pack = Pack {
            name: "empty".to_string(),
            questions: vec![],
        };
        assert!(matches!(pack.validate(), Err(QuizError::InvalidPack(_))));
    }

    #[test]
    fn out_of_order_ids_are_rejected() {
        let mut pack = default_pack();
        pack.questions.swap(0, 1);
        let err = pack.validate().unwrap_err();
        assert!(err.to_string().contains("expected 1"));
    }

    #[test]
    fn single_option_question_is_rejected() {
        let mut pack = default_pack();
        pack.questions[2].options.truncate(1);
        pack.questions[2].correct_answer_index = 0;
        let err = pack.validate().unwrap_err();
        assert!(err.to_string().contains("at least 2 options"));
    }

    #[test]
    fn correct_index_outside_options_is_rejected() {
        let mut pack = default_pack();
        pack.questions[4].correct_answer_index = 4;
        let err = pack.validate().unwrap_err();
        assert!(err.to_string().contains("question 5"));
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut pack = default_pack();
        pack.questions[1].question_text = "   ".to_string();
        assert!(pack.validate().is_err());

        let mut pack = default_pack();
        pack.questions[1].options[3] = String::new();
        assert!(pack.validate().is_err());
    }

    #[test]
    fn pack_parses_from_camel_case_json() {
        let data = r#"{
            "name": "tiny",
            "questions": [
                {"id": 1, "questionText": "Pick A", "options": ["A", "B"], "correctAnswerIndex": 0}
            ]
        }"#;
        let pack: Pack = serde_json::from_str(data).unwrap();
        assert!(pack.validate().is_ok());
        assert_eq!(pack.questions[0].options, vec!["A", "B"]);
    }

    #[test]
    fn load_pack_reports_missing_file() {
        let err = load_pack("does/not/exist.json").unwrap_err();
        assert!(matches!(err, QuizError::PackIo { .. }));
    }

    #[test]
    fn load_pack_reads_and_validates_file() {
        let path = std::env::temp_dir().join(format!("quiz-pack-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, serde_json::to_string(&default_pack()).unwrap()).unwrap();

        let pack = load_pack(path.to_str().unwrap()).unwrap();
        assert_eq!(pack, default_pack());

        fs::remove_file(&path).unwrap();
    }
}
