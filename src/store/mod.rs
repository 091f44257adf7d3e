pub mod actions;
pub mod reducer;
pub mod selectors;
pub mod state;

pub use actions::QuizAction;
pub use reducer::quiz_reducer;
pub use state::{QuizState, QuizStatus};
