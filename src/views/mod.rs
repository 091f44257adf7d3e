pub mod navbar;
pub mod question_card;
pub mod quiz_navigation;
pub mod score_screen;
