pub mod command_handler;
pub mod session_handler;
pub mod terminal_handler;
