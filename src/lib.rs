pub mod config;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod loggers;
pub mod models;
pub mod screen_messages;
pub mod store;
pub mod views;
