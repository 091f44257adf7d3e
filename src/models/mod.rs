pub mod communication;
pub mod game;
