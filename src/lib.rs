pub mod ai;
pub mod api;
pub mod board;
pub mod game;
pub mod types;
