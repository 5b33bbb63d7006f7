pub mod game;
pub mod score;
pub mod user;
