pub mod game;
pub mod redis;

pub use game::GameConfig;
