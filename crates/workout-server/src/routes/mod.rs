pub mod config;
pub mod export;
pub mod focus;
pub mod health;
pub mod weeks;
pub mod workout;
