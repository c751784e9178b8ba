pub mod config;
pub mod database;
pub mod exercise;
pub mod lenient;
pub mod week;

pub use config::{FocusArea, FocusAreas, TrackerConfig};
pub use database::WorkoutDatabase;
pub use exercise::{Exercise, SetEntry};
pub use lenient::Lenient;
pub use week::{Day, Week};
