//! workout-core
//!
//! Pure domain types and derivation rules for the workout tracker: the
//! focus-area config, the week/day/exercise schema, week materialization
//! and focus-to-exercise resolution. No I/O; this is the shared
//! vocabulary of the tracker.

pub mod error;
pub mod export;
pub mod focus;
pub mod mode;
pub mod models;
pub mod schedule;
