//! workout-storage
//!
//! Persistence for the workout tracker. The whole tracker lives in one
//! JSON document that is read, modified and rewritten on every call.

pub mod backend;
pub mod catalog;
pub mod error;
pub mod state;
pub mod store;
