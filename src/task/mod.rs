//! Task management module
//!
//! This module provides the in-memory task list:
//! - Task record with a parsed due date
//! - Ordered store with by-title mutations
//! - Pending/completed filtered views

pub mod error;
pub mod model;
pub mod store;

pub use error::{Result, TaskError};
pub use model::Task;
pub use store::TaskStore;
