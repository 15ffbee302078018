//! Core UI functionality for the maintenance console.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard and mouse input polling
//! - [`task_manager`] - Background execution of remote operations
//!
//! Components turn input into [`Action`]s. The app component resolves the
//! actions that need the maintenance service through the [`TaskManager`],
//! whose results come back as actions on the next tick.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Pane};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
