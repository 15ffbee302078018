//! Render helpers for modal dialogs

pub mod common;
pub mod endpoint_dialog;
pub mod system_dialogs;
