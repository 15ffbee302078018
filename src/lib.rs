//! Maintenance Console - a terminal dashboard for modular runtime hosts
//!
//! The console talks to a host's maintenance REST service, shows every
//! module with its health, dependencies and notifications, and lets the
//! operator start, stop and reincarnate modules, change their start and
//! failure behaviour, confirm warnings and tune logger levels.
//!
//! # Modules
//!
//! * [`client`] - Maintenance service client
//! * [`config`] - Application configuration management
//! * [`converters`] - Health state and severity style classes
//! * [`models`] - Wire and domain models
//! * [`store`] - Canonical state store and its transitions
//! * [`ui`] - Terminal user interface components

/// Client facade for the maintenance REST service
pub mod client;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Presentation style classes for reported states
pub mod converters;

/// Logging setup and the in-app log buffer
pub mod logger;

/// Module, notification and logger models
pub mod models;

/// Immutable snapshots and the store that owns them
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;
