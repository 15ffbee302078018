//! Mapping from reported states to presentation style classes.
//!
//! The tokens match the CSS class names used by the web dashboard of the
//! runtime host, so both front ends agree on what a state looks like. The
//! terminal theme in [`crate::ui::components::badge`] turns them into colors.

use crate::models::{ModuleHealthState, NotificationSeverity};

/// Background style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    Danger,
    Info,
    Secondary,
    Success,
    Light,
    Warning,
}

impl Background {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Background::Danger => "danger",
            Background::Info => "info",
            Background::Secondary => "secondary",
            Background::Success => "success",
            Background::Light => "light",
            Background::Warning => "warning",
        }
    }
}

/// Foreground style class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Foreground {
    Normal,
    Composite,
}

impl Foreground {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Foreground::Normal => "normal",
            Foreground::Composite => "composite",
        }
    }
}

/// Foreground/background pair for one rendered state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleClasses {
    pub foreground: Foreground,
    pub background: Background,
}

impl StyleClasses {
    const fn new(background: Background, foreground: Foreground) -> Self {
        Self { foreground, background }
    }
}

/// Style classes for a module health state.
///
/// Unknown states render like failures.
#[must_use]
pub fn health_state_classes(state: ModuleHealthState) -> StyleClasses {
    match state {
        ModuleHealthState::Failure => StyleClasses::new(Background::Danger, Foreground::Normal),
        ModuleHealthState::Initializing => StyleClasses::new(Background::Info, Foreground::Normal),
        ModuleHealthState::Ready => StyleClasses::new(Background::Secondary, Foreground::Normal),
        ModuleHealthState::Running => StyleClasses::new(Background::Success, Foreground::Normal),
        ModuleHealthState::Starting => StyleClasses::new(Background::Info, Foreground::Normal),
        ModuleHealthState::Stopping => StyleClasses::new(Background::Info, Foreground::Normal),
        ModuleHealthState::Stopped => StyleClasses::new(Background::Light, Foreground::Composite),
        ModuleHealthState::Unknown(_) => StyleClasses::new(Background::Danger, Foreground::Normal),
    }
}

/// Style classes for a notification severity.
#[must_use]
pub fn notification_severity_classes(severity: NotificationSeverity) -> StyleClasses {
    match severity {
        NotificationSeverity::Info => StyleClasses::new(Background::Info, Foreground::Normal),
        NotificationSeverity::Warning => StyleClasses::new(Background::Warning, Foreground::Normal),
        NotificationSeverity::Error => StyleClasses::new(Background::Danger, Foreground::Normal),
        NotificationSeverity::Unknown(_) => StyleClasses::new(Background::Danger, Foreground::Normal),
    }
}
