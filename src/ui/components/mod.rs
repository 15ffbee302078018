//! Reusable UI components

pub mod badge;
pub mod dialogs;
pub mod status_bar;

// Component architecture
pub mod dialog_component;
pub mod logger_list_component;
pub mod module_detail_component;
pub mod module_list_component;
pub mod notification_dialog;

// Component exports
pub use dialog_component::DialogComponent;
pub use logger_list_component::LoggerListComponent;
pub use module_detail_component::ModuleDetailComponent;
pub use module_list_component::ModuleListComponent;
pub use notification_dialog::NotificationDialog;
