pub mod application;
pub mod config;
pub mod domain;

#[cfg(feature = "web")]
pub mod infrastructure;

#[cfg(feature = "web")]
mod widget_context;

#[cfg(feature = "web")]
pub use widget_context::WidgetContext;
