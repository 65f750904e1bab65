//! UI layer for desktop GUI: app shell and catalog widgets.

pub mod app;
pub mod widgets;

pub use app::CatalogGuiApp;
