//! Product catalog client core: view state, HTTP access, and the executor
//! that connects them.

pub mod api;
pub mod config;
pub mod error;
pub mod session;
pub mod state;

pub use api::{CatalogApi, HttpCatalogApi, JSON_CONTENT_TYPE};
pub use config::{load_settings, Settings};
pub use error::CatalogApiError;
pub use session::{run_effect, CatalogSession};
pub use state::{CatalogAction, CatalogEffect, CatalogState, CatalogView};
