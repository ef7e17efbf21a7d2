//! Configuration loading and validation for the sidebar layout engine.
//!
//! Configuration comes from TOML or JSON using the theme's key names. All
//! checks happen here, at the load boundary: once a
//! [`LayoutConfig`](sidebar_core::LayoutConfig) exists, the resolver assumes
//! it is valid.
//!
//! # Example
//!
//! ```ignore
//! let config = sidebar_config::load_from_path(Path::new("sidebar.toml"))?;
//! let manager = sidebar_layout::WidgetManager::new(config);
//! ```

mod defaults;
mod error;
mod loader;
pub mod schema;

pub use defaults::{default_config, DEFAULT_CONFIG_TOML};
pub use error::ConfigError;
pub use loader::{from_json_str, from_toml_str, load_from_path, widget_from_json};
