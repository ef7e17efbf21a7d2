//! Configuration loading with position-aware error reporting.

use std::fs;
use std::path::Path;

use sidebar_core::{LayoutConfig, Side, WidgetSpec};
use tracing::debug;

use crate::error::ConfigError;
use crate::schema::{SidebarFile, WidgetEntry};

const INLINE: &str = "<inline>";

/// Load and validate a configuration file. The format follows the file
/// extension: `.toml` or `.json`.
pub fn load_from_path(path: &Path) -> Result<LayoutConfig, ConfigError> {
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => Format::Toml,
        Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let origin = path.display().to_string();
    let file = match format {
        Format::Toml => parse_toml::<SidebarFile>(&content, &origin)?,
        Format::Json => parse_json::<SidebarFile>(&content, &origin)?,
    };
    let config = file.into_config()?;
    debug!(
        path = %origin,
        left = config.left_widgets.len(),
        right = config.right_widgets.len(),
        "loaded sidebar configuration"
    );
    Ok(config)
}

/// Parse and validate TOML configuration text.
pub fn from_toml_str(content: &str) -> Result<LayoutConfig, ConfigError> {
    parse_toml::<SidebarFile>(content, INLINE)?.into_config()
}

/// Parse and validate JSON configuration text.
pub fn from_json_str(content: &str) -> Result<LayoutConfig, ConfigError> {
    parse_json::<SidebarFile>(content, INLINE)?.into_config()
}

/// Parse a single widget entry (same keys as a `leftComponents` item) for
/// insertion on `side`.
pub fn widget_from_json(content: &str, side: Side) -> Result<WidgetSpec, ConfigError> {
    parse_json::<WidgetEntry>(content, INLINE)?.into_spec(side, "widget")
}

enum Format {
    Toml,
    Json,
}

fn parse_toml<T: serde::de::DeserializeOwned>(
    content: &str,
    origin: &str,
) -> Result<T, ConfigError> {
    toml::from_str(content).map_err(|e| {
        let (line, column) = e
            .span()
            .map(|span| line_column(content, span.start))
            .unwrap_or((0, 0));
        ConfigError::Parse {
            origin: origin.to_string(),
            line,
            column,
            message: e.message().to_string(),
        }
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(
    content: &str,
    origin: &str,
) -> Result<T, ConfigError> {
    serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        origin: origin.to_string(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}

/// One-based line and column of a byte offset.
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(content.len());
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|p| p + 1).unwrap_or(0);
    (line, offset - line_start + 1)
}
