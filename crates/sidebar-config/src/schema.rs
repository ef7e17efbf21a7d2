//! On-disk shape of the sidebar configuration.
//!
//! Keys follow the theme's configuration file (`leftComponents`,
//! `showRightSidebarOnPostPage`, ...). [`SidebarFile::into_config`] checks the
//! parsed file and converts it into the engine's
//! [`LayoutConfig`](sidebar_core::LayoutConfig).

use indexmap::IndexMap;
use serde::Deserialize;
use sidebar_core::{
    AnimationPolicy, DeviceClass, DeviceLayoutModes, LayoutConfig, LayoutMode, Side,
    SidebarPosition, Slot, WidgetKind, WidgetSpec,
};

use tracing::warn;

use crate::error::ConfigError;

fn default_true() -> bool {
    true
}

/// Top-level sidebar configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarFile {
    #[serde(default = "default_true")]
    pub enable: bool,
    #[serde(default)]
    pub position: SidebarPosition,
    #[serde(default)]
    pub show_right_sidebar_on_post_page: bool,
    #[serde(default)]
    pub left_components: Vec<WidgetEntry>,
    #[serde(default)]
    pub right_components: Vec<WidgetEntry>,
    #[serde(default)]
    pub default_animation: AnimationEntry,
    #[serde(default)]
    pub responsive: ResponsiveEntry,
}

/// One widget entry in `leftComponents` / `rightComponents`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetEntry {
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    pub enable: bool,
    pub order: i32,
    pub position: Slot,
    pub class: Option<String>,
    pub style: Option<String>,
    pub animation_delay: Option<u32>,
    pub config_id: Option<String>,
    pub show_on_post_page: Option<bool>,
    pub responsive: Option<WidgetResponsive>,
    pub component_path: Option<String>,
    #[serde(default)]
    pub custom_props: IndexMap<String, PropValue>,
}

/// Per-widget responsive settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetResponsive {
    #[serde(default)]
    pub hidden: Vec<DeviceClass>,
    pub collapse_threshold: Option<u32>,
}

/// A custom property value, stored on the widget as text. Arrays and tables
/// are kept as compact JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Structured(serde_json::Value),
}

impl PropValue {
    fn into_text(self) -> String {
        match self {
            PropValue::Bool(b) => b.to_string(),
            PropValue::Integer(i) => i.to_string(),
            PropValue::Float(f) => f.to_string(),
            PropValue::String(s) => s,
            PropValue::Structured(v) => v.to_string(),
        }
    }
}

/// `defaultAnimation` block.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationEntry {
    pub enable: bool,
    pub base_delay: u32,
    pub increment: u32,
}

impl Default for AnimationEntry {
    fn default() -> Self {
        let policy = AnimationPolicy::default();
        Self {
            enable: policy.enabled,
            base_delay: policy.base_delay_ms,
            increment: policy.increment_ms,
        }
    }
}

/// `responsive` block.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ResponsiveEntry {
    #[serde(default)]
    pub layout: LayoutEntry,
}

/// `responsive.layout` block: one mode per device class.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LayoutEntry {
    #[serde(default)]
    pub mobile: LayoutMode,
    #[serde(default)]
    pub tablet: LayoutMode,
    #[serde(default)]
    pub desktop: LayoutMode,
}

fn list_name(side: Side) -> &'static str {
    match side {
        Side::Left => "leftComponents",
        Side::Right => "rightComponents",
    }
}

impl WidgetEntry {
    /// Check the entry and convert it for a widget living on `side`.
    /// `field` names the entry in error messages.
    pub fn into_spec(self, side: Side, field: &str) -> Result<WidgetSpec, ConfigError> {
        let show_on_post_page = match (side, self.show_on_post_page) {
            (Side::Left, Some(_)) => {
                warn!(field, "showOnPostPage only applies to right-side widgets, ignoring");
                None
            }
            (_, flag) => flag,
        };

        if self.kind == WidgetKind::Custom
            && self.component_path.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::invalid(
                format!("{field}.componentPath"),
                "custom widgets must name the component to render",
            ));
        }

        let responsive = self.responsive.unwrap_or_default();
        if responsive.collapse_threshold == Some(0) {
            return Err(ConfigError::invalid(
                format!("{field}.responsive.collapseThreshold"),
                "must be at least 1",
            ));
        }

        let mut spec = WidgetSpec::new(self.kind)
            .with_enabled(self.enable)
            .with_order(self.order)
            .with_slot(self.position);
        for device in responsive.hidden {
            spec = spec.hidden_on(device);
        }
        spec.animation_delay_ms = self.animation_delay;
        spec.collapse_threshold = responsive.collapse_threshold;
        spec.show_on_detail_page = show_on_post_page;
        spec.class = self.class;
        spec.style = self.style;
        spec.config_id = self.config_id;
        spec.component_path = self.component_path;
        spec.custom_props = self
            .custom_props
            .into_iter()
            .map(|(k, v)| (k, v.into_text()))
            .collect();
        Ok(spec)
    }
}

impl SidebarFile {
    /// Validate the file and build the engine configuration.
    pub fn into_config(self) -> Result<LayoutConfig, ConfigError> {
        if self.responsive.layout.desktop != LayoutMode::Sidebar {
            return Err(ConfigError::invalid(
                "responsive.layout.desktop",
                format!(
                    "desktop always uses \"sidebar\", found {:?}",
                    self.responsive.layout.desktop.as_str()
                ),
            ));
        }

        let left_widgets = convert_list(self.left_components, Side::Left)?;
        let right_widgets = convert_list(self.right_components, Side::Right)?;

        Ok(LayoutConfig {
            sidebar_enabled: self.enable,
            sidebar_position: self.position,
            show_right_on_detail_page: self.show_right_sidebar_on_post_page,
            left_widgets,
            right_widgets,
            animation_policy: AnimationPolicy {
                enabled: self.default_animation.enable,
                base_delay_ms: self.default_animation.base_delay,
                increment_ms: self.default_animation.increment,
            },
            device_layout_mode: DeviceLayoutModes::new(
                self.responsive.layout.mobile,
                self.responsive.layout.tablet,
            ),
        })
    }
}

fn convert_list(entries: Vec<WidgetEntry>, side: Side) -> Result<Vec<WidgetSpec>, ConfigError> {
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| entry.into_spec(side, &format!("{}[{i}]", list_name(side))))
        .collect()
}
