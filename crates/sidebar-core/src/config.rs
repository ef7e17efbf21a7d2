//! Process-wide sidebar layout configuration.

use crate::types::{DeviceClass, LayoutMode, Side, SidebarPosition};
use crate::widget::WidgetSpec;

/// Staggered entrance animation applied to widgets without an explicit delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnimationPolicy {
    pub enabled: bool,
    pub base_delay_ms: u32,
    pub increment_ms: u32,
}

impl Default for AnimationPolicy {
    fn default() -> Self {
        Self {
            enabled: true,
            base_delay_ms: 0,
            increment_ms: 50,
        }
    }
}

/// Sidebar presentation per device class.
///
/// Desktop always uses [`LayoutMode::Sidebar`] and is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceLayoutModes {
    pub mobile: LayoutMode,
    pub tablet: LayoutMode,
}

impl DeviceLayoutModes {
    pub fn new(mobile: LayoutMode, tablet: LayoutMode) -> Self {
        Self { mobile, tablet }
    }

    /// The layout mode in effect for a device class.
    pub fn mode(&self, device: DeviceClass) -> LayoutMode {
        match device {
            DeviceClass::Mobile => self.mobile,
            DeviceClass::Tablet => self.tablet,
            DeviceClass::Desktop => LayoutMode::Sidebar,
        }
    }
}

/// Complete sidebar layout configuration.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutConfig {
    /// Global kill switch for all sidebar chrome
    pub sidebar_enabled: bool,
    pub sidebar_position: SidebarPosition,
    /// With a left-only position, use both sides on article detail pages
    pub show_right_on_detail_page: bool,
    pub left_widgets: Vec<WidgetSpec>,
    pub right_widgets: Vec<WidgetSpec>,
    pub animation_policy: AnimationPolicy,
    pub device_layout_mode: DeviceLayoutModes,
}

impl LayoutConfig {
    /// Widgets configured for a side, in list order.
    pub fn widgets(&self, side: Side) -> &[WidgetSpec] {
        match side {
            Side::Left => &self.left_widgets,
            Side::Right => &self.right_widgets,
        }
    }

    /// Mutable access to a side's widget list.
    pub fn widgets_mut(&mut self, side: Side) -> &mut Vec<WidgetSpec> {
        match side {
            Side::Left => &mut self.left_widgets,
            Side::Right => &mut self.right_widgets,
        }
    }

    /// All widgets tagged with their side, left list first.
    pub fn all_widgets(&self) -> impl Iterator<Item = (Side, &WidgetSpec)> {
        self.left_widgets
            .iter()
            .map(|w| (Side::Left, w))
            .chain(self.right_widgets.iter().map(|w| (Side::Right, w)))
    }
}
