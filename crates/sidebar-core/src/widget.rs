//! Widget definitions.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::types::{DeviceClass, Slot, WidgetKind};

/// Device classes a widget is hidden on. At most three entries.
pub type DeviceSet = SmallVec<[DeviceClass; 3]>;

/// One configured sidebar widget.
///
/// The side a widget belongs to is not stored here; it is implied by the
/// list in [`LayoutConfig`](crate::LayoutConfig) that holds it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WidgetSpec {
    pub kind: WidgetKind,
    pub enabled: bool,
    /// Sort key, lower first. Not required to be unique.
    pub order: i32,
    pub slot: Slot,
    /// Explicit animation delay; overrides the global policy when set
    pub animation_delay_ms: Option<u32>,
    /// Devices on which the widget never renders
    pub hidden_on: DeviceSet,
    /// Item count at or above which the widget renders collapsed
    pub collapse_threshold: Option<u32>,
    /// Right-side widgets only: whether to render on article detail pages
    pub show_on_detail_page: Option<bool>,
    /// Extra class names handed to the template verbatim
    pub class: Option<String>,
    /// Extra inline style handed to the template verbatim
    pub style: Option<String>,
    /// Selects an advertisement configuration
    pub config_id: Option<String>,
    /// Component path for `custom` widgets
    pub component_path: Option<String>,
    /// Free-form properties for `custom` widgets, in declaration order
    pub custom_props: IndexMap<String, String>,
}

impl WidgetSpec {
    /// An enabled widget in the top slot with order 0.
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            enabled: true,
            order: 0,
            slot: Slot::Top,
            animation_delay_ms: None,
            hidden_on: DeviceSet::new(),
            collapse_threshold: None,
            show_on_detail_page: None,
            class: None,
            style: None,
            config_id: None,
            component_path: None,
            custom_props: IndexMap::new(),
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = slot;
        self
    }

    pub fn with_animation_delay(mut self, delay_ms: u32) -> Self {
        self.animation_delay_ms = Some(delay_ms);
        self
    }

    /// Hide on an additional device class.
    pub fn hidden_on(mut self, device: DeviceClass) -> Self {
        if !self.hidden_on.contains(&device) {
            self.hidden_on.push(device);
        }
        self
    }

    pub fn with_collapse_threshold(mut self, threshold: u32) -> Self {
        self.collapse_threshold = Some(threshold);
        self
    }

    pub fn with_show_on_detail_page(mut self, show: bool) -> Self {
        self.show_on_detail_page = Some(show);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_config_id(mut self, id: impl Into<String>) -> Self {
        self.config_id = Some(id.into());
        self
    }

    pub fn with_component_path(mut self, path: impl Into<String>) -> Self {
        self.component_path = Some(path.into());
        self
    }

    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_props.insert(key.into(), value.into());
        self
    }

    /// Whether the widget is excluded on `device` by its own settings.
    pub fn is_hidden_on(&self, device: DeviceClass) -> bool {
        self.hidden_on.contains(&device)
    }

    /// Component that renders this widget: the widget's own path for
    /// `custom`, the fixed mapping otherwise.
    pub fn resolved_component_path(&self) -> Option<&str> {
        match self.kind {
            WidgetKind::Custom => self.component_path.as_deref(),
            kind => kind.component_path(),
        }
    }
}
