//! WebAssembly bindings for the sidebar widget layout engine.
//!
//! The theme's templates run in JavaScript at build time; this crate lets
//! them ask the resolver for page plans instead of re-deriving the rules.
//!
//! ## Example
//!
//! ```js
//! import { SidebarEngine } from 'sidebar-engine';
//!
//! const engine = SidebarEngine.fromJson(JSON.stringify(sidebarLayoutConfig));
//!
//! const plan = engine.pagePlan(true);
//! for (const widget of plan.left.top) {
//!   console.log(widget.kind, widget.animationDelayMs);
//! }
//!
//! engine.toggleWidget('calendar', false);
//! ```

use std::str::FromStr;

use serde::Serialize;
use sidebar_config::{default_config, from_json_str, from_toml_str, widget_from_json};
use sidebar_core::{Breakpoints, DeviceClass, Side, Slot, UnknownVariant, WidgetKind};
use sidebar_layout::{GridClassification, ShellLayout, ShellPlacement, WidgetManager};
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Parse a configuration keyword such as `"sidebarToc"` or `"tablet"`.
pub fn parse_keyword<T>(value: &str) -> Result<T, UnknownVariant>
where
    T: FromStr<Err = UnknownVariant>,
{
    value.parse()
}

/// Parse an optional side; `None` means both sides.
pub fn parse_side(value: Option<&str>) -> Result<Option<Side>, UnknownVariant> {
    value.map(parse_keyword::<Side>).transpose()
}

fn keyword<T>(value: &str) -> Result<T, JsError>
where
    T: FromStr<Err = UnknownVariant>,
{
    parse_keyword(value).map_err(|e| JsError::new(&e.to_string()))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Shell layout of one device class, as handed to JavaScript.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceGridJs {
    pub device: &'static str,
    pub layout: ShellLayout,
    pub placement: ShellPlacement,
}

/// Per-device grid summary.
#[derive(Debug, Clone, Serialize)]
pub struct GridSummaryJs {
    pub devices: Vec<DeviceGridJs>,
}

impl GridSummaryJs {
    pub fn from_grid(grid: &GridClassification) -> Self {
        let devices = DeviceClass::ALL
            .iter()
            .map(|&device| {
                DeviceGridJs {
                    device: device.as_str(),
                    layout: grid.layout(device),
                    placement: grid.placement(device),
                }
            })
            .collect();
        Self { devices }
    }
}

/// A configured widget and the side it belongs to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetStateJs {
    pub kind: WidgetKind,
    pub side: Side,
    pub enabled: bool,
    pub order: i32,
    pub slot: Slot,
}

fn widget_states(manager: &WidgetManager) -> Vec<WidgetStateJs> {
    manager
        .config()
        .all_widgets()
        .map(|(side, w)| WidgetStateJs {
            kind: w.kind,
            side,
            enabled: w.enabled,
            order: w.order,
            slot: w.slot,
        })
        .collect()
}

/// The main sidebar engine interface for JavaScript.
#[wasm_bindgen]
pub struct SidebarEngine {
    manager: WidgetManager,
    breakpoints: Breakpoints,
}

impl Default for SidebarEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl SidebarEngine {
    /// Create an engine over the theme's shipped configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            manager: WidgetManager::new(default_config()),
            breakpoints: Breakpoints::default(),
        }
    }

    /// Create an engine from a JSON configuration string.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<SidebarEngine, JsError> {
        let config = from_json_str(json)
            .map_err(|e| JsError::new(&format!("Invalid configuration: {}", e)))?;
        Ok(Self {
            manager: WidgetManager::new(config),
            breakpoints: Breakpoints::default(),
        })
    }

    /// Create an engine from a TOML configuration string.
    #[wasm_bindgen(js_name = fromToml)]
    pub fn from_toml(toml: &str) -> Result<SidebarEngine, JsError> {
        let config = from_toml_str(toml)
            .map_err(|e| JsError::new(&format!("Invalid configuration: {}", e)))?;
        Ok(Self {
            manager: WidgetManager::new(config),
            breakpoints: Breakpoints::default(),
        })
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Override the viewport widths used by `deviceClass`.
    #[wasm_bindgen(js_name = setBreakpoints)]
    pub fn set_breakpoints(&mut self, tablet_min_px: u32, desktop_min_px: u32) {
        self.breakpoints = Breakpoints {
            tablet_min_px,
            desktop_min_px,
        };
    }

    /// Classify a viewport width as `"mobile"`, `"tablet"` or `"desktop"`.
    #[wasm_bindgen(js_name = deviceClass)]
    pub fn device_class(&self, width_px: u32) -> String {
        self.breakpoints.classify(width_px).as_str().to_string()
    }

    /// The current configuration, including runtime edits.
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<JsValue, JsError> {
        to_js(self.manager.config())
    }

    /// Every configured widget with its side, in list order.
    #[wasm_bindgen(js_name = listWidgets)]
    pub fn list_widgets(&self) -> Result<JsValue, JsError> {
        to_js(&widget_states(&self.manager))
    }

    /// Full plan for one page: arrangement, grid and widgets per side.
    #[wasm_bindgen(js_name = pagePlan)]
    pub fn page_plan(&self, is_detail_page: bool) -> Result<JsValue, JsError> {
        to_js(&self.manager.page_plan(is_detail_page))
    }

    /// Per-device shell structure for one page.
    #[wasm_bindgen(js_name = gridLayout)]
    pub fn grid_layout(&self, is_detail_page: bool) -> Result<JsValue, JsError> {
        let grid = self.manager.responsive_sidebar(is_detail_page).grid();
        to_js(&GridSummaryJs::from_grid(&grid))
    }

    /// Enabled widgets in a slot, optionally restricted to one side.
    #[wasm_bindgen(js_name = widgetsBySlot)]
    pub fn widgets_by_slot(&self, slot: &str, side: Option<String>) -> Result<JsValue, JsError> {
        let slot: Slot = keyword(slot)?;
        let side = parse_side(side.as_deref()).map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&self.manager.widgets_by_slot(slot, side))
    }

    /// Whether a side has a widget that may render on a device class.
    #[wasm_bindgen(js_name = hasVisibleWidgets)]
    pub fn has_visible_widgets(&self, side: &str, device: &str) -> Result<bool, JsError> {
        let side: Side = keyword(side)?;
        let device: DeviceClass = keyword(device)?;
        Ok(self.manager.side_has_visible_widget(side, device))
    }

    /// Whether the sidebar column is shown on a device class.
    #[wasm_bindgen(js_name = shouldShowSidebar)]
    pub fn should_show_sidebar(&self, device: &str) -> Result<bool, JsError> {
        let device: DeviceClass = keyword(device)?;
        Ok(self.manager.should_show_sidebar_chrome(device))
    }

    /// Whether the first widget of `kind` should render collapsed.
    /// Unconfigured widgets never collapse.
    #[wasm_bindgen(js_name = isCollapsed)]
    pub fn is_collapsed(
        &self,
        kind: &str,
        side: Option<String>,
        item_count: u32,
    ) -> Result<bool, JsError> {
        let kind: WidgetKind = keyword(kind)?;
        let side = parse_side(side.as_deref()).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(self
            .manager
            .widget_config(kind, side)
            .is_some_and(|w| self.manager.is_collapsed(w, item_count)))
    }

    /// Append a widget (JSON, same keys as a configuration entry) to a side.
    #[wasm_bindgen(js_name = addWidget)]
    pub fn add_widget(&mut self, json: &str, side: &str) -> Result<(), JsError> {
        let side: Side = keyword(side)?;
        let widget = widget_from_json(json, side)
            .map_err(|e| JsError::new(&format!("Invalid widget: {}", e)))?;
        self.manager.add_widget(widget, side);
        Ok(())
    }

    /// Remove every widget of a kind from one side, or both when `side` is omitted.
    #[wasm_bindgen(js_name = removeWidget)]
    pub fn remove_widget(&mut self, kind: &str, side: Option<String>) -> Result<(), JsError> {
        let kind: WidgetKind = keyword(kind)?;
        let side = parse_side(side.as_deref()).map_err(|e| JsError::new(&e.to_string()))?;
        self.manager.remove_widget(kind, side);
        Ok(())
    }

    /// Enable or disable the first widget of a kind.
    #[wasm_bindgen(js_name = toggleWidget)]
    pub fn toggle_widget(&mut self, kind: &str, enable: bool) -> Result<(), JsError> {
        let kind: WidgetKind = keyword(kind)?;
        self.manager.toggle_widget(kind, enable);
        Ok(())
    }

    /// Change the order of the first widget of a kind.
    #[wasm_bindgen(js_name = reorderWidget)]
    pub fn reorder_widget(&mut self, kind: &str, order: i32) -> Result<(), JsError> {
        let kind: WidgetKind = keyword(kind)?;
        self.manager.reorder_widget(kind, order);
        Ok(())
    }
}

impl SidebarEngine {
    /// The underlying manager, for Rust callers.
    pub fn manager(&self) -> &WidgetManager {
        &self.manager
    }
}
