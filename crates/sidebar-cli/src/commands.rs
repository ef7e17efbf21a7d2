//! Command implementations. Each returns the text to print.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Serialize;
use sidebar_config::{default_config, load_from_path, DEFAULT_CONFIG_TOML};
use sidebar_core::{Breakpoints, DeviceClass, Side, Slot, WidgetKind, WidgetSpec};
use sidebar_layout::{ShellLayout, ShellPlacement, WidgetManager};
use tracing::{debug, info};

/// Load the configuration at `path`, or the shipped one when absent.
pub fn load_manager(path: Option<&Path>) -> anyhow::Result<WidgetManager> {
    let config = match path {
        Some(path) => load_from_path(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => {
            debug!("no --config given, using shipped configuration");
            default_config()
        }
    };
    Ok(WidgetManager::new(config))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckSummary {
    sidebar_enabled: bool,
    position: &'static str,
    left_widgets: usize,
    right_widgets: usize,
    enabled_kinds: Vec<WidgetKind>,
}

pub fn check(manager: &WidgetManager) -> anyhow::Result<String> {
    let config = manager.config();
    to_json(&CheckSummary {
        sidebar_enabled: config.sidebar_enabled,
        position: config.sidebar_position.as_str(),
        left_widgets: config.left_widgets.len(),
        right_widgets: config.right_widgets.len(),
        enabled_kinds: manager.enabled_widget_kinds(),
    })
}

pub fn plan(manager: &WidgetManager, detail: bool) -> anyhow::Result<String> {
    to_json(&manager.page_plan(detail))
}

#[derive(Debug, Serialize)]
struct DeviceGrid {
    device: DeviceClass,
    layout: ShellLayout,
    chrome: bool,
    placement: ShellPlacement,
}

pub fn grid(manager: &WidgetManager, detail: bool) -> anyhow::Result<String> {
    let sidebar = manager.responsive_sidebar(detail);
    let grid = sidebar.grid();
    let rows: Vec<DeviceGrid> = DeviceClass::ALL
        .iter()
        .map(|&device| DeviceGrid {
            device,
            layout: grid.layout(device),
            chrome: sidebar.visibility(device).chrome,
            placement: grid.placement(device),
        })
        .collect();
    to_json(&rows)
}

pub fn widgets(
    manager: &WidgetManager,
    side: Option<Side>,
    slot: Option<Slot>,
) -> anyhow::Result<String> {
    let widgets: Vec<&WidgetSpec> = match slot {
        Some(slot) => manager.widgets_by_slot(slot, side),
        None => manager.enabled_widgets(side),
    };
    to_json(&widgets)
}

#[derive(Debug, Serialize)]
struct DeviceAnswer {
    width: u32,
    device: DeviceClass,
}

pub fn device(width: u32, tablet_min: u32, desktop_min: u32) -> anyhow::Result<String> {
    if tablet_min > desktop_min {
        bail!("--tablet-min ({tablet_min}) must not exceed --desktop-min ({desktop_min})");
    }
    let breakpoints = Breakpoints {
        tablet_min_px: tablet_min,
        desktop_min_px: desktop_min,
    };
    to_json(&DeviceAnswer {
        width,
        device: breakpoints.classify(width),
    })
}

pub fn init(output: &Path, force: bool) -> anyhow::Result<String> {
    if output.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", output.display());
    }
    fs::write(output, DEFAULT_CONFIG_TOML)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(path = %output.display(), "wrote shipped configuration");
    Ok(format!("wrote {}", output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn shipped() -> WidgetManager {
        load_manager(None).unwrap()
    }

    #[test]
    fn check_summarizes_shipped_config() {
        let out: Value = serde_json::from_str(&check(&shipped()).unwrap()).unwrap();
        assert_eq!(out["sidebarEnabled"], true);
        assert_eq!(out["position"], "both");
        assert_eq!(out["leftWidgets"], 5);
        assert_eq!(out["rightWidgets"], 4);
    }

    #[test]
    fn grid_lists_every_device() {
        let out: Value = serde_json::from_str(&grid(&shipped(), false).unwrap()).unwrap();
        let rows = out.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1]["device"], "tablet");
        assert_eq!(rows[1]["layout"], "twoColumnLeft");
        assert_eq!(rows[0]["placement"]["columns"], 1);
        assert!(rows[0]["placement"]["right"].is_null());
        assert_eq!(rows[2]["placement"]["columns"], 3);
    }

    #[test]
    fn widgets_filters_by_slot() {
        let out: Value = serde_json::from_str(
            &widgets(&shipped(), Some(Side::Left), Some(Slot::Top)).unwrap(),
        )
        .unwrap();
        let kinds: Vec<&str> = out
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["kind"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, ["profile", "announcement"]);
    }

    #[test]
    fn device_uses_breakpoints() {
        let out: Value = serde_json::from_str(&device(800, 768, 1024).unwrap()).unwrap();
        assert_eq!(out["device"], "tablet");
        assert!(device(800, 1100, 1024).is_err());
    }

    #[test]
    fn init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sidebar.toml");

        init(&path, false).unwrap();
        assert!(init(&path, false).is_err());
        init(&path, true).unwrap();

        let loaded = load_manager(Some(&path)).unwrap();
        assert_eq!(loaded.config(), shipped().config());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_manager(Some(&dir.path().join("missing.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("missing.toml"));
    }
}
