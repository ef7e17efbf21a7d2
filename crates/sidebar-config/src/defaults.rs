//! The configuration the theme ships with.

use sidebar_core::{
    AnimationPolicy, DeviceLayoutModes, LayoutConfig, LayoutMode, SidebarPosition, Slot,
    WidgetKind, WidgetSpec,
};

/// Same content as `defaults/sidebar.toml`, for the annotated version.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../defaults/sidebar.toml");

const ANIMATED: &str = "onload-animation";

fn widget(kind: WidgetKind, order: i32, slot: Slot, delay_ms: u32) -> WidgetSpec {
    WidgetSpec::new(kind)
        .with_order(order)
        .with_slot(slot)
        .with_class(ANIMATED)
        .with_animation_delay(delay_ms)
}

/// Both sidebars enabled: profile, announcement, categories and tags on the
/// left; site stats, calendar and the table of contents on the right.
/// Advertisement slots are present on both sides but disabled.
pub fn default_config() -> LayoutConfig {
    LayoutConfig {
        sidebar_enabled: true,
        sidebar_position: SidebarPosition::BothSides,
        show_right_on_detail_page: true,
        left_widgets: vec![
            widget(WidgetKind::Profile, 1, Slot::Top, 0),
            widget(WidgetKind::Announcement, 2, Slot::Top, 50),
            widget(WidgetKind::Categories, 3, Slot::Sticky, 150).with_collapse_threshold(5),
            widget(WidgetKind::Tags, 4, Slot::Sticky, 250).with_collapse_threshold(20),
            widget(WidgetKind::Advertisement, 5, Slot::Sticky, 300)
                .with_enabled(false)
                .with_config_id("ad1"),
        ],
        right_widgets: vec![
            widget(WidgetKind::Stats, 1, Slot::Top, 200).with_show_on_detail_page(true),
            widget(WidgetKind::Calendar, 2, Slot::Sticky, 250).with_show_on_detail_page(false),
            widget(WidgetKind::SidebarToc, 3, Slot::Sticky, 250).with_show_on_detail_page(true),
            widget(WidgetKind::Advertisement, 4, Slot::Sticky, 350)
                .with_enabled(false)
                .with_show_on_detail_page(true)
                .with_config_id("ad2"),
        ],
        animation_policy: AnimationPolicy {
            enabled: true,
            base_delay_ms: 0,
            increment_ms: 50,
        },
        device_layout_mode: DeviceLayoutModes::new(LayoutMode::Sidebar, LayoutMode::Sidebar),
    }
}
