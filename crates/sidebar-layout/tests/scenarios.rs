//! End-to-end layout scenarios.

use sidebar_config::default_config;
use sidebar_core::{
    DeviceClass, DeviceLayoutModes, LayoutConfig, LayoutMode, Side, SidebarPosition, Slot,
    WidgetKind, WidgetSpec,
};
use sidebar_layout::{
    classify_grid_layout, ColumnSpan, GridArea, LayoutConfigPatch, ShellLayout, WidgetManager,
};

fn tags_and_stats() -> LayoutConfig {
    LayoutConfig {
        sidebar_enabled: true,
        sidebar_position: SidebarPosition::BothSides,
        left_widgets: vec![
            WidgetSpec::new(WidgetKind::Profile)
                .with_order(1)
                .with_slot(Slot::Top),
            WidgetSpec::new(WidgetKind::Tags)
                .with_order(4)
                .with_slot(Slot::Sticky)
                .with_collapse_threshold(20),
        ],
        right_widgets: vec![WidgetSpec::new(WidgetKind::Stats)
            .with_order(1)
            .with_slot(Slot::Top)],
        ..Default::default()
    }
}

#[test]
fn tags_collapse_and_three_columns_on_desktop() {
    let m = WidgetManager::new(tags_and_stats());

    let tags = m
        .widget_config(WidgetKind::Tags, Some(Side::Left))
        .expect("tags configured");
    assert!(m.is_collapsed(tags, 25));

    let top: Vec<_> = m
        .widgets_by_slot(Slot::Top, Some(Side::Left))
        .into_iter()
        .map(|w| w.kind)
        .collect();
    assert_eq!(top, [WidgetKind::Profile]);

    let sidebar = m.responsive_sidebar(false);
    let desktop = sidebar.visibility(DeviceClass::Desktop);
    assert!(desktop.left && desktop.right);

    let grid = classify_grid_layout(sidebar.arrangement, &sidebar.visibility);
    assert_eq!(grid.layout(DeviceClass::Desktop), ShellLayout::ThreeColumn);
    assert_eq!(grid.layout(DeviceClass::Tablet), ShellLayout::TwoColumnLeft);
    assert_eq!(
        grid.placement(DeviceClass::Desktop).right.map(|a| a.column),
        Some(ColumnSpan { start: 3, end: 4 })
    );
}

#[test]
fn disabled_sidebar_never_shows_chrome() {
    let modes = [LayoutMode::Hidden, LayoutMode::Bottom, LayoutMode::Drawer, LayoutMode::Sidebar];
    for mobile in modes {
        for tablet in modes {
            let m = WidgetManager::new(LayoutConfig {
                sidebar_enabled: false,
                device_layout_mode: DeviceLayoutModes::new(mobile, tablet),
                ..tags_and_stats()
            });
            for &device in DeviceClass::ALL {
                assert!(!m.should_show_sidebar_chrome(device));
            }
        }
    }
}

#[test]
fn shipped_config_on_article_page() {
    let m = WidgetManager::new(default_config());
    let plan = m.page_plan(true);

    assert!(plan.sidebar.arrangement.is_both_sides());
    assert_eq!(plan.grid.layout(DeviceClass::Desktop), ShellLayout::ThreeColumn);
    assert_eq!(plan.grid.layout(DeviceClass::Tablet), ShellLayout::TwoColumnLeft);

    let left: Vec<_> = plan.left.iter().map(|w| w.kind).collect();
    assert_eq!(
        left,
        [
            WidgetKind::Profile,
            WidgetKind::Announcement,
            WidgetKind::Categories,
            WidgetKind::Tags,
        ]
    );

    // Calendar is configured not to show on article pages.
    let right: Vec<_> = plan
        .right
        .as_ref()
        .expect("both sides on article pages")
        .iter()
        .map(|w| w.kind)
        .collect();
    assert_eq!(right, [WidgetKind::Stats, WidgetKind::SidebarToc]);

    // Explicit delays from the configuration are kept.
    let delays: Vec<_> = plan.left.iter().map(|w| w.animation_delay_ms).collect();
    assert_eq!(delays, [0, 50, 150, 250]);
}

#[test]
fn mobile_placement_agrees_with_widget_hiding() {
    let plan = WidgetManager::new(default_config()).page_plan(false);
    let right = plan.right.as_ref().expect("both sides");
    assert!(right.iter().all(|w| w.hidden_on.contains(&DeviceClass::Mobile)));

    let mobile = plan.grid.placement(DeviceClass::Mobile);
    assert_eq!(mobile.columns, 1);
    assert_eq!(mobile.right, None);
    assert_eq!(mobile.main.row, ColumnSpan { start: 1, end: 2 });
    assert_eq!(mobile.left.map(|a| a.row), Some(ColumnSpan { start: 2, end: 3 }));

    // Right-side widgets only render on desktop, and only there does the
    // shell reserve a right column.
    for &device in DeviceClass::ALL {
        let hidden_everywhere_here = right.iter().all(|w| w.hidden_on.contains(&device));
        assert_eq!(
            plan.grid.placement(device).right.is_none(),
            hidden_everywhere_here,
            "{device}"
        );
    }
}

#[test]
fn left_only_config_promotes_on_article_pages() {
    let mut m = WidgetManager::new(default_config());
    m.update_config(LayoutConfigPatch {
        sidebar_position: Some(SidebarPosition::LeftOnly),
        ..Default::default()
    });

    let listing = m.page_plan(false);
    assert!(listing.right.is_none());
    assert_eq!(listing.grid.layout(DeviceClass::Desktop), ShellLayout::TwoColumnLeft);

    let article = m.page_plan(true);
    assert!(article.right.is_some());
    assert_eq!(article.grid.layout(DeviceClass::Desktop), ShellLayout::ThreeColumn);
}

#[test]
fn right_only_widgets_give_main_then_right() {
    let mut m = WidgetManager::new(default_config());
    for kind in [
        WidgetKind::Profile,
        WidgetKind::Announcement,
        WidgetKind::Categories,
        WidgetKind::Tags,
    ] {
        m.toggle_widget(kind, false);
    }

    let plan = m.page_plan(false);
    assert!(plan.left.is_empty());
    assert_eq!(plan.grid.layout(DeviceClass::Desktop), ShellLayout::TwoColumnRight);
    assert_eq!(plan.grid.layout(DeviceClass::Tablet), ShellLayout::SingleColumn);

    let placement = plan.grid.placement(DeviceClass::Desktop);
    assert_eq!(placement.main, GridArea::column(1));
    assert_eq!(placement.left, None);
}

#[test]
fn hidden_mobile_layout_stacks_single_column() {
    let mut m = WidgetManager::new(default_config());
    m.update_config(LayoutConfigPatch {
        device_layout_mode: Some(DeviceLayoutModes::new(LayoutMode::Hidden, LayoutMode::Drawer)),
        ..Default::default()
    });

    let grid = m.page_plan(false).grid;
    assert_eq!(grid.layout(DeviceClass::Mobile), ShellLayout::SingleColumn);
    assert_eq!(grid.layout(DeviceClass::Tablet), ShellLayout::SingleColumn);
    assert_eq!(grid.layout(DeviceClass::Desktop), ShellLayout::ThreeColumn);
}

#[test]
fn runtime_edits_flow_into_plan() {
    let mut m = WidgetManager::new(default_config());
    m.toggle_widget(WidgetKind::Advertisement, true);
    m.reorder_widget(WidgetKind::Advertisement, 0);
    m.add_widget(
        WidgetSpec::new(WidgetKind::Custom)
            .with_component_path("../components/widget/Music.astro")
            .with_order(10)
            .with_slot(Slot::Sticky),
        Side::Left,
    );

    let plan = m.page_plan(false);
    // The left advertisement (first match) is enabled and moved to the front
    // of the sticky slot; the right one stays disabled.
    assert_eq!(plan.left.sticky[0].kind, WidgetKind::Advertisement);
    assert_eq!(plan.left.sticky[0].config_id.as_deref(), Some("ad1"));
    assert_eq!(
        plan.left.sticky.last().map(|w| w.component_path.as_deref()),
        Some(Some("../components/widget/Music.astro"))
    );
    let right = plan.right.expect("both sides");
    assert!(right.iter().all(|w| w.kind != WidgetKind::Advertisement));

    m.remove_widget(WidgetKind::Advertisement, None);
    assert!(!m.is_widget_enabled(WidgetKind::Advertisement));
}
