//! The widget manager: queries and edits over an owned layout configuration.

use sidebar_core::{
    AnimationPolicy, DeviceClass, DeviceLayoutModes, LayoutConfig, LayoutMode, Side,
    SidebarPosition, Slot, WidgetKind, WidgetSpec,
};
use tracing::debug;

use crate::responsive::SidebarArrangement;

/// Shallow update of top-level configuration fields. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfigPatch {
    pub sidebar_enabled: Option<bool>,
    pub sidebar_position: Option<SidebarPosition>,
    pub show_right_on_detail_page: Option<bool>,
    pub left_widgets: Option<Vec<WidgetSpec>>,
    pub right_widgets: Option<Vec<WidgetSpec>>,
    pub animation_policy: Option<AnimationPolicy>,
    pub device_layout_mode: Option<DeviceLayoutModes>,
}

/// Resolves widget visibility, ordering and timing for one configuration.
///
/// The manager owns its configuration. Edits go through the `*_widget`
/// methods and take `&mut self`; callers sharing a manager across threads
/// must provide their own synchronization.
#[derive(Debug, Clone, Default)]
pub struct WidgetManager {
    config: LayoutConfig,
}

impl From<LayoutConfig> for WidgetManager {
    fn from(config: LayoutConfig) -> Self {
        Self::new(config)
    }
}

impl WidgetManager {
    /// Create a manager over a configuration.
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// The current configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Give back the configuration, including any edits.
    pub fn into_config(self) -> LayoutConfig {
        self.config
    }

    /// Enabled widgets of one side, or both sides (left list first) when
    /// `side` is `None`, sorted by `order`. Equal orders keep list order.
    pub fn enabled_widgets(&self, side: Option<Side>) -> Vec<&WidgetSpec> {
        let mut widgets: Vec<&WidgetSpec> = match side {
            Some(side) => self.config.widgets(side).iter().collect(),
            None => self.config.all_widgets().map(|(_, w)| w).collect(),
        };
        widgets.retain(|w| w.enabled);
        // sort_by_key is stable
        widgets.sort_by_key(|w| w.order);
        widgets
    }

    /// Enabled widgets placed in `slot`, in [`enabled_widgets`](Self::enabled_widgets) order.
    pub fn widgets_by_slot(&self, slot: Slot, side: Option<Side>) -> Vec<&WidgetSpec> {
        self.enabled_widgets(side)
            .into_iter()
            .filter(|w| w.slot == slot)
            .collect()
    }

    /// Whether any widget on `side` is enabled, regardless of slot or device.
    pub fn side_has_any_widget(&self, side: Side) -> bool {
        self.config.widgets(side).iter().any(|w| w.enabled)
    }

    /// Whether any enabled widget on `side` may render on `device`.
    ///
    /// The right column is never visible at tablet width, whatever the
    /// widgets' own `hidden_on` settings say.
    pub fn side_has_visible_widget(&self, side: Side, device: DeviceClass) -> bool {
        if side == Side::Right && device == DeviceClass::Tablet {
            return false;
        }

        self.config
            .widgets(side)
            .iter()
            .any(|w| w.enabled && !w.is_hidden_on(device))
    }

    /// Entrance animation delay for a widget at `index` in its rendered list.
    pub fn animation_delay(&self, widget: &WidgetSpec, index: usize) -> u32 {
        if let Some(delay) = widget.animation_delay_ms {
            return delay;
        }

        let policy = &self.config.animation_policy;
        if policy.enabled {
            let index = u32::try_from(index).unwrap_or(u32::MAX);
            policy
                .base_delay_ms
                .saturating_add(index.saturating_mul(policy.increment_ms))
        } else {
            0
        }
    }

    /// Inline style for a widget: its own style, then the animation delay
    /// when positive, joined with `"; "`.
    pub fn inline_style(&self, widget: &WidgetSpec, index: usize) -> String {
        let mut styles: Vec<String> = Vec::with_capacity(2);
        if let Some(style) = widget.style.as_deref().filter(|s| !s.is_empty()) {
            styles.push(style.to_string());
        }

        let delay = self.animation_delay(widget, index);
        if delay > 0 {
            styles.push(format!("animation-delay: {delay}ms"));
        }

        styles.join("; ")
    }

    /// Whether a widget with `item_count` items should render collapsed.
    pub fn is_collapsed(&self, widget: &WidgetSpec, item_count: u32) -> bool {
        match widget.collapse_threshold {
            Some(threshold) => item_count >= threshold,
            None => false,
        }
    }

    /// Arrangement for one page render.
    pub fn resolve_sidebar_arrangement(&self, is_detail_page: bool) -> SidebarArrangement {
        let position = match self.config.sidebar_position {
            SidebarPosition::BothSides => SidebarPosition::BothSides,
            SidebarPosition::LeftOnly
                if is_detail_page && self.config.show_right_on_detail_page =>
            {
                SidebarPosition::BothSides
            }
            SidebarPosition::LeftOnly => SidebarPosition::LeftOnly,
        };
        SidebarArrangement { position }
    }

    /// Whether the sidebar column itself is shown on `device`.
    pub fn should_show_sidebar_chrome(&self, device: DeviceClass) -> bool {
        if !self.config.sidebar_enabled {
            return false;
        }
        self.config.device_layout_mode.mode(device) == LayoutMode::Sidebar
    }

    /// First widget of `kind` on `side`, or on either side (left first).
    pub fn widget_config(&self, kind: WidgetKind, side: Option<Side>) -> Option<&WidgetSpec> {
        match side {
            Some(side) => self.config.widgets(side).iter().find(|w| w.kind == kind),
            None => self
                .config
                .all_widgets()
                .map(|(_, w)| w)
                .find(|w| w.kind == kind),
        }
    }

    /// Whether the first widget of `kind` exists and is enabled.
    pub fn is_widget_enabled(&self, kind: WidgetKind) -> bool {
        self.widget_config(kind, None).is_some_and(|w| w.enabled)
    }

    /// Kinds of all enabled widgets: top slot first, then sticky.
    pub fn enabled_widget_kinds(&self) -> Vec<WidgetKind> {
        self.widgets_by_slot(Slot::Top, None)
            .into_iter()
            .chain(self.widgets_by_slot(Slot::Sticky, None))
            .map(|w| w.kind)
            .collect()
    }

    /// Replace the top-level fields present in `patch`.
    pub fn update_config(&mut self, patch: LayoutConfigPatch) {
        let config = &mut self.config;
        if let Some(v) = patch.sidebar_enabled {
            config.sidebar_enabled = v;
        }
        if let Some(v) = patch.sidebar_position {
            config.sidebar_position = v;
        }
        if let Some(v) = patch.show_right_on_detail_page {
            config.show_right_on_detail_page = v;
        }
        if let Some(v) = patch.left_widgets {
            config.left_widgets = v;
        }
        if let Some(v) = patch.right_widgets {
            config.right_widgets = v;
        }
        if let Some(v) = patch.animation_policy {
            config.animation_policy = v;
        }
        if let Some(v) = patch.device_layout_mode {
            config.device_layout_mode = v;
        }
    }

    /// Append a widget to a side's list.
    pub fn add_widget(&mut self, widget: WidgetSpec, side: Side) {
        debug!(kind = %widget.kind, %side, "adding widget");
        self.config.widgets_mut(side).push(widget);
    }

    /// Remove every widget of `kind` from `side`, or from both sides.
    pub fn remove_widget(&mut self, kind: WidgetKind, side: Option<Side>) {
        let sides: &[Side] = match side {
            Some(Side::Left) => &[Side::Left],
            Some(Side::Right) => &[Side::Right],
            None => &[Side::Left, Side::Right],
        };

        for &side in sides {
            let widgets = self.config.widgets_mut(side);
            let before = widgets.len();
            widgets.retain(|w| w.kind != kind);
            let removed = before - widgets.len();
            if removed == 0 {
                debug!(%kind, %side, "no widget to remove");
            } else {
                debug!(%kind, %side, removed, "removed widgets");
            }
        }
    }

    /// Set `enabled` on the first widget of `kind`, searching the left list
    /// and then the right list.
    pub fn toggle_widget(&mut self, kind: WidgetKind, enable: bool) {
        match self.first_widget_mut(kind) {
            Some(widget) => widget.enabled = enable,
            None => debug!(%kind, "toggle ignored, widget not configured"),
        }
    }

    /// Set `order` on the first widget of `kind` (same search as
    /// [`toggle_widget`](Self::toggle_widget)).
    pub fn reorder_widget(&mut self, kind: WidgetKind, new_order: i32) {
        match self.first_widget_mut(kind) {
            Some(widget) => widget.order = new_order,
            None => debug!(%kind, "reorder ignored, widget not configured"),
        }
    }

    fn first_widget_mut(&mut self, kind: WidgetKind) -> Option<&mut WidgetSpec> {
        let LayoutConfig {
            left_widgets,
            right_widgets,
            ..
        } = &mut self.config;
        left_widgets
            .iter_mut()
            .chain(right_widgets.iter_mut())
            .find(|w| w.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> WidgetManager {
        WidgetManager::new(LayoutConfig {
            sidebar_enabled: true,
            sidebar_position: SidebarPosition::BothSides,
            left_widgets: vec![
                WidgetSpec::new(WidgetKind::Profile).with_order(1),
                WidgetSpec::new(WidgetKind::Tags)
                    .with_order(4)
                    .with_slot(Slot::Sticky),
                WidgetSpec::new(WidgetKind::Categories)
                    .with_order(3)
                    .with_slot(Slot::Sticky),
                WidgetSpec::new(WidgetKind::Advertisement)
                    .with_order(0)
                    .with_enabled(false),
            ],
            right_widgets: vec![
                WidgetSpec::new(WidgetKind::Stats).with_order(1),
                WidgetSpec::new(WidgetKind::Calendar)
                    .with_order(2)
                    .with_slot(Slot::Sticky),
            ],
            ..Default::default()
        })
    }

    fn kinds(widgets: &[&WidgetSpec]) -> Vec<WidgetKind> {
        widgets.iter().map(|w| w.kind).collect()
    }

    #[test]
    fn test_enabled_widgets_sorted() {
        let m = manager();
        assert_eq!(
            kinds(&m.enabled_widgets(Some(Side::Left))),
            [WidgetKind::Profile, WidgetKind::Categories, WidgetKind::Tags]
        );
    }

    #[test]
    fn test_enabled_widgets_both_sides_stable() {
        let m = manager();
        // Equal orders: left list precedes right list.
        assert_eq!(
            kinds(&m.enabled_widgets(None)),
            [
                WidgetKind::Profile,
                WidgetKind::Stats,
                WidgetKind::Calendar,
                WidgetKind::Categories,
                WidgetKind::Tags,
            ]
        );
    }

    #[test]
    fn test_widgets_by_slot() {
        let m = manager();
        assert_eq!(
            kinds(&m.widgets_by_slot(Slot::Top, Some(Side::Left))),
            [WidgetKind::Profile]
        );
        assert_eq!(
            kinds(&m.widgets_by_slot(Slot::Sticky, None)),
            [WidgetKind::Calendar, WidgetKind::Categories, WidgetKind::Tags]
        );
    }

    #[test]
    fn test_empty_config() {
        let m = WidgetManager::default();
        assert!(m.enabled_widgets(None).is_empty());
        assert!(!m.side_has_any_widget(Side::Left));
        assert!(!m.side_has_visible_widget(Side::Left, DeviceClass::Desktop));
    }

    #[test]
    fn test_side_visibility() {
        let mut m = manager();
        assert!(m.side_has_visible_widget(Side::Right, DeviceClass::Desktop));
        assert!(!m.side_has_visible_widget(Side::Right, DeviceClass::Tablet));

        m.update_config(LayoutConfigPatch {
            left_widgets: Some(vec![
                WidgetSpec::new(WidgetKind::Profile).hidden_on(DeviceClass::Mobile),
                WidgetSpec::new(WidgetKind::Tags).with_enabled(false),
            ]),
            ..Default::default()
        });
        assert!(m.side_has_any_widget(Side::Left));
        assert!(!m.side_has_visible_widget(Side::Left, DeviceClass::Mobile));
        assert!(m.side_has_visible_widget(Side::Left, DeviceClass::Tablet));
    }

    #[test]
    fn test_hidden_on_does_not_enable() {
        let m = WidgetManager::new(LayoutConfig {
            left_widgets: vec![WidgetSpec::new(WidgetKind::Tags)
                .with_enabled(false)
                .hidden_on(DeviceClass::Mobile)],
            ..Default::default()
        });
        for &device in DeviceClass::ALL {
            assert!(!m.side_has_visible_widget(Side::Left, device));
        }
    }

    #[test]
    fn test_animation_delay() {
        let mut m = manager();
        m.update_config(LayoutConfigPatch {
            animation_policy: Some(AnimationPolicy {
                enabled: true,
                base_delay_ms: 100,
                increment_ms: 50,
            }),
            ..Default::default()
        });
        let implicit = WidgetSpec::new(WidgetKind::Tags);
        let explicit = WidgetSpec::new(WidgetKind::Tags).with_animation_delay(250);
        assert_eq!(m.animation_delay(&implicit, 0), 100);
        assert_eq!(m.animation_delay(&implicit, 3), 250);
        assert_eq!(m.animation_delay(&explicit, 3), 250);

        m.update_config(LayoutConfigPatch {
            animation_policy: Some(AnimationPolicy {
                enabled: false,
                ..AnimationPolicy::default()
            }),
            ..Default::default()
        });
        assert_eq!(m.animation_delay(&implicit, 3), 0);
        assert_eq!(m.animation_delay(&explicit, 3), 250);
    }

    #[test]
    fn test_inline_style() {
        let m = manager();
        let styled = WidgetSpec::new(WidgetKind::Tags).with_style("color: red");
        // Default policy: 0 + index * 50
        assert_eq!(m.inline_style(&styled, 0), "color: red");
        assert_eq!(m.inline_style(&styled, 2), "color: red; animation-delay: 100ms");
        assert_eq!(
            m.inline_style(&WidgetSpec::new(WidgetKind::Tags), 1),
            "animation-delay: 50ms"
        );
    }

    #[test]
    fn test_is_collapsed() {
        let m = manager();
        let tags = WidgetSpec::new(WidgetKind::Tags).with_collapse_threshold(20);
        assert!(!m.is_collapsed(&tags, 19));
        assert!(m.is_collapsed(&tags, 20));
        assert!(m.is_collapsed(&tags, 25));
        assert!(!m.is_collapsed(&WidgetSpec::new(WidgetKind::Tags), 1000));
    }

    #[test]
    fn test_resolve_sidebar_arrangement() {
        let mut m = manager();
        assert!(m.resolve_sidebar_arrangement(false).is_both_sides());

        m.update_config(LayoutConfigPatch {
            sidebar_position: Some(SidebarPosition::LeftOnly),
            show_right_on_detail_page: Some(true),
            ..Default::default()
        });
        assert!(m.resolve_sidebar_arrangement(true).is_both_sides());
        assert!(!m.resolve_sidebar_arrangement(false).is_both_sides());

        m.update_config(LayoutConfigPatch {
            show_right_on_detail_page: Some(false),
            ..Default::default()
        });
        assert!(!m.resolve_sidebar_arrangement(true).is_both_sides());
    }

    #[test]
    fn test_sidebar_chrome() {
        let mut m = manager();
        m.update_config(LayoutConfigPatch {
            device_layout_mode: Some(DeviceLayoutModes::new(LayoutMode::Drawer, LayoutMode::Sidebar)),
            ..Default::default()
        });
        assert!(!m.should_show_sidebar_chrome(DeviceClass::Mobile));
        assert!(m.should_show_sidebar_chrome(DeviceClass::Tablet));
        assert!(m.should_show_sidebar_chrome(DeviceClass::Desktop));

        m.update_config(LayoutConfigPatch {
            sidebar_enabled: Some(false),
            ..Default::default()
        });
        for &device in DeviceClass::ALL {
            assert!(!m.should_show_sidebar_chrome(device));
        }
    }

    #[test]
    fn test_add_and_remove() {
        let mut m = manager();
        m.add_widget(WidgetSpec::new(WidgetKind::Stats).with_order(9), Side::Left);
        assert!(m.widget_config(WidgetKind::Stats, Some(Side::Left)).is_some());

        m.remove_widget(WidgetKind::Stats, Some(Side::Left));
        assert!(m.widget_config(WidgetKind::Stats, Some(Side::Left)).is_none());
        assert!(m.widget_config(WidgetKind::Stats, Some(Side::Right)).is_some());

        m.add_widget(WidgetSpec::new(WidgetKind::Stats), Side::Left);
        m.remove_widget(WidgetKind::Stats, None);
        assert!(m.widget_config(WidgetKind::Stats, None).is_none());

        // Removing something absent is a no-op.
        let before = m.config().clone();
        m.remove_widget(WidgetKind::Custom, None);
        assert_eq!(m.config(), &before);
    }

    #[test]
    fn test_toggle_first_match_left_then_right() {
        let mut m = manager();
        m.add_widget(WidgetSpec::new(WidgetKind::Tags).with_slot(Slot::Top), Side::Right);

        m.toggle_widget(WidgetKind::Tags, false);
        assert!(!m.config().left_widgets[1].enabled);
        assert!(m.config().right_widgets[2].enabled);
        assert!(!m.is_widget_enabled(WidgetKind::Tags));

        m.toggle_widget(WidgetKind::Advertisement, true);
        assert!(m.is_widget_enabled(WidgetKind::Advertisement));
    }

    #[test]
    fn test_toggle_and_reorder_absent_is_noop() {
        let mut m = manager();
        let before = m.config().clone();
        m.toggle_widget(WidgetKind::SidebarToc, true);
        m.reorder_widget(WidgetKind::SidebarToc, 7);
        assert_eq!(m.config(), &before);
    }

    #[test]
    fn test_reorder() {
        let mut m = manager();
        m.reorder_widget(WidgetKind::Tags, 0);
        assert_eq!(
            kinds(&m.enabled_widgets(Some(Side::Left))),
            [WidgetKind::Tags, WidgetKind::Profile, WidgetKind::Categories]
        );
    }

    #[test]
    fn test_enabled_widget_kinds() {
        let m = manager();
        assert_eq!(
            m.enabled_widget_kinds(),
            [
                WidgetKind::Profile,
                WidgetKind::Stats,
                WidgetKind::Calendar,
                WidgetKind::Categories,
                WidgetKind::Tags,
            ]
        );
    }
}
