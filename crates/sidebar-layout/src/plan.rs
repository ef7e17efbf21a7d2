//! Render plans handed to the template layer.

use sidebar_core::{DeviceSet, Side, Slot, WidgetKind, WidgetSpec};

use crate::grid::{GridClassification, RIGHT_SIDE_HIDDEN};
use crate::manager::WidgetManager;
use crate::responsive::ResponsiveSidebar;

/// One widget as it should be emitted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RenderedWidget {
    pub kind: WidgetKind,
    pub slot: Slot,
    pub order: i32,
    /// Position in the side's rendered sequence (top slot, then sticky)
    pub index: usize,
    pub animation_delay_ms: u32,
    /// Device classes on which the template must hide this widget
    pub hidden_on: DeviceSet,
    pub collapse_threshold: Option<u32>,
    pub component_path: Option<String>,
    pub class: Option<String>,
    pub style: String,
    pub config_id: Option<String>,
}

impl RenderedWidget {
    /// Collapse decision for the widget's content count.
    pub fn is_collapsed(&self, item_count: u32) -> bool {
        self.collapse_threshold
            .is_some_and(|threshold| item_count >= threshold)
    }
}

/// The widgets of one side, split by slot.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SidebarPlan {
    pub top: Vec<RenderedWidget>,
    pub sticky: Vec<RenderedWidget>,
}

impl SidebarPlan {
    pub fn is_empty(&self) -> bool {
        self.top.is_empty() && self.sticky.is_empty()
    }

    /// All widgets in render order.
    pub fn iter(&self) -> impl Iterator<Item = &RenderedWidget> {
        self.top.iter().chain(self.sticky.iter())
    }
}

/// Complete sidebar decisions for one page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PagePlan {
    pub sidebar: ResponsiveSidebar,
    pub grid: GridClassification,
    pub left: SidebarPlan,
    /// Present only for a both-sides arrangement
    pub right: Option<SidebarPlan>,
}

fn shows_on_page(side: Side, widget: &WidgetSpec, is_detail_page: bool) -> bool {
    !(side == Side::Right && is_detail_page && widget.show_on_detail_page == Some(false))
}

impl WidgetManager {
    /// Widgets of one side, ready to render.
    ///
    /// Enabled widgets are taken in order and split by slot. On detail pages
    /// right-side widgets with `show_on_detail_page == Some(false)` are left
    /// out. Animation delays use the index in the side's rendered sequence.
    pub fn render_plan(&self, side: Side, is_detail_page: bool) -> SidebarPlan {
        let widgets: Vec<&WidgetSpec> = self
            .enabled_widgets(Some(side))
            .into_iter()
            .filter(|w| shows_on_page(side, w, is_detail_page))
            .collect();

        let ordered = widgets
            .iter()
            .filter(|w| w.slot == Slot::Top)
            .chain(widgets.iter().filter(|w| w.slot == Slot::Sticky));

        let mut plan = SidebarPlan::default();
        for (index, widget) in ordered.enumerate() {
            let rendered = self.render_widget(side, widget, index);
            match widget.slot {
                Slot::Top => plan.top.push(rendered),
                Slot::Sticky => plan.sticky.push(rendered),
            }
        }
        plan
    }

    fn render_widget(&self, side: Side, widget: &WidgetSpec, index: usize) -> RenderedWidget {
        let mut hidden_on = widget.hidden_on.clone();
        if side == Side::Right {
            for device in RIGHT_SIDE_HIDDEN {
                if !hidden_on.contains(&device) {
                    hidden_on.push(device);
                }
            }
        }
        hidden_on.sort();

        RenderedWidget {
            kind: widget.kind,
            slot: widget.slot,
            order: widget.order,
            index,
            animation_delay_ms: self.animation_delay(widget, index),
            hidden_on,
            collapse_threshold: widget.collapse_threshold,
            component_path: widget.resolved_component_path().map(str::to_string),
            class: widget.class.clone(),
            style: self.inline_style(widget, index),
            config_id: widget.config_id.clone(),
        }
    }

    /// Everything the page shell needs for one render.
    pub fn page_plan(&self, is_detail_page: bool) -> PagePlan {
        let sidebar = self.responsive_sidebar(is_detail_page);
        let grid = sidebar.grid();
        let right = sidebar
            .arrangement
            .is_both_sides()
            .then(|| self.render_plan(Side::Right, is_detail_page));

        PagePlan {
            left: self.render_plan(Side::Left, is_detail_page),
            right,
            sidebar,
            grid,
        }
    }
}
