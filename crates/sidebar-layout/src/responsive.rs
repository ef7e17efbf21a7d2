//! Per-render sidebar arrangement and device visibility.

use sidebar_core::{DeviceClass, DeviceMap, Side, SidebarPosition};
use tracing::trace;

use crate::manager::WidgetManager;

/// The sidebar arrangement chosen for one page render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SidebarArrangement {
    pub position: SidebarPosition,
}

impl SidebarArrangement {
    pub fn is_both_sides(&self) -> bool {
        self.position == SidebarPosition::BothSides
    }
}

/// What is visible on one device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SideVisibility {
    /// The sidebar column is shown at all
    pub chrome: bool,
    /// The left column has a widget that may render (both-sides only)
    pub left: bool,
    /// The right column has a widget that may render (both-sides only)
    pub right: bool,
}

/// Everything the page shell needs to know about the sidebar for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResponsiveSidebar {
    pub sidebar_enabled: bool,
    pub arrangement: SidebarArrangement,
    /// Any enabled widget on the left (both-sides only)
    pub has_left_widgets: bool,
    /// Any enabled widget on the right (both-sides only)
    pub has_right_widgets: bool,
    pub visibility: DeviceMap<SideVisibility>,
}

impl ResponsiveSidebar {
    pub fn visibility(&self, device: DeviceClass) -> SideVisibility {
        *self.visibility.get(device)
    }
}

impl WidgetManager {
    /// Resolve the arrangement once and derive the per-device visibility
    /// flags from it.
    ///
    /// Side flags are only meaningful for a both-sides arrangement and are
    /// `false` otherwise.
    pub fn responsive_sidebar(&self, is_detail_page: bool) -> ResponsiveSidebar {
        let arrangement = self.resolve_sidebar_arrangement(is_detail_page);
        let both = arrangement.is_both_sides();

        let visibility = DeviceMap::from_fn(|device| SideVisibility {
            chrome: self.should_show_sidebar_chrome(device),
            left: both && self.side_has_visible_widget(Side::Left, device),
            right: both && self.side_has_visible_widget(Side::Right, device),
        });

        trace!(
            position = %arrangement.position,
            is_detail_page,
            ?visibility,
            "resolved sidebar arrangement"
        );

        ResponsiveSidebar {
            sidebar_enabled: self.config().sidebar_enabled,
            arrangement,
            has_left_widgets: both && self.side_has_any_widget(Side::Left),
            has_right_widgets: both && self.side_has_any_widget(Side::Right),
            visibility,
        }
    }
}
