//! Page-shell column classification.
//!
//! The shell is a grid of one to three column tracks. Which structure applies
//! is decided independently for every device class, since side visibility
//! differs between them.

use sidebar_core::{DeviceClass, DeviceMap};
use tracing::trace;

use crate::responsive::{ResponsiveSidebar, SideVisibility, SidebarArrangement};

/// Column structure of the page shell on one device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ShellLayout {
    /// Main content only
    #[default]
    SingleColumn,
    /// Left sidebar | main
    TwoColumnLeft,
    /// Main | right sidebar
    TwoColumnRight,
    /// Left sidebar | main | right sidebar
    ThreeColumn,
}

impl ShellLayout {
    /// Number of column tracks.
    pub fn columns(self) -> u8 {
        match self {
            ShellLayout::SingleColumn => 1,
            ShellLayout::TwoColumnLeft | ShellLayout::TwoColumnRight => 2,
            ShellLayout::ThreeColumn => 3,
        }
    }

    /// Regions side by side in one row, as laid out from tablet width up.
    pub fn placement(self) -> ShellPlacement {
        let area = GridArea::column;
        let (left, main, right) = match self {
            ShellLayout::SingleColumn => (None, area(1), None),
            ShellLayout::TwoColumnLeft => (Some(area(1)), area(2), None),
            ShellLayout::TwoColumnRight => (None, area(1), Some(area(2))),
            ShellLayout::ThreeColumn => (Some(area(1)), area(2), Some(area(3))),
        };
        ShellPlacement {
            columns: self.columns(),
            left,
            main,
            right,
        }
    }

    /// Regions stacked in a single column: main content, then the left
    /// sidebar, then the right sidebar.
    pub fn stacked_placement(self) -> ShellPlacement {
        let (has_left, has_right) = match self {
            ShellLayout::SingleColumn => (false, false),
            ShellLayout::TwoColumnLeft => (true, false),
            ShellLayout::TwoColumnRight => (false, true),
            ShellLayout::ThreeColumn => (true, true),
        };
        ShellPlacement {
            columns: 1,
            left: has_left.then(|| GridArea::row(2)),
            main: GridArea::row(1),
            right: has_right.then(|| GridArea::row(3)),
        }
    }
}

/// A half-open range of grid lines, 1-based as in CSS grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnSpan {
    pub start: u8,
    pub end: u8,
}

impl ColumnSpan {
    /// The single track starting at grid line `start`.
    pub fn single(start: u8) -> Self {
        Self {
            start,
            end: start + 1,
        }
    }
}

/// Cell occupied by one region of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridArea {
    pub column: ColumnSpan,
    pub row: ColumnSpan,
}

impl GridArea {
    /// Column track `start` of the first row.
    pub fn column(start: u8) -> Self {
        Self {
            column: ColumnSpan::single(start),
            row: ColumnSpan::single(1),
        }
    }

    /// Row `start` of the first column track.
    pub fn row(start: u8) -> Self {
        Self {
            column: ColumnSpan::single(1),
            row: ColumnSpan::single(start),
        }
    }
}

/// Where each region of the shell sits. Absent sidebars are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShellPlacement {
    /// Column tracks in the grid
    pub columns: u8,
    pub left: Option<GridArea>,
    pub main: GridArea,
    pub right: Option<GridArea>,
}

/// Device classes below desktop width never render right-side widgets.
pub(crate) const RIGHT_SIDE_HIDDEN: [DeviceClass; 2] = [DeviceClass::Mobile, DeviceClass::Tablet];

/// Shell structure for every device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GridClassification {
    pub layouts: DeviceMap<ShellLayout>,
}

impl GridClassification {
    pub fn layout(&self, device: DeviceClass) -> ShellLayout {
        *self.layouts.get(device)
    }

    /// Placement the page shell uses on `device`.
    ///
    /// Mobile stacks the regions in one column; wider devices place them
    /// side by side. The right region is left out wherever right-side
    /// widgets are hidden, so the shell never reserves an empty column.
    pub fn placement(&self, device: DeviceClass) -> ShellPlacement {
        let layout = self.layout(device);
        let mut placement = match device {
            DeviceClass::Mobile => layout.stacked_placement(),
            DeviceClass::Tablet | DeviceClass::Desktop => layout.placement(),
        };
        if RIGHT_SIDE_HIDDEN.contains(&device) {
            placement.right = None;
        }
        placement
    }
}

/// Classify the shell for one device class.
fn classify_device(arrangement: SidebarArrangement, v: SideVisibility) -> ShellLayout {
    if !v.chrome {
        return ShellLayout::SingleColumn;
    }

    if !arrangement.is_both_sides() {
        return ShellLayout::TwoColumnLeft;
    }

    match (v.left, v.right) {
        (true, true) => ShellLayout::ThreeColumn,
        (true, false) => ShellLayout::TwoColumnLeft,
        (false, true) => ShellLayout::TwoColumnRight,
        (false, false) => ShellLayout::SingleColumn,
    }
}

/// Derive the shell structure for each device class.
///
/// A hidden sidebar column (`chrome == false`, which includes a globally
/// disabled sidebar) always yields a single column.
pub fn classify_grid_layout(
    arrangement: SidebarArrangement,
    visibility: &DeviceMap<SideVisibility>,
) -> GridClassification {
    let layouts = visibility.map(|_, v| classify_device(arrangement, *v));
    trace!(?layouts, "classified page grid");
    GridClassification { layouts }
}

impl ResponsiveSidebar {
    /// Shell structure for this render.
    pub fn grid(&self) -> GridClassification {
        if !self.sidebar_enabled {
            return GridClassification::default();
        }
        classify_grid_layout(self.arrangement, &self.visibility)
    }
}
