//! Widget layout resolution for sidebar-driven page shells.
//!
//! Given a [`LayoutConfig`](sidebar_core::LayoutConfig) and a query context
//! (device class, whether the page is an article detail page), this crate
//! decides which sidebar widgets render, in what order and slot, with what
//! entrance delay, and which column structure the page shell uses.
//!
//! # Architecture
//!
//! 1. **Widget queries**: ordering, slot filtering and visibility over the
//!    owned configuration ([`WidgetManager`])
//! 2. **Arrangement**: left-only vs. both-sides, resolved once per render
//!    ([`ResponsiveSidebar`])
//! 3. **Grid classification**: per-device shell structure ([`classify_grid_layout`])
//! 4. **Render plans**: the structured output for the template layer ([`PagePlan`])
//!
//! # Example
//!
//! ```ignore
//! use sidebar_layout::WidgetManager;
//!
//! let manager = WidgetManager::new(sidebar_config::default_config());
//! let plan = manager.page_plan(true);
//!
//! for widget in plan.left.iter() {
//!     println!("{} at {}ms", widget.kind, widget.animation_delay_ms);
//! }
//! ```

mod grid;
mod manager;
mod plan;
mod responsive;

pub use grid::{
    classify_grid_layout, ColumnSpan, GridArea, GridClassification, ShellLayout, ShellPlacement,
};
pub use manager::{LayoutConfigPatch, WidgetManager};
pub use plan::{PagePlan, RenderedWidget, SidebarPlan};
pub use responsive::{ResponsiveSidebar, SideVisibility, SidebarArrangement};
