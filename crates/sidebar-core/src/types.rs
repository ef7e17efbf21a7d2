//! Core value types for the sidebar layout engine.

use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownVariant;

/// Generates `as_str`, `ALL`, `Display` and `FromStr` for a fieldless enum
/// whose variants have one canonical configuration spelling.
macro_rules! keyword_enum {
    ($ty:ident, $what:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $ty {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            /// The configuration keyword for this variant.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $what,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// The kind of content block a widget renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum WidgetKind {
    Profile,
    Announcement,
    Categories,
    Tags,
    SidebarToc,
    Advertisement,
    Stats,
    Calendar,
    /// User-supplied component; its path lives on the widget itself.
    Custom,
}

keyword_enum!(WidgetKind, "widget kind", {
    Profile => "profile",
    Announcement => "announcement",
    Categories => "categories",
    Tags => "tags",
    SidebarToc => "sidebarToc",
    Advertisement => "advertisement",
    Stats => "stats",
    Calendar => "calendar",
    Custom => "custom",
});

impl WidgetKind {
    /// Template component that renders this kind, relative to the theme's
    /// utility directory. `Custom` widgets carry their own path.
    pub const fn component_path(self) -> Option<&'static str> {
        match self {
            WidgetKind::Profile => Some("../components/widget/Profile.astro"),
            WidgetKind::Announcement => Some("../components/widget/Announcement.astro"),
            WidgetKind::Categories => Some("../components/widget/Categories.astro"),
            WidgetKind::Tags => Some("../components/widget/Tags.astro"),
            WidgetKind::SidebarToc => Some("../components/widget/SidebarTOC.astro"),
            WidgetKind::Advertisement => Some("../components/widget/Advertisement.astro"),
            WidgetKind::Stats => Some("../components/widget/SiteStats.astro"),
            WidgetKind::Calendar => Some("../components/widget/Calendar.astro"),
            WidgetKind::Custom => None,
        }
    }
}

/// Which sidebar column a widget lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Side {
    #[default]
    Left,
    Right,
}

keyword_enum!(Side, "sidebar side", {
    Left => "left",
    Right => "right",
});

/// Placement region within a sidebar column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Slot {
    /// Fixed at the top of the column
    #[default]
    Top,
    /// Scrolls with the page and sticks once reached
    Sticky,
}

keyword_enum!(Slot, "widget slot", {
    Top => "top",
    Sticky => "sticky",
});

/// Responsive breakpoint category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

keyword_enum!(DeviceClass, "device class", {
    Mobile => "mobile",
    Tablet => "tablet",
    Desktop => "desktop",
});

/// How the sidebar is presented on a device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum LayoutMode {
    Hidden,
    Bottom,
    Drawer,
    #[default]
    Sidebar,
}

keyword_enum!(LayoutMode, "layout mode", {
    Hidden => "hidden",
    Bottom => "bottom",
    Drawer => "drawer",
    Sidebar => "sidebar",
});

/// Configured sidebar arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SidebarPosition {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "left"))]
    LeftOnly,
    #[cfg_attr(feature = "serde", serde(rename = "both"))]
    BothSides,
}

keyword_enum!(SidebarPosition, "sidebar position", {
    LeftOnly => "left",
    BothSides => "both",
});

/// One value per device class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceMap<T> {
    pub mobile: T,
    pub tablet: T,
    pub desktop: T,
}

impl<T> DeviceMap<T> {
    /// Build a map by evaluating `f` for every device class.
    pub fn from_fn(mut f: impl FnMut(DeviceClass) -> T) -> Self {
        Self {
            mobile: f(DeviceClass::Mobile),
            tablet: f(DeviceClass::Tablet),
            desktop: f(DeviceClass::Desktop),
        }
    }

    /// Get the value for a device class.
    pub fn get(&self, device: DeviceClass) -> &T {
        match device {
            DeviceClass::Mobile => &self.mobile,
            DeviceClass::Tablet => &self.tablet,
            DeviceClass::Desktop => &self.desktop,
        }
    }

    /// Transform every entry.
    pub fn map<U>(&self, mut f: impl FnMut(DeviceClass, &T) -> U) -> DeviceMap<U> {
        DeviceMap::from_fn(|device| f(device, self.get(device)))
    }

    /// Iterate entries from smallest to largest device class.
    pub fn iter(&self) -> impl Iterator<Item = (DeviceClass, &T)> {
        DeviceClass::ALL.iter().map(move |&device| (device, self.get(device)))
    }
}

/// Viewport widths (in CSS pixels) at which the device class changes.
///
/// The resolver never looks at pixel widths; this is for the viewport
/// collaborators that hand it an already classified [`DeviceClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    /// Smallest width treated as a tablet
    pub tablet_min_px: u32,
    /// Smallest width treated as a desktop
    pub desktop_min_px: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet_min_px: 768,
            desktop_min_px: 1024,
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width.
    pub fn classify(&self, width_px: u32) -> DeviceClass {
        if width_px >= self.desktop_min_px {
            DeviceClass::Desktop
        } else if width_px >= self.tablet_min_px {
            DeviceClass::Tablet
        } else {
            DeviceClass::Mobile
        }
    }
}
