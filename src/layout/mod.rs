//! Responsive layout math (pure).
//!
//! Column count from the viewport, card height from image orientation,
//! detail-view box size from the image aspect ratio, and masonry placement
//! of variable-height cards. No state; called on every render.

pub mod masonry;

pub use masonry::{masonry, MasonryLayout, Placement};

use crate::model::Orientation;

/// Minimum viewport width treated as a desktop-class display.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

/// Minimum viewport height treated as a tablet-class display.
pub const TABLET_MIN_HEIGHT: f64 = 768.0;

/// Card height for landscape images.
pub const LANDSCAPE_ITEM_HEIGHT: u32 = 250;
/// Card height for portrait images.
pub const PORTRAIT_ITEM_HEIGHT: u32 = 300;
/// Card height for square images.
pub const SQUARE_ITEM_HEIGHT: u32 = 200;

/// Share of viewport width available to the detail image on web-like
/// displays.
pub const WEB_DETAIL_WIDTH_PERCENT: f64 = 50.0;
/// Share of viewport width available to the detail image elsewhere.
pub const NATIVE_DETAIL_WIDTH_PERCENT: f64 = 92.0;

// ===== Viewport =====

/// Viewport dimensions in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f64,
    /// Height in logical pixels.
    pub height: f64,
}

impl Viewport {
    /// Viewport of `width` x `height` logical pixels.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `percentage` of the viewport width.
    pub fn wp(&self, percentage: f64) -> f64 {
        wp(percentage, self.width)
    }

    /// `percentage` of the viewport height.
    pub fn hp(&self, percentage: f64) -> f64 {
        hp(percentage, self.height)
    }

    /// Breakpoint tier for this viewport.
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::classify(self.width, self.height)
    }
}

/// `percentage` of `width`.
pub fn wp(percentage: f64, width: f64) -> f64 {
    percentage * width / 100.0
}

/// `percentage` of `height`.
pub fn hp(percentage: f64, height: f64) -> f64 {
    percentage * height / 100.0
}

// ===== Breakpoints =====

/// Device class derived from the viewport.
///
/// Tablet and Mobile currently lay out identically; they stay separate
/// rows so a dedicated tablet layout only needs a new column value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// At least 1024 wide.
    Desktop,
    /// At least 768 tall.
    Tablet,
    /// Anything smaller.
    Mobile,
}

impl Breakpoint {
    /// Tier for a viewport.
    pub fn classify(viewport_width: f64, viewport_height: f64) -> Self {
        if viewport_width >= DESKTOP_MIN_WIDTH {
            Breakpoint::Desktop
        } else if viewport_height >= TABLET_MIN_HEIGHT {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }

    /// Grid columns for this tier.
    pub fn columns(self) -> u16 {
        match self {
            Breakpoint::Desktop => 4,
            Breakpoint::Tablet => 2,
            Breakpoint::Mobile => 2,
        }
    }

    /// Whether the detail view should use the narrow, web-style width cap.
    pub fn is_web_like(self) -> bool {
        matches!(self, Breakpoint::Desktop)
    }
}

/// Grid column count for a viewport: 4 on desktop-class widths, else 2.
pub fn column_count(viewport_width: f64, viewport_height: f64) -> u16 {
    Breakpoint::classify(viewport_width, viewport_height).columns()
}

// ===== Item sizing =====

/// Grid card height for an image: a fixed value per orientation bucket.
pub fn item_height(image_height: u32, image_width: u32) -> u32 {
    match Orientation::from_dimensions(image_width, image_height) {
        Orientation::Landscape => LANDSCAPE_ITEM_HEIGHT,
        Orientation::Portrait => PORTRAIT_ITEM_HEIGHT,
        Orientation::Square => SQUARE_ITEM_HEIGHT,
    }
}

/// Box size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

/// Detail-view box for an image.
///
/// Width is capped at 50% (web-like) or 92% of the viewport. Height follows
/// the true aspect ratio; portrait images recompute width from that height
/// so the box never exceeds the cap. Degenerate dimensions (zero width or
/// height) are sized as squares.
pub fn detail_view_size(
    image_width: u32,
    image_height: u32,
    viewport_width: f64,
    web_like: bool,
) -> Size {
    let percent = if web_like {
        WEB_DETAIL_WIDTH_PERCENT
    } else {
        NATIVE_DETAIL_WIDTH_PERCENT
    };
    let max_width = wp(percent, viewport_width);

    if image_width == 0 || image_height == 0 {
        return Size {
            width: max_width,
            height: max_width,
        };
    }

    let aspect_ratio = f64::from(image_width) / f64::from(image_height);
    let height = max_width / aspect_ratio;
    let width = if aspect_ratio < 1.0 {
        height * aspect_ratio
    } else {
        max_width
    };

    Size { width, height }
}
