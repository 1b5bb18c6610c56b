//! Click-to-zoom for the blueprint viewer.
//!
//! The image starts fitted to the viewport. Clicking swaps in the
//! full-resolution rendition and scrolls the container so the pixel under the
//! pointer stays under the pointer. Clicking again returns to the fitted
//! layout.

use serde::Serialize;

use crate::models::BlueprintRecord;

/// A point in the host's client coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Layout box in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

/// Geometry captured at the moment of the click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomClick {
    pub pointer: Point,
    /// The displayed (possibly downscaled) image.
    pub image: Rect,
    /// The scrollable container the full-resolution image will live in.
    pub container: Rect,
}

/// Scroll offset that keeps the clicked pixel under the pointer once the
/// image is shown at `full` size. Never negative, never past the far edge.
#[must_use]
pub fn anchor_scroll_offset(click: &ZoomClick, full: ImageSize) -> ScrollOffset {
    ScrollOffset {
        left: axis_offset(
            click.pointer.x,
            click.image.left,
            click.image.width,
            click.container.left,
            click.container.width,
            full.width,
        ),
        top: axis_offset(
            click.pointer.y,
            click.image.top,
            click.image.height,
            click.container.top,
            click.container.height,
            full.height,
        ),
    }
}

fn axis_offset(
    pointer: f64,
    image_start: f64,
    image_extent: f64,
    container_start: f64,
    container_extent: f64,
    full_extent: u32,
) -> f64 {
    let fraction = if image_extent > 0.0 {
        ((pointer - image_start) / image_extent).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let full_extent = f64::from(full_extent);
    let anchor = (full_extent * fraction).trunc();
    let in_container = pointer - container_start;
    let max_scroll = (full_extent - container_extent).max(0.0);
    (anchor - in_container).clamp(0.0, max_scroll)
}

/// Receives the scroll offset as the zoomed layout is applied.
pub trait ScrollSurface {
    fn scroll_to(&mut self, offset: ScrollOffset);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ZoomState {
    #[default]
    Fitted,
    Zoomed {
        scroll: ScrollOffset,
    },
}

impl ZoomState {
    #[must_use]
    pub const fn is_zoomed(&self) -> bool {
        matches!(self, Self::Zoomed { .. })
    }
}

/// Zoom state of one open image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageViewer {
    full_size: Option<ImageSize>,
    state: ZoomState,
}

impl ImageViewer {
    #[must_use]
    pub const fn new(full_size: Option<ImageSize>) -> Self {
        Self {
            full_size,
            state: ZoomState::Fitted,
        }
    }

    /// Viewer for the blueprint's full-resolution rendition. Without one the
    /// viewer can never leave the fitted state.
    #[must_use]
    pub fn for_blueprint(blueprint: &BlueprintRecord) -> Self {
        Self::new(blueprint.full_image().map(|image| ImageSize {
            width: image.width,
            height: image.height,
        }))
    }

    #[must_use]
    pub const fn state(&self) -> ZoomState {
        self.state
    }

    /// Flips between fitted and zoomed. Entering the zoomed state scrolls
    /// `surface` in the same step.
    pub fn toggle(&mut self, click: &ZoomClick, surface: &mut impl ScrollSurface) -> ZoomState {
        self.state = match (self.state, self.full_size) {
            (ZoomState::Zoomed { .. }, _) => ZoomState::Fitted,
            (ZoomState::Fitted, None) => ZoomState::Fitted,
            (ZoomState::Fitted, Some(full)) => {
                let scroll = anchor_scroll_offset(click, full);
                surface.scroll_to(scroll);
                ZoomState::Zoomed { scroll }
            }
        };
        self.state
    }
}
