//! Placement of the floating submenu beside a collapsed sidebar item.
//!
//! The overlay is detached from the sidebar (rendered into `<body>`) so it is
//! not clipped, and is kept aligned with its anchor by re-measuring on scroll
//! and resize.

use tracing::trace;

/// Width of the floating submenu in pixels.
pub const SUBMENU_WIDTH_PX: f64 = 224.0;
/// Stacking order of the floating submenu.
pub const SUBMENU_Z_INDEX: i32 = 9999;

/// An element's box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl Rect {
    /// Build a rect from origin and size.
    #[must_use]
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Box width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Box height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Fixed-position placement of the floating submenu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmenuPlacement {
    /// Distance from the viewport's left edge.
    pub left: f64,
    /// Distance from the viewport's top edge.
    pub top: f64,
    /// Overlay width.
    pub width: f64,
    /// Stacking order.
    pub z_index: i32,
}

impl SubmenuPlacement {
    /// Place the overlay flush against the anchor's right edge, top-aligned.
    #[must_use]
    pub const fn anchored_to(anchor: Rect) -> Self {
        Self {
            left: anchor.right,
            top: anchor.top,
            width: SUBMENU_WIDTH_PX,
            z_index: SUBMENU_Z_INDEX,
        }
    }

    /// Inline CSS for the overlay element.
    #[must_use]
    pub fn to_style(&self) -> String {
        format!(
            "position: fixed; left: {}px; top: {}px; width: {}px; z-index: {}",
            self.left, self.top, self.width, self.z_index
        )
    }
}

/// Something that can report its current viewport box.
///
/// Measurement fails when the element is gone (unmounted or detached).
#[cfg_attr(test, mockall::automock)]
pub trait AnchorSource {
    /// Current box of the anchor element.
    fn measure(&self) -> Option<Rect>;
}

/// Keeps a floating submenu aligned with its anchor.
#[derive(Debug)]
pub struct PositionTracker<A> {
    anchor: A,
    placement: Option<SubmenuPlacement>,
}

impl<A: AnchorSource> PositionTracker<A> {
    /// Create a tracker and take the first measurement.
    pub fn new(anchor: A) -> Self {
        let mut tracker = Self {
            anchor,
            placement: None,
        };
        tracker.refresh();
        tracker
    }

    /// Re-measure the anchor. Called on scroll and resize.
    ///
    /// A failed measurement clears the placement so nothing is rendered.
    pub fn refresh(&mut self) -> Option<SubmenuPlacement> {
        self.placement = self.anchor.measure().map(SubmenuPlacement::anchored_to);
        trace!(placement = ?self.placement, "Refreshed submenu placement");
        self.placement
    }

    /// The most recent placement.
    #[must_use]
    pub const fn placement(&self) -> Option<SubmenuPlacement> {
        self.placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::from_origin_size(8.0, 100.0, 64.0, 44.0);
        assert_eq!(rect.right, 72.0);
        assert_eq!(rect.bottom, 144.0);
        assert_eq!(rect.width(), 64.0);
        assert_eq!(rect.height(), 44.0);
    }

    #[test]
    fn test_anchored_to_right_edge() {
        let placement = SubmenuPlacement::anchored_to(Rect::from_origin_size(8.0, 120.0, 64.0, 44.0));
        assert_eq!(placement.left, 72.0);
        assert_eq!(placement.top, 120.0);
        assert_eq!(placement.width, SUBMENU_WIDTH_PX);
        assert_eq!(placement.z_index, SUBMENU_Z_INDEX);
    }

    #[test]
    fn test_style_string() {
        let placement = SubmenuPlacement::anchored_to(Rect::from_origin_size(0.0, 10.5, 80.0, 40.0));
        assert_eq!(
            placement.to_style(),
            "position: fixed; left: 80px; top: 10.5px; width: 224px; z-index: 9999"
        );
    }

    #[test]
    fn test_tracker_measures_on_creation() {
        let mut anchor = MockAnchorSource::new();
        anchor
            .expect_measure()
            .times(1)
            .returning(|| Some(Rect::from_origin_size(8.0, 50.0, 64.0, 44.0)));

        let tracker = PositionTracker::new(anchor);
        assert_eq!(tracker.placement().map(|p| p.left), Some(72.0));
    }

    #[test]
    fn test_tracker_follows_scroll() {
        let mut seq = Sequence::new();
        let mut anchor = MockAnchorSource::new();
        anchor
            .expect_measure()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Some(Rect::from_origin_size(8.0, 200.0, 64.0, 44.0)));
        anchor
            .expect_measure()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Some(Rect::from_origin_size(8.0, 150.0, 64.0, 44.0)));

        let mut tracker = PositionTracker::new(anchor);
        assert_eq!(tracker.placement().map(|p| p.top), Some(200.0));

        let placement = tracker.refresh();
        assert_eq!(placement.map(|p| p.top), Some(150.0));
        assert_eq!(tracker.placement(), placement);
    }

    #[test]
    fn test_tracker_clears_when_anchor_lost() {
        let mut seq = Sequence::new();
        let mut anchor = MockAnchorSource::new();
        anchor
            .expect_measure()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Some(Rect::default()));
        anchor
            .expect_measure()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| None);

        let mut tracker = PositionTracker::new(anchor);
        assert!(tracker.placement().is_some());
        assert!(tracker.refresh().is_none());
        assert!(tracker.placement().is_none());
    }
}
