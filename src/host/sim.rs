use crate::foundation::core::{ElementRect, Viewport};
use crate::foundation::error::{ScrollyError, ScrollyResult};
use crate::host::source::GeometrySource;

/// Deterministic in-memory host for tests, demos, and the CLI.
///
/// Holds a single element placed in document space and a scroll position,
/// and derives the viewport-relative rectangle a real host would report:
/// `rect.top = element_top - scroll_y`. Unmounting makes `element_rect`
/// return `None`, which exercises the missing-element path of a session.
#[derive(Clone, Copy, Debug)]
pub struct SimHost {
    element_top: f64,
    element_height: f64,
    viewport: Viewport,
    scroll_y: f64,
    mounted: bool,
}

impl SimHost {
    /// Place an element at `element_top` document pixels with the given
    /// height, viewed through a viewport of `viewport_height` pixels.
    /// Scroll starts at 0 and the element starts mounted.
    pub fn new(
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> ScrollyResult<Self> {
        if !element_top.is_finite() {
            return Err(ScrollyError::validation("element_top must be finite"));
        }
        if !element_height.is_finite() || element_height < 0.0 {
            return Err(ScrollyError::validation(
                "element_height must be finite and >= 0",
            ));
        }
        Ok(Self {
            element_top,
            element_height,
            viewport: Viewport::new(viewport_height)?,
            scroll_y: 0.0,
            mounted: true,
        })
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Jump the scroll position. Non-finite values are ignored.
    pub fn set_scroll_y(&mut self, y: f64) {
        if y.is_finite() {
            self.scroll_y = y;
        }
    }

    /// Resize the viewport. Invalid heights are ignored.
    pub fn set_viewport_height(&mut self, height: f64) {
        if let Ok(viewport) = Viewport::new(height) {
            self.viewport = viewport;
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Mount or unmount the element without touching its geometry.
    pub fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }
}

impl GeometrySource for SimHost {
    fn element_rect(&self) -> Option<ElementRect> {
        if !self.mounted {
            return None;
        }
        Some(ElementRect::new(
            self.element_top - self.scroll_y,
            self.element_height,
        ))
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_geometry() {
        assert!(SimHost::new(f64::NAN, 100.0, 900.0).is_err());
        assert!(SimHost::new(0.0, -1.0, 900.0).is_err());
        assert!(SimHost::new(0.0, 100.0, -900.0).is_err());
    }

    #[test]
    fn derives_viewport_relative_top_from_scroll() {
        let mut host = SimHost::new(1000.0, 2000.0, 900.0).unwrap();
        let rect = host.element_rect().unwrap();
        assert_eq!(rect.top, 1000.0);
        assert_eq!(rect.height, 2000.0);

        host.set_scroll_y(1500.0);
        let rect = host.element_rect().unwrap();
        assert_eq!(rect.top, -500.0);
    }

    #[test]
    fn unmounted_element_reports_no_rect() {
        let mut host = SimHost::new(0.0, 100.0, 900.0).unwrap();
        host.set_mounted(false);
        assert!(host.element_rect().is_none());
        assert_eq!(host.viewport().height, 900.0);

        host.set_mounted(true);
        assert!(host.element_rect().is_some());
    }

    #[test]
    fn ignores_non_finite_scroll_and_bad_resize() {
        let mut host = SimHost::new(0.0, 100.0, 900.0).unwrap();
        host.set_scroll_y(f64::NAN);
        assert_eq!(host.scroll_y(), 0.0);
        host.set_viewport_height(-5.0);
        assert_eq!(host.viewport().height, 900.0);
        host.set_viewport_height(450.0);
        assert_eq!(host.viewport().height, 450.0);
    }
}
