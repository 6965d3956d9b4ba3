/// Where the scroll position sits relative to a pin region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinPhase {
    Before,
    Pinned,
    After,
}

impl PinPhase {
    pub fn is_pinned(self) -> bool {
        self == PinPhase::Pinned
    }

    /// Positioning of the viewport-height frame inside a section that is
    /// `length` pixels taller than the viewport.
    pub fn frame_css(self, length: f64) -> String {
        match self {
            PinPhase::Before => "position: absolute; top: 0; left: 0;".to_string(),
            PinPhase::Pinned => "position: fixed; top: 0; left: 0;".to_string(),
            PinPhase::After => format!("position: absolute; top: {length:.0}px; left: 0;"),
        }
    }
}

/// A viewport-height section held in place while a wide strip inside it
/// translates horizontally with vertical scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinRegion {
    pub start: f64,
    pub content_width: f64,
    pub viewport_width: f64,
}

impl PinRegion {
    pub fn new(start: f64, content_width: f64, viewport_width: f64) -> Self {
        Self {
            start,
            content_width,
            viewport_width,
        }
    }

    /// Horizontal overflow of the strip, which is also the vertical scroll
    /// distance the region stays pinned for.
    pub fn length(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn end(&self) -> f64 {
        self.start + self.length()
    }

    pub fn phase(&self, scroll_pos: f64) -> PinPhase {
        if scroll_pos < self.start {
            PinPhase::Before
        } else if scroll_pos <= self.end() {
            PinPhase::Pinned
        } else {
            PinPhase::After
        }
    }

    pub fn progress(&self, scroll_pos: f64) -> f64 {
        let length = self.length();
        if length <= 0.0 {
            return if scroll_pos < self.start { 0.0 } else { 1.0 };
        }
        ((scroll_pos - self.start) / length).clamp(0.0, 1.0)
    }

    pub fn translation(&self, progress: f64) -> f64 {
        -self.length() * progress.clamp(0.0, 1.0)
    }

    pub fn translation_at(&self, scroll_pos: f64) -> f64 {
        self.translation(self.progress(scroll_pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> PinRegion {
        PinRegion::new(1000.0, 3200.0, 1280.0)
    }

    #[test]
    fn translation_spans_the_overflow() {
        let region = region();
        assert_eq!(region.translation(0.0), 0.0);
        assert_eq!(region.translation(1.0), -(3200.0 - 1280.0));
        assert_eq!(region.translation(0.5), -960.0);
    }

    #[test]
    fn phases_follow_the_pinned_interval() {
        let region = region();
        assert_eq!(region.phase(0.0), PinPhase::Before);
        assert_eq!(region.phase(1000.0), PinPhase::Pinned);
        assert_eq!(region.phase(1000.0 + 1920.0), PinPhase::Pinned);
        assert_eq!(region.phase(3000.0), PinPhase::After);
        assert!(region.phase(2000.0).is_pinned());
    }

    #[test]
    fn translation_holds_outside_the_region() {
        let region = region();
        assert_eq!(region.translation_at(0.0), 0.0);
        assert_eq!(region.translation_at(10_000.0), -1920.0);
        assert_eq!(region.translation_at(1480.0), -480.0);
    }

    #[test]
    fn frame_is_parked_at_the_bottom_after_release() {
        assert_eq!(
            PinPhase::After.frame_css(1920.0),
            "position: absolute; top: 1920px; left: 0;"
        );
        assert!(PinPhase::Pinned.frame_css(1920.0).contains("fixed"));
    }

    #[test]
    fn narrow_content_never_translates() {
        let region = PinRegion::new(500.0, 900.0, 1280.0);
        assert_eq!(region.length(), 0.0);
        assert_eq!(region.translation_at(600.0), 0.0);
        assert_eq!(region.translation(1.0), 0.0);
    }
}
