//! Declarative scroll bindings and the pure functions that evaluate them.
//!
//! Scroll positions are document offsets in CSS pixels (`window.scrollY`).
//! A binding is evaluated as `style_at(scroll, binding, interval)` where the
//! interval is the binding's pair of trigger points resolved against the
//! target's measured geometry.

use crate::scroll::style::Style;

/// Where an element sits in the document, ignoring any applied transforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub top: f64,
    pub height: f64,
}

/// The scroll offset at which a point on the element meets a point on the
/// viewport. Both are fractions: `0.0` is the top edge, `1.0` the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerPoint {
    pub element: f64,
    pub viewport: f64,
}

impl TriggerPoint {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Element top reaches `viewport` (e.g. `0.85` = 85% down the screen).
    pub const fn top_at(viewport: f64) -> Self {
        Self::new(0.0, viewport)
    }

    /// Element bottom reaches `viewport`.
    pub const fn bottom_at(viewport: f64) -> Self {
        Self::new(1.0, viewport)
    }

    pub fn resolve(&self, geometry: &Geometry, viewport_height: f64) -> f64 {
        geometry.top + geometry.height * self.element - viewport_height * self.viewport
    }
}

/// A resolved scroll interval. Always satisfies `start < end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    pub fn new(start: f64, end: f64) -> Option<Self> {
        (start.is_finite() && end.is_finite() && start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BindingMode {
    /// Jumps from `from_style` to `to_style` once, animated over `duration`
    /// seconds, and never reverses.
    RevealOnce { duration: f64 },
    /// Tracks scroll position in both directions. `scrub` seconds of lag are
    /// applied as a CSS transition; zero follows the scrollbar exactly.
    Scrubbed { scrub: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollBinding {
    pub target_selector: String,
    pub start_offset: TriggerPoint,
    pub end_offset: TriggerPoint,
    pub from_style: Style,
    pub to_style: Style,
    pub mode: BindingMode,
}

impl ScrollBinding {
    /// Fade-and-rise reveal as the element enters the lower part of the
    /// viewport.
    pub fn reveal(selector: impl Into<String>) -> Self {
        Self {
            target_selector: selector.into(),
            start_offset: TriggerPoint::top_at(0.85),
            end_offset: TriggerPoint::top_at(0.6),
            from_style: Style::hidden().shifted(0.0, 40.0),
            to_style: Style::visible(),
            mode: BindingMode::RevealOnce { duration: 0.8 },
        }
    }

    pub fn scrubbed(selector: impl Into<String>, start: TriggerPoint, end: TriggerPoint) -> Self {
        Self {
            target_selector: selector.into(),
            start_offset: start,
            end_offset: end,
            from_style: Style::visible(),
            to_style: Style::visible(),
            mode: BindingMode::Scrubbed { scrub: 0.0 },
        }
    }

    pub fn start_style(mut self, style: Style) -> Self {
        self.from_style = style;
        self
    }

    pub fn end_style(mut self, style: Style) -> Self {
        self.to_style = style;
        self
    }

    pub fn between(mut self, start: TriggerPoint, end: TriggerPoint) -> Self {
        self.start_offset = start;
        self.end_offset = end;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        if let BindingMode::RevealOnce { duration } = &mut self.mode {
            *duration = seconds;
        }
        self
    }

    pub fn scrub_factor(mut self, seconds: f64) -> Self {
        if let BindingMode::Scrubbed { scrub } = &mut self.mode {
            *scrub = seconds.max(0.0);
        }
        self
    }

    pub fn is_reveal_once(&self) -> bool {
        matches!(self.mode, BindingMode::RevealOnce { .. })
    }

    /// Seconds of CSS transition applied to the target.
    pub fn transition_seconds(&self) -> f64 {
        match self.mode {
            BindingMode::RevealOnce { duration } => duration,
            BindingMode::Scrubbed { scrub } => scrub,
        }
    }

    pub fn resolve(&self, geometry: &Geometry, viewport_height: f64) -> Option<Interval> {
        Interval::new(
            self.start_offset.resolve(geometry, viewport_height),
            self.end_offset.resolve(geometry, viewport_height),
        )
    }
}

pub fn progress(scroll_pos: f64, interval: Interval) -> f64 {
    ((scroll_pos - interval.start) / (interval.end - interval.start)).clamp(0.0, 1.0)
}

pub fn style_at(scroll_pos: f64, binding: &ScrollBinding, interval: Interval) -> Style {
    binding
        .from_style
        .lerp(&binding.to_style, progress(scroll_pos, interval))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: f64, end: f64) -> Interval {
        Interval::new(start, end).expect("valid interval")
    }

    #[test]
    fn interval_rejects_empty_or_reversed_ranges() {
        assert!(Interval::new(10.0, 10.0).is_none());
        assert!(Interval::new(20.0, 10.0).is_none());
        assert!(Interval::new(f64::NAN, 10.0).is_none());
        assert!(Interval::new(0.0, 1.0).is_some());
    }

    #[test]
    fn progress_is_clamped() {
        let iv = interval(100.0, 300.0);
        assert_eq!(progress(0.0, iv), 0.0);
        assert_eq!(progress(100.0, iv), 0.0);
        assert_eq!(progress(200.0, iv), 0.5);
        assert_eq!(progress(300.0, iv), 1.0);
        assert_eq!(progress(5000.0, iv), 1.0);
    }

    #[test]
    fn trigger_points_resolve_against_viewport() {
        let geometry = Geometry {
            top: 1200.0,
            height: 400.0,
        };
        // top of element at 85% of an 800px viewport
        assert_eq!(TriggerPoint::top_at(0.85).resolve(&geometry, 800.0), 520.0);
        // bottom of element at top of viewport
        assert_eq!(TriggerPoint::bottom_at(0.0).resolve(&geometry, 800.0), 1600.0);
    }

    #[test]
    fn style_at_is_idempotent() {
        let binding = ScrollBinding::scrubbed(
            ".hero-content",
            TriggerPoint::top_at(0.0),
            TriggerPoint::bottom_at(0.0),
        )
        .end_style(Style::hidden().shifted(0.0, -80.0));
        let iv = interval(0.0, 600.0);
        let first = style_at(250.0, &binding, iv);
        let again = style_at(250.0, &binding, iv);
        assert_eq!(first, again);

        // scrolling away and back lands on the same style
        let _ = style_at(600.0, &binding, iv);
        assert_eq!(style_at(250.0, &binding, iv), first);
    }

    #[test]
    fn reveal_defaults_resolve_to_a_valid_interval() {
        let binding = ScrollBinding::reveal(".value-card");
        let geometry = Geometry {
            top: 900.0,
            height: 200.0,
        };
        let iv = binding.resolve(&geometry, 800.0).expect("interval");
        assert!(iv.start() < iv.end());
        assert!(binding.is_reveal_once());
        assert_eq!(binding.transition_seconds(), 0.8);
    }

    #[test]
    fn inverted_trigger_points_do_not_resolve() {
        let binding = ScrollBinding::reveal(".x")
            .between(TriggerPoint::top_at(0.2), TriggerPoint::top_at(0.9));
        let geometry = Geometry {
            top: 900.0,
            height: 200.0,
        };
        assert!(binding.resolve(&geometry, 800.0).is_none());
    }

    #[test]
    fn mode_specific_setters_only_touch_their_mode() {
        let reveal = ScrollBinding::reveal(".a").scrub_factor(2.0);
        assert_eq!(reveal.transition_seconds(), 0.8);

        let scrub = ScrollBinding::scrubbed(".b", TriggerPoint::top_at(1.0), TriggerPoint::top_at(0.0))
            .scrub_factor(0.5)
            .duration(3.0);
        assert_eq!(scrub.transition_seconds(), 0.5);
    }
}
