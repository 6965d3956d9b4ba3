use crate::config;
use crate::scroll::binding::{progress, style_at, Geometry, Interval, ScrollBinding};
use crate::scroll::style::Style;

/// An element a binding writes styles to.
pub trait BindingTarget {
    fn apply_style(&self, style: &Style);
    fn set_transition(&self, seconds: f64);
}

/// Finds and measures binding targets.
pub trait TargetResolver {
    type Target: BindingTarget;

    /// Every element matching `selector`, with its current geometry.
    fn resolve(&self, selector: &str) -> Vec<(Self::Target, Geometry)>;
    fn measure(&self, target: &Self::Target) -> Option<Geometry>;
    fn viewport_height(&self) -> f64;
}

struct Entry<T> {
    binding: ScrollBinding,
    target: T,
    interval: Option<Interval>,
    fired: bool,
    last: Option<Style>,
}

/// The active bindings of one mounted component.
pub struct BindingRegistry<R: TargetResolver> {
    resolver: R,
    entries: Vec<Entry<R::Target>>,
}

impl<R: TargetResolver> BindingRegistry<R> {
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            entries: Vec::new(),
        }
    }

    /// Binds every element matching the selector. Returns how many were bound.
    pub fn register(&mut self, binding: ScrollBinding) -> usize {
        let matches = self.resolver.resolve(&binding.target_selector);
        if matches.is_empty() {
            log::debug!("no element for `{}`, binding skipped", binding.target_selector);
            return 0;
        }
        let viewport_height = self.resolver.viewport_height();
        let mut bound = 0;
        for (target, geometry) in matches {
            let Some(interval) = binding.resolve(&geometry, viewport_height) else {
                log::warn!(
                    "binding for `{}` resolves to an empty interval, skipped",
                    binding.target_selector
                );
                continue;
            };
            if binding.is_reveal_once() {
                target.apply_style(&binding.from_style);
            }
            target.set_transition(binding.transition_seconds());
            self.entries.push(Entry {
                binding: binding.clone(),
                target,
                interval: Some(interval),
                fired: false,
                last: binding.is_reveal_once().then_some(binding.from_style),
            });
            bound += 1;
        }
        bound
    }

    pub fn register_all(&mut self, bindings: impl IntoIterator<Item = ScrollBinding>) -> usize {
        bindings.into_iter().map(|b| self.register(b)).sum()
    }

    pub fn update(&mut self, scroll_pos: f64) {
        for entry in &mut self.entries {
            let Some(interval) = entry.interval else {
                continue;
            };
            if entry.binding.is_reveal_once() {
                if !entry.fired && progress(scroll_pos, interval) > config::REVEAL_EPSILON {
                    entry.target.apply_style(&entry.binding.to_style);
                    entry.last = Some(entry.binding.to_style);
                    entry.fired = true;
                }
                continue;
            }
            let style = style_at(scroll_pos, &entry.binding, interval);
            if entry.last != Some(style) {
                entry.target.apply_style(&style);
                entry.last = Some(style);
            }
        }
    }

    /// Re-measures every target after layout changes.
    pub fn refresh(&mut self) {
        let viewport_height = self.resolver.viewport_height();
        for entry in &mut self.entries {
            entry.interval = self
                .resolver
                .measure(&entry.target)
                .and_then(|geometry| entry.binding.resolve(&geometry, viewport_height));
        }
    }

    /// Re-measures, then re-evaluates at the current position. Run on every
    /// layout change, including content above a target growing in place.
    pub fn relayout(&mut self, scroll_pos: f64) {
        self.refresh();
        self.update(scroll_pos);
    }

    pub fn teardown(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fired_count(&self) -> usize {
        self.entries.iter().filter(|e| e.fired).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::binding::TriggerPoint;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeElement {
        id: usize,
        writes: Rc<RefCell<Vec<Style>>>,
        transition: Rc<RefCell<Option<f64>>>,
    }

    impl BindingTarget for FakeElement {
        fn apply_style(&self, style: &Style) {
            self.writes.borrow_mut().push(*style);
        }

        fn set_transition(&self, seconds: f64) {
            *self.transition.borrow_mut() = Some(seconds);
        }
    }

    #[derive(Default)]
    struct FakePage {
        elements: HashMap<&'static str, Vec<FakeElement>>,
        geometry: Rc<RefCell<HashMap<usize, Geometry>>>,
    }

    impl FakePage {
        fn add(&mut self, selector: &'static str, id: usize, top: f64, height: f64) -> FakeElement {
            let element = FakeElement {
                id,
                ..Default::default()
            };
            self.geometry.borrow_mut().insert(id, Geometry { top, height });
            self.elements.entry(selector).or_default().push(element.clone());
            element
        }
    }

    impl TargetResolver for FakePage {
        type Target = FakeElement;

        fn resolve(&self, selector: &str) -> Vec<(FakeElement, Geometry)> {
            self.elements
                .get(selector)
                .into_iter()
                .flatten()
                .filter_map(|e| self.geometry.borrow().get(&e.id).map(|g| (e.clone(), *g)))
                .collect()
        }

        fn measure(&self, target: &FakeElement) -> Option<Geometry> {
            self.geometry.borrow().get(&target.id).copied()
        }

        fn viewport_height(&self) -> f64 {
            800.0
        }
    }

    #[test]
    fn missing_targets_are_skipped() {
        let mut registry = BindingRegistry::new(FakePage::default());
        assert_eq!(registry.register(ScrollBinding::reveal(".absent")), 0);
        assert!(registry.is_empty());
        registry.update(500.0);
        registry.teardown();
    }

    #[test]
    fn reveal_fires_once_across_back_and_forth_scrolling() {
        let mut page = FakePage::default();
        let card = page.add(".value-card", 1, 1000.0, 300.0);
        let mut registry = BindingRegistry::new(page);
        assert_eq!(registry.register(ScrollBinding::reveal(".value-card")), 1);

        // registration hides the element
        assert_eq!(card.writes.borrow().as_slice(), &[Style::hidden().shifted(0.0, 40.0)]);
        assert_eq!(*card.transition.borrow(), Some(0.8));

        for pos in [0.0, 200.0, 400.0, 0.0, 800.0, 0.0, 1200.0] {
            registry.update(pos);
        }
        assert_eq!(registry.fired_count(), 1);
        let writes = card.writes.borrow();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[1], Style::visible());
    }

    #[test]
    fn reveal_fires_immediately_when_mounted_past_threshold() {
        let mut page = FakePage::default();
        let card = page.add(".team-member", 1, 300.0, 200.0);
        let mut registry = BindingRegistry::new(page);
        registry.register(ScrollBinding::reveal(".team-member"));
        registry.update(2000.0);
        assert_eq!(registry.fired_count(), 1);
        assert_eq!(card.writes.borrow().last(), Some(&Style::visible()));
    }

    #[test]
    fn scrubbed_binding_reverses_and_skips_redundant_writes() {
        let mut page = FakePage::default();
        let hero = page.add(".hero-content", 1, 0.0, 800.0);
        let mut registry = BindingRegistry::new(page);
        let binding = ScrollBinding::scrubbed(
            ".hero-content",
            TriggerPoint::top_at(0.0),
            TriggerPoint::bottom_at(0.0),
        )
        .end_style(Style::hidden())
        .scrub_factor(0.3);
        registry.register(binding);
        assert_eq!(*hero.transition.borrow(), Some(0.3));

        registry.update(400.0);
        registry.update(400.0);
        registry.update(800.0);
        registry.update(400.0);
        let writes = hero.writes.borrow();
        assert_eq!(writes.len(), 3);
        assert_eq!(writes[0], writes[2]);
        assert!((writes[0].opacity - 0.5).abs() < 1e-9);
        assert_eq!(writes[1].opacity, 0.0);
    }

    #[test]
    fn every_matching_element_is_bound() {
        let mut page = FakePage::default();
        page.add(".value-card", 1, 1000.0, 300.0);
        page.add(".value-card", 2, 1400.0, 300.0);
        page.add(".value-card", 3, 1800.0, 300.0);
        let mut registry = BindingRegistry::new(page);
        assert_eq!(registry.register_all([ScrollBinding::reveal(".value-card")]), 3);

        registry.update(800.0);
        assert_eq!(registry.fired_count(), 2);
    }

    #[test]
    fn refresh_uses_new_geometry() {
        let mut page = FakePage::default();
        page.add(".value-card", 1, 1000.0, 300.0);
        let geometry = page.geometry.clone();
        let mut registry = BindingRegistry::new(page);
        registry.register(ScrollBinding::reveal(".value-card"));

        // images above finished loading and pushed the card down
        geometry.borrow_mut().insert(1, Geometry { top: 3000.0, height: 300.0 });
        registry.refresh();
        registry.update(500.0);
        assert_eq!(registry.fired_count(), 0);
        registry.update(2400.0);
        assert_eq!(registry.fired_count(), 1);
    }

    #[test]
    fn section_growing_above_defers_reveal_below() {
        let mut page = FakePage::default();
        let cta = page.add(".cta-block", 1, 1000.0, 300.0);
        let geometry = page.geometry.clone();
        let mut registry = BindingRegistry::new(page);
        registry.register(ScrollBinding::reveal(".cta-block"));
        registry.update(0.0);

        // a pinned strip above settles its height and adds 1920px
        geometry.borrow_mut().insert(1, Geometry { top: 2920.0, height: 300.0 });
        registry.relayout(0.0);
        registry.update(500.0);
        assert_eq!(registry.fired_count(), 0);
        assert_eq!(cta.writes.borrow().len(), 1);

        registry.update(2300.0);
        assert_eq!(registry.fired_count(), 1);
    }

    #[test]
    fn stale_geometry_reveals_early() {
        let mut page = FakePage::default();
        page.add(".cta-block", 1, 1000.0, 300.0);
        let geometry = page.geometry.clone();
        let mut registry = BindingRegistry::new(page);
        registry.register(ScrollBinding::reveal(".cta-block"));

        geometry.borrow_mut().insert(1, Geometry { top: 2920.0, height: 300.0 });
        registry.update(500.0);
        assert_eq!(registry.fired_count(), 1);
    }

    #[test]
    fn relayout_rewinds_scrubbed_targets_to_new_offsets() {
        let mut page = FakePage::default();
        let card = page.add(".team-member", 1, 1000.0, 200.0);
        let geometry = page.geometry.clone();
        let mut registry = BindingRegistry::new(page);
        registry.register(ScrollBinding::scrubbed(
            ".team-member",
            TriggerPoint::top_at(1.0),
            TriggerPoint::top_at(0.6),
        )
        .start_style(Style::hidden()));
        registry.update(600.0);
        assert_eq!(card.writes.borrow().last(), Some(&Style::visible()));

        geometry.borrow_mut().insert(1, Geometry { top: 3000.0, height: 200.0 });
        registry.relayout(600.0);
        assert_eq!(card.writes.borrow().last(), Some(&Style::hidden()));
    }

    #[test]
    fn resolvers_only_see_their_own_subtree() {
        let mut about = FakePage::default();
        let about_heading = about.add(".team-heading", 1, 1000.0, 100.0);
        let mut home = FakePage::default();
        let home_card = home.add(".value-card", 2, 1000.0, 300.0);

        let mut about_registry = BindingRegistry::new(about);
        let mut home_registry = BindingRegistry::new(home);
        assert_eq!(about_registry.register(ScrollBinding::reveal(".value-card")), 0);
        assert_eq!(home_registry.register(ScrollBinding::reveal(".team-heading")), 0);
        assert_eq!(about_registry.register(ScrollBinding::reveal(".team-heading")), 1);

        about_registry.update(2000.0);
        home_registry.update(2000.0);
        assert_eq!(about_heading.writes.borrow().len(), 2);
        assert!(home_card.writes.borrow().is_empty());
    }

    #[test]
    fn unmeasurable_targets_become_inert_after_refresh() {
        let mut page = FakePage::default();
        let card = page.add(".value-card", 1, 1000.0, 300.0);
        let geometry = page.geometry.clone();
        let mut registry = BindingRegistry::new(page);
        registry.register(ScrollBinding::reveal(".value-card"));

        geometry.borrow_mut().remove(&1);
        registry.refresh();
        registry.update(5000.0);
        assert_eq!(registry.fired_count(), 0);
        assert_eq!(card.writes.borrow().len(), 1);
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut page = FakePage::default();
        page.add(".value-card", 1, 1000.0, 300.0);
        let mut registry = BindingRegistry::new(page);
        registry.register(ScrollBinding::reveal(".value-card"));
        registry.teardown();
        registry.teardown();
        assert_eq!(registry.len(), 0);
        registry.update(2000.0);
        assert_eq!(registry.fired_count(), 0);
    }
}
