use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::scroll::binding::Geometry;
use crate::scroll::registry::{BindingTarget, TargetResolver};
use crate::scroll::style::Style;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no window available")]
    NoWindow,
    #[error("invalid selector `{0}`")]
    Selector(String),
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn viewport_size(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Document position from the `offsetTop` chain, so transforms written by
/// bindings do not feed back into their own trigger points.
pub fn document_geometry(element: &HtmlElement) -> Geometry {
    let mut top = 0.0;
    let mut current = Some(element.clone());
    while let Some(node) = current {
        top += f64::from(node.offset_top());
        current = node
            .offset_parent()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok());
    }
    Geometry {
        top,
        height: f64::from(element.offset_height()),
    }
}

pub struct DomTarget(HtmlElement);

impl DomTarget {
    pub fn element(&self) -> &HtmlElement {
        &self.0
    }
}

impl BindingTarget for DomTarget {
    fn apply_style(&self, style: &Style) {
        let css = self.0.style();
        let _ = css.set_property("opacity", &style.opacity_css());
        let _ = css.set_property("transform", &style.transform());
    }

    fn set_transition(&self, seconds: f64) {
        let css = self.0.style();
        let _ = css.set_property("will-change", "opacity, transform");
        if seconds > 0.0 {
            let _ = css.set_property(
                "transition",
                &format!("opacity {seconds}s ease-out, transform {seconds}s ease-out"),
            );
        } else {
            let _ = css.remove_property("transition");
        }
    }
}

/// Resolves selectors inside one component's rendered subtree.
pub struct DomResolver {
    window: Window,
    root: Element,
}

impl DomResolver {
    pub fn new(root: Element) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        Ok(Self { window, root })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn query_all(&self, selector: &str) -> Result<Vec<HtmlElement>, DomError> {
        let list = self
            .root
            .query_selector_all(selector)
            .map_err(|_| DomError::Selector(selector.to_string()))?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }
}

impl TargetResolver for DomResolver {
    type Target = DomTarget;

    fn resolve(&self, selector: &str) -> Vec<(DomTarget, Geometry)> {
        match self.query_all(selector) {
            Ok(elements) => elements
                .into_iter()
                .map(|el| {
                    let geometry = document_geometry(&el);
                    (DomTarget(el), geometry)
                })
                .collect(),
            Err(e) => {
                log::warn!("{}", e);
                Vec::new()
            }
        }
    }

    fn measure(&self, target: &DomTarget) -> Option<Geometry> {
        target
            .element()
            .is_connected()
            .then(|| document_geometry(target.element()))
    }

    fn viewport_height(&self) -> f64 {
        viewport_size(&self.window).1
    }
}
