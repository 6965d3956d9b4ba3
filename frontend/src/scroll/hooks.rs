use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, Window};
use yew::prelude::*;

use crate::scroll::binding::ScrollBinding;
use crate::scroll::dom::{document_geometry, scroll_y, viewport_size, DomResolver};
use crate::scroll::pin::{PinPhase, PinRegion};
use crate::scroll::registry::BindingRegistry;

/// Dispatched on the window when a component changes its own rendered
/// height, so bindings further down the page re-measure.
pub const CONTENT_RESIZE_EVENT: &str = "contentresize";

const LAYOUT_EVENTS: [&str; 3] = ["resize", "load", CONTENT_RESIZE_EVENT];

/// Scroll and layout listeners on the window, removed when dropped.
struct WindowListeners {
    window: Window,
    on_scroll: Closure<dyn Fn()>,
    on_layout: Closure<dyn Fn()>,
}

impl WindowListeners {
    fn attach(window: Window, on_scroll: Closure<dyn Fn()>, on_layout: Closure<dyn Fn()>) -> Self {
        let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        for event in LAYOUT_EVENTS {
            let _ = window.add_event_listener_with_callback(event, on_layout.as_ref().unchecked_ref());
        }
        Self {
            window,
            on_scroll,
            on_layout,
        }
    }
}

impl Drop for WindowListeners {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        for event in LAYOUT_EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.on_layout.as_ref().unchecked_ref());
        }
    }
}

fn notify_content_resized(window: &Window) {
    match Event::new(CONTENT_RESIZE_EVENT) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(e) => log::warn!("could not create {} event: {:?}", CONTENT_RESIZE_EVENT, e),
    }
}

/// Registers the bindings returned by `build` against the subtree under
/// `root` once the component has rendered, and tears every one of them
/// down when it unmounts.
#[hook]
pub fn use_scroll_bindings<F>(root: NodeRef, build: F)
where
    F: FnOnce() -> Vec<ScrollBinding> + 'static,
{
    use_effect_with_deps(
        move |_| {
            let resolver = match root.cast::<Element>() {
                Some(root) => DomResolver::new(root),
                None => {
                    log::debug!("binding root not rendered, scroll bindings skipped");
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                }
            };
            let destructor: Box<dyn FnOnce()> = match resolver {
                Ok(resolver) => {
                    let window = resolver.window().clone();
                    let registry = Rc::new(RefCell::new(BindingRegistry::new(resolver)));
                    let bound = registry.borrow_mut().register_all(build());
                    log::debug!("{} scroll bindings active", bound);
                    registry.borrow_mut().update(scroll_y(&window));

                    let on_scroll = {
                        let registry = registry.clone();
                        let window = window.clone();
                        Closure::<dyn Fn()>::new(move || {
                            registry.borrow_mut().update(scroll_y(&window));
                        })
                    };
                    let on_layout = {
                        let registry = registry.clone();
                        let window = window.clone();
                        Closure::<dyn Fn()>::new(move || {
                            registry.borrow_mut().relayout(scroll_y(&window));
                        })
                    };
                    let listeners = WindowListeners::attach(window, on_scroll, on_layout);
                    Box::new(move || {
                        drop(listeners);
                        registry.borrow_mut().teardown();
                    })
                }
                Err(e) => {
                    log::warn!("scroll bindings disabled: {}", e);
                    Box::new(|| ())
                }
            };
            destructor
        },
        (),
    );
}

struct PinDriver {
    region: Option<PinRegion>,
    phase: Cell<Option<PinPhase>>,
}

impl PinDriver {
    fn measure(&mut self, window: &Window, section: &HtmlElement, strip: &HtmlElement) -> f64 {
        let (viewport_width, _) = viewport_size(window);
        let region = PinRegion::new(
            document_geometry(section).top,
            f64::from(strip.scroll_width()),
            viewport_width,
        );
        self.region = Some(region);
        self.phase.set(None);
        region.length()
    }

    fn update(&self, scroll_pos: f64, frame: &HtmlElement, strip: &HtmlElement) {
        let Some(region) = self.region else {
            return;
        };
        let phase = region.phase(scroll_pos);
        if self.phase.get() != Some(phase) {
            let _ = frame.set_attribute("style", &phase.frame_css(region.length()));
            self.phase.set(Some(phase));
        }
        let _ = strip.style().set_property(
            "transform",
            &format!("translate3d({:.2}px, 0, 0)", region.translation_at(scroll_pos)),
        );
    }
}

/// Drives one pin region. Returns the extra scroll distance the section
/// must add to its own height for the strip to travel its full width.
///
/// Every change of that distance moves whatever follows the section, so it
/// is announced with [`CONTENT_RESIZE_EVENT`] once the new height is in
/// the DOM.
#[hook]
pub fn use_pin_region(section: NodeRef, frame: NodeRef, strip: NodeRef) -> f64 {
    let length = use_state_eq(|| 0.0_f64);

    use_effect_with_deps(
        |length| {
            if *length > 0.0 {
                if let Some(window) = web_sys::window() {
                    log::debug!("pin region now {:.0}px long", length);
                    notify_content_resized(&window);
                }
            }
            || ()
        },
        *length,
    );

    {
        let length = length.clone();
        use_effect_with_deps(
            move |_| {
                let elements = web_sys::window().zip(
                    section
                        .cast::<HtmlElement>()
                        .zip(frame.cast::<HtmlElement>())
                        .zip(strip.cast::<HtmlElement>()),
                );
                let destructor: Box<dyn FnOnce()> = match elements {
                    Some((window, ((section, frame), strip))) => {
                        let driver = Rc::new(RefCell::new(PinDriver {
                            region: None,
                            phase: Cell::new(None),
                        }));
                        length.set(driver.borrow_mut().measure(&window, &section, &strip));
                        driver.borrow().update(scroll_y(&window), &frame, &strip);

                        let on_scroll = {
                            let driver = driver.clone();
                            let window = window.clone();
                            let frame = frame.clone();
                            let strip = strip.clone();
                            Closure::<dyn Fn()>::new(move || {
                                driver.borrow().update(scroll_y(&window), &frame, &strip);
                            })
                        };
                        let on_layout = {
                            let window = window.clone();
                            Closure::<dyn Fn()>::new(move || {
                                let mut driver = driver.borrow_mut();
                                length.set(driver.measure(&window, &section, &strip));
                                driver.update(scroll_y(&window), &frame, &strip);
                            })
                        };
                        let listeners = WindowListeners::attach(window, on_scroll, on_layout);
                        Box::new(move || drop(listeners))
                    }
                    None => {
                        log::debug!("pin region not rendered, skipped");
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    *length
}

/// Scroll to top only on initial mount.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}
