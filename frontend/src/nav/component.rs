use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, Node};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::*;

use crate::config;
use crate::nav::menu::{MenuItem, MAIN_MENU};
use crate::nav::scroll_lock::{page_lock, LockSlot};
use crate::nav::state::{Language, Layout, NavAction, NavState};
use crate::Route;

fn current_layout() -> Layout {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(Layout::from_width)
        .unwrap_or(Layout::Desktop)
}

fn scrolled_past_threshold() -> bool {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .map(|y| y > config::NAV_SCROLLED_THRESHOLD_PX)
        .unwrap_or(false)
}

fn is_inside(target: &Node, node_ref: &NodeRef) -> bool {
    node_ref
        .get()
        .map(|node| node.contains(Some(target)))
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    /// Told the active language on mount and after every toggle.
    #[prop_or_default]
    pub on_language_change: Callback<Language>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let path = use_location()
        .map(|l| l.path().to_string())
        .unwrap_or_else(|| "/".to_string());
    let state = {
        let path = path.clone();
        use_reducer(move || NavState::new(&path, current_layout()))
    };
    let is_scrolled = use_state(scrolled_past_threshold);
    let lock_slot = use_mut_ref(|| LockSlot::new(page_lock()));
    let panel_ref = use_node_ref();
    let trigger_ref = use_node_ref();

    // Every navigation resets both menus
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |path| {
                dispatcher.dispatch(NavAction::RouteChanged(path.clone()));
                || ()
            },
            path,
        );
    }

    // Page scroll stays suspended exactly while the menu is open
    {
        let lock_slot = lock_slot.clone();
        use_effect_with_deps(
            move |open| {
                lock_slot.borrow_mut().sync(*open);
                move || lock_slot.borrow_mut().release()
            },
            state.menu_open(),
        );
    }

    // Hover-out grace timer, dropped (and so cancelled) when the ticket changes
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |pending| {
                let timeout = pending.map(|ticket| {
                    Timeout::new(config::HOVER_GRACE_MS, move || {
                        dispatcher.dispatch(NavAction::HoverGraceElapsed(ticket));
                    })
                });
                move || drop(timeout)
            },
            state.pending_close(),
        );
    }

    // Outside pointer-down closes the submenu
    {
        let dispatcher = state.dispatcher();
        let panel_ref = panel_ref.clone();
        let trigger_ref = trigger_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback = Closure::<dyn Fn(Event)>::new(move |e: Event| {
                            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok())
                            else {
                                return;
                            };
                            if !is_inside(&target, &panel_ref) && !is_inside(&target, &trigger_ref) {
                                dispatcher.dispatch(NavAction::OutsidePointerDown);
                            }
                        });
                        let _ = document.add_event_listener_with_callback(
                            "pointerdown",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "pointerdown",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    } else {
                        Box::new(|| ())
                    };
                move || destructor()
            },
            (),
        );
    }

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            is_scrolled.set(scrolled_past_threshold());
        });
    }
    {
        let dispatcher = state.dispatcher();
        use_event_with_window("resize", move |_: Event| {
            dispatcher.dispatch(NavAction::LayoutChanged(current_layout()));
        });
    }
    {
        let dispatcher = state.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                dispatcher.dispatch(NavAction::Escape);
            }
        });
    }

    {
        let on_language_change = props.on_language_change.clone();
        use_effect_with_deps(
            move |language| {
                if let Some(root) = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", language.code());
                }
                on_language_change.emit(*language);
                || ()
            },
            state.language,
        );
    }

    let dispatch = |action: NavAction| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(action.clone()))
    };

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            state.dispatch(NavAction::ToggleMenu);
        })
    };

    let toggle_submenu = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            state.dispatch(NavAction::ToggleSubmenu);
        })
    };

    let language = state.language;
    let render_item = |item: &MenuItem| -> Html {
        let active = item.is_active(&state.active_route);
        let label = item.label.get(language);
        if item.has_children() {
            let open = state.services_open();
            html! {
                <li class={classes!("nav-item", "has-submenu", active.then(|| "active"))}>
                    <button
                        ref={trigger_ref.clone()}
                        class="submenu-trigger"
                        aria-haspopup="true"
                        aria-expanded={open.to_string()}
                        onclick={toggle_submenu.clone()}
                        onmouseenter={dispatch(NavAction::HoverEnterSubmenu)}
                        onmouseleave={dispatch(NavAction::HoverLeaveSubmenu)}
                    >
                        {label}
                        <span class={classes!("chevron", open.then(|| "open"))}>{"▾"}</span>
                    </button>
                    <div
                        ref={panel_ref.clone()}
                        class={classes!("mega-menu", open.then(|| "open"))}
                        onmouseenter={dispatch(NavAction::HoverEnterSubmenu)}
                        onmouseleave={dispatch(NavAction::HoverLeaveSubmenu)}
                    >
                        { for item.children.iter().map(|child| render_link(child, language.code(), child.label.get(language), &state.active_route)) }
                    </div>
                </li>
            }
        } else {
            html! {
                <li class={classes!("nav-item", active.then(|| "active"))}>
                    { render_link(item, language.code(), label, &state.active_route) }
                </li>
            }
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"), state.menu_open().then(|| "menu-open"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"estudio norte"}
                </Link<Route>>

                <button
                    class="burger-menu"
                    aria-label="menu"
                    aria-expanded={state.menu_open().to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                {
                    if state.menu_open() {
                        html! { <div class="nav-overlay" onclick={dispatch(NavAction::CloseMenu)}></div> }
                    } else {
                        html! {}
                    }
                }
                <div class={classes!("nav-right", state.menu_open().then(|| "mobile-menu-open"))}>
                    <ul class="nav-items">
                        { for MAIN_MENU.iter().map(render_item) }
                    </ul>
                    <button class="lang-toggle" onclick={dispatch(NavAction::ToggleLanguage)}>
                        { language.toggled().code().to_uppercase() }
                    </button>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1.25rem 2rem;
                        transition: background 0.3s ease, padding 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(12, 12, 14, 0.92);
                        backdrop-filter: blur(10px);
                        padding: 0.75rem 2rem;
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 700;
                        letter-spacing: 0.05em;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-items {
                        display: flex;
                        gap: 1.5rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-item {
                        position: relative;
                    }
                    .nav-link, .submenu-trigger {
                        color: #ddd;
                        background: none;
                        border: none;
                        font: inherit;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .nav-item.active > .nav-link,
                    .nav-item.active > .submenu-trigger {
                        color: #7EB2FF;
                    }
                    .chevron {
                        display: inline-block;
                        margin-left: 0.25rem;
                        transition: transform 0.2s ease;
                    }
                    .chevron.open {
                        transform: rotate(180deg);
                    }
                    .mega-menu {
                        position: absolute;
                        top: calc(100% + 12px);
                        left: 50%;
                        transform: translateX(-50%);
                        display: grid;
                        grid-template-columns: repeat(2, minmax(180px, 1fr));
                        gap: 0.5rem;
                        padding: 1rem;
                        background: #141418;
                        border: 1px solid rgba(126, 178, 255, 0.15);
                        border-radius: 16px;
                        opacity: 0;
                        visibility: hidden;
                        transition: opacity 0.2s ease, visibility 0.2s ease;
                    }
                    .mega-menu.open {
                        opacity: 1;
                        visibility: visible;
                    }
                    .mega-menu .nav-link {
                        display: flex;
                        gap: 0.5rem;
                        padding: 0.5rem 0.75rem;
                        border-radius: 8px;
                    }
                    .mega-menu .nav-link:hover {
                        background: rgba(126, 178, 255, 0.08);
                    }
                    .lang-toggle {
                        background: none;
                        border: 1px solid #555;
                        border-radius: 999px;
                        color: #ddd;
                        padding: 0.25rem 0.75rem;
                        cursor: pointer;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                        z-index: 102;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #fff;
                    }
                    .nav-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.5);
                        z-index: 100;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            position: fixed;
                            top: 0;
                            right: 0;
                            bottom: 0;
                            width: min(320px, 85vw);
                            flex-direction: column;
                            align-items: flex-start;
                            padding: 5rem 2rem 2rem;
                            background: #0c0c0e;
                            transform: translateX(100%);
                            transition: transform 0.3s ease;
                            z-index: 101;
                        }
                        .nav-right.mobile-menu-open {
                            transform: translateX(0);
                        }
                        .nav-items {
                            flex-direction: column;
                            width: 100%;
                        }
                        .mega-menu {
                            position: static;
                            transform: none;
                            grid-template-columns: 1fr;
                            max-height: 0;
                            overflow: hidden;
                            padding: 0;
                            border: none;
                            background: none;
                        }
                        .mega-menu.open {
                            max-height: 400px;
                            padding: 0.5rem 0 0 0.5rem;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

fn render_link(item: &MenuItem, lang: &'static str, label: &'static str, active_route: &str) -> Html {
    let classes = classes!("nav-link", (item.href == active_route).then(|| "active"));
    let icon = item.icon.map(|icon| html! { <span class="nav-icon">{icon}</span> });
    match item.route() {
        Some(route) => html! {
            <Link<Route> to={route} classes={classes}>
                { for icon }
                <span lang={lang}>{label}</span>
            </Link<Route>>
        },
        None => html! {
            <a href={item.href} class={classes}>
                { for icon }
                <span lang={lang}>{label}</span>
            </a>
        },
    }
}
