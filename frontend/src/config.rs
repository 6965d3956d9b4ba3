use crate::nav::state::Language;

/// Grace period before a hovered-out submenu closes.
pub const HOVER_GRACE_MS: u32 = 100;

/// Viewports at or below this width use tap-driven accordion menus.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Scroll distance after which the nav bar switches to its solid style.
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 80.0;

/// Progress a reveal-once binding must exceed before it fires.
pub const REVEAL_EPSILON: f64 = 0.001;

pub const DEFAULT_LANGUAGE: Language = Language::Es;

pub const CONTACT_EMAIL: &str = "hola@estudionorte.dev";

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
