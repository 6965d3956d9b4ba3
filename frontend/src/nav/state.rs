use std::rc::Rc;
use yew::Reducible;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmenuState {
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Desktop,
    Mobile,
}

impl Layout {
    pub fn from_width(width: f64) -> Self {
        if width <= config::MOBILE_BREAKPOINT_PX {
            Layout::Mobile
        } else {
            Layout::Desktop
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    OpenMenu,
    CloseMenu,
    ToggleMenu,
    HoverEnterSubmenu,
    HoverLeaveSubmenu,
    /// The grace timer armed for this ticket has run out.
    HoverGraceElapsed(u32),
    ToggleSubmenu,
    OutsidePointerDown,
    Escape,
    ToggleLanguage,
    LayoutChanged(Layout),
    RouteChanged(String),
}

/// Transient navigation state for one mounted nav bar.
///
/// The top-level menu and the services submenu are independent of each
/// other, but both are forced closed on every route change. Hover-out
/// closes go through a ticket so a late timer can never close a submenu
/// the pointer has since re-entered.
#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub menu: MenuState,
    pub submenu: SubmenuState,
    pub language: Language,
    pub active_route: String,
    pub layout: Layout,
    pending_close: Option<u32>,
    next_ticket: u32,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new("/", Layout::Desktop)
    }
}

impl NavState {
    pub fn new(route: &str, layout: Layout) -> Self {
        Self {
            menu: MenuState::Closed,
            submenu: SubmenuState::Closed,
            language: config::DEFAULT_LANGUAGE,
            active_route: route.to_string(),
            layout,
            pending_close: None,
            next_ticket: 0,
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    pub fn services_open(&self) -> bool {
        self.submenu == SubmenuState::Open
    }

    /// Ticket of the hover-out close currently waiting on the grace delay.
    pub fn pending_close(&self) -> Option<u32> {
        self.pending_close
    }

    fn close_submenu(&mut self) {
        self.submenu = SubmenuState::Closed;
        self.pending_close = None;
    }

    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::OpenMenu => self.menu = MenuState::Open,
            NavAction::CloseMenu => self.menu = MenuState::Closed,
            NavAction::ToggleMenu => {
                self.menu = match self.menu {
                    MenuState::Open => MenuState::Closed,
                    MenuState::Closed => MenuState::Open,
                }
            }
            NavAction::HoverEnterSubmenu => {
                if self.layout == Layout::Desktop {
                    self.submenu = SubmenuState::Open;
                    self.pending_close = None;
                }
            }
            NavAction::HoverLeaveSubmenu => {
                if self.layout == Layout::Desktop && self.services_open() {
                    self.next_ticket = self.next_ticket.wrapping_add(1);
                    self.pending_close = Some(self.next_ticket);
                }
            }
            NavAction::HoverGraceElapsed(ticket) => {
                if self.pending_close == Some(ticket) {
                    self.close_submenu();
                }
            }
            NavAction::ToggleSubmenu => {
                self.submenu = match self.submenu {
                    SubmenuState::Open => SubmenuState::Closed,
                    SubmenuState::Closed => SubmenuState::Open,
                };
                self.pending_close = None;
            }
            NavAction::OutsidePointerDown => self.close_submenu(),
            NavAction::Escape => {
                self.menu = MenuState::Closed;
                self.close_submenu();
            }
            NavAction::ToggleLanguage => self.language = self.language.toggled(),
            NavAction::LayoutChanged(layout) => {
                if layout != self.layout {
                    self.layout = layout;
                    self.pending_close = None;
                    // the desktop bar has no overlay to dismiss the burger panel
                    if layout == Layout::Desktop {
                        self.menu = MenuState::Closed;
                    }
                }
            }
            NavAction::RouteChanged(path) => {
                self.menu = MenuState::Closed;
                self.close_submenu();
                self.active_route = path;
            }
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
