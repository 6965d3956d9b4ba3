use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;

/// Something whose scrolling can be suspended, normally the page body.
pub trait ScrollSurface {
    fn set_scroll_suspended(&self, suspended: bool);
}

/// Suspends page scroll by toggling `overflow: hidden` on `<body>`.
pub struct BodySurface;

impl ScrollSurface for BodySurface {
    fn set_scroll_suspended(&self, suspended: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            log::debug!("no document body, scroll lock has nothing to suspend");
            return;
        };
        let style = body.style();
        if suspended {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrollLockError {
    #[error("scroll lock is already held by owner {0}")]
    HeldBy(u32),
}

struct LockInner {
    holder: Option<u32>,
    surface: Box<dyn ScrollSurface>,
}

/// Page-wide scroll lock. Only one owner may hold it at a time.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<RefCell<LockInner>>,
}

thread_local! {
    static PAGE_LOCK: ScrollLock = ScrollLock::new(BodySurface);
    static NEXT_OWNER: Cell<u32> = Cell::new(1);
}

/// The lock guarding the document body.
pub fn page_lock() -> ScrollLock {
    PAGE_LOCK.with(|lock| lock.clone())
}

pub fn next_owner_id() -> u32 {
    NEXT_OWNER.with(|next| {
        let id = next.get();
        next.set(id.wrapping_add(1));
        id
    })
}

impl ScrollLock {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LockInner {
                holder: None,
                surface: Box::new(surface),
            })),
        }
    }

    pub fn holder(&self) -> Option<u32> {
        self.inner.borrow().holder
    }

    pub fn is_held(&self) -> bool {
        self.holder().is_some()
    }

    pub fn acquire(&self, owner: u32) -> Result<ScrollLockGuard, ScrollLockError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(holder) = inner.holder {
            return Err(ScrollLockError::HeldBy(holder));
        }
        inner.holder = Some(owner);
        inner.surface.set_scroll_suspended(true);
        Ok(ScrollLockGuard {
            lock: self.clone(),
            owner,
        })
    }

    fn release(&self, owner: u32) {
        let mut inner = self.inner.borrow_mut();
        if inner.holder == Some(owner) {
            inner.holder = None;
            inner.surface.set_scroll_suspended(false);
        }
    }
}

/// Releases the lock when dropped.
pub struct ScrollLockGuard {
    lock: ScrollLock,
    owner: u32,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release(self.owner);
    }
}

/// One component's claim on the page lock.
pub struct LockSlot {
    lock: ScrollLock,
    owner: u32,
    guard: Option<ScrollLockGuard>,
}

impl LockSlot {
    pub fn new(lock: ScrollLock) -> Self {
        Self {
            lock,
            owner: next_owner_id(),
            guard: None,
        }
    }

    pub fn holds(&self) -> bool {
        self.guard.is_some()
    }

    /// Acquire while `open`, release otherwise.
    pub fn sync(&mut self, open: bool) {
        if open && self.guard.is_none() {
            match self.lock.acquire(self.owner) {
                Ok(guard) => self.guard = Some(guard),
                Err(e) => log::warn!("menu {} could not suspend scroll: {}", self.owner, e),
            }
        } else if !open {
            self.release();
        }
    }

    pub fn release(&mut self) {
        self.guard = None;
    }
}

impl Drop for LockSlot {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::state::{Layout, NavAction, NavState};

    #[derive(Clone, Default)]
    struct FakeSurface(Rc<Cell<bool>>);

    impl ScrollSurface for FakeSurface {
        fn set_scroll_suspended(&self, suspended: bool) {
            self.0.set(suspended);
        }
    }

    fn fake_lock() -> (ScrollLock, Rc<Cell<bool>>) {
        let surface = FakeSurface::default();
        let suspended = surface.0.clone();
        (ScrollLock::new(surface), suspended)
    }

    #[test]
    fn guard_drop_releases() {
        let (lock, suspended) = fake_lock();
        let guard = lock.acquire(7).expect("acquire");
        assert!(suspended.get());
        assert_eq!(lock.holder(), Some(7));
        drop(guard);
        assert!(!suspended.get());
        assert!(!lock.is_held());
    }

    #[test]
    fn second_owner_is_refused() {
        let (lock, _) = fake_lock();
        let _guard = lock.acquire(1).expect("acquire");
        assert_eq!(lock.acquire(2).err(), Some(ScrollLockError::HeldBy(1)));
    }

    #[test]
    fn lock_held_iff_menu_open() {
        let (lock, suspended) = fake_lock();
        let mut slot = LockSlot::new(lock.clone());
        let mut state = NavState::new("/", Layout::Mobile);
        let script = [
            NavAction::OpenMenu,
            NavAction::OpenMenu,
            NavAction::CloseMenu,
            NavAction::CloseMenu,
            NavAction::ToggleMenu,
            NavAction::ToggleSubmenu,
            NavAction::ToggleMenu,
            NavAction::OpenMenu,
            NavAction::Escape,
            NavAction::OpenMenu,
            NavAction::RouteChanged("/contact".into()),
        ];
        for action in script {
            state.apply(action);
            slot.sync(state.menu_open());
            assert_eq!(lock.is_held(), state.menu_open());
            assert_eq!(suspended.get(), state.menu_open());
        }
    }

    #[test]
    fn open_then_navigate_releases() {
        let (lock, _) = fake_lock();
        let mut slot = LockSlot::new(lock.clone());
        let mut state = NavState::new("/", Layout::Desktop);

        state.apply(NavAction::OpenMenu);
        slot.sync(state.menu_open());
        assert!(state.menu_open());
        assert!(lock.is_held());

        state.apply(NavAction::RouteChanged("/contact".into()));
        slot.sync(state.menu_open());
        assert!(!state.menu_open());
        assert!(!lock.is_held());
    }

    #[test]
    fn widening_past_breakpoint_releases() {
        let (lock, suspended) = fake_lock();
        let mut slot = LockSlot::new(lock.clone());
        let mut state = NavState::new("/", Layout::Mobile);

        state.apply(NavAction::OpenMenu);
        slot.sync(state.menu_open());
        assert!(suspended.get());

        state.apply(NavAction::LayoutChanged(Layout::Desktop));
        slot.sync(state.menu_open());
        assert!(!lock.is_held());
        assert!(!suspended.get());
    }

    #[test]
    fn dropping_slot_never_leaks_the_lock() {
        let (lock, suspended) = fake_lock();
        {
            let mut slot = LockSlot::new(lock.clone());
            slot.sync(true);
            assert!(slot.holds());
        }
        assert!(!lock.is_held());
        assert!(!suspended.get());
    }

    #[test]
    fn release_without_hold_is_a_no_op() {
        let (lock, _) = fake_lock();
        let other = lock.acquire(99).expect("acquire");
        let mut slot = LockSlot::new(lock.clone());
        slot.sync(true);
        assert!(!slot.holds());
        slot.release();
        assert_eq!(lock.holder(), Some(99));
        drop(other);
    }
}
