//! Mobile menu controller.
//!
//! Holds the explicit open/closed state and projects every change onto a
//! [`MenuSurface`]. Event sources (DOM listeners, tests) call the `on_*`
//! handlers; the resize check is debounced through a [`TimerHost`].

use super::surface::{MenuSurface, TimerHost};
use contracts::shared::mobile_menu::{next_state, MenuState, MenuTrigger, MobileMenuConfig};
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub struct MenuToggleController<S, T: TimerHost> {
    config: MobileMenuConfig,
    // Disposes `state` when the controller goes away
    _owner: Owner,
    state: RwSignal<MenuState>,
    surface: S,
    timers: T,
    pending_resize: RefCell<Option<T::Handle>>,
}

impl<S, T> MenuToggleController<S, T>
where
    S: MenuSurface + 'static,
    T: TimerHost + 'static,
{
    /// Create the controller in the closed state.
    ///
    /// Nothing is written to the surface until the first trigger, so markup and
    /// inline styles the page set itself survive mounting.
    pub fn new(config: MobileMenuConfig, surface: S, timers: T) -> Rc<Self> {
        let owner = Owner::new();
        let state = owner.with(|| RwSignal::new(MenuState::Closed));
        Rc::new(Self {
            config,
            _owner: owner,
            state,
            surface,
            timers,
            pending_resize: RefCell::new(None),
        })
    }

    pub fn state(&self) -> MenuState {
        self.state.get_untracked()
    }

    /// Reactive view of the state for Leptos components.
    pub fn state_signal(&self) -> ReadSignal<MenuState> {
        self.state.read_only()
    }

    pub fn config(&self) -> &MobileMenuConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn on_toggle_click(&self) {
        self.fire(MenuTrigger::ToggleClick);
    }

    pub fn on_overlay_click(&self) {
        self.fire(MenuTrigger::OverlayClick);
    }

    pub fn on_menu_item_click(&self) {
        self.fire(MenuTrigger::MenuItemClick);
    }

    /// Window resized: restart the quiet-period timer.
    pub fn on_resize(self: &Rc<Self>) {
        self.reschedule_resize_check();
    }

    /// Debounced resize check. Closes the menu once the viewport is wide.
    pub fn on_resize_settled(&self) {
        // The timer that called us has already fired
        self.pending_resize.borrow_mut().take();
        self.fire(MenuTrigger::ResizeSettled);
    }

    pub fn has_pending_resize_check(&self) -> bool {
        self.pending_resize.borrow().is_some()
    }

    /// Cancel the pending resize check and leave the page closed and scrollable.
    pub fn shutdown(&self) {
        self.cancel_resize_check();
        self.state.set(MenuState::Closed);
        self.surface.apply(MenuState::Closed);
    }

    fn reschedule_resize_check(self: &Rc<Self>) {
        self.cancel_resize_check();

        let weak: Weak<Self> = Rc::downgrade(self);
        let handle = self.timers.schedule(
            self.config.resize_debounce_ms,
            Box::new(move || {
                if let Some(controller) = weak.upgrade() {
                    controller.on_resize_settled();
                }
            }),
        );
        *self.pending_resize.borrow_mut() = Some(handle);
    }

    fn cancel_resize_check(&self) {
        let previous = self.pending_resize.borrow_mut().take();
        if let Some(handle) = previous {
            self.timers.cancel(handle);
        }
    }

    fn fire(&self, trigger: MenuTrigger) {
        let current = self.state.get_untracked();
        let width = self.surface.viewport_width();

        match next_state(current, trigger, width, &self.config) {
            Some(next) => {
                log::debug!(
                    "mobile menu {:?} at {}px: {} -> {}",
                    trigger,
                    width,
                    current.as_str(),
                    next.as_str()
                );
                self.state.set(next);
                self.surface.apply(next);
            }
            None => {
                log::trace!("mobile menu {:?} at {}px ignored", trigger, width);
            }
        }
    }
}
