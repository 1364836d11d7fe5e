//! Browser binding for the mobile menu.
//!
//! Looks up the hamburger button, sidebar and overlay, wires their listeners
//! to a [`MenuToggleController`] and removes them again on detach.

use super::controller::MenuToggleController;
use super::surface::{MenuSurface, TimerHost};
use contracts::shared::mobile_menu::{MenuState, MobileMenuConfig};
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

#[derive(Debug, Error)]
pub enum BindError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("menu toggle #{0} not found")]
    MissingToggle(String),
    #[error("sidebar `{0}` not found")]
    MissingSidebar(String),
    #[error("overlay #{0} not found")]
    MissingOverlay(String),
    #[error("selector `{selector}` rejected: {message}")]
    Selector { selector: String, message: String },
    #[error("addEventListener(\"{event}\") failed: {message}")]
    Listen { event: &'static str, message: String },
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn query(document: &Document, selector: &str) -> Result<Option<Element>, BindError> {
    document
        .query_selector(selector)
        .map_err(|err| BindError::Selector {
            selector: selector.to_string(),
            message: js_message(&err),
        })
}

/// Marker classes and scroll lock on the live page.
pub struct DomMenuSurface {
    window: Window,
    body: Option<HtmlElement>,
    toggle: Element,
    sidebar: Element,
    overlay: Element,
    sidebar_open_class: String,
    active_class: String,
    scroll_lock_overflow: String,
}

impl DomMenuSurface {
    /// Resolve the three required elements. Any of them missing is an error.
    pub fn locate(window: &Window, config: &MobileMenuConfig) -> Result<Self, BindError> {
        let document = window.document().ok_or(BindError::NoDocument)?;

        let toggle = document
            .get_element_by_id(&config.toggle_id)
            .ok_or_else(|| BindError::MissingToggle(config.toggle_id.clone()))?;
        let sidebar = query(&document, &config.sidebar_selector)?
            .ok_or_else(|| BindError::MissingSidebar(config.sidebar_selector.clone()))?;
        let overlay = document
            .get_element_by_id(&config.overlay_id)
            .ok_or_else(|| BindError::MissingOverlay(config.overlay_id.clone()))?;

        Ok(Self {
            window: window.clone(),
            body: document.body(),
            toggle,
            sidebar,
            overlay,
            sidebar_open_class: config.sidebar_open_class.clone(),
            active_class: config.active_class.clone(),
            scroll_lock_overflow: config.scroll_lock_overflow.clone(),
        })
    }

    /// Navigation entries inside the sidebar right now. Later additions are not tracked.
    pub fn menu_items(&self, selector: &str) -> Result<Vec<Element>, BindError> {
        let nodes = self
            .sidebar
            .query_selector_all(selector)
            .map_err(|err| BindError::Selector {
                selector: selector.to_string(),
                message: js_message(&err),
            })?;

        Ok((0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn set_marker(element: &Element, class: &str, present: bool) {
        if let Err(err) = element.class_list().toggle_with_force(class, present) {
            log::warn!("mobile menu: cannot set class `{}`: {}", class, js_message(&err));
        }
    }

    fn set_scroll_lock(&self, locked: bool) {
        let Some(body) = &self.body else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", &self.scroll_lock_overflow)
        } else {
            // Back to whatever the stylesheet says
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(err) = result {
            log::warn!("mobile menu: cannot update body overflow: {}", js_message(&err));
        }
    }
}

impl MenuSurface for DomMenuSurface {
    fn apply(&self, state: MenuState) {
        let open = state.is_open();
        Self::set_marker(&self.sidebar, &self.sidebar_open_class, open);
        Self::set_marker(&self.overlay, &self.active_class, open);
        Self::set_marker(&self.toggle, &self.active_class, open);
        self.set_scroll_lock(open);
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(f64::NAN)
    }
}

/// `setTimeout` through gloo. Dropping a [`Timeout`] clears it.
pub struct BrowserTimers;

impl TimerHost for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle);
    }
}

/// One `addEventListener` registration. Removed when dropped.
pub struct EventBinding {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl EventBinding {
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, BindError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|err| BindError::Listen {
                event,
                message: js_message(&err),
            })?;

        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub type DomMenuController = MenuToggleController<DomMenuSurface, BrowserTimers>;

/// A mounted mobile menu. Dropping it unbinds every listener.
pub struct MobileMenu {
    controller: Rc<DomMenuController>,
    bindings: Vec<EventBinding>,
}

impl MobileMenu {
    pub fn mount(config: MobileMenuConfig) -> Result<Self, BindError> {
        let window = web_sys::window().ok_or(BindError::NoWindow)?;
        let surface = DomMenuSurface::locate(&window, &config)?;
        let items = surface.menu_items(&config.menu_item_selector)?;
        let toggle = surface.toggle.clone();
        let overlay = surface.overlay.clone();

        let controller = MenuToggleController::new(config, surface, BrowserTimers);
        let mut bindings = Vec::with_capacity(items.len() + 3);

        let ctrl = Rc::clone(&controller);
        bindings.push(EventBinding::listen(&toggle, "click", move |_| {
            ctrl.on_toggle_click()
        })?);

        let ctrl = Rc::clone(&controller);
        bindings.push(EventBinding::listen(&overlay, "click", move |_| {
            ctrl.on_overlay_click()
        })?);

        for item in &items {
            let ctrl = Rc::clone(&controller);
            bindings.push(EventBinding::listen(item, "click", move |_| {
                ctrl.on_menu_item_click()
            })?);
        }

        let ctrl = Rc::clone(&controller);
        bindings.push(EventBinding::listen(&window, "resize", move |_| {
            ctrl.on_resize()
        })?);

        log::info!(
            "mobile menu bound: {} menu items, breakpoint {}px",
            items.len(),
            controller.config().breakpoint_px
        );

        Ok(Self {
            controller,
            bindings,
        })
    }

    pub fn state(&self) -> MenuState {
        self.controller.state()
    }

    /// Unbind all listeners and leave the page closed.
    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for MobileMenu {
    fn drop(&mut self) {
        self.bindings.clear();
        self.controller.shutdown();
        log::debug!("mobile menu detached");
    }
}
