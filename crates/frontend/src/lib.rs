pub mod layout;

use layout::mobile_menu::config::load_config;
use layout::mobile_menu::MobileMenu;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

thread_local! {
    static MOBILE_MENU: RefCell<Option<MobileMenu>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount_when_ready();
}

/// `document.readyState` is `"loading"` until the parser finishes.
pub fn is_still_parsing(document: &Document) -> bool {
    document.ready_state() == "loading"
}

/// Mount now, or on `DOMContentLoaded` if the document is still parsing.
fn mount_when_ready() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::debug!("no document, mobile menu not mounted");
        return;
    };

    if is_still_parsing(&document) {
        let on_ready = Closure::once_into_js(mount_mobile_menu);
        if let Err(err) =
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            log::warn!("cannot wait for DOMContentLoaded: {:?}", err);
        }
    } else {
        mount_mobile_menu();
    }
}

fn mount_mobile_menu() {
    let config = web_sys::window()
        .and_then(|w| w.document())
        .map(|document| load_config(&document))
        .unwrap_or_default();

    match MobileMenu::mount(config) {
        Ok(menu) => {
            let previous = MOBILE_MENU.with(|slot| slot.borrow_mut().replace(menu));
            drop(previous);
        }
        // Pages without the mobile layout simply have no menu
        Err(err) => log::debug!("mobile menu not mounted: {}", err),
    }
}

/// Whether the mounted mobile menu is open. `false` when nothing is mounted.
#[wasm_bindgen]
pub fn mobile_menu_is_open() -> bool {
    MOBILE_MENU.with(|slot| {
        slot.borrow()
            .as_ref()
            .is_some_and(|menu| menu.state().is_open())
    })
}

/// Unbind the mobile menu and release the scroll lock.
#[wasm_bindgen]
pub fn teardown_mobile_menu() {
    let menu = MOBILE_MENU.with(|slot| slot.borrow_mut().take());
    if let Some(menu) = menu {
        menu.detach();
    }
}
