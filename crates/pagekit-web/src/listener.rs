//! Click wiring for the menu toggle.

use crate::dom::WebElement;
use pagekit_core::MenuToggle;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;

/// Menu toggle shared with its click listener.
pub type SharedMenu = Rc<RefCell<MenuToggle<WebElement>>>;

/// Attach a `click` listener to `button` that flips `menu`.
///
/// The closure is leaked: the listener lives as long as the page.
pub fn attach_menu_listener(button: &WebElement, menu: SharedMenu) -> Result<(), JsValue> {
    let onclick: Closure<dyn FnMut(Event)> = Closure::new(move |_event: Event| {
        // Clicks are dispatched one at a time, so the borrow is never contended.
        match menu.try_borrow_mut() {
            Ok(mut menu) => {
                if let Err(e) = menu.toggle() {
                    log::error!("menu toggle failed: {e}");
                }
            }
            Err(_) => log::error!("menu toggle re-entered during a click"),
        }
    });
    button
        .as_element()
        .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
    onclick.forget();
    Ok(())
}
