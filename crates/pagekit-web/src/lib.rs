//! # pagekit-web
//!
//! Browser entry point. On module start it installs the panic hook and
//! console logger, reads the optional page config, attaches the mobile menu
//! toggle and stamps the footer year.

use pagekit_core::{
    mount_page, DomDocument, DomElement, PageConfig, SystemClock, CONFIG_ELEMENT_ID,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub mod dom;
pub mod error;
pub mod listener;

pub use dom::{WebDocument, WebElement};
pub use error::{WebError, WebResult};
pub use listener::{attach_menu_listener, SharedMenu};

/// Module start hook run by the generated JS glue.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let document = WebDocument::current().ok_or(WebError::NoDocument)?;
    boot(&document)?;
    Ok(())
}

/// Wire page behaviour onto `document`.
///
/// Returns the mounted menu, if the page has one, so callers can inspect or
/// drive it directly.
pub fn boot(document: &WebDocument) -> WebResult<Option<SharedMenu>> {
    let config = load_config(document);
    let mounted = mount_page(document, &config, &SystemClock);

    let Some(menu) = mounted.menu else {
        return Ok(None);
    };
    let button = menu.button().clone();
    let menu = Rc::new(RefCell::new(menu));
    attach_menu_listener(&button, Rc::clone(&menu))?;
    log::info!("pagekit: menu toggle attached to #{}", config.menu.button_id);
    Ok(Some(menu))
}

/// Read the page config from its JSON script element, falling back to the
/// defaults when it is absent or invalid.
pub fn load_config<D: DomDocument>(document: &D) -> PageConfig {
    let Some(text) = document
        .element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text())
    else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
            PageConfig::default()
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use pagekit_core::menu::{CLOSE_MARKUP, HAMBURGER_MARKUP};
    use pagekit_core::MenuState;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r#"
        <button id="menuBtn" aria-expanded="false">
            <svg viewBox="0 0 24 24"><path d="authored"></path></svg>
        </button>
        <nav id="nav" class="hidden md:flex"></nav>
        <footer><span id="year"></span></footer>
    "#;

    fn fixture(markup: &str) -> (WebDocument, Element) {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        container.set_inner_html(markup);
        document.body().unwrap().append_child(&container).unwrap();
        (WebDocument::new(document), container)
    }

    fn click(document: &WebDocument, id: &str) {
        document
            .element_by_id(id)
            .unwrap()
            .as_element()
            .dyn_ref::<HtmlElement>()
            .unwrap()
            .click();
    }

    #[wasm_bindgen_test]
    fn clicks_toggle_live_menu() {
        let (document, container) = fixture(FIXTURE);
        let menu = boot(&document).unwrap().expect("menu attached");
        let nav = document.element_by_id("nav").unwrap();
        let button = document.element_by_id("menuBtn").unwrap();

        click(&document, "menuBtn");
        assert_eq!(menu.borrow().state(), MenuState::Open);
        assert!(!nav.has_class("hidden"));
        assert!(nav.has_class("bg-brand-dark"));
        assert_eq!(button.attribute("aria-expanded").as_deref(), Some("true"));
        let icon = button.query_selector("svg").unwrap().unwrap();
        assert_eq!(icon.inner_html(), HAMBURGER_MARKUP);

        click(&document, "menuBtn");
        assert_eq!(menu.borrow().state(), MenuState::Closed);
        assert!(nav.has_class("hidden"));
        assert!(nav.has_class("md:flex"));
        assert_eq!(button.attribute("aria-expanded").as_deref(), Some("false"));
        assert_eq!(icon.inner_html(), CLOSE_MARKUP);

        container.remove();
    }

    #[wasm_bindgen_test]
    fn footer_year_is_stamped() {
        let (document, container) = fixture(FIXTURE);
        boot(&document).unwrap();
        let text = document.element_by_id("year").unwrap().text().unwrap();
        assert_eq!(text.len(), 4);
        assert!(text.chars().all(|c| c.is_ascii_digit()));
        container.remove();
    }

    #[wasm_bindgen_test]
    fn page_without_menu_boots_cleanly() {
        let (document, container) = fixture(r#"<footer><span id="year"></span></footer>"#);
        assert!(boot(&document).unwrap().is_none());
        container.remove();
    }

    #[wasm_bindgen_test]
    fn config_element_overrides_defaults() {
        let (document, container) = fixture(
            r#"<script type="application/json" id="pagekit-config">
                { "footer": { "year_id": "copyright-year" } }
            </script>"#,
        );
        let config = load_config(&document);
        assert_eq!(config.footer.year_id, "copyright-year");
        assert_eq!(config.menu.button_id, "menuBtn");
        container.remove();
    }
}
