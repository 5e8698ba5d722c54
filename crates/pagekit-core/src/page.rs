//! Page-load wiring shared by every host.

use crate::config::PageConfig;
use crate::dom::{DomDocument, DomElement};
use crate::footer::{set_footer_year, Clock};
use crate::menu::MenuToggle;

/// Result of running the load-time setup against a document.
#[derive(Debug)]
pub struct MountedPage<E: DomElement> {
    /// Menu toggle, when the page has a complete menu.
    pub menu: Option<MenuToggle<E>>,
    /// Whether the footer year element was found and written.
    pub footer_year_set: bool,
}

/// Run the load-time setup: mount the menu toggle, then set the footer year.
///
/// A malformed menu is logged and skipped; it never stops the footer from
/// being written.
pub fn mount_page<D, C>(
    document: &D,
    config: &PageConfig,
    clock: &C,
) -> MountedPage<D::Element>
where
    D: DomDocument,
    C: Clock + ?Sized,
{
    let menu = match MenuToggle::mount(document, &config.menu) {
        Ok(menu) => menu,
        Err(e) => {
            log::warn!("menu toggle not attached: {e}");
            None
        }
    };
    let footer_year_set = set_footer_year(document, &config.footer, clock);
    MountedPage {
        menu,
        footer_year_set,
    }
}
