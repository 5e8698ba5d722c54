//! # pagekit-core
//!
//! Target-independent behaviour for the site's page chrome:
//!
//! - [`menu`]: mobile navigation toggle with an explicit open/closed state
//! - [`footer`]: current-year stamp for the footer
//! - [`dom`]: the small document interface both depend on
//! - [`memory`]: in-memory document for headless use
//!
//! The browser binding lives in `pagekit-web`.

pub mod config;
pub mod dom;
pub mod error;
pub mod footer;
pub mod memory;
pub mod menu;
pub mod page;

pub use config::{FooterConfig, MenuConfig, PageConfig, CONFIG_ELEMENT_ID};
pub use dom::{DomDocument, DomElement};
pub use error::{ElementRole, PageError, PageResult};
pub use footer::{set_footer_year, Clock, FixedClock, SystemClock};
pub use menu::{MenuGlyph, MenuPresentation, MenuState, MenuToggle};
pub use page::{mount_page, MountedPage};
