//! Footer year.

use crate::config::FooterConfig;
use crate::dom::{DomDocument, DomElement};
use chrono::Datelike;

/// Source of the current calendar year.
pub trait Clock {
    /// Current year in the host's local time zone.
    fn current_year(&self) -> i32;
}

/// Host clock. On `wasm32` this reads the browser's `Date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Clock pinned to a single year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Write the current year into the footer's year element.
///
/// Returns `false` without touching the document when the element is absent.
pub fn set_footer_year<D, C>(document: &D, config: &FooterConfig, clock: &C) -> bool
where
    D: DomDocument,
    C: Clock + ?Sized,
{
    let Some(element) = document.element_by_id(&config.year_id) else {
        log::debug!("footer year element #{} not found", config.year_id);
        return false;
    };
    let year = clock.current_year();
    element.set_text(&year.to_string());
    log::debug!("footer year set to {year}");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryDocument, MemoryElement};

    #[test]
    fn writes_year_text() {
        let year = MemoryElement::new("span").with_id("year");
        let doc = MemoryDocument::new().with_element(year.clone());
        assert!(set_footer_year(&doc, &FooterConfig::default(), &FixedClock(2024)));
        assert_eq!(year.text().as_deref(), Some("2024"));
    }

    #[test]
    fn system_clock_is_plausible() {
        let year = SystemClock.current_year();
        assert!((2000..10000).contains(&year));
    }
}
