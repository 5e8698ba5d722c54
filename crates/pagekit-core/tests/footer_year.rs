//! Footer year stamping.

use pagekit_core::memory::{MemoryDocument, MemoryElement};
use pagekit_core::{
    mount_page, set_footer_year, Clock, DomElement, FixedClock, FooterConfig, PageConfig,
    SystemClock,
};

#[test]
fn year_element_receives_clock_year() {
    let year = MemoryElement::new("span").with_id("year");
    let doc =
        MemoryDocument::new().with_element(MemoryElement::new("footer").with_child(year.clone()));

    assert!(set_footer_year(&doc, &FooterConfig::default(), &FixedClock(2024)));
    assert_eq!(year.text().as_deref(), Some("2024"));
    assert_eq!(doc.total_mutations(), 1);
}

#[test]
fn year_matches_system_clock() {
    let year = MemoryElement::new("span").with_id("year");
    let doc = MemoryDocument::new().with_element(year.clone());

    set_footer_year(&doc, &FooterConfig::default(), &SystemClock);
    let text = year.text().unwrap();
    assert_eq!(text.len(), 4);
    assert_eq!(text, SystemClock.current_year().to_string());
}

#[test]
fn missing_year_element_is_a_no_op() {
    let other = MemoryElement::new("span").with_id("copyright");
    let doc =
        MemoryDocument::new().with_element(MemoryElement::new("footer").with_child(other.clone()));

    assert!(!set_footer_year(&doc, &FooterConfig::default(), &FixedClock(2024)));
    assert_eq!(doc.total_mutations(), 0);
    assert!(other.text().is_none());
}

#[test]
fn page_without_menu_still_sets_year() {
    let year = MemoryElement::new("span").with_id("year");
    let doc = MemoryDocument::new().with_element(year.clone());

    let mounted = mount_page(&doc, &PageConfig::default(), &FixedClock(1999));
    assert!(mounted.menu.is_none());
    assert!(mounted.footer_year_set);
    assert_eq!(year.text().as_deref(), Some("1999"));
}

#[test]
fn empty_document_mounts_cleanly() {
    let doc = MemoryDocument::new();
    let mounted = mount_page(&doc, &PageConfig::default(), &FixedClock(2024));
    assert!(mounted.menu.is_none());
    assert!(!mounted.footer_year_set);
}
