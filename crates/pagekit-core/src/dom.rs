//! # DOM Abstraction
//!
//! The narrow set of document operations page behaviour needs. The browser
//! shell implements these over `web-sys`; [`crate::memory`] implements them
//! in memory for headless tests.
//!
//! Handles are cheap references into a shared tree, so mutation goes through
//! `&self` the same way it does on a live `Element`.

use crate::error::PageResult;

/// A single element handle.
pub trait DomElement: Clone {
    /// Whether the element's class list contains `name`.
    fn has_class(&self, name: &str) -> bool;

    /// Add (`present == true`) or remove `name` from the class list.
    fn set_class(&self, name: &str, present: bool) -> PageResult<()>;

    /// Read an attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set an attribute.
    fn set_attribute(&self, name: &str, value: &str) -> PageResult<()>;

    /// Current inner markup.
    fn inner_html(&self) -> String;

    /// Replace the element's inner markup.
    fn set_inner_html(&self, markup: &str);

    /// Current text content.
    fn text(&self) -> Option<String>;

    /// Replace the element's text content.
    fn set_text(&self, text: &str);

    /// First descendant matching `selector`, in document order.
    fn query_selector(&self, selector: &str) -> PageResult<Option<Self>>;
}

/// A document that can resolve elements by id.
pub trait DomDocument {
    /// Element handle type produced by this document.
    type Element: DomElement;

    /// Look up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}
