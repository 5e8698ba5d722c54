//! `web-sys` implementations of the pagekit DOM traits.

use crate::error::dom_error;
use pagekit_core::{DomDocument, DomElement, PageResult};
use web_sys::{Document, Element};

/// Live DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebElement(Element);

impl WebElement {
    /// Wrap a `web_sys::Element`.
    pub fn new(element: Element) -> Self {
        Self(element)
    }

    /// The wrapped element.
    pub fn as_element(&self) -> &Element {
        &self.0
    }
}

impl DomElement for WebElement {
    fn has_class(&self, name: &str) -> bool {
        self.0.class_list().contains(name)
    }

    fn set_class(&self, name: &str, present: bool) -> PageResult<()> {
        self.0
            .class_list()
            .toggle_with_force(name, present)
            .map(|_| ())
            .map_err(dom_error)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> PageResult<()> {
        self.0.set_attribute(name, value).map_err(dom_error)
    }

    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_inner_html(&self, markup: &str) {
        self.0.set_inner_html(markup);
    }

    fn text(&self) -> Option<String> {
        self.0.text_content()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn query_selector(&self, selector: &str) -> PageResult<Option<Self>> {
        self.0
            .query_selector(selector)
            .map(|found| found.map(Self))
            .map_err(dom_error)
    }
}

/// Live document.
#[derive(Debug, Clone)]
pub struct WebDocument(Document);

impl WebDocument {
    /// Wrap a `web_sys::Document`.
    pub fn new(document: Document) -> Self {
        Self(document)
    }

    /// The current window's document, if any.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self)
    }
}

impl DomDocument for WebDocument {
    type Element = WebElement;

    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }
}
