//! In-memory document.
//!
//! A minimal element tree implementing [`DomDocument`] and [`DomElement`]
//! for headless use. Selectors are limited to a single `tag`, `#id` or
//! `.class` term, matched against descendants in document order.

use crate::dom::{DomDocument, DomElement};
use crate::error::{PageError, PageResult};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

#[derive(Debug, Default)]
struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    inner_html: String,
    text: Option<String>,
    children: Vec<MemoryElement>,
    mutations: usize,
}

/// Shared handle to an in-memory element.
#[derive(Debug, Clone)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl MemoryElement {
    /// Create a detached element with the given tag name.
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_ascii_lowercase(),
            ..Node::default()
        })))
    }

    /// Builder: set the `id` attribute.
    pub fn with_id(self, id: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert("id".to_string(), id.to_string());
        self
    }

    /// Builder: append classes, skipping ones already present.
    pub fn with_classes<'a>(self, classes: impl IntoIterator<Item = &'a str>) -> Self {
        {
            let mut node = self.0.borrow_mut();
            for class in classes {
                if !node.classes.iter().any(|c| c == class) {
                    node.classes.push(class.to_string());
                }
            }
        }
        self
    }

    /// Builder: set an attribute.
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Builder: set the initial inner markup.
    pub fn with_inner_html(self, markup: &str) -> Self {
        self.0.borrow_mut().inner_html = markup.to_string();
        self
    }

    /// Builder: append a child element.
    pub fn with_child(self, child: MemoryElement) -> Self {
        self.0.borrow_mut().children.push(child);
        self
    }

    /// Tag name, lowercased.
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    /// The `id` attribute, if any.
    pub fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    /// Class list in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    /// Number of mutating calls made through the DOM traits.
    pub fn mutation_count(&self) -> usize {
        self.0.borrow().mutations
    }

    /// Child elements.
    pub fn children(&self) -> Vec<MemoryElement> {
        self.0.borrow().children.clone()
    }

    fn matches(&self, selector: &Selector<'_>) -> bool {
        match selector {
            Selector::Tag(tag) => self.0.borrow().tag.eq_ignore_ascii_case(tag),
            Selector::Id(id) => self.id().as_deref() == Some(*id),
            Selector::Class(class) => self.has_class(class),
        }
    }

    fn find_descendant(&self, selector: &Selector<'_>) -> Option<MemoryElement> {
        for child in self.children() {
            if child.matches(selector) {
                return Some(child);
            }
            if let Some(found) = child.find_descendant(selector) {
                return Some(found);
            }
        }
        None
    }

    fn touch(&self) {
        self.0.borrow_mut().mutations += 1;
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MemoryElement {}

impl DomElement for MemoryElement {
    fn has_class(&self, name: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == name)
    }

    fn set_class(&self, name: &str, present: bool) -> PageResult<()> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(PageError::Dom(format!("invalid class token `{name}`")));
        }
        {
            let mut node = self.0.borrow_mut();
            let position = node.classes.iter().position(|c| c == name);
            match (present, position) {
                (true, None) => node.classes.push(name.to_string()),
                (false, Some(index)) => {
                    node.classes.remove(index);
                }
                _ => {}
            }
        }
        self.touch();
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> PageResult<()> {
        if name.is_empty() {
            return Err(PageError::Dom("empty attribute name".to_string()));
        }
        self.0
            .borrow_mut()
            .attributes
            .insert(name.to_string(), value.to_string());
        self.touch();
        Ok(())
    }

    fn inner_html(&self) -> String {
        self.0.borrow().inner_html.clone()
    }

    fn set_inner_html(&self, markup: &str) {
        self.0.borrow_mut().inner_html = markup.to_string();
        self.touch();
    }

    fn text(&self) -> Option<String> {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = Some(text.to_string());
        self.touch();
    }

    fn query_selector(&self, selector: &str) -> PageResult<Option<Self>> {
        let selector = Selector::parse(selector)?;
        Ok(self.find_descendant(&selector))
    }
}

enum Selector<'a> {
    Tag(&'a str),
    Id(&'a str),
    Class(&'a str),
}

impl<'a> Selector<'a> {
    fn parse(raw: &'a str) -> PageResult<Self> {
        let raw = raw.trim();
        let unsupported = || PageError::Dom(format!("unsupported selector `{raw}`"));
        let valid = |s: &str| {
            !s.is_empty()
                && s
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        };

        let selector = if let Some(id) = raw.strip_prefix('#') {
            Selector::Id(id)
        } else if let Some(class) = raw.strip_prefix('.') {
            Selector::Class(class)
        } else {
            Selector::Tag(raw)
        };
        let name = match selector {
            Selector::Tag(s) | Selector::Id(s) | Selector::Class(s) => s,
        };
        if valid(name) {
            Ok(selector)
        } else {
            Err(unsupported())
        }
    }
}

/// Document holding a forest of [`MemoryElement`] roots.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    roots: Vec<MemoryElement>,
    by_id: HashMap<String, MemoryElement>,
}

impl MemoryDocument {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: attach a root element and index every id in its subtree.
    pub fn with_element(mut self, element: MemoryElement) -> Self {
        self.insert(element);
        self
    }

    /// Attach a root element and index every id in its subtree.
    ///
    /// The first element registered under an id wins, as with
    /// `getElementById` on duplicate ids.
    pub fn insert(&mut self, element: MemoryElement) {
        self.index(&element);
        self.roots.push(element);
    }

    /// Every element in the document, depth first.
    pub fn all_elements(&self) -> Vec<MemoryElement> {
        fn walk(element: &MemoryElement, out: &mut Vec<MemoryElement>) {
            out.push(element.clone());
            for child in element.children() {
                walk(&child, out);
            }
        }
        let mut out = Vec::new();
        for root in &self.roots {
            walk(root, &mut out);
        }
        out
    }

    /// Sum of [`MemoryElement::mutation_count`] across the document.
    pub fn total_mutations(&self) -> usize {
        self.all_elements()
            .iter()
            .map(MemoryElement::mutation_count)
            .sum()
    }

    fn index(&mut self, element: &MemoryElement) {
        if let Some(id) = element.id() {
            self.by_id.entry(id).or_insert_with(|| element.clone());
        }
        for child in element.children() {
            self.index(&child);
        }
    }
}

impl DomDocument for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.by_id.get(id).cloned()
    }
}
