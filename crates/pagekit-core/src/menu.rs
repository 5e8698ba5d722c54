//! # Mobile Menu Toggle
//!
//! Two-state flip-flop driving the navigation panel:
//! ```text
//! Closed ──click──▶ Open ──click──▶ Closed
//! ```
//!
//! The state is owned by [`MenuToggle`] and read from the panel's
//! visibility class exactly once, at mount. Mount writes nothing; each
//! toggle flips the membership of every configured class, so an even number
//! of clicks always restores the authored class list. `aria-expanded` and
//! the icon glyph come from [`MenuPresentation::for_state`].

use crate::config::MenuConfig;
use crate::dom::{DomDocument, DomElement};
use crate::error::{ElementRole, PageError, PageResult};
use std::fmt;

/// Whether the navigation panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Panel visible with the open layout classes.
    Open,
    /// Panel carries the visibility class.
    Closed,
}

impl MenuState {
    /// State implied by the presence of the visibility class.
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            Self::Closed
        } else {
            Self::Open
        }
    }

    /// The opposite state.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Whether the panel is shown.
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Value for the button's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() {
            "true"
        } else {
            "false"
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Open => "open",
            Self::Closed => "closed",
        })
    }
}

/// Icon drawn inside the menu button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuGlyph {
    /// Three horizontal lines.
    Hamburger,
    /// Two crossed strokes.
    Close,
}

/// Inner markup for [`MenuGlyph::Hamburger`].
pub const HAMBURGER_MARKUP: &str = r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16m-7 6h7"></path>"#;

/// Inner markup for [`MenuGlyph::Close`].
pub const CLOSE_MARKUP: &str = r#"<path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>"#;

impl MenuGlyph {
    /// Glyph shown once the menu has reached `state`.
    pub fn for_state(state: MenuState) -> Self {
        match state {
            MenuState::Open => Self::Hamburger,
            MenuState::Closed => Self::Close,
        }
    }

    /// SVG inner markup for this glyph.
    pub fn markup(self) -> &'static str {
        match self {
            Self::Hamburger => HAMBURGER_MARKUP,
            Self::Close => CLOSE_MARKUP,
        }
    }
}

/// Button attribute and icon for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPresentation {
    /// `aria-expanded` value for the button.
    pub aria_expanded: &'static str,
    /// Icon to draw.
    pub glyph: MenuGlyph,
}

impl MenuPresentation {
    /// Compute the presentation of `state`.
    pub fn for_state(state: MenuState) -> Self {
        Self {
            aria_expanded: state.aria_expanded(),
            glyph: MenuGlyph::for_state(state),
        }
    }
}

/// Menu toggle bound to resolved button, panel and icon elements.
#[derive(Debug)]
pub struct MenuToggle<E: DomElement> {
    button: E,
    panel: E,
    icon: E,
    config: MenuConfig,
    state: MenuState,
}

impl<E: DomElement> MenuToggle<E> {
    /// Resolve the menu elements from `document`.
    ///
    /// Returns `Ok(None)` when the button is absent: the page simply has no
    /// mobile menu. A button without its panel or icon is a markup defect and
    /// fails with [`PageError::MissingElement`]. An invalid `config` fails
    /// with [`PageError::InvalidConfig`]. Mount never mutates the document.
    pub fn mount<D>(document: &D, config: &MenuConfig) -> PageResult<Option<Self>>
    where
        D: DomDocument<Element = E>,
    {
        config.validate()?;
        let Some(button) = document.element_by_id(&config.button_id) else {
            log::debug!(
                "menu button #{} not found; menu toggle disabled",
                config.button_id
            );
            return Ok(None);
        };
        let panel = document.element_by_id(&config.panel_id).ok_or_else(|| {
            PageError::missing(ElementRole::NavPanel, format!("#{}", config.panel_id))
        })?;
        let icon = button
            .query_selector(&config.icon_selector)?
            .ok_or_else(|| {
                PageError::missing(
                    ElementRole::MenuIcon,
                    format!("#{} {}", config.button_id, config.icon_selector),
                )
            })?;

        let state = MenuState::from_hidden(panel.has_class(&config.hidden_class));
        log::debug!("menu toggle mounted ({state})");
        Ok(Some(Self {
            button,
            panel,
            icon,
            config: config.clone(),
            state,
        }))
    }

    /// Current state.
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// The button this toggle is bound to.
    pub fn button(&self) -> &E {
        &self.button
    }

    /// Flip the menu and update the DOM to match. Returns the new state.
    ///
    /// If the DOM rejects a write, the classes already flipped are flipped
    /// back and the state is left unchanged.
    pub fn toggle(&mut self) -> PageResult<MenuState> {
        let next = self.state.toggled();
        let presentation = MenuPresentation::for_state(next);

        let mut flipped = Vec::new();
        let applied = self.flip_classes(&mut flipped).and_then(|()| {
            self.button
                .set_attribute(&self.config.expanded_attribute, presentation.aria_expanded)
        });
        if let Err(e) = applied {
            self.unflip_classes(&flipped);
            log::warn!("menu toggle rolled back: {e}");
            return Err(e);
        }

        self.icon.set_inner_html(presentation.glyph.markup());
        self.state = next;
        log::debug!("menu {next}");
        Ok(next)
    }

    fn flip_classes<'a>(&'a self, flipped: &mut Vec<&'a str>) -> PageResult<()> {
        for class in self.config.toggled_classes() {
            let present = self.panel.has_class(class);
            self.panel.set_class(class, !present)?;
            flipped.push(class);
        }
        Ok(())
    }

    fn unflip_classes(&self, flipped: &[&str]) {
        for class in flipped.iter().rev() {
            let present = self.panel.has_class(class);
            if let Err(e) = self.panel.set_class(class, !present) {
                log::error!("could not restore class `{class}`: {e}");
            }
        }
    }
}
