//! Light/dark theme initialization and toggle.
//!
//! Reads the user's override from a [`KeyValueStore`] and applies a
//! `data-theme` attribute to the `<html>` element. Toggling writes the new
//! theme back to the store and updates the attribute. The stylesheet keys
//! its colors on that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a rejected write is logged and the theme is
//! still applied, so the toggle always has a visible effect.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::KeyValueStore;

pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Exact parse of a persisted value; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Document-side collaborators of the theme: the root attribute and the
/// system color-scheme signal.
pub trait ThemeDocument {
    /// Current `data-theme` value on the root element, if set.
    fn theme_attribute(&self) -> Option<String>;
    fn set_theme_attribute(&self, value: &str);
    /// Whether the system reports `prefers-color-scheme: dark`.
    fn prefers_dark(&self) -> bool;
}

pub struct ThemeService<S, D> {
    store: S,
    document: D,
    key: String,
}

impl<S: KeyValueStore, D: ThemeDocument> ThemeService<S, D> {
    pub fn new(store: S, document: D, key: impl Into<String>) -> Self {
        Self {
            store,
            document,
            key: key.into(),
        }
    }

    /// Persisted override if valid, else the system preference.
    pub fn preferred(&self) -> Theme {
        if let Some(saved) = self.store.get_item(&self.key).as_deref().and_then(Theme::parse) {
            return saved;
        }
        if self.document.prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn apply(&self, theme: Theme) {
        self.document.set_theme_attribute(theme.as_str());
    }

    /// Apply the preferred theme at page start.
    pub fn init(&self) -> Theme {
        let theme = self.preferred();
        self.apply(theme);
        log::debug!("theme initialized: {}", theme.as_str());
        theme
    }

    /// Flip the applied theme, persist it, and apply it.
    pub fn toggle(&self) -> Theme {
        let current = match self.document.theme_attribute() {
            Some(attr) if !attr.is_empty() => attr,
            _ => self.preferred().as_str().to_owned(),
        };
        // Unknown attribute values count as light.
        let next = Theme::parse(&current).unwrap_or(Theme::Light).flipped();
        if let Err(e) = self.store.set_item(&self.key, next.as_str()) {
            log::warn!("theme not persisted: {e}");
        }
        self.apply(next);
        next
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub fn document(&self) -> &D {
        &self.document
    }
}

/// `data-theme` on `document.documentElement`, plus `matchMedia`.
#[cfg(feature = "hydrate")]
pub struct BrowserThemeDocument;

#[cfg(feature = "hydrate")]
impl ThemeDocument for BrowserThemeDocument {
    fn theme_attribute(&self) -> Option<String> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute(THEME_ATTRIBUTE))
    }

    fn set_theme_attribute(&self, value: &str) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        if let Err(e) = el.set_attribute(THEME_ATTRIBUTE, value) {
            log::warn!("failed to set {THEME_ATTRIBUTE}: {e:?}");
        }
    }

    fn prefers_dark(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").unwrap_or_default())
            .map_or(false, |mq| mq.matches())
    }
}
