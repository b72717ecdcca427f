//! Ordered style registry.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::descriptor::{FontFallback, StyleDescriptor, StyleGroup, StyleKind};
use super::error::RegistryError;

/// An ordered catalog of styles, indexed by id.
///
/// Styles keep their insertion order, which is the order UI listings and
/// previews present them in. Lookup by id is a hash-map hit.
///
/// # Example
///
/// ```rust
/// use glyphsmith::{StyleDescriptor, StyleRegistry, Strategy, TableId};
///
/// let registry = StyleRegistry::new()
///     .add(StyleDescriptor::new("bold", "Bold", Strategy::DirectMap(TableId::Bold)))
///     .add(StyleDescriptor::new("plain", "Plain", Strategy::Passthrough));
///
/// assert_eq!(registry.list_style_ids(), vec!["bold", "plain"]);
/// assert_eq!(registry.transform("Hi", "bold"), "𝐇𝐢");
/// assert_eq!(registry.transform("Hi", "missing"), "Hi");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: Vec<StyleDescriptor>,
    /// Maps each id to the position of its first registration.
    index: HashMap<&'static str, usize>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a style, returning the updated registry for chaining.
    ///
    /// Registering an id twice keeps the first registration reachable by id;
    /// [`validate`](Self::validate) reports the duplicate.
    pub fn add(mut self, style: StyleDescriptor) -> Self {
        self.index.entry(style.id()).or_insert(self.styles.len());
        self.styles.push(style);
        self
    }

    /// Looks up a style by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no style has this id.
    pub fn resolve(&self, id: &str) -> Result<&StyleDescriptor, RegistryError> {
        self.get(id).ok_or_else(|| RegistryError::NotFound { id: id.to_string() })
    }

    /// Looks up a style by id, returning `None` when unknown.
    pub fn get(&self, id: &str) -> Option<&StyleDescriptor> {
        self.index.get(id).map(|&position| &self.styles[position])
    }

    /// Returns true if a style with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the display name for `id`.
    pub fn display_name(&self, id: &str) -> Option<&'static str> {
        self.get(id).map(StyleDescriptor::display_name)
    }

    /// Returns every id in registration order.
    pub fn list_style_ids(&self) -> Vec<&'static str> {
        self.styles.iter().map(StyleDescriptor::id).collect()
    }

    /// Iterates over the styles in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleDescriptor> {
        self.styles.iter()
    }

    /// Iterates over the styles of one catalog section, in order.
    pub fn in_group(&self, group: StyleGroup) -> impl Iterator<Item = &StyleDescriptor> {
        self.styles.iter().filter(move |style| style.group() == group)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Checks that every id is non-empty and unique.
    ///
    /// # Errors
    ///
    /// Returns the first [`RegistryError::EmptyId`] or
    /// [`RegistryError::DuplicateId`] found, in registration order.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (position, style) in self.styles.iter().enumerate() {
            if style.id().is_empty() {
                return Err(RegistryError::EmptyId { position });
            }
            if self.index.get(style.id()) != Some(&position) {
                return Err(RegistryError::DuplicateId {
                    id: style.id().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Applies the style `id` to `text`.
    ///
    /// Unknown ids fail open: the text comes back unchanged.
    pub fn transform(&self, text: &str, id: &str) -> String {
        match self.get(id) {
            Some(style) => style.apply(text),
            None => {
                log::debug!("unknown style '{}', returning text unchanged", id);
                text.to_string()
            }
        }
    }

    /// Applies every registered style to `text`, in registration order.
    pub fn transform_all(&self, text: &str) -> Vec<(&'static str, String)> {
        self.styles
            .iter()
            .map(|style| (style.id(), style.apply(text)))
            .collect()
    }

    /// Returns serializable summaries of every style, in order.
    pub fn summaries(&self) -> Vec<StyleSummary> {
        self.styles.iter().map(StyleSummary::from).collect()
    }
}

/// Serializable view of a style, for listings and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub display_name: &'static str,
    pub kind: StyleKind,
    pub group: StyleGroup,
    pub fallback: FontFallback,
}

impl From<&StyleDescriptor> for StyleSummary {
    fn from(style: &StyleDescriptor) -> Self {
        Self {
            id: style.id(),
            name: style.name(),
            display_name: style.display_name(),
            kind: style.kind(),
            group: style.group(),
            fallback: style.fallback(),
        }
    }
}

static BUILTIN: Lazy<StyleRegistry> = Lazy::new(|| {
    let registry = crate::catalog::builtin_registry();
    log::debug!("registered {} built-in styles", registry.len());
    registry
});

/// Returns the shared built-in catalog.
pub fn builtin() -> &'static StyleRegistry {
    &BUILTIN
}
