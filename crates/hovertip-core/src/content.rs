#![forbid(unsafe_code)]

//! Tooltip content lookup.
//!
//! Maps trigger keys (metric names, product labels, explicit `data-tooltip`
//! style keys) to structured tooltip content. Rendering the content is the
//! host's concern; this module only answers "which entry explains this
//! trigger".

use std::collections::HashMap;

/// Structured tooltip content for one trigger key.
///
/// Title and description are always present; the remaining sections are
/// rendered only when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub title: String,
    pub description: String,
    pub formula: Option<String>,
    pub example: Option<String>,
    pub context: Option<String>,
    pub icon: Option<String>,
}

impl TooltipContent {
    /// Create content with a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            formula: None,
            example: None,
            context: None,
            icon: None,
        }
    }

    /// Attach a formula line.
    #[must_use]
    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Attach a worked example line.
    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Attach a context line.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Attach an icon glyph.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Keyed store of tooltip content with substring fallback resolution.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    entries: HashMap<String, TooltipContent>,
}

impl ContentRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert content under a key, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, content: TooltipContent) {
        self.entries.insert(key.into(), content);
    }

    /// Look up content by exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TooltipContent> {
        self.entries.get(key)
    }

    /// Resolve content for a trigger's text.
    ///
    /// Tries an exact key match first, then falls back to scanning for keys
    /// contained in the text (a trigger labeled "4.2x ROAS" resolves to the
    /// "ROAS" entry). Among multiple contained keys the longest wins, with
    /// lexicographic order breaking ties, so resolution is deterministic.
    #[must_use]
    pub fn resolve(&self, text: &str) -> Option<&TooltipContent> {
        if let Some(content) = self.entries.get(text) {
            return Some(content);
        }

        let mut best: Option<&String> = None;
        for key in self.entries.keys() {
            if key.is_empty() || !text.contains(key.as_str()) {
                continue;
            }
            let better = match best {
                None => true,
                Some(b) => {
                    key.len() > b.len() || (key.len() == b.len() && key.as_str() < b.as_str())
                }
            };
            if better {
                best = Some(key);
            }
        }
        best.and_then(|key| self.entries.get(key))
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered keys, sorted for stable iteration.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
