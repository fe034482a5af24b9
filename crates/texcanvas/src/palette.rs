//! Round-robin assignment of plot styles to series labels.

use indexmap::IndexMap;
use log::trace;

use crate::error::TexError;

/// PGFPlots marker styles, filled shapes first.
pub const MARKER_STYLES: [&str; 12] = [
    "color=black,mark options={fill=black},mark=square*",
    "color=black,mark options={fill=black},mark=pentagon*",
    "color=black,mark options={fill=black},mark=diamond*",
    "color=black,mark options={fill=black},mark=*",
    "color=black,mark options={fill=black},mark=triangle*",
    "color=black,mark=square",
    "color=black,mark=pentagon",
    "color=black,mark=diamond",
    "color=black,mark=o",
    "color=black,mark=otimes",
    "color=black,mark=triangle",
    "color=black,mark=oplus",
];

/// PGFPlots mark names.
pub const MARKS: [&str; 7] = [
    "otimes*", "oplus*", "o", "triangle", "pentagon", "square", "diamond",
];

/// Line colors for plots, as hex digits.
pub const PLOT_COLORS: [&str; 2] = ["000000", "2288DD"];

/// Hands out palette entries to labels, cycling through the palette.
///
/// A label keeps the entry it was first given, so asking again is free and
/// stable. Each plot owns its allocator; two plots never share state.
///
/// # Examples
///
/// ```
/// use texcanvas::PaletteAllocator;
///
/// let mut palette = PaletteAllocator::new(["a", "b"]);
/// assert_eq!(palette.assign("greedy"), "a");
/// assert_eq!(palette.assign("theta"), "b");
/// assert_eq!(palette.assign("yao"), "a");
/// assert_eq!(palette.assign("greedy"), "a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteAllocator {
    entries: Vec<String>,
    next: usize,
    assigned: IndexMap<String, usize>,
}

impl PaletteAllocator {
    /// Creates an allocator over `entries`.
    ///
    /// An empty palette assigns the empty string to every label.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            next: 0,
            assigned: IndexMap::new(),
        }
    }

    /// An allocator over [`MARKER_STYLES`].
    pub fn markers() -> Self {
        Self::new(MARKER_STYLES)
    }

    /// An allocator over [`MARKS`].
    pub fn marks() -> Self {
        Self::new(MARKS)
    }

    /// An allocator over [`PLOT_COLORS`].
    pub fn colors() -> Self {
        Self::new(PLOT_COLORS)
    }

    /// Returns the entry of `label`, assigning the next one if it has none.
    pub fn assign(&mut self, label: &str) -> &str {
        let index = match self.assigned.get(label) {
            Some(&index) => index,
            None => {
                let index = self.next;
                if !self.entries.is_empty() {
                    self.next = (self.next + 1) % self.entries.len();
                }
                self.assigned.insert(label.to_string(), index);
                trace!(label, index; "Assigned palette entry");
                index
            }
        };
        self.entry(index)
    }

    /// Assigns entries to `labels` in order, skipping labels that have one.
    pub fn preassign<'a, I>(&mut self, labels: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for label in labels {
            self.assign(label);
        }
    }

    /// Returns the entry of a label that was assigned before.
    ///
    /// # Errors
    ///
    /// Returns [`TexError::UnknownSeries`] if `label` was never assigned.
    pub fn lookup(&self, label: &str) -> Result<&str, TexError> {
        self.assigned
            .get(label)
            .map(|&index| self.entry(index))
            .ok_or_else(|| TexError::UnknownSeries(label.to_string()))
    }

    pub fn is_assigned(&self, label: &str) -> bool {
        self.assigned.contains_key(label)
    }

    /// Returns the labels in the order they were assigned.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.assigned.keys().map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn entry(&self, index: usize) -> &str {
        self.entries.get(index).map(String::as_str).unwrap_or_default()
    }
}

impl Default for PaletteAllocator {
    fn default() -> Self {
        Self::markers()
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn check_assignment_is_idempotent(labels: Vec<String>) {
        let mut palette = PaletteAllocator::markers();
        let first: Vec<String> = labels
            .iter()
            .map(|label| palette.assign(label).to_string())
            .collect();
        let second: Vec<String> = labels
            .iter()
            .map(|label| palette.assign(label).to_string())
            .collect();
        assert_eq!(first, second);
    }

    fn check_distinct_labels_cycle(count: usize) {
        let mut palette = PaletteAllocator::markers();
        for i in 0..count {
            let entry = palette.assign(&format!("label{i}")).to_string();
            assert_eq!(entry, MARKER_STYLES[i % MARKER_STYLES.len()]);
        }
    }

    proptest! {
        #[test]
        fn assignment_is_idempotent(labels in prop::collection::vec("[a-z]{1,4}", 0..40)) {
            check_assignment_is_idempotent(labels);
        }

        #[test]
        fn distinct_labels_cycle(count in 0usize..60) {
            check_distinct_labels_cycle(count);
        }
    }
}
