use std::{collections::HashMap, fmt};

use crate::{canonical::PREFIX, interpreter::value::scalar::Scalar};

/// A key into the [`ValueTable`].
///
/// Labels are plain values: copying one around never copies the value it
/// names, which is what lets `=` rebind a variable that is sitting on the
/// operand stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// Generated for literals during normalization and for intermediate
    /// results during evaluation. Numbered in creation order.
    Auto(usize),
    /// A variable, spelled exactly as in the source text.
    Named(String),
}

impl Label {
    /// Whether this label names a source variable.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto(n) => write!(f, "{n}"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// The per-evaluation mapping from [`Label`] to [`Scalar`].
///
/// Created empty (or seeded by the host) for every evaluation, filled by the
/// normalizer with literals and variables, and extended by the evaluator with
/// one entry per intermediate result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueTable {
    values:    HashMap<Label, Scalar>,
    next_auto: usize,
}

impl ValueTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value under a fresh auto-label and returns the label.
    ///
    /// Auto-labels are handed out in strictly increasing order.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::{
    ///     scalar::Scalar,
    ///     table::{Label, ValueTable},
    /// };
    ///
    /// let mut table = ValueTable::new();
    /// assert_eq!(table.store(Scalar::Integer(3)), Label::Auto(0));
    /// assert_eq!(table.store(Scalar::Real(0.5)), Label::Auto(1));
    /// assert_eq!(table.get(&Label::Auto(0)), Some(&Scalar::Integer(3)));
    /// ```
    pub fn store(&mut self, value: Scalar) -> Label {
        let label = Label::Auto(self.next_auto);
        self.next_auto += 1;
        self.values.insert(label.clone(), value);
        label
    }

    /// Returns the label for a variable, registering it as `Null` if the
    /// table has never seen it.
    pub fn introduce(&mut self, name: &str) -> Label {
        let label = Label::Named(name.to_string());
        self.values.entry(label.clone()).or_insert(Scalar::Null);
        label
    }

    /// Binds a variable to a value, replacing any previous binding.
    pub fn bind(&mut self, name: &str, value: Scalar) -> Label {
        let label = Label::Named(name.to_string());
        self.values.insert(label.clone(), value);
        label
    }

    /// Replaces the value stored under an existing or new label.
    pub fn rebind(&mut self, label: &Label, value: Scalar) {
        self.values.insert(label.clone(), value);
    }

    /// Looks up a label.
    #[must_use]
    pub fn get(&self, label: &Label) -> Option<&Scalar> {
        self.values.get(label)
    }

    /// Looks up a label for modification.
    pub fn get_mut(&mut self, label: &Label) -> Option<&mut Scalar> {
        self.values.get_mut(label)
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Scalar> {
        self.values.get(&Label::Named(name.to_string()))
    }

    /// Whether the table has an entry for `label`.
    #[must_use]
    pub fn contains(&self, label: &Label) -> bool {
        self.values.contains_key(label)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All entries, auto-labels first in creation order, then variables in
    /// name order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&Label, &Scalar)> {
        let mut entries: Vec<_> = self.values.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl fmt::Display for ValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.entries()
                                        .into_iter()
                                        .map(|(label, value)| format!("{PREFIX}{label} = {value}"))
                                        .collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}
