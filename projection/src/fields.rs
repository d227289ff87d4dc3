//! Field selection model
//!
//! This module defines the column references a projected storefront query
//! selects, and their rendering under the `__alias_column` convention.

use serde::{Deserialize, Serialize};

/// One projected column.
///
/// A field is read from `source.column` and published under a label prefix
/// and name, rendered as `source.column as __labelAlias_labelColumn`. The
/// label defaults to the source pair; overrides exist because the schema
/// contract publishes some columns under a foreign prefix (unit fields read
/// from the variant table) or a renamed column (category `parent` published
/// as `parent_id`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    source: String,
    column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label_column: Option<String>,
}

impl FieldRef {
    /// Create a field published under its own source alias and column name
    pub fn new(source: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            column: column.into(),
            label_alias: None,
            label_column: None,
        }
    }

    /// Publish this field under a different alias prefix and column label
    pub fn published_as(mut self, alias: impl Into<String>, column: impl Into<String>) -> Self {
        self.label_alias = Some(alias.into());
        self.label_column = Some(column.into());
        self
    }

    /// The table alias this field is read from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The column name this field is read from
    pub fn column(&self) -> &str {
        &self.column
    }

    /// The alias prefix this field is published under
    pub fn label_alias(&self) -> &str {
        self.label_alias.as_deref().unwrap_or(&self.source)
    }

    /// The column label this field is published under
    pub fn label_column(&self) -> &str {
        self.label_column.as_deref().unwrap_or(&self.column)
    }

    /// Render as a select expression: `source.column as __labelAlias_labelColumn`
    pub fn render(&self) -> String {
        format!(
            "{}.{} as __{}_{}",
            self.source,
            self.column,
            self.label_alias(),
            self.label_column()
        )
    }
}

/// An ordered field selection for one table or entity.
///
/// A FieldSet has no identity beyond its contents; it is the value cached
/// per attribute table and the unit of concatenation for entity selections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: Vec<FieldRef>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection of `columns` all read from and published under `alias`
    pub fn from_columns(alias: &str, columns: &[&str]) -> Self {
        columns.iter().map(|c| FieldRef::new(alias, *c)).collect()
    }

    pub fn push(&mut self, field: FieldRef) {
        self.fields.push(field);
    }

    /// Append another selection, preserving both internal orders
    pub fn extend(&mut self, other: FieldSet) {
        self.fields.extend(other.fields);
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldRef> {
        self.fields.iter()
    }

    /// Render every field as a select expression, in order
    pub fn render(&self) -> Vec<String> {
        self.fields.iter().map(FieldRef::render).collect()
    }
}

impl FromIterator<FieldRef> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldRef>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FieldSet {
    type Item = FieldRef;
    type IntoIter = std::vec::IntoIter<FieldRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a FieldRef;
    type IntoIter = std::slice::Iter<'a, FieldRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
