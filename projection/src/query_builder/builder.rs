//! Query builder utilities
//!
//! This module provides the accumulator a projected storefront query is
//! assembled into: select columns, join clauses, and named parameters.

use crate::errors::ProjectionError;
use crate::query_builder::join::JoinClause;
use crate::query_builder::sql_generation::SqlGenerator;
use serde_json::Value;
use std::collections::HashMap;

/// Query builder for assembling projected storefront queries
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pub(crate) selects: Vec<String>,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) parameters: HashMap<String, Value>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rendered select columns
    pub fn add_select_columns<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selects.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Attach a LEFT JOIN with a compound ON expression.
    ///
    /// Join aliases must be unique within a query; reusing one is a caller
    /// error and is rejected rather than silently producing invalid SQL.
    pub fn left_outer_join(
        &mut self,
        from_alias: impl Into<String>,
        table: impl Into<String>,
        alias: impl Into<String>,
        condition: impl Into<String>,
    ) -> Result<&mut Self, ProjectionError> {
        let alias = alias.into();
        if self.has_join_alias(&alias) {
            return Err(ProjectionError::DuplicateJoinAlias(alias));
        }

        self.joins
            .push(JoinClause::left_outer(from_alias, table, alias, condition));
        Ok(self)
    }

    /// Bind a named parameter (e.g. `:language`), overwriting any prior value
    pub fn bind_parameter(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Whether a join with this alias has already been attached
    pub fn has_join_alias(&self, alias: &str) -> bool {
        self.joins.iter().any(|join| join.alias == alias)
    }

    pub fn select_columns(&self) -> &[String] {
        &self.selects
    }

    pub fn joins(&self) -> &[JoinClause] {
        &self.joins
    }

    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    pub fn parameters(&self) -> &HashMap<String, Value> {
        &self.parameters
    }

    /// Build SELECT column list
    pub fn build_select_clause(&self) -> String {
        SqlGenerator::build_select_clause(&self.selects)
    }

    /// Build JOIN clauses
    pub fn build_join_clause(&self) -> String {
        SqlGenerator::build_join_clause(&self.joins)
    }
}
