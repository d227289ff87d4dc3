//! Query builder utilities
//!
//! This module renders accumulated query parts to SQL fragments.

use crate::query_builder::join::{JoinClause, JoinCondition};

pub struct SqlGenerator;

impl SqlGenerator {
    /// Build SELECT column list from rendered columns
    pub fn build_select_clause(columns: &[String]) -> String {
        if columns.is_empty() {
            return "*".to_string();
        }

        columns.join(", ")
    }

    /// Build JOIN clauses
    pub fn build_join_clause(joins: &[JoinClause]) -> String {
        if joins.is_empty() {
            return "".to_string();
        }

        joins
            .iter()
            .map(|join| {
                let join_type = join.join_type.to_sql();

                let condition_part = match &join.condition {
                    JoinCondition::On {
                        left_field,
                        right_field,
                    } => {
                        format!("ON {} = {}", left_field, right_field)
                    }
                    JoinCondition::Expr(expr) => {
                        format!("ON ({})", expr)
                    }
                };

                format!("{} {} {} {}", join_type, join.table, join.alias, condition_part)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
