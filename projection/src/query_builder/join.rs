/// Represents the type of SQL JOIN operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinType {
    /// INNER JOIN - returns records that have matching values in both tables
    Inner,
    /// LEFT JOIN - returns all records from the left table and matched records from the right table
    Left,
}

impl JoinType {
    /// Convert JoinType to SQL string
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
        }
    }
}

/// Represents a condition for joining tables
#[derive(Debug, Clone, PartialEq)]
pub enum JoinCondition {
    /// Join on a field equality (e.g., ON product.taxID = tax.id)
    On {
        left_field: String,
        right_field: String,
    },
    /// Join on a compound expression, possibly carrying named parameters
    /// (e.g., ON alias.objecttype = :type AND alias.objectkey = product.id)
    Expr(String),
}

/// Represents a complete JOIN clause
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    /// Type of join (INNER, LEFT)
    pub join_type: JoinType,
    /// Alias of the table the join hangs off
    pub from_alias: String,
    /// Table to join with
    pub table: String,
    /// Alias of the joined table
    pub alias: String,
    /// Join condition
    pub condition: JoinCondition,
}

impl JoinClause {
    /// Create a new JOIN clause with an equality ON condition
    pub fn new_on(
        join_type: JoinType,
        from_alias: impl Into<String>,
        table: impl Into<String>,
        alias: impl Into<String>,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self {
            join_type,
            from_alias: from_alias.into(),
            table: table.into(),
            alias: alias.into(),
            condition: JoinCondition::On {
                left_field: left_field.into(),
                right_field: right_field.into(),
            },
        }
    }

    /// Create a new LEFT JOIN clause with a compound ON expression
    pub fn left_outer(
        from_alias: impl Into<String>,
        table: impl Into<String>,
        alias: impl Into<String>,
        condition: impl Into<String>,
    ) -> Self {
        Self {
            join_type: JoinType::Left,
            from_alias: from_alias.into(),
            table: table.into(),
            alias: alias.into(),
            condition: JoinCondition::Expr(condition.into()),
        }
    }
}
