//! Query Expression Tree
//!
//! Handlers assemble their restrictions as a tree of expression nodes instead
//! of concatenating strings. Escaping happens in exactly one place, when the
//! tree is rendered to the engine's textual query syntax.

use super::escape::escape;

/// A node of the engine query expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryExpr {
    /// Matches every document (`*:*`).
    MatchAll,
    /// Exact term match on a field. Field and value are escaped on render.
    Term { field: String, value: String },
    /// Trailing-wildcard match on a field. The wildcard itself stays unescaped.
    Prefix { field: String, value: String },
    /// Inclusive range match. Bounds are rendered verbatim, `*` for open ends.
    Range {
        field: String,
        from: String,
        to: String,
    },
    /// Conjunction of child expressions.
    And(Vec<QueryExpr>),
    /// Disjunction of child expressions.
    Or(Vec<QueryExpr>),
}

impl QueryExpr {
    pub fn term(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Term {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn prefix(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Prefix {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn range(
        field: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::Range {
            field: field.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn and(children: Vec<QueryExpr>) -> Self {
        Self::And(children)
    }

    pub fn or(children: Vec<QueryExpr>) -> Self {
        Self::Or(children)
    }

    /// Renders the tree to the engine's textual query syntax.
    ///
    /// Boolean nodes are parenthesized when nested so operator precedence in
    /// the engine's parser can never reassociate the tree; the root is left
    /// bare. A boolean node with a single child renders as that child.
    pub fn render(&self) -> String {
        self.render_node(false)
    }

    fn render_node(&self, nested: bool) -> String {
        match self {
            QueryExpr::MatchAll => "*:*".to_string(),
            QueryExpr::Term { field, value } => {
                format!("{}:{}", escape(field), escape(value))
            }
            QueryExpr::Prefix { field, value } => {
                format!("{}:{}*", escape(field), escape(value))
            }
            QueryExpr::Range { field, from, to } => {
                format!("{}:[{} TO {}]", escape(field), from, to)
            }
            QueryExpr::And(children) => Self::render_bool(children, " AND ", nested),
            QueryExpr::Or(children) => Self::render_bool(children, " OR ", nested),
        }
    }

    fn render_bool(children: &[QueryExpr], joiner: &str, nested: bool) -> String {
        if children.len() == 1 {
            return children[0].render_node(nested);
        }

        let joined = children
            .iter()
            .map(|child| child.render_node(true))
            .collect::<Vec<_>>()
            .join(joiner);

        if nested {
            format!("({})", joined)
        } else {
            joined
        }
    }
}
