//! Engine Integration Layer Tests
//!
//! Validates the translation primitives every surface builds on.
//!
//! ## Test Scopes
//! - **Escaping**: Ensures query-parser special characters are neutralized.
//! - **Parameter Bag**: Verifies ordering and multi-value semantics.
//! - **Expression Tree**: Checks rendering of term, range and boolean nodes.

#[cfg(test)]
mod tests {
    use crate::solr::escape::escape;
    use crate::solr::params::{self, SolrParams};
    use crate::solr::query::QueryExpr;

    // ============================================================
    // ESCAPING TESTS
    // ============================================================

    #[test]
    fn test_escape_passes_plain_text_through() {
        assert_eq!(escape("Beethoven"), "Beethoven");
        assert_eq!(escape("Symphony No 5"), "Symphony No 5");
    }

    #[test]
    fn test_escape_namespaced_field_name() {
        assert_eq!(escape("npt:assetId"), "npt\\:assetId");
    }

    #[test]
    fn test_escape_special_characters() {
        assert_eq!(escape("a-b+c"), "a\\-b\\+c");
        assert_eq!(escape("(1*2)?"), "\\(1\\*2\\)\\?");
        assert_eq!(escape("x\\y"), "x\\\\y");
        assert_eq!(escape("\"quoted\""), "\\\"quoted\\\"");
    }

    #[test]
    fn test_escape_empty_string() {
        assert_eq!(escape(""), "");
    }

    // ============================================================
    // PARAMETER BAG TESTS
    // ============================================================

    #[test]
    fn test_params_add_keeps_insertion_order() {
        let mut bag = SolrParams::new();
        bag.add(params::FQ, "first");
        bag.add(params::Q, "middle");
        bag.add(params::FQ, "second");

        assert_eq!(bag.get_all(params::FQ), vec!["first", "second"]);
        assert_eq!(bag.get(params::FQ), Some("first"));
        assert_eq!(bag.len(), 3);
    }

    #[test]
    fn test_params_set_replaces_every_value() {
        let mut bag = SolrParams::new();
        bag.add(params::SORT, "npp:Season asc");
        bag.add(params::SORT, "npp:Season asc, npm:PartID ASC");

        bag.set(params::SORT, "npm:ShortTitle desc");

        assert_eq!(bag.get_all(params::SORT), vec!["npm:ShortTitle desc"]);
    }

    #[test]
    fn test_params_remove_returns_first_value() {
        let mut bag = SolrParams::new();
        bag.add(params::FQ, "one");
        bag.add(params::FQ, "two");

        let removed = bag.remove(params::FQ);

        assert_eq!(removed, Some("one".to_string()));
        assert!(bag.get(params::FQ).is_none());
        assert!(bag.is_empty());
    }

    #[test]
    fn test_params_get_missing_name() {
        let bag = SolrParams::new();
        assert_eq!(bag.get(params::Q), None);
        assert!(bag.get_all(params::Q).is_empty());
    }

    // ============================================================
    // EXPRESSION TREE TESTS - leaf nodes
    // ============================================================

    #[test]
    fn test_render_term_escapes_field_and_value() {
        let expr = QueryExpr::term("npt:assetId", "MKD-1024");
        assert_eq!(expr.render(), "npt\\:assetId:MKD\\-1024");
    }

    #[test]
    fn test_render_term_keeps_inner_spaces() {
        // multi-word type labels stay verbatim, matching the indexed value
        let expr = QueryExpr::term("nyp:DocumentType", "Printed Music");
        assert_eq!(expr.render(), "nyp\\:DocumentType:Printed Music");
    }

    #[test]
    fn test_render_prefix_appends_unescaped_wildcard() {
        let expr = QueryExpr::prefix("npt:content", "beeth");
        assert_eq!(expr.render(), "npt\\:content:beeth*");
    }

    #[test]
    fn test_render_prefix_empty_value_is_bare_wildcard() {
        let expr = QueryExpr::prefix("npt:content", "");
        assert_eq!(expr.render(), "npt\\:content:*");
    }

    #[test]
    fn test_render_range_keeps_bounds_verbatim() {
        let expr = QueryExpr::range("npp:Date", "2012-01-01T00:00:00Z", "*");
        assert_eq!(expr.render(), "npp\\:Date:[2012-01-01T00:00:00Z TO *]");
    }

    #[test]
    fn test_render_match_all() {
        assert_eq!(QueryExpr::MatchAll.render(), "*:*");
    }

    // ============================================================
    // EXPRESSION TREE TESTS - boolean nodes
    // ============================================================

    #[test]
    fn test_render_root_conjunction_is_bare() {
        let expr = QueryExpr::and(vec![
            QueryExpr::term("a", "1"),
            QueryExpr::term("b", "2"),
        ]);
        assert_eq!(expr.render(), "a:1 AND b:2");
    }

    #[test]
    fn test_render_nested_boolean_is_parenthesized() {
        let expr = QueryExpr::or(vec![
            QueryExpr::and(vec![
                QueryExpr::term("a", "1"),
                QueryExpr::term("b", "2"),
            ]),
            QueryExpr::term("c", "3"),
        ]);
        assert_eq!(expr.render(), "(a:1 AND b:2) OR c:3");
    }

    #[test]
    fn test_render_single_child_boolean_collapses() {
        let expr = QueryExpr::and(vec![QueryExpr::term("a", "1")]);
        assert_eq!(expr.render(), "a:1");
    }

    #[test]
    fn test_render_doubly_nested_booleans() {
        let expr = QueryExpr::or(vec![
            QueryExpr::and(vec![
                QueryExpr::term("flag", "true"),
                QueryExpr::or(vec![
                    QueryExpr::term("x", "1"),
                    QueryExpr::term("y", "2"),
                ]),
            ]),
            QueryExpr::term("z", "3"),
        ]);
        assert_eq!(expr.render(), "(flag:true AND (x:1 OR y:2)) OR z:3");
    }
}
