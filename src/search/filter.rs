//! Type-Union Filter Clause
//!
//! Builds the one shared filter query selecting the union of allowed document
//! types. With a date range, date-bearing types are range-matched on their
//! date fields; types without date semantics are included unconditionally;
//! business records additionally require the web-publishable flag.

use super::types::DocType;
use crate::schema::ArchiveSchema;
use crate::solr::query::QueryExpr;
use chrono::NaiveDate;

pub fn type_union_filter(
    schema: &ArchiveSchema,
    date_range: Option<(NaiveDate, NaiveDate)>,
) -> QueryExpr {
    let types = &schema.types;

    let Some((from, to)) = date_range else {
        // no date restriction, just the union of type terms
        return QueryExpr::or(vec![
            type_term(schema, DocType::Program),
            type_term(schema, DocType::PrintedMusic),
            type_term(schema, DocType::Part),
            QueryExpr::and(vec![
                type_term(schema, DocType::BusinessRecord),
                QueryExpr::term(types.web_publishable, "true"),
            ]),
            type_term(schema, DocType::Visual),
            type_term(schema, DocType::Audio),
            type_term(schema, DocType::Video),
        ]);
    };

    let from = engine_date(from);
    let to = engine_date(to);

    QueryExpr::or(vec![
        // programs carry a single event date
        QueryExpr::range(types.program_date, from.as_str(), to.as_str()),
        // printed music and parts have no date semantics, include them outright
        type_term(schema, DocType::PrintedMusic),
        type_term(schema, DocType::Part),
        // business records span a from/to interval and must be publishable
        QueryExpr::and(vec![
            QueryExpr::term(types.web_publishable, "true"),
            span_overlap(types.business_date_from, types.business_date_to, &from, &to),
        ]),
        // visual items span a from/to interval
        span_overlap(types.visual_date_from, types.visual_date_to, &from, &to),
        // audio and video carry a single event date
        QueryExpr::range(types.audio_date, from.as_str(), to.as_str()),
        QueryExpr::range(types.video_date, from.as_str(), to.as_str()),
    ])
}

/// Matches a from/to span against the requested range with the three
/// asymmetric sub-clauses: contained spans, spans reaching in from before the
/// range, and spans reaching out past it.
fn span_overlap(from_field: &str, to_field: &str, from: &str, to: &str) -> QueryExpr {
    QueryExpr::or(vec![
        QueryExpr::and(vec![
            QueryExpr::range(from_field, from, "*"),
            QueryExpr::range(to_field, "*", to),
        ]),
        QueryExpr::and(vec![
            QueryExpr::range(from_field, "*", from),
            QueryExpr::range(to_field, "*", to),
            QueryExpr::range(to_field, from, "*"),
        ]),
        QueryExpr::and(vec![
            QueryExpr::range(from_field, from, "*"),
            QueryExpr::range(to_field, to, "*"),
            QueryExpr::range(from_field, "*", from),
        ]),
    ])
}

fn type_term(schema: &ArchiveSchema, doc_type: DocType) -> QueryExpr {
    QueryExpr::term(schema.types.doc_type, doc_type.label())
}

/// Dates render in the engine's external form, pinned to midnight UTC.
fn engine_date(date: NaiveDate) -> String {
    format!("{}T00:00:00Z", date.format("%Y-%m-%d"))
}
