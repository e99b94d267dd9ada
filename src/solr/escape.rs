/// Characters that carry meaning in the engine's query parser grammar.
const SPECIAL_CHARS: &[char] = &[
    '\\', '+', '-', '!', '(', ')', ':', '^', '[', ']', '"', '{', '}', '~', '*', '?', '|', '&',
];

/// Escapes every query-parser special character in `input` with a backslash.
///
/// Field names and term values are escaped at render time so that a value like
/// `MKD-1024` or a namespaced field like `npt:assetId` never changes the shape
/// of the surrounding query expression.
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if SPECIAL_CHARS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
