use crate::services::patterns::denylist;

/// Replacement template; `$0` expands to the full match, so the blocked
/// text survives inside a line comment the preview evaluator ignores.
const MARKER: &str = "// Blocked: $0";

/// Neutralize every denylisted pattern in `code`.
///
/// Patterns run in table order, each pass over the previous pass's output.
/// The marker embeds the matched text, so a rewrite can itself contain a
/// token that a later pattern (or a second pass) would match; that is the
/// accepted contract, not something to guard against. Callers must not
/// assume the result scans clean; the classifier decides that separately.
///
/// Anything the table does not name passes through byte-for-byte,
/// including tag-like markup.
pub fn sanitize(code: &str) -> String {
    let mut sanitized = code.to_string();
    for pattern in denylist() {
        sanitized = pattern.matcher.replace_all(&sanitized, MARKER).into_owned();
    }
    sanitized
}
