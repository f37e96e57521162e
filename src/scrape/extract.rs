//! Tag scanning for `<fin-streamer>` live-price elements.

use std::collections::HashMap;

const OPEN: &str = "<fin-streamer";
const CLOSE: &str = "</fin-streamer>";

/// Value of attribute `name` inside an opening tag, if present.
///
/// The name must follow whitespace; the value may be wrapped in `"` or `'`.
pub(crate) fn attr<'a>(tag_open: &'a str, name: &str) -> Option<&'a str> {
    for (i, _) in tag_open.match_indices(name) {
        let boundary = tag_open[..i]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_whitespace());
        if !boundary {
            continue;
        }
        let rest = tag_open[i + name.len()..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        let Some(quote) = rest.chars().next().filter(|c| matches!(c, '"' | '\'')) else {
            continue;
        };
        let value = &rest[1..];
        let len = value.find(quote)?;
        return Some(&value[..len]);
    }
    None
}

/// Text content with nested tags removed and whitespace trimmed.
pub(crate) fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Collects `data-field -> value` for every `<fin-streamer>` belonging to `symbol`.
///
/// The value comes from `data-value` when present, else from the element text.
/// Elements tagged with a different `data-symbol` (index tickers in the page header,
/// related quotes) are ignored. The first element for a field wins.
pub(crate) fn extract_streamer_fields(html: &str, symbol: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    let mut pos = 0usize;
    let mut seen = 0usize;

    while let Some(si) = html[pos..].find(OPEN) {
        let si = pos + si;
        let Some(open_end) = html[si..].find('>').map(|x| si + x) else {
            break;
        };
        let tag_open = &html[si..=open_end];
        seen += 1;

        let (inner, next) = match html[open_end + 1..].find(CLOSE) {
            Some(x) => (
                &html[open_end + 1..open_end + 1 + x],
                open_end + 1 + x + CLOSE.len(),
            ),
            None => ("", open_end + 1),
        };
        pos = next;

        if attr(tag_open, "data-symbol").is_some_and(|s| !s.eq_ignore_ascii_case(symbol)) {
            continue;
        }
        let Some(field) = attr(tag_open, "data-field") else {
            continue;
        };

        let value = attr(tag_open, "data-value")
            .map(str::to_string)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| strip_tags(inner));
        if value.is_empty() {
            continue;
        }

        fields.entry(field.to_string()).or_insert(value);
    }

    tracing::debug!(elements = seen, matched = fields.len(), "scanned fin-streamer elements");
    fields
}
