use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Prefixes whose following token is a credential.
const SECRET_MARKERS: [&str; 8] = [
    "key=",
    "api_key=",
    "access_token=",
    "Authorization: Bearer ",
    "authorization: bearer ",
    "Bearer ",
    "\"api_key\":\"",
    "AIza",
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '+' | '/' | '=')
}

fn token_end(input: &str, from: usize) -> usize {
    input[from..]
        .char_indices()
        .find(|&(_, c)| !is_secret_char(c))
        .map_or(input.len(), |(i, _)| from + i)
}

fn scrub_after_marker(scrubbed: &mut String, marker: &str) {
    let mut search_from = 0;
    while let Some(rel) = scrubbed[search_from..].find(marker) {
        let start = search_from + rel;
        let content_start = start + marker.len();
        let end = token_end(scrubbed, content_start);

        // Bare marker with no value.
        if end == content_start {
            search_from = content_start;
            continue;
        }

        // Google keys are redacted whole; other markers keep their label.
        let keep = if marker == "AIza" { start } else { content_start };
        scrubbed.replace_range(keep..end, REDACTED);
        search_from = keep + REDACTED.len();
    }
}

/// Redact API keys and bearer tokens from provider error text.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    if !SECRET_MARKERS.iter().any(|m| input.contains(m)) {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for marker in SECRET_MARKERS {
        scrub_after_marker(&mut scrubbed, marker);
    }
    Cow::Owned(scrubbed)
}

/// Sanitize API error text by scrubbing secrets and truncating length.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);

    match scrubbed.char_indices().nth(MAX_API_ERROR_CHARS) {
        Some((idx, _)) => format!("{}...", &scrubbed[..idx]),
        None => scrubbed.into_owned(),
    }
}
