//! Text escaping for SVG content.

/// Escape XML special characters for use in text nodes and attribute values.
#[must_use]
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
