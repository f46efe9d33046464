//! HTML text escaping for interpolated values.

/// Escape `&`, `<` and `>` so `text` renders literally inside element content.
///
/// Each input character is examined once, so existing entities are escaped
/// again rather than passed through.
///
/// # Examples
/// ```
/// use profile_aggregator::presenter::escape_html;
///
/// assert_eq!(escape_html("Fish & <Chips>"), "Fish &amp; &lt;Chips&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Escape `text` for a double-quoted attribute value such as `href` or `src`.
///
/// Escapes everything [`escape_html`] does, plus `"` and `'`, so upstream
/// URLs cannot close the attribute.
///
/// # Examples
/// ```
/// use profile_aggregator::presenter::escape_attribute;
///
/// assert_eq!(
///     escape_attribute(r#"https://x.example/" onclick="x"#),
///     "https://x.example/&quot; onclick=&quot;x",
/// );
/// ```
pub fn escape_attribute(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
