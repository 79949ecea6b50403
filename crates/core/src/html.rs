//! HTML escaping for page copy and head attributes.
//!
//! Article bodies are authored HTML and pass through unescaped; everything else that reaches
//! markup (titles, FAQ copy, city names, attribute values) goes through these helpers.

/// Escape text for use between tags.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_escapes_markup_but_not_quotes() {
        assert_eq!(
            escape_text("Tariffs <& \"duties\">"),
            "Tariffs &lt;&amp; \"duties\"&gt;"
        );
    }

    #[test]
    fn attr_escapes_quotes() {
        assert_eq!(escape_attr(r#"a "b" 'c'"#), "a &quot;b&quot; &#39;c&#39;");
    }
}
