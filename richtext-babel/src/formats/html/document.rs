/// Wrap a serialized fragment in a complete HTML5 document
pub fn wrap_in_document(body_html: &str, title: &str) -> String {
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="richtext-babel">
  <title>{escaped_title}</title>
</head>
<body>
{body_html}
</body>
</html>
"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_title() {
        let html = wrap_in_document("<p></p>", "<script>\"x\"");
        assert!(html.contains("<title>&lt;script&gt;&quot;x&quot;</title>"));
        assert!(html.contains("<body>\n<p></p>\n</body>"));
    }
}
