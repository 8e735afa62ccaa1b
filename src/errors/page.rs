//! Failure page shown to the end user.

use std::fs;
use std::path::Path;

/// Placeholder replaced with the error id in a custom template.
pub const ERROR_ID_PLACEHOLDER: &str = "{ERROR_ID}";

/// Render the page for `error_id`.
///
/// The template is read on every call so it can be edited without a
/// restart; when it is missing or unreadable the built-in page is used.
pub fn render_failure_page(template_path: Option<&Path>, error_id: &str) -> String {
    if let Some(path) = template_path {
        match fs::read_to_string(path) {
            Ok(html) => return html.replace(ERROR_ID_PLACEHOLDER, error_id),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Error page template unavailable, using fallback");
            }
        }
    }
    fallback_page(error_id)
}

fn fallback_page(error_id: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>Errore</title></head><body>",
            "<h1>Servizio momentaneamente non disponibile</h1>",
            "<p>Ci scusiamo per l'inconveniente. Si prega di riprovare più tardi.</p>",
            "<p>Codice errore: <strong>{}</strong></p>",
            "</body></html>"
        ),
        escape_html(error_id)
    )
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_page() {
        let page = render_failure_page(None, "abc123");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("Codice errore: <strong>abc123</strong>"));
    }

    #[test]
    fn test_fallback_escapes() {
        let page = render_failure_page(None, "<b>\"x\"&'");
        assert!(page.contains("&lt;b&gt;&quot;x&quot;&amp;&#039;"));
    }

    #[test]
    fn test_template_substitution() {
        let path = std::env::temp_dir().join(format!("{}-error.html", std::process::id()));
        fs::write(&path, "<p>Ref {ERROR_ID}</p><!-- {ERROR_ID} -->").unwrap();
        let page = render_failure_page(Some(&path), "deadbeef");
        assert_eq!(page, "<p>Ref deadbeef</p><!-- deadbeef -->");
        fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_missing_template_falls_back() {
        let page = render_failure_page(Some(Path::new("/nonexistent/error.html")), "abc");
        assert!(page.contains("Servizio momentaneamente non disponibile"));
    }
}
