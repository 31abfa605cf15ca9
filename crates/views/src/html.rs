//! Markup helpers shared by every page.

use crate::nav::Navbar;

const STYLESHEET: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f6f8; color: #222; }
.navbar { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.5rem; background: #2d3e50; }
.navbar a { color: #dfe6ee; text-decoration: none; margin-left: 1rem; }
.navbar-brand a { margin-left: 0; font-weight: bold; color: #fff; }
.navbar a.active { color: #fff; border-bottom: 2px solid #fff; }
.content-container { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
.header { display: flex; justify-content: space-between; align-items: center; }
.people-table { width: 100%; border-collapse: collapse; background: #fff; }
.people-table th, .people-table td { padding: 0.5rem; border-bottom: 1px solid #e3e6ea; text-align: left; }
.actions { display: flex; gap: 0.5rem; }
.actions form { margin: 0; }
.error-message { padding: 0.75rem; margin: 1rem 0; background: #fdecea; color: #a12622; border-radius: 4px; }
.error-hint { color: #a12622; font-size: 0.85rem; margin-top: 0.25rem; }
.loading-spinner { padding: 2rem; text-align: center; color: #666; }
.empty-state { padding: 2rem; text-align: center; color: #666; }
.confirm-dialog { padding: 1rem; margin: 1rem 0; background: #fff8e1; border: 1px solid #f0c36d; border-radius: 4px; }
.form-group { margin-bottom: 1rem; display: flex; flex-direction: column; }
.form-group input, .form-group textarea { padding: 0.5rem; border: 1px solid #ccc; border-radius: 4px; }
.form-group .invalid { border-color: #a12622; }
.form-actions { display: flex; gap: 0.5rem; justify-content: flex-end; }
"#;

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub fn loading_indicator() -> &'static str {
    r#"<div class="loading-spinner" role="status">Loading...</div>"#
}

pub fn error_message(message: &str) -> String {
    format!(r#"<div class="error-message" role="alert">{}</div>"#, escape(message))
}

/// A complete HTML document: head, navigation bar for `current_path`, and
/// `content` inside the page container.
pub fn document(page_title: &str, current_path: &str, content: &str) -> String {
    let navbar = Navbar::new(current_path).render();
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html lang=\"en\">\n",
            "<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "<style>{style}</style>\n",
            "</head>\n",
            "<body>\n",
            "<div class=\"app-container\">\n",
            "{navbar}\n",
            "<div class=\"content-container\">\n",
            "{content}\n",
            "</div>\n",
            "</div>\n",
            "</body>\n",
            "</html>\n",
        ),
        title = escape(page_title),
        style = STYLESHEET,
        navbar = navbar,
        content = content,
    )
}
