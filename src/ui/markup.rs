//! HTML rendering of dialog view models
//!
//! For hosts whose dialogs are HTML pages. Text only reaches the page through
//! the two escaping functions below: [`escape_html`] for element content and
//! [`escape_template_literal`] for the script that fills the text field.

use crate::plugin::{ActionRole, DialogView};

/// Escape text for HTML element or attribute content
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a JavaScript template literal inside a `<script>` element
///
/// `\`, `` ` `` and `$` would otherwise end the literal or start an
/// interpolation; `<` is escaped so the text can never close the script.
pub fn escape_template_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            '$' => out.push_str("\\$"),
            '<' => out.push_str("\\x3C"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a complete HTML page for `view`
///
/// Buttons call `window.host.dispatch(<action id>, <payload>)`; submit buttons
/// send the text field's content, cancel buttons an empty string.
pub fn render(view: &DialogView) -> String {
    let title = escape_html(&view.title);
    let buttons: String = view
        .buttons
        .iter()
        .map(|button| {
            let with_text = button.role == ActionRole::Submit;
            format!(
                "    <button type=\"button\" onclick=\"send('{}', {})\">{}</button>\n",
                button.id,
                with_text,
                escape_html(button.label)
            )
        })
        .collect();

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head>\n",
            "  <meta charset=\"utf-8\">\n",
            "  <title>{title}</title>\n",
            "</head>\n",
            "<body>\n",
            "  <h3>{title}</h3>\n",
            "  <label for=\"text\">{label}</label>\n",
            "  <textarea id=\"text\" rows=\"20\" style=\"width: 100%\"></textarea>\n",
            "  <div class=\"actions\">\n",
            "{buttons}",
            "  </div>\n",
            "  <script>\n",
            "    const text = document.getElementById('text');\n",
            "    text.value = `{text}`;\n",
            "    function send(action, withText) {{\n",
            "      window.host.dispatch(action, withText ? text.value : '');\n",
            "    }}\n",
            "  </script>\n",
            "</body>\n",
            "</html>\n"
        ),
        title = title,
        label = escape_html(&view.label),
        buttons = buttons,
        text = escape_template_literal(&view.text),
    )
}
