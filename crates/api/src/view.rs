//! Server-rendered HTML for the palette form and swatch tables.
//!
//! The page holds a textarea and a submit button, plus an optional error
//! message and optional result tables. There is one table per mode, one row
//! per role and one swatch cell per shade. Each swatch shows its hex string
//! as text and uses it as the cell background.

use moodhue_core::palette::{ColorScheme, GeneratedPalette, Mode, Role, Shade};

/// Background for a swatch whose value is missing or not a usable color.
const FALLBACK_BACKGROUND: &str = "#ffffff";

/// Everything the page shows for one render.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageView<'a> {
    /// Text to pre-fill the textarea with.
    pub text: &'a str,
    /// Error message to display, if the last submission failed.
    pub error: Option<&'a str>,
    /// Result of the last successful submission.
    pub palette: Option<&'a GeneratedPalette>,
}

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

/// A value is used as a CSS background only if it is a `#`-prefixed hex
/// code or a bare color keyword.
fn is_css_color_token(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

fn swatch_cell(value: &str) -> String {
    let value = value.trim();
    let (background, label) = if value.is_empty() {
        (FALLBACK_BACKGROUND.to_string(), "N/A".to_string())
    } else if is_css_color_token(value) {
        (value.to_string(), escape_html(value))
    } else {
        (FALLBACK_BACKGROUND.to_string(), escape_html(value))
    };
    format!(r#"<td class="swatch" style="background-color: {background}">{label}</td>"#)
}

fn render_mode_table(scheme: &ColorScheme, mode: Mode) -> String {
    let mut html = format!(
        "<h3>{mode}</h3>\n<table class=\"palette\" data-mode=\"{mode}\">\n<thead><tr><th>Category</th>",
        mode = mode.as_str()
    );
    for shade in Shade::ALL {
        html.push_str(&format!("<th>{}</th>", shade.label()));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for role in Role::ALL {
        html.push_str(&format!("<tr><td>{}</td>", role.as_str()));
        for shade in Shade::ALL {
            html.push_str(&swatch_cell(scheme.get(mode, role, shade)));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>\n");
    html
}

fn render_result(palette: &GeneratedPalette) -> String {
    let mut html = String::from("<section class=\"result\">\n<h2>Generated colors</h2>\n");
    if let Some(koujou) = palette.koujou.as_deref() {
        html.push_str(&format!(
            "<blockquote class=\"koujou\">{}</blockquote>\n",
            escape_html(koujou)
        ));
    }
    for mode in Mode::ALL {
        html.push_str(&render_mode_table(&palette.color, mode));
    }
    html.push_str("</section>\n");
    html
}

/// Render the full page.
pub fn render_page(view: &PageView<'_>) -> String {
    let error = view
        .error
        .map(|msg| format!("<p class=\"error\">{}</p>\n", escape_html(msg)))
        .unwrap_or_default();
    let result = view.palette.map(render_result).unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Mood Color Generator</title>
<style>
  body {{ padding: 2rem; font-family: system-ui, sans-serif; }}
  textarea {{ color: #000000; border: 2px solid #333; padding: 1rem; width: 100%; box-sizing: border-box; }}
  button {{ margin-top: 1rem; }}
  .error {{ color: red; }}
  .result {{ margin-top: 2rem; }}
  table.palette {{ width: 100%; border-collapse: collapse; margin-bottom: 1.5rem; }}
  table.palette th, table.palette td {{ border: 1px solid #999; padding: 10px; }}
</style>
</head>
<body>
<h1>Mood Color Generator</h1>
<form id="palette-form" method="post" action="/">
<textarea name="text" rows="4" placeholder="Enter some text">{text}</textarea>
<br>
<button id="submit" type="submit">Generate colors</button>
</form>
{error}{result}<script>
  document.getElementById("palette-form").addEventListener("submit", function () {{
    var button = document.getElementById("submit");
    button.disabled = true;
    button.textContent = "Generating...";
  }});
</script>
</body>
</html>
"#,
        text = escape_html(view.text),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
