// ABOUTME: Ambient presentation style derived from a deck's template
// ABOUTME: Resolves colors, font family and font sizes and emits them as CSS

use crate::model::Template;

const DEFAULT_TITLE_SIZE: &str = "2.5em";
const DEFAULT_BODY_SIZE: &str = "1.2em";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckStyle {
    pub background: String,
    pub color: String,
    pub accent: String,
    pub font_family: String,
    pub title_font_size: String,
    pub body_font_size: String,
}

impl DeckStyle {
    pub fn from_template(template: &Template) -> Self {
        let scheme = &template.color_scheme;
        Self {
            background: scheme.background.clone(),
            color: scheme.primary.clone(),
            // Without an accent the primary color doubles as one
            accent: scheme
                .accent
                .clone()
                .unwrap_or_else(|| scheme.primary.clone()),
            font_family: template.font.clone(),
            title_font_size: template
                .title_font_size
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE_SIZE.to_string()),
            body_font_size: template
                .body_font_size
                .clone()
                .unwrap_or_else(|| DEFAULT_BODY_SIZE.to_string()),
        }
    }

    /// CSS for the slide container and its headings
    pub fn container_css(&self, selector: &str) -> String {
        format!(
            "{sel} {{ background-color: {bg}; color: {fg}; font-family: {font}; font-size: {body}; }}\n\
             {sel} h1, {sel} h2 {{ color: {fg}; font-size: {title}; }}\n\
             {sel} .accent {{ color: {accent}; border-color: {accent}; }}\n",
            sel = selector,
            bg = css_value(&self.background),
            fg = css_value(&self.color),
            font = font_stack(&self.font_family),
            body = css_value(&self.body_font_size),
            title = css_value(&self.title_font_size),
            accent = css_value(&self.accent),
        )
    }
}

impl Default for DeckStyle {
    fn default() -> Self {
        Self::from_template(&Template::default())
    }
}

/// Drop characters that could close the declaration or the style element.
fn css_value(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '"'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Quote multi-word family names and fall back to a generic family.
fn font_stack(font: &str) -> String {
    let font = css_value(font).replace('\'', "");
    if font.is_empty() {
        return "sans-serif".to_string();
    }
    if font.contains(',') || matches!(font.as_str(), "serif" | "sans-serif" | "monospace") {
        font
    } else {
        format!("'{}', sans-serif", font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorScheme;

    #[test]
    fn test_style_from_template() {
        let template = Template {
            color_scheme: ColorScheme {
                background: "#f5f6f5".to_string(),
                primary: "#1a3c34".to_string(),
                accent: Some("#2e7d32".to_string()),
            },
            font: "Open Sans".to_string(),
            title_font_size: None,
            body_font_size: Some("1.1em".to_string()),
        };
        let style = DeckStyle::from_template(&template);
        assert_eq!(style.background, "#f5f6f5");
        assert_eq!(style.color, "#1a3c34");
        assert_eq!(style.accent, "#2e7d32");
        assert_eq!(style.title_font_size, "2.5em");
        assert_eq!(style.body_font_size, "1.1em");

        let css = style.container_css(".deck");
        assert!(css.contains("background-color: #f5f6f5"));
        assert!(css.contains("font-family: 'Open Sans', sans-serif"));
    }

    #[test]
    fn test_css_values_cannot_escape_declaration() {
        assert_eq!(css_value("red; } body { display: none"), "red  body  display: none");
        assert_eq!(font_stack(""), "sans-serif");
        assert_eq!(font_stack("monospace"), "monospace");
    }
}
