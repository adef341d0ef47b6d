// ABOUTME: HTML generation module for the deck-viewer application
// ABOUTME: Renders a slide deck into a standalone page with charts and pagination

use crate::chart::{registry, ChartKind, ChartView};
use crate::errors::{DeckError, Result};
use crate::model::SlideDeck;
use crate::slides::{render_slide, SlideView};
use crate::style::DeckStyle;
use askama::Template;
use log::info;
use std::fs;
use std::path::Path;

/// Options for HTML page generation
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Chart.js bundle to load, only included when the deck has charts
    pub chart_js_url: String,
    /// Page title; defaults to the deck's first slide title
    pub title: Option<String>,
    /// Extra script appended before `</body>`, e.g. a reload hook
    pub extra_script: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            chart_js_url: crate::config::DEFAULT_CHART_JS_URL.to_string(),
            title: None,
            extra_script: None,
        }
    }
}

const BASE_CSS: &str = r#"
html, body { margin: 0; height: 100%; }
body { display: flex; flex-direction: column; background: #222; }
.deck { flex: 1; display: flex; align-items: center; justify-content: center; padding: 2em; box-sizing: border-box; }
.slide { display: none; width: 100%; max-width: 1100px; }
.slide.active { display: block; }
.slide.title { text-align: center; }
.slide ul { line-height: 1.6; }
.slide canvas { width: 100% !important; max-height: 70vh; }
.empty { color: #ccc; font-family: sans-serif; text-align: center; }
.controls { display: flex; gap: 1em; align-items: center; justify-content: center; padding: 0.75em; background: #111; color: #eee; font-family: sans-serif; }
.controls button { min-width: 6em; }
"#;

/// Navigation for the generated page. Index is clamped to the slide range;
/// there is no wraparound.
const NAV_SCRIPT: &str = r#"
(function () {
  var slides = document.querySelectorAll('.deck > .slide');
  var prev = document.getElementById('prev');
  var next = document.getElementById('next');
  var counter = document.getElementById('counter');
  var index = 0;
  function show(i) {
    if (slides.length === 0) { prev.disabled = true; next.disabled = true; return; }
    index = Math.max(0, Math.min(slides.length - 1, i));
    for (var j = 0; j < slides.length; j++) {
      slides[j].classList.toggle('active', j === index);
    }
    prev.disabled = index === 0;
    next.disabled = index === slides.length - 1;
    counter.textContent = (index + 1) + ' / ' + slides.length;
  }
  prev.addEventListener('click', function () { show(index - 1); });
  next.addEventListener('click', function () { show(index + 1); });
  document.addEventListener('keydown', function (e) {
    if (e.key === 'ArrowLeft') show(index - 1);
    if (e.key === 'ArrowRight') show(index + 1);
  });
  show(0);
})();
"#;

/// Chart canvas placed inside a chart section
#[derive(Debug, Clone, Copy)]
struct Canvas {
    index: usize,
    kind: ChartKind,
}

/// One `<section>` of the page, flattened for the template
struct Section<'a> {
    kind: &'static str,
    active: bool,
    heading: &'a str,
    subtitle: Option<&'a str>,
    bullets: &'a [String],
    canvas: Option<Canvas>,
}

#[derive(Template)]
#[template(path = "deck.html")]
struct DeckPage<'a> {
    generated: String,
    title: &'a str,
    css: String,
    chart_js_url: Option<&'a str>,
    sections: Vec<Section<'a>>,
    counter: String,
    chart_script: String,
    nav_script: &'static str,
    extra_script: &'a str,
}

/// Generate a standalone HTML page for a slide deck
pub fn generate_html(deck: &SlideDeck, options: &HtmlOptions) -> Result<String> {
    info!("Generating HTML for deck with {} slides", deck.len());

    let style = DeckStyle::from_template(&deck.template);
    let title = options
        .title
        .as_deref()
        .or_else(|| deck.heading())
        .unwrap_or("Slide Deck");

    let mut charts: Vec<(String, serde_json::Value)> = Vec::new();
    let sections: Vec<Section> = deck
        .slides
        .iter()
        .enumerate()
        .map(|(i, slide)| section(i, render_slide(slide), &mut charts))
        .collect();

    let page = DeckPage {
        generated: chrono::Utc::now().to_rfc3339(),
        title,
        css: format!("{}{}", BASE_CSS, style.container_css(".deck")),
        chart_js_url: (!charts.is_empty()).then_some(options.chart_js_url.as_str()),
        sections,
        counter: if deck.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("1 / {}", deck.len())
        },
        chart_script: if charts.is_empty() {
            String::new()
        } else {
            chart_script(&charts)?
        },
        nav_script: NAV_SCRIPT,
        extra_script: options.extra_script.as_deref().unwrap_or(""),
    };

    Ok(page.render()?)
}

fn section<'a>(
    index: usize,
    view: SlideView<'a>,
    charts: &mut Vec<(String, serde_json::Value)>,
) -> Section<'a> {
    let mut section = Section {
        kind: "empty",
        active: index == 0,
        heading: "",
        subtitle: None,
        bullets: &[],
        canvas: None,
    };
    match view {
        SlideView::Title { title, subtitle } => {
            section.kind = "title";
            section.heading = title;
            section.subtitle = subtitle;
        }
        SlideView::Text { title, bullets } => {
            section.kind = "text";
            section.heading = title;
            section.bullets = bullets;
        }
        SlideView::Chart { title, chart } => {
            section.kind = "chart";
            section.heading = title;
            if let Some(chart) = chart {
                charts.push((format!("chart-{}", index), ChartView::config(&chart)));
                section.canvas = Some(Canvas {
                    index,
                    kind: chart.kind(),
                });
            }
        }
        SlideView::Empty => {}
    }
    section
}

/// Script that registers chart components once and draws every chart canvas.
fn chart_script(charts: &[(String, serde_json::Value)]) -> Result<String> {
    let configs: serde_json::Map<String, serde_json::Value> = charts.iter().cloned().collect();
    let json = serde_json::to_string(&configs)
        .map_err(|e| DeckError::HtmlError(format!("Failed to encode chart configs: {}", e)))?;

    Ok(format!(
        "<script>\nif (window.Chart) {{\n  {}\n  var configs = {};\n  \
         Object.keys(configs).forEach(function (id) {{\n    \
         new Chart(document.getElementById(id), configs[id]);\n  }});\n}}\n</script>\n",
        registry().register_script(),
        // Keep the JSON from terminating the script element early
        json.replace("</", "<\\/")
    ))
}

/// Utility function to write HTML content to a file
pub fn write_html_to_file(html_content: &str, output_path: &Path) -> Result<()> {
    info!("Writing HTML to file: {:?}", output_path);

    // Ensure parent directory exists
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(DeckError::FileReadError)?;
        }
    }

    fs::write(output_path, html_content).map_err(DeckError::FileReadError)?;

    Ok(())
}
