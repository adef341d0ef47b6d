// ABOUTME: Plain-text output for the deck-viewer application
// ABOUTME: Renders slide views for terminal display, summarizing charts as tables

use crate::chart::ChartView;
use crate::model::SlideDeck;
use crate::navigator::NavigatorView;
use crate::slides::{render_slide, SlideView};
use serde_json::Value;
use std::fmt::Write;

pub fn render_slide_text(view: &SlideView) -> String {
    let mut out = String::new();
    match view {
        SlideView::Title { title, subtitle } => {
            let _ = writeln!(out, "# {}", title);
            if let Some(subtitle) = subtitle {
                let _ = writeln!(out, "  {}", subtitle);
            }
        }
        SlideView::Text { title, bullets } => {
            let _ = writeln!(out, "## {}", title);
            for bullet in bullets.iter() {
                let _ = writeln!(out, "  - {}", bullet);
            }
        }
        SlideView::Chart { title, chart } => {
            let _ = writeln!(out, "## {}", title);
            if let Some(chart) = chart {
                out.push_str(&render_chart_text(chart));
            }
        }
        SlideView::Empty => {}
    }
    out
}

/// Text shown for the navigator's current state, with a position footer.
pub fn render_navigator_text(view: &NavigatorView) -> String {
    match view {
        NavigatorView::NoSlides => "No slides to display.\n".to_string(),
        NavigatorView::Slide { view, index, count } => {
            let mut out = render_slide_text(view);
            let _ = writeln!(out, "\n[{} / {}]", index + 1, count);
            out
        }
    }
}

/// Every slide of a deck, separated by rules.
pub fn render_deck_text(deck: &SlideDeck) -> String {
    if deck.is_empty() {
        return "No slides to display.\n".to_string();
    }
    let mut out = String::new();
    for (i, slide) in deck.slides.iter().enumerate() {
        if i > 0 {
            out.push_str("\n----------------------------------------\n\n");
        }
        out.push_str(&render_slide_text(&render_slide(slide)));
    }
    out
}

fn render_chart_text(chart: &ChartView) -> String {
    let mut out = String::new();
    let data = chart.data();

    let heading = chart
        .options()
        .pointer("/plugins/title/text")
        .and_then(Value::as_str);
    match heading {
        Some(text) => {
            let _ = writeln!(out, "  [{} chart] {}", chart.kind(), text);
        }
        None => {
            let _ = writeln!(out, "  [{} chart]", chart.kind());
        }
    }

    let labels: Vec<String> = data
        .get("labels")
        .and_then(Value::as_array)
        .map(|labels| labels.iter().map(value_text).collect())
        .unwrap_or_default();
    if !labels.is_empty() {
        let _ = writeln!(out, "  {:<20} {}", "", labels.join(" | "));
    }

    if let Some(datasets) = data.get("datasets").and_then(Value::as_array) {
        for dataset in datasets {
            let label = dataset
                .get("label")
                .map(value_text)
                .unwrap_or_else(|| "series".to_string());
            let values: Vec<String> = dataset
                .get("data")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(value_text).collect())
                .unwrap_or_default();
            let _ = writeln!(out, "  {:<20} {}", label, values.join(" | "));
        }
    }
    out
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
