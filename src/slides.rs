// ABOUTME: Slide rendering for the deck-viewer application
// ABOUTME: Turns a slide description into a title, bullet list, chart or empty view

use crate::chart::{render_chart, ChartView};
use crate::model::Slide;

/// What a single slide looks like, independent of the output backend.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideView<'a> {
    Title {
        title: &'a str,
        subtitle: Option<&'a str>,
    },
    Text {
        title: &'a str,
        bullets: &'a [String],
    },
    Chart {
        title: &'a str,
        chart: Option<ChartView<'a>>,
    },
    Empty,
}

impl SlideView<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, SlideView::Empty)
    }
}

pub fn render_slide(slide: &Slide) -> SlideView<'_> {
    match slide {
        Slide::Title { title, subtitle } => SlideView::Title {
            title,
            subtitle: subtitle.as_deref(),
        },
        Slide::Text { title, content } => SlideView::Text {
            title,
            bullets: content,
        },
        Slide::Chart { title, chart } => SlideView::Chart {
            title,
            chart: render_chart(chart.as_ref()),
        },
        Slide::Unknown => SlideView::Empty,
    }
}
