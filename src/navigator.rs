// ABOUTME: Slide navigation for the deck-viewer application
// ABOUTME: Holds one deck and a clamped current index with previous/next moves

use crate::model::{Slide, SlideDeck};
use crate::slides::{render_slide, SlideView};
use crate::style::DeckStyle;
use log::debug;

/// What the navigator currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigatorView<'a> {
    NoSlides,
    Slide {
        view: SlideView<'a>,
        /// Zero-based
        index: usize,
        count: usize,
    },
}

/// Pages through a single deck. A new deck gets a new navigator, so the
/// index always starts at the first slide.
#[derive(Debug, Clone)]
pub struct SlideNavigator {
    deck: SlideDeck,
    style: DeckStyle,
    index: usize,
}

impl SlideNavigator {
    pub fn new(deck: SlideDeck) -> Self {
        let style = DeckStyle::from_template(&deck.template);
        Self {
            deck,
            style,
            index: 0,
        }
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn style(&self) -> &DeckStyle {
        &self.style
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.len()
    }

    /// Move back one slide; no-op on the first slide. Returns whether it moved.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            debug!("Navigated to slide {}", self.index + 1);
            true
        } else {
            false
        }
    }

    /// Move forward one slide; no-op on the last slide. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            debug!("Navigated to slide {}", self.index + 1);
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Slide> {
        self.deck.slides.get(self.index)
    }

    pub fn view(&self) -> NavigatorView<'_> {
        match self.current() {
            Some(slide) => NavigatorView::Slide {
                view: render_slide(slide),
                index: self.index,
                count: self.len(),
            },
            None => NavigatorView::NoSlides,
        }
    }
}
