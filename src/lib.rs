// ABOUTME: Library module for the deck-viewer program.
// ABOUTME: Contains the service client, slide rendering pipeline and application shell.

// Reexport modules
pub mod api;
pub mod app;
pub mod chart;
pub mod config;
pub mod console;
pub mod errors;
pub mod html;
pub mod model;
pub mod navigator;
pub mod server;
pub mod slides;
pub mod staging;
pub mod style;
pub mod templates;
pub mod text;

// Reexport common types and functions
pub use api::{ApiClient, SlideApi};
pub use app::App;
pub use chart::{registry, render_chart, ChartKind, ChartView};
pub use config::Config;
pub use console::Console;
pub use errors::{DeckError, Result};
pub use html::{generate_html, write_html_to_file, HtmlOptions};
pub use model::{ChartSpec, Slide, SlideDeck, Template};
pub use navigator::{NavigatorView, SlideNavigator};
pub use server::{start_server, SharedPage};
pub use slides::{render_slide, SlideView};
pub use staging::{FileStaging, StagedFile};
pub use style::DeckStyle;
pub use templates::TemplateSelector;
