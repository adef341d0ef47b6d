// ABOUTME: Data model for slide decks returned by the slide generator service
// ABOUTME: Defines templates, slides and chart specs as closed tagged enums

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body of `GET /templates`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateList {
    #[serde(default)]
    pub templates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: default_background(),
            primary: default_primary(),
            accent: None,
        }
    }
}

fn default_background() -> String {
    "#ffffff".to_string()
}

fn default_primary() -> String {
    "#000000".to_string()
}

fn default_font() -> String {
    "sans-serif".to_string()
}

/// Visual style resolved by the service for the chosen template id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_font_size: Option<String>,
}

impl Default for Template {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            font: default_font(),
            title_font_size: None,
            body_font_size: None,
        }
    }
}

/// A slide as described by the service, tagged by its `type` field. Inside a
/// deck, an entry with no string `type` decodes as `Unknown`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Slide {
    Title {
        #[serde(default)]
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
    },
    Text {
        #[serde(default)]
        title: String,
        #[serde(default)]
        content: Vec<String>,
    },
    Chart {
        #[serde(default)]
        title: String,
        #[serde(
            default,
            deserialize_with = "chart_or_unknown",
            skip_serializing_if = "Option::is_none"
        )]
        chart: Option<ChartSpec>,
    },
    /// Any tag this viewer does not know how to draw
    #[serde(other)]
    Unknown,
}

impl Slide {
    pub fn title(&self) -> Option<&str> {
        match self {
            Slide::Title { title, .. } | Slide::Text { title, .. } | Slide::Chart { title, .. } => {
                Some(title.as_str())
            }
            Slide::Unknown => None,
        }
    }
}

/// Chart description; `data` and `options` are opaque and passed through to
/// the chart primitive verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChartSpec {
    Line {
        #[serde(default)]
        data: Value,
        #[serde(default)]
        options: Value,
    },
    Bar {
        #[serde(default)]
        data: Value,
        #[serde(default)]
        options: Value,
    },
    #[serde(other)]
    Unknown,
}

/// Response of an upload or sample request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideDeck {
    #[serde(default)]
    pub template: Template,
    #[serde(default, deserialize_with = "slides_or_unknown")]
    pub slides: Vec<Slide>,
}

/// Decode a `type`-tagged value, or yield `unknown` when the tag is missing
/// or not a string.
fn decode_tagged<T: DeserializeOwned>(value: Value, unknown: T) -> serde_json::Result<T> {
    match value.get("type") {
        Some(Value::String(_)) => serde_json::from_value(value),
        _ => Ok(unknown),
    }
}

fn slides_or_unknown<'de, D>(deserializer: D) -> Result<Vec<Slide>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|value| decode_tagged(value, Slide::Unknown).map_err(de::Error::custom))
        .collect()
}

fn chart_or_unknown<'de, D>(deserializer: D) -> Result<Option<ChartSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(value) if !value.is_null() => decode_tagged(value, ChartSpec::Unknown)
            .map(Some)
            .map_err(de::Error::custom),
        _ => Ok(None),
    }
}

impl SlideDeck {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Title of the first slide, used as the document title
    pub fn heading(&self) -> Option<&str> {
        self.slides
            .iter()
            .filter_map(Slide::title)
            .find(|t| !t.trim().is_empty())
    }
}
