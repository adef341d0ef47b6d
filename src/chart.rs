// ABOUTME: Chart rendering for the deck-viewer application
// ABOUTME: Dispatches chart specs to line or bar primitives and owns component registration

use crate::model::ChartSpec;
use log::info;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

/// Chart.js building blocks every chart in a deck may rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartComponent {
    CategoryScale,
    LinearScale,
    PointElement,
    LineElement,
    BarElement,
    Title,
    Tooltip,
    Legend,
}

impl ChartComponent {
    pub const ALL: [ChartComponent; 8] = [
        ChartComponent::CategoryScale,
        ChartComponent::LinearScale,
        ChartComponent::PointElement,
        ChartComponent::LineElement,
        ChartComponent::BarElement,
        ChartComponent::Title,
        ChartComponent::Tooltip,
        ChartComponent::Legend,
    ];

    /// Name of the export in the Chart.js bundle
    pub fn js_name(self) -> &'static str {
        match self {
            ChartComponent::CategoryScale => "CategoryScale",
            ChartComponent::LinearScale => "LinearScale",
            ChartComponent::PointElement => "PointElement",
            ChartComponent::LineElement => "LineElement",
            ChartComponent::BarElement => "BarElement",
            ChartComponent::Title => "Title",
            ChartComponent::Tooltip => "Tooltip",
            ChartComponent::Legend => "Legend",
        }
    }
}

#[derive(Debug)]
pub struct ChartRegistry {
    components: Vec<ChartComponent>,
}

impl ChartRegistry {
    pub fn components(&self) -> &[ChartComponent] {
        &self.components
    }

    pub fn is_registered(&self, component: ChartComponent) -> bool {
        self.components.contains(&component)
    }

    /// `Chart.register(...)` statement for the registered components. Exports
    /// missing from the loaded bundle are skipped.
    pub fn register_script(&self) -> String {
        let names: Vec<String> = self
            .components
            .iter()
            .map(|c| format!("Chart.{}", c.js_name()))
            .collect();
        format!("Chart.register(...[{}].filter(Boolean));", names.join(", "))
    }
}

static REGISTRY: OnceLock<ChartRegistry> = OnceLock::new();

/// Process-wide chart component registry. Initialized on first use and never
/// torn down; repeated calls return the same instance.
pub fn registry() -> &'static ChartRegistry {
    REGISTRY.get_or_init(|| {
        info!("Registering {} chart components", ChartComponent::ALL.len());
        ChartRegistry {
            components: ChartComponent::ALL.to_vec(),
        }
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chart primitive bound to its data and options, borrowed unmodified from
/// the spec it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartView<'a> {
    Line { data: &'a Value, options: &'a Value },
    Bar { data: &'a Value, options: &'a Value },
}

impl<'a> ChartView<'a> {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartView::Line { .. } => ChartKind::Line,
            ChartView::Bar { .. } => ChartKind::Bar,
        }
    }

    pub fn data(&self) -> &'a Value {
        match *self {
            ChartView::Line { data, .. } | ChartView::Bar { data, .. } => data,
        }
    }

    pub fn options(&self) -> &'a Value {
        match *self {
            ChartView::Line { options, .. } | ChartView::Bar { options, .. } => options,
        }
    }

    /// Full Chart.js configuration object for this chart
    pub fn config(&self) -> Value {
        let options = match self.options() {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        };
        serde_json::json!({
            "type": self.kind().as_str(),
            "data": self.data(),
            "options": options,
        })
    }
}

/// Pick the primitive for a chart spec. Missing or unknown specs draw nothing.
pub fn render_chart(spec: Option<&ChartSpec>) -> Option<ChartView<'_>> {
    registry();
    match spec? {
        ChartSpec::Line { data, options } => Some(ChartView::Line { data, options }),
        ChartSpec::Bar { data, options } => Some(ChartView::Bar { data, options }),
        ChartSpec::Unknown => None,
    }
}
