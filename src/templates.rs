// ABOUTME: Template selection for the deck-viewer application
// ABOUTME: Fetches available template ids once and tracks the single selected id

use crate::api::SlideApi;
use log::{info, warn};

#[derive(Debug, Default)]
pub struct TemplateSelector {
    available: Vec<String>,
    selected: Option<String>,
    mounted: bool,
}

impl TemplateSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the template list and select its first entry. Only the first call
    /// in a selector's lifetime talks to the service; later calls do nothing.
    ///
    /// A failed fetch is logged and leaves the selection empty.
    pub fn mount<F>(&mut self, api: &dyn SlideApi, mut on_change: F)
    where
        F: FnMut(&str),
    {
        if self.mounted {
            return;
        }
        self.mounted = true;

        match api.list_templates() {
            Ok(templates) => {
                info!("Service offers {} template(s)", templates.len());
                self.available = templates;
                if let Some(first) = self.available.first().cloned() {
                    self.selected = Some(first);
                    if let Some(id) = self.selected.as_deref() {
                        on_change(id);
                    }
                }
            }
            Err(e) => {
                warn!("Error fetching templates: {}", e);
            }
        }
    }

    /// Replace the selection with `id` and notify.
    pub fn select<F>(&mut self, id: &str, mut on_change: F)
    where
        F: FnMut(&str),
    {
        if !self.available.is_empty() && !self.available.iter().any(|t| t == id) {
            warn!(
                "Template '{}' is not in the service's list ({}); it may fall back to a default",
                id,
                self.available.join(", ")
            );
        }
        self.selected = Some(id.to_string());
        on_change(id);
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
