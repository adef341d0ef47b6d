// ABOUTME: Application shell for the deck-viewer application
// ABOUTME: Owns top-level state and drives the upload and sample request lifecycle

use crate::api::SlideApi;
use crate::errors::Result;
use crate::model::SlideDeck;
use crate::navigator::SlideNavigator;
use crate::staging::{FileStaging, StagedFile};
use crate::templates::TemplateSelector;
use log::{error, info, warn};

pub const UPLOAD_FAILED: &str = "Failed to process files";
pub const SAMPLE_FAILED: &str = "Failed to fetch sample data";
pub const NO_FILES_SELECTED: &str = "Please select at least one file";
pub const NO_TEMPLATE_SELECTED: &str = "Please select a template";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Upload,
    Sample,
}

impl RequestKind {
    fn failure_message(self) -> &'static str {
        match self {
            RequestKind::Upload => UPLOAD_FAILED,
            RequestKind::Sample => SAMPLE_FAILED,
        }
    }
}

/// Handle for one issued request. Only the most recently issued ticket may
/// update the shell; older ones are discarded when they complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    id: u64,
    kind: RequestKind,
    template_id: String,
    files: Vec<StagedFile>,
}

impl RequestTicket {
    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    /// Files captured when the request was issued (empty for samples)
    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    /// Perform the request this ticket describes.
    pub fn execute(&self, api: &dyn SlideApi) -> Result<SlideDeck> {
        match self.kind {
            RequestKind::Upload => api.upload(&self.files, &self.template_id),
            RequestKind::Sample => api.fetch_sample(&self.template_id),
        }
    }
}

pub struct App<A: SlideApi> {
    api: A,
    staging: FileStaging,
    selector: TemplateSelector,
    navigator: Option<SlideNavigator>,
    loading: bool,
    error: Option<String>,
    next_request_id: u64,
    in_flight: Option<u64>,
}

impl<A: SlideApi> App<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            staging: FileStaging::new(),
            selector: TemplateSelector::new(),
            navigator: None,
            loading: false,
            error: None,
            next_request_id: 0,
            in_flight: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Load the template list. Runs once per shell; the first template
    /// becomes the selection.
    pub fn mount(&mut self) {
        self.selector.mount(&self.api, |id| {
            info!("Template selected: {}", id);
        });
    }

    pub fn select_template(&mut self, id: &str) {
        self.selector.select(id, |id| info!("Template selected: {}", id));
    }

    pub fn selected_template(&self) -> Option<&str> {
        self.selector.selected()
    }

    pub fn templates(&self) -> &[String] {
        self.selector.available()
    }

    pub fn add_files<I>(&mut self, files: I)
    where
        I: IntoIterator<Item = StagedFile>,
    {
        self.staging.add(files);
    }

    pub fn remove_file(&mut self, index: usize) -> Option<StagedFile> {
        self.staging.remove(index)
    }

    pub fn staged_files(&self) -> &[StagedFile] {
        self.staging.files()
    }

    pub fn deck(&self) -> Option<&SlideDeck> {
        self.navigator.as_ref().map(SlideNavigator::deck)
    }

    pub fn navigator(&self) -> Option<&SlideNavigator> {
        self.navigator.as_ref()
    }

    pub fn navigator_mut(&mut self) -> Option<&mut SlideNavigator> {
        self.navigator.as_mut()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Upload the staged files with the selected template.
    pub fn upload(&mut self) {
        if let Some(ticket) = self.begin_upload() {
            let result = ticket.execute(&self.api);
            self.complete(&ticket, result);
        }
    }

    /// Request a sample deck with the selected template.
    pub fn load_sample(&mut self) {
        if let Some(ticket) = self.begin_sample() {
            let result = ticket.execute(&self.api);
            self.complete(&ticket, result);
        }
    }

    /// Start an upload: validate input, raise the loading flag and clear any
    /// error. Returns `None` when there is nothing to send.
    pub fn begin_upload(&mut self) -> Option<RequestTicket> {
        if self.staging.is_empty() {
            self.error = Some(NO_FILES_SELECTED.to_string());
            return None;
        }
        let files = self.staging.files().to_vec();
        self.begin(RequestKind::Upload, files)
    }

    pub fn begin_sample(&mut self) -> Option<RequestTicket> {
        self.begin(RequestKind::Sample, Vec::new())
    }

    fn begin(&mut self, kind: RequestKind, files: Vec<StagedFile>) -> Option<RequestTicket> {
        let Some(template_id) = self.selector.selected().map(str::to_string) else {
            self.error = Some(NO_TEMPLATE_SELECTED.to_string());
            return None;
        };

        if let Some(previous) = self.in_flight {
            info!("Request #{} superseded by a new {:?} request", previous, kind);
        }

        self.next_request_id += 1;
        let id = self.next_request_id;
        self.in_flight = Some(id);
        self.loading = true;
        self.error = None;

        Some(RequestTicket {
            id,
            kind,
            template_id,
            files,
        })
    }

    /// Apply the outcome of a request. Success replaces the deck (and resets
    /// navigation); failure keeps the previous deck and records a message.
    /// Completions of superseded tickets are dropped.
    pub fn complete(&mut self, ticket: &RequestTicket, result: Result<SlideDeck>) {
        if self.in_flight != Some(ticket.id) {
            warn!(
                "Discarding result of superseded request #{} ({:?})",
                ticket.id, ticket.kind
            );
            return;
        }

        match result {
            Ok(deck) => {
                info!(
                    "Received deck with {} slide(s) for template {}",
                    deck.len(),
                    ticket.template_id
                );
                self.navigator = Some(SlideNavigator::new(deck));
                self.error = None;
            }
            Err(e) => {
                error!("{:?} request failed: {}", ticket.kind, e);
                self.error = Some(ticket.kind.failure_message().to_string());
            }
        }

        self.in_flight = None;
        self.loading = false;
    }
}
