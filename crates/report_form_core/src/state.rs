use crate::view_model::{FormViewModel, SelectOption};
use crate::{FormFields, StatusCycle, StockCatalog, SECTOR_FIELD, STOCK_FIELD};

/// Shown when the catalog cannot be loaded, whatever the cause.
pub const CATALOG_LOAD_FAILED: &str = "Failed to load stock data.";
/// Shown when report generation fails without a usable message.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";
pub const BUTTON_LABEL_IDLE: &str = "Generate Report";
pub const BUTTON_LABEL_BUSY: &str = "Processing...";

/// Outcome of the last report request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success { download_url: String },
    Failure { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    catalog: Option<StockCatalog>,
    catalog_requested: bool,
    catalog_error: Option<String>,
    selected_sector: String,
    selected_stock: String,
    extra_fields: FormFields,
    ui: UiState,
    status: StatusCycle,
    download_note: Option<String>,
    dirty: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> FormViewModel {
        let loading = self.is_loading();
        let stock_options: Vec<SelectOption> = self
            .current_stocks()
            .iter()
            .map(|stock| SelectOption {
                value: stock.ticker.clone(),
                label: stock.option_label(),
            })
            .collect();

        let (result_visible, download_url) = match &self.ui {
            UiState::Success { download_url } => (true, Some(download_url.clone())),
            _ => (false, None),
        };
        let error_message = match &self.ui {
            UiState::Failure { message } => Some(message.clone()),
            _ => self.catalog_error.clone(),
        };

        FormViewModel {
            ui: self.ui.clone(),
            sector_options: self
                .catalog
                .as_ref()
                .map(|catalog| catalog.sector_names().map(ToOwned::to_owned).collect())
                .unwrap_or_default(),
            selected_sector: self.selected_sector.clone(),
            stock_select_enabled: !stock_options.is_empty(),
            stock_options,
            selected_stock: self.selected_stock.clone(),
            submit_enabled: !loading && !self.selected_stock.is_empty(),
            button_label: if loading {
                BUTTON_LABEL_BUSY
            } else {
                BUTTON_LABEL_IDLE
            },
            spinner_visible: loading,
            status_visible: self.status.is_active(),
            status_text: self.status.message(),
            result_visible,
            download_url,
            download_note: self.download_note.clone(),
            error_visible: error_message.is_some(),
            error_message,
            dirty: self.dirty,
        }
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn is_loading(&self) -> bool {
        self.ui == UiState::Loading
    }

    pub fn catalog(&self) -> Option<&StockCatalog> {
        self.catalog.as_ref()
    }

    pub fn status(&self) -> &StatusCycle {
        &self.status
    }

    /// Returns whether anything visible changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Fields submitted with the report request: both selectors first, then extras.
    pub fn form_fields(&self) -> FormFields {
        let mut fields = FormFields::new();
        fields.set(SECTOR_FIELD, self.selected_sector.clone());
        fields.set(STOCK_FIELD, self.selected_stock.clone());
        for (name, value) in self.extra_fields.iter() {
            fields.set(name, value);
        }
        fields
    }

    fn current_stocks(&self) -> &[crate::Stock] {
        self.catalog
            .as_ref()
            .and_then(|catalog| catalog.stocks_for(&self.selected_sector))
            .unwrap_or(&[])
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns true the first time only.
    pub(crate) fn request_catalog(&mut self) -> bool {
        !std::mem::replace(&mut self.catalog_requested, true)
    }

    pub(crate) fn set_catalog(&mut self, catalog: StockCatalog) {
        self.catalog = Some(catalog);
        self.mark_dirty();
    }

    pub(crate) fn set_catalog_error(&mut self) {
        self.catalog_error = Some(CATALOG_LOAD_FAILED.to_string());
        self.mark_dirty();
    }

    pub(crate) fn select_sector(&mut self, sector: String) {
        self.selected_sector = sector;
        self.selected_stock.clear();
        self.mark_dirty();
    }

    pub(crate) fn select_stock(&mut self, ticker: String) {
        self.selected_stock = ticker;
        self.mark_dirty();
    }

    pub(crate) fn set_extra_field(&mut self, name: String, value: String) {
        if value.is_empty() {
            self.extra_fields.remove(&name);
        } else {
            self.extra_fields.set(name, value);
        }
    }

    /// Enters `Loading`, clearing any previous result or error panels.
    /// Returns the generation of the freshly started status cycle.
    pub(crate) fn begin_submit(&mut self) -> u64 {
        self.ui = UiState::Loading;
        self.catalog_error = None;
        self.download_note = None;
        let generation = self.status.start();
        self.mark_dirty();
        generation
    }

    /// Leaves `Loading` with the given outcome and stops the status cycle.
    pub(crate) fn finish_submit(&mut self, outcome: UiState) {
        self.ui = outcome;
        self.status.stop();
        self.mark_dirty();
    }

    pub(crate) fn advance_status(&mut self, generation: u64) {
        if self.status.advance(generation) {
            self.mark_dirty();
        }
    }

    pub(crate) fn set_download_note(&mut self, note: String) {
        self.download_note = Some(note);
        self.mark_dirty();
    }
}
