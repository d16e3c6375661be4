use crate::UiState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormViewModel {
    pub ui: UiState,
    pub sector_options: Vec<String>,
    pub selected_sector: String,
    pub stock_options: Vec<SelectOption>,
    pub stock_select_enabled: bool,
    pub selected_stock: String,
    pub submit_enabled: bool,
    pub button_label: &'static str,
    pub spinner_visible: bool,
    pub status_visible: bool,
    pub status_text: &'static str,
    pub result_visible: bool,
    pub download_url: Option<String>,
    pub download_note: Option<String>,
    pub error_visible: bool,
    pub error_message: Option<String>,
    pub dirty: bool,
}
