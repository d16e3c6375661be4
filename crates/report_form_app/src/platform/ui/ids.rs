pub const REPORT_FORM: &str = "report-form";
pub const SECTOR_SELECT: &str = "sector-select";
pub const STOCK_SELECT: &str = "stock-select";
pub const GENERATE_BTN: &str = "generate-btn";
pub const BTN_TEXT: &str = "btn-text";
pub const LOADING_SPINNER: &str = "loading-spinner";
pub const RESULT_CONTAINER: &str = "result-container";
pub const ERROR_CONTAINER: &str = "error-container";
pub const STATUS_CONTAINER: &str = "status-container";
pub const DOWNLOAD_LINK: &str = "download-link";
pub const ERROR_MESSAGE: &str = "error-message";
pub const STATUS_TEXT: &str = "status-text";
/// Line under the download link reporting where the report was saved.
pub const DOWNLOAD_NOTE: &str = "download-note";

pub const SECTOR_PLACEHOLDER: &str = "-- Select Sector --";
pub const STOCK_PLACEHOLDER: &str = "-- Select Stock --";
