//! Report form engine: HTTP client, status ticker and effect execution.
mod client;
mod engine;
mod filename;
mod listing;
mod persist;
mod ticker;
mod types;

pub use client::{ClientSettings, ReportClient, ReqwestReportClient, CATALOG_PATH, GENERATE_PATH};
pub use engine::{EngineConfig, EngineHandle};
pub use filename::report_filename;
pub use listing::{parse_listing, CatalogListing, ListedStock};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use ticker::StatusTicker;
pub use types::{CatalogLoadError, DownloadError, EngineEvent, GenerationError};
