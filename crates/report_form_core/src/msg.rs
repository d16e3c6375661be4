#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Form is on screen; request the catalog.
    PageReady,
    /// Catalog fetch succeeded.
    CatalogLoaded(crate::StockCatalog),
    /// Catalog fetch failed; details were logged by the engine.
    CatalogFailed,
    /// User picked a sector (empty for the placeholder).
    SectorChanged(String),
    /// User picked a stock ticker (empty for the placeholder).
    StockChanged(String),
    /// User edited an extra form field. An empty value removes it.
    FieldChanged { name: String, value: String },
    /// User submitted the form.
    SubmitRequested,
    /// Status ticker fired. Ticks from an earlier run are ignored.
    StatusTick { generation: u64 },
    /// Report generator answered OK. The link is empty when none came back.
    ReportGenerated { download_url: String },
    /// Report generation failed. `None` when no usable message came back.
    ReportFailed { message: Option<String> },
    /// User followed the download link.
    DownloadClicked,
    /// Report bytes were written to disk.
    ReportSaved { path: String },
    /// Fetching or saving the report failed.
    DownloadFailed { reason: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
