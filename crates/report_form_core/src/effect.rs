use crate::FormFields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// GET the stock catalog.
    LoadCatalog,
    /// POST the form to the report generator.
    SubmitReport { fields: FormFields },
    /// Begin posting `Msg::StatusTick` every `STATUS_PERIOD`, tagged with `generation`.
    StartStatusTicker { generation: u64 },
    /// Cancel the status ticker. Safe to issue when none is running.
    StopStatusTicker,
    /// Fetch the generated report and save it locally.
    DownloadReport { url: String },
}
