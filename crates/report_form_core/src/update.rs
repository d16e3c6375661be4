use crate::{Effect, FormState, Msg, UiState, STOCK_FIELD, UNKNOWN_ERROR};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageReady => {
            if state.request_catalog() {
                vec![Effect::LoadCatalog]
            } else {
                Vec::new()
            }
        }
        Msg::CatalogLoaded(catalog) => {
            state.set_catalog(catalog);
            Vec::new()
        }
        Msg::CatalogFailed => {
            state.set_catalog_error();
            Vec::new()
        }
        Msg::SectorChanged(sector) => {
            state.select_sector(sector);
            Vec::new()
        }
        Msg::StockChanged(ticker) => {
            state.select_stock(ticker);
            Vec::new()
        }
        Msg::FieldChanged { name, value } => {
            state.set_extra_field(name, value);
            Vec::new()
        }
        Msg::SubmitRequested => {
            // Mirrors the disabled button: one request at a time, and only with a stock.
            let fields = state.form_fields();
            if state.is_loading() || fields.get(STOCK_FIELD).unwrap_or_default().is_empty() {
                return (state, Vec::new());
            }
            let generation = state.begin_submit();
            vec![
                Effect::StartStatusTicker { generation },
                Effect::SubmitReport { fields },
            ]
        }
        Msg::StatusTick { generation } => {
            state.advance_status(generation);
            Vec::new()
        }
        Msg::ReportGenerated { download_url } => {
            if !state.is_loading() {
                return (state, Vec::new());
            }
            state.finish_submit(UiState::Success { download_url });
            vec![Effect::StopStatusTicker]
        }
        Msg::ReportFailed { message } => {
            if !state.is_loading() {
                return (state, Vec::new());
            }
            let message = message
                .filter(|text| !text.is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            state.finish_submit(UiState::Failure { message });
            vec![Effect::StopStatusTicker]
        }
        Msg::DownloadClicked => match state.ui() {
            UiState::Success { download_url } if !download_url.is_empty() => {
                let url = download_url.clone();
                state.set_download_note("Downloading report...".to_string());
                vec![Effect::DownloadReport { url }]
            }
            _ => Vec::new(),
        },
        Msg::ReportSaved { path } => {
            state.set_download_note(format!("Saved to {path}"));
            Vec::new()
        }
        Msg::DownloadFailed { reason } => {
            state.set_download_note(format!("Download failed: {reason}"));
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
