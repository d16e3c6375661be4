use std::time::Duration;

use report_form_core::{Effect, Msg, Stock, StockCatalog};
use report_form_engine::{CatalogListing, EngineEvent, EngineHandle};
use report_logging::{report_debug, report_info};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCatalog => {
                    report_info!("LoadCatalog");
                    self.engine.load_catalog();
                }
                Effect::SubmitReport { fields } => {
                    let fields: Vec<(String, String)> = fields
                        .iter()
                        .map(|(name, value)| (name.to_string(), value.to_string()))
                        .collect();
                    self.engine.generate(fields);
                }
                Effect::StartStatusTicker { generation } => self.engine.start_ticker(generation),
                Effect::StopStatusTicker => self.engine.stop_ticker(),
                Effect::DownloadReport { url } => {
                    report_info!("DownloadReport url={}", url);
                    self.engine.download(url);
                }
            }
        }
    }

    pub fn try_next_msg(&self) -> Option<Msg> {
        self.engine.try_recv().map(event_to_msg)
    }

    pub fn next_msg_timeout(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(event_to_msg)
    }
}

pub fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogLoaded(Ok(listing)) => Msg::CatalogLoaded(map_catalog(listing)),
        EngineEvent::CatalogLoaded(Err(_)) => Msg::CatalogFailed,
        EngineEvent::ReportGenerated(Ok(download_url)) => Msg::ReportGenerated { download_url },
        EngineEvent::ReportGenerated(Err(err)) => Msg::ReportFailed {
            message: err.user_message().map(ToOwned::to_owned),
        },
        EngineEvent::ReportDownloaded(Ok(path)) => Msg::ReportSaved {
            path: path.display().to_string(),
        },
        EngineEvent::ReportDownloaded(Err(err)) => Msg::DownloadFailed {
            reason: err.to_string(),
        },
        EngineEvent::StatusTick { generation } => {
            report_debug!("StatusTick generation={}", generation);
            Msg::StatusTick { generation }
        }
    }
}

fn map_catalog(listing: CatalogListing) -> StockCatalog {
    StockCatalog::from_pairs(listing.into_iter().map(|(sector, stocks)| {
        let stocks = stocks
            .into_iter()
            .map(|stock| Stock::new(stock.name, stock.ticker))
            .collect();
        (sector, stocks)
    }))
}
