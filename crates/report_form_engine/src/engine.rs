use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use report_logging::{report_info, report_warn};

use crate::client::{ClientSettings, ReportClient, ReqwestReportClient};
use crate::{report_filename, AtomicFileWriter, DownloadError, EngineEvent, StatusTicker};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub client: ClientSettings,
    pub output_dir: PathBuf,
    pub status_period: Duration,
}

enum EngineCommand {
    LoadCatalog,
    Generate { fields: Vec<(String, String)> },
    Download { url: String },
    StartTicker { generation: u64 },
    StopTicker,
}

/// Runs IO on a background tokio runtime and reports back through events.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> std::io::Result<Self> {
        let client = Arc::new(ReqwestReportClient::new(config.client.clone()));
        Self::with_client(config, client)
    }

    /// Same as `new` but with a caller-supplied client.
    pub fn with_client(
        config: EngineConfig,
        client: Arc<dyn ReportClient>,
    ) -> std::io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            let mut ticker = StatusTicker::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::StartTicker { generation } => {
                        let tick_tx = event_tx.clone();
                        ticker.start(runtime.handle(), config.status_period, move || {
                            let _ = tick_tx.send(EngineEvent::StatusTick { generation });
                        });
                    }
                    EngineCommand::StopTicker => ticker.stop(),
                    command => {
                        let client = client.clone();
                        let event_tx = event_tx.clone();
                        let output_dir = config.output_dir.clone();
                        runtime.spawn(async move {
                            handle_command(client.as_ref(), command, output_dir, event_tx).await;
                        });
                    }
                }
            }
            ticker.stop();
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn load_catalog(&self) {
        let _ = self.cmd_tx.send(EngineCommand::LoadCatalog);
    }

    pub fn generate(&self, fields: Vec<(String, String)>) {
        let _ = self.cmd_tx.send(EngineCommand::Generate { fields });
    }

    pub fn download(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Download { url: url.into() });
    }

    /// Every tick carries `generation` so late ticks of an earlier run can be told apart.
    pub fn start_ticker(&self, generation: u64) {
        let _ = self.cmd_tx.send(EngineCommand::StartTicker { generation });
    }

    pub fn stop_ticker(&self) {
        let _ = self.cmd_tx.send(EngineCommand::StopTicker);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn ReportClient,
    command: EngineCommand,
    output_dir: PathBuf,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::LoadCatalog => {
            let result = client.fetch_catalog().await;
            if let Err(err) = &result {
                report_warn!("Catalog load failed: {}", err);
            }
            EngineEvent::CatalogLoaded(result)
        }
        EngineCommand::Generate { fields } => {
            report_info!("Submitting report request with {} fields", fields.len());
            let result = client.generate_report(&fields).await;
            match &result {
                Ok(url) => report_info!("Report ready at {}", url),
                Err(err) => report_warn!("Report generation failed: {}", err),
            }
            EngineEvent::ReportGenerated(result)
        }
        EngineCommand::Download { url } => {
            let result = download_to(client, &url, output_dir).await;
            match &result {
                Ok(path) => report_info!("Saved report to {:?}", path),
                Err(err) => report_warn!("Report download from {} failed: {}", url, err),
            }
            EngineEvent::ReportDownloaded(result)
        }
        EngineCommand::StartTicker { .. } | EngineCommand::StopTicker => return,
    };
    let _ = event_tx.send(event);
}

async fn download_to(
    client: &dyn ReportClient,
    url: &str,
    output_dir: PathBuf,
) -> Result<PathBuf, DownloadError> {
    let bytes = client.download_report(url).await?;
    let filename = report_filename(url);
    let writer = AtomicFileWriter::new(output_dir);
    Ok(writer.write(&filename, &bytes)?)
}
