use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use report_form_engine::{
    CatalogListing, CatalogLoadError, ClientSettings, DownloadError, EngineConfig, EngineEvent,
    EngineHandle, GenerationError, ReportClient,
};
use tempfile::TempDir;
use url::Url;

const WAIT: Duration = Duration::from_secs(5);

struct ScriptedClient;

#[async_trait]
impl ReportClient for ScriptedClient {
    async fn fetch_catalog(&self) -> Result<CatalogListing, CatalogLoadError> {
        Err(CatalogLoadError::HttpStatus(500))
    }

    async fn generate_report(
        &self,
        fields: &[(String, String)],
    ) -> Result<String, GenerationError> {
        match fields.iter().find(|(name, _)| name == "stock_select") {
            Some((_, ticker)) if !ticker.is_empty() => Ok(format!("/download/{ticker}.pdf")),
            _ => Err(GenerationError::Rejected("No stock selected.".to_string())),
        }
    }

    async fn download_report(&self, _url: &str) -> Result<Vec<u8>, DownloadError> {
        Ok(b"%PDF".to_vec())
    }
}

fn engine(output: &TempDir, status_period: Duration) -> EngineHandle {
    let config = EngineConfig {
        client: ClientSettings::new(Url::parse("http://127.0.0.1:9").unwrap()),
        output_dir: output.path().to_path_buf(),
        status_period,
    };
    EngineHandle::with_client(config, Arc::new(ScriptedClient)).expect("engine")
}

#[test]
fn commands_come_back_as_events() {
    let output = TempDir::new().unwrap();
    let engine = engine(&output, Duration::from_secs(60));

    engine.load_catalog();
    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::CatalogLoaded(Err(CatalogLoadError::HttpStatus(500)))) => {}
        other => panic!("unexpected event {other:?}"),
    }

    engine.generate(vec![("stock_select".to_string(), "SBIN.NS".to_string())]);
    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::ReportGenerated(Ok(url))) => assert_eq!(url, "/download/SBIN.NS.pdf"),
        other => panic!("unexpected event {other:?}"),
    }

    engine.download("/download/SBIN.NS.pdf");
    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::ReportDownloaded(Ok(path))) => {
            assert_eq!(path, output.path().join("SBIN.NS.pdf"));
            assert_eq!(std::fs::read(path).unwrap(), b"%PDF");
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn ticker_posts_ticks_until_stopped() {
    let output = TempDir::new().unwrap();
    let engine = engine(&output, Duration::from_millis(20));

    engine.start_ticker(7);
    assert!(matches!(
        engine.recv_timeout(WAIT),
        Some(EngineEvent::StatusTick { generation: 7 })
    ));

    engine.stop_ticker();
    // Let any tick already in flight land, then drain.
    std::thread::sleep(Duration::from_millis(100));
    while engine.try_recv().is_some() {}
    std::thread::sleep(Duration::from_millis(100));
    assert!(engine.try_recv().is_none());
}
