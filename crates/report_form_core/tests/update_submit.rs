use std::sync::Once;

use pretty_assertions::assert_eq;
use report_form_core::{
    update, Effect, FormState, Msg, Stock, StockCatalog, UiState, BUTTON_LABEL_BUSY,
    BUTTON_LABEL_IDLE, CATALOG_LOAD_FAILED, SECTOR_FIELD, STATUS_MESSAGES, STOCK_FIELD,
    UNKNOWN_ERROR,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(report_logging::initialize_for_tests);
}

fn ready_to_submit() -> FormState {
    let catalog = StockCatalog::from_pairs([(
        "IT".to_string(),
        vec![Stock::new("Infosys", "INFY.NS"), Stock::new("TCS", "TCS.NS")],
    )]);
    let (state, _) = update(FormState::new(), Msg::PageReady);
    let (state, _) = update(state, Msg::CatalogLoaded(catalog));
    let (state, _) = update(state, Msg::SectorChanged("IT".into()));
    let (state, _) = update(state, Msg::StockChanged("TCS.NS".into()));
    state
}

fn submitted() -> FormState {
    let (state, _) = update(ready_to_submit(), Msg::SubmitRequested);
    state
}

#[test]
fn submit_enters_loading_and_starts_status_cycle() {
    init_logging();
    let (state, effects) = update(ready_to_submit(), Msg::SubmitRequested);
    let view = state.view();

    assert_eq!(view.ui, UiState::Loading);
    assert!(!view.submit_enabled);
    assert!(view.spinner_visible);
    assert_eq!(view.button_label, BUTTON_LABEL_BUSY);
    assert!(view.status_visible);
    assert_eq!(view.status_text, STATUS_MESSAGES[0]);
    assert!(!view.result_visible);
    assert!(!view.error_visible);

    assert_eq!(effects.len(), 2);
    assert_eq!(
        effects[0],
        Effect::StartStatusTicker {
            generation: state.status().generation()
        }
    );
    match &effects[1] {
        Effect::SubmitReport { fields } => {
            assert_eq!(fields.get(SECTOR_FIELD), Some("IT"));
            assert_eq!(fields.get(STOCK_FIELD), Some("TCS.NS"));
        }
        other => panic!("unexpected effect {other:?}"),
    }
}

#[test]
fn extra_fields_follow_selectors_in_submission() {
    init_logging();
    let (state, _) = update(
        ready_to_submit(),
        Msg::FieldChanged {
            name: "period".into(),
            value: "3y".into(),
        },
    );
    let (state, _) = update(
        state,
        Msg::FieldChanged {
            name: "notes".into(),
            value: "x".into(),
        },
    );
    let (state, _) = update(
        state,
        Msg::FieldChanged {
            name: "notes".into(),
            value: String::new(),
        },
    );
    let (_state, effects) = update(state, Msg::SubmitRequested);

    let Some(Effect::SubmitReport { fields }) = effects.last() else {
        panic!("missing submit effect");
    };
    let names: Vec<_> = fields.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec![SECTOR_FIELD, STOCK_FIELD, "period"]);
}

#[test]
fn submit_without_catalog_is_allowed_when_stock_selected() {
    init_logging();
    let (state, _) = update(FormState::new(), Msg::StockChanged("SBIN.NS".into()));
    assert!(state.view().submit_enabled);

    let (state, effects) = update(state, Msg::SubmitRequested);
    assert_eq!(state.ui(), &UiState::Loading);
    assert!(effects
        .iter()
        .any(|effect| matches!(effect, Effect::SubmitReport { .. })));
}

#[test]
fn submit_without_stock_is_ignored() {
    init_logging();
    let (state, effects) = update(FormState::new(), Msg::SubmitRequested);
    assert!(effects.is_empty());
    assert_eq!(state.ui(), &UiState::Idle);

    let (state, _) = update(state, Msg::StockChanged("INFY.NS".into()));
    let (state, _) = update(state, Msg::StockChanged(String::new()));
    let (state, effects) = update(state, Msg::SubmitRequested);
    assert!(effects.is_empty());
    assert!(!state.view().spinner_visible);
}

#[test]
fn submit_is_ignored_while_in_flight() {
    init_logging();
    let (state, effects) = update(submitted(), Msg::SubmitRequested);
    assert!(effects.is_empty());
    assert_eq!(state.ui(), &UiState::Loading);
}

#[test]
fn success_reveals_download_link_and_restores_button() {
    init_logging();
    let (state, effects) = update(
        submitted(),
        Msg::ReportGenerated {
            download_url: "/r/1.pdf".into(),
        },
    );
    let view = state.view();

    assert_eq!(effects, vec![Effect::StopStatusTicker]);
    assert!(view.result_visible);
    assert_eq!(view.download_url.as_deref(), Some("/r/1.pdf"));
    assert!(!view.error_visible);
    assert!(view.submit_enabled);
    assert!(!view.spinner_visible);
    assert!(!view.status_visible);
    assert_eq!(view.button_label, BUTTON_LABEL_IDLE);
}

#[test]
fn failure_shows_server_message_and_reenables_submit() {
    init_logging();
    let (state, effects) = update(
        submitted(),
        Msg::ReportFailed {
            message: Some("Invalid ticker".into()),
        },
    );
    let view = state.view();

    assert_eq!(effects, vec![Effect::StopStatusTicker]);
    assert!(view.error_visible);
    assert_eq!(view.error_message.as_deref(), Some("Invalid ticker"));
    assert!(!view.result_visible);
    assert!(view.submit_enabled);
    assert!(!view.status_visible);
}

#[test]
fn failure_without_message_falls_back_to_unknown_error() {
    init_logging();
    for message in [None, Some(String::new())] {
        let (state, _) = update(submitted(), Msg::ReportFailed { message });
        assert_eq!(
            state.ui(),
            &UiState::Failure {
                message: UNKNOWN_ERROR.to_string()
            }
        );
    }
}

#[test]
fn whitespace_message_is_shown_as_sent() {
    init_logging();
    let (state, _) = update(
        submitted(),
        Msg::ReportFailed {
            message: Some("  ".into()),
        },
    );
    assert_eq!(
        state.ui(),
        &UiState::Failure {
            message: "  ".to_string()
        }
    );
}

#[test]
fn success_without_link_reveals_result_but_offers_no_download() {
    init_logging();
    let (state, effects) = update(
        submitted(),
        Msg::ReportGenerated {
            download_url: String::new(),
        },
    );
    assert_eq!(effects, vec![Effect::StopStatusTicker]);
    let view = state.view();
    assert!(view.result_visible);
    assert!(!view.error_visible);

    let (_state, effects) = update(state, Msg::DownloadClicked);
    assert!(effects.is_empty());
}

#[test]
fn resubmitting_hides_previous_outcome() {
    init_logging();
    let (state, _) = update(
        submitted(),
        Msg::ReportFailed {
            message: Some("busy".into()),
        },
    );
    let (state, _) = update(state, Msg::SubmitRequested);
    let view = state.view();
    assert!(!view.error_visible);
    assert!(!view.result_visible);
    assert!(view.spinner_visible);
}

#[test]
fn submitting_hides_catalog_error() {
    init_logging();
    let (state, _) = update(FormState::new(), Msg::CatalogFailed);
    let (state, _) = update(state, Msg::StockChanged("INFY.NS".into()));
    assert_eq!(
        state.view().error_message.as_deref(),
        Some(CATALOG_LOAD_FAILED)
    );

    let (state, _) = update(state, Msg::SubmitRequested);
    assert!(!state.view().error_visible);
}

#[test]
fn status_ticks_cycle_and_wrap() {
    init_logging();
    let mut state = submitted();
    let generation = state.status().generation();
    let mut seen = Vec::new();
    for _ in 0..STATUS_MESSAGES.len() {
        let (next, _) = update(state, Msg::StatusTick { generation });
        seen.push(next.view().status_text);
        state = next;
    }
    assert_eq!(
        seen,
        vec![
            STATUS_MESSAGES[1],
            STATUS_MESSAGES[2],
            STATUS_MESSAGES[3],
            STATUS_MESSAGES[4],
            STATUS_MESSAGES[0],
        ]
    );
}

#[test]
fn late_ticks_and_results_are_ignored_after_completion() {
    init_logging();
    let state = submitted();
    let generation = state.status().generation();
    let (state, _) = update(state, Msg::StatusTick { generation });
    let (mut state, _) = update(
        state,
        Msg::ReportGenerated {
            download_url: "/download/a.pdf".into(),
        },
    );
    assert!(state.consume_dirty());
    let before = state.view();

    let (mut state, effects) = update(state, Msg::StatusTick { generation });
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.view(), before);

    let (state, effects) = update(
        state,
        Msg::ReportFailed {
            message: Some("late".into()),
        },
    );
    assert!(effects.is_empty());
    assert!(matches!(state.ui(), UiState::Success { .. }));
}

#[test]
fn download_click_requests_report_and_records_outcome() {
    init_logging();
    let (state, effects) = update(submitted(), Msg::DownloadClicked);
    assert!(effects.is_empty(), "no link before a report exists");

    let (state, _) = update(
        state,
        Msg::ReportGenerated {
            download_url: "/download/TCS_NS.pdf".into(),
        },
    );
    let (state, effects) = update(state, Msg::DownloadClicked);
    assert_eq!(
        effects,
        vec![Effect::DownloadReport {
            url: "/download/TCS_NS.pdf".into()
        }]
    );

    let (state, _) = update(
        state,
        Msg::ReportSaved {
            path: "out/TCS_NS.pdf".into(),
        },
    );
    let view = state.view();
    assert_eq!(view.download_note.as_deref(), Some("Saved to out/TCS_NS.pdf"));
    assert!(view.result_visible);

    let (state, _) = update(
        state,
        Msg::DownloadFailed {
            reason: "http status 404".into(),
        },
    );
    assert_eq!(
        state.view().download_note.as_deref(),
        Some("Download failed: http status 404")
    );
}

#[test]
fn tick_from_previous_run_does_not_advance_new_cycle() {
    init_logging();
    let state = submitted();
    let stale = state.status().generation();
    let (state, _) = update(
        state,
        Msg::ReportFailed {
            message: Some("busy".into()),
        },
    );
    let (state, effects) = update(state, Msg::SubmitRequested);
    let Some(Effect::StartStatusTicker { generation }) = effects.first().cloned() else {
        panic!("missing ticker effect");
    };
    assert_ne!(generation, stale);

    let (state, _) = update(state, Msg::StatusTick { generation: stale });
    assert_eq!(state.view().status_text, STATUS_MESSAGES[0]);

    let (state, _) = update(state, Msg::StatusTick { generation });
    assert_eq!(state.view().status_text, STATUS_MESSAGES[1]);
}
