use report_form_core::FormViewModel;

use super::dom::DomCommand;
use super::ids::*;

/// Translates the view model into DOM commands. Applying the same output twice is harmless.
#[allow(clippy::vec_init_then_push)]
pub fn render(view: &FormViewModel) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    cmds.push(DomCommand::SetOptions {
        id: SECTOR_SELECT,
        placeholder: Some(SECTOR_PLACEHOLDER),
        options: view
            .sector_options
            .iter()
            .map(|name| (name.clone(), name.clone()))
            .collect(),
    });
    cmds.push(DomCommand::SetValue {
        id: SECTOR_SELECT,
        value: view.selected_sector.clone(),
    });

    cmds.push(DomCommand::SetOptions {
        id: STOCK_SELECT,
        placeholder: Some(STOCK_PLACEHOLDER),
        options: view
            .stock_options
            .iter()
            .map(|option| (option.value.clone(), option.label.clone()))
            .collect(),
    });
    cmds.push(DomCommand::SetValue {
        id: STOCK_SELECT,
        value: view.selected_stock.clone(),
    });
    cmds.push(DomCommand::SetEnabled {
        id: STOCK_SELECT,
        enabled: view.stock_select_enabled,
    });

    cmds.push(DomCommand::SetEnabled {
        id: GENERATE_BTN,
        enabled: view.submit_enabled,
    });
    cmds.push(DomCommand::SetText {
        id: BTN_TEXT,
        text: view.button_label.to_string(),
    });
    cmds.push(DomCommand::SetVisible {
        id: LOADING_SPINNER,
        visible: view.spinner_visible,
    });

    cmds.push(DomCommand::SetVisible {
        id: STATUS_CONTAINER,
        visible: view.status_visible,
    });
    if view.status_visible {
        cmds.push(DomCommand::SetText {
            id: STATUS_TEXT,
            text: view.status_text.to_string(),
        });
    }

    cmds.push(DomCommand::SetVisible {
        id: RESULT_CONTAINER,
        visible: view.result_visible,
    });
    if let Some(url) = &view.download_url {
        cmds.push(DomCommand::SetHref {
            id: DOWNLOAD_LINK,
            href: Some(url.clone()),
        });
    }
    cmds.push(DomCommand::SetText {
        id: DOWNLOAD_NOTE,
        text: view.download_note.clone().unwrap_or_default(),
    });

    cmds.push(DomCommand::SetVisible {
        id: ERROR_CONTAINER,
        visible: view.error_visible,
    });
    if let Some(message) = &view.error_message {
        cmds.push(DomCommand::SetText {
            id: ERROR_MESSAGE,
            text: message.clone(),
        });
    }

    cmds
}
