use report_form_core::{update, Effect, FormState, Msg};
use report_logging::report_error;

use super::ui::dom::Document;
use super::ui::{layout, render};

/// Owns the form state and the document it is rendered into.
pub struct FormController {
    state: FormState,
    document: Document,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        let mut controller = Self {
            state: FormState::new(),
            document: layout::initial_document(),
        };
        controller.render();
        controller
    }

    /// Applies `msg`, re-renders if anything visible changed, and returns the effects to run.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            self.render();
        }
        effects
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn render(&mut self) {
        for command in render::render(&self.state.view()) {
            if let Err(err) = self.document.apply(command) {
                report_error!("Render command failed: {}", err);
            }
        }
    }
}
