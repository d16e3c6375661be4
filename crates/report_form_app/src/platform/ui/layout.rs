use super::dom::{Document, Element, ElementKind, OptionElement, HIDDEN_CLASS};
use super::ids::*;
use report_form_core::BUTTON_LABEL_IDLE;

/// The form as first served: selectors empty, submit disabled, panels hidden.
pub fn initial_document() -> Document {
    let mut doc = Document::new();

    doc.insert(REPORT_FORM, Element::new(ElementKind::Form, None));

    let mut sector = Element::new(ElementKind::Select, Some(REPORT_FORM));
    sector.options = vec![OptionElement::placeholder(SECTOR_PLACEHOLDER)];
    doc.insert(SECTOR_SELECT, sector);

    let mut stock = Element::new(ElementKind::Select, Some(REPORT_FORM));
    stock.options = vec![OptionElement::placeholder(STOCK_PLACEHOLDER)];
    stock.disabled = true;
    doc.insert(STOCK_SELECT, stock);

    let mut button = Element::new(ElementKind::Button, Some(REPORT_FORM));
    button.disabled = true;
    doc.insert(GENERATE_BTN, button);

    let mut label = Element::new(ElementKind::Span, Some(GENERATE_BTN));
    label.text = BUTTON_LABEL_IDLE.to_string();
    doc.insert(BTN_TEXT, label);

    doc.insert(LOADING_SPINNER, hidden(ElementKind::Span, Some(GENERATE_BTN)));

    doc.insert(STATUS_CONTAINER, hidden(ElementKind::Div, None));
    doc.insert(STATUS_TEXT, Element::new(ElementKind::Span, Some(STATUS_CONTAINER)));

    doc.insert(RESULT_CONTAINER, hidden(ElementKind::Div, None));
    doc.insert(DOWNLOAD_LINK, Element::new(ElementKind::Link, Some(RESULT_CONTAINER)));
    doc.insert(DOWNLOAD_NOTE, Element::new(ElementKind::Span, Some(RESULT_CONTAINER)));

    doc.insert(ERROR_CONTAINER, hidden(ElementKind::Div, None));
    doc.insert(ERROR_MESSAGE, Element::new(ElementKind::Span, Some(ERROR_CONTAINER)));

    doc
}

fn hidden(kind: ElementKind, parent: Option<&'static str>) -> Element {
    let mut element = Element::new(kind, parent);
    element.classes.push(HIDDEN_CLASS.to_string());
    element
}
