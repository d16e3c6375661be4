//! In-memory model of the report form document.
//!
//! Elements are addressed by id. An element carrying [`HIDDEN_CLASS`] is
//! hidden, and so is everything below it.

use std::collections::BTreeMap;
use std::fmt::Write;

use thiserror::Error;

/// Class that hides an element; its absence shows it.
pub const HIDDEN_CLASS: &str = "d-none";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Form,
    Select,
    Button,
    Span,
    Div,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionElement {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl OptionElement {
    pub fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
            disabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub parent: Option<&'static str>,
    pub classes: Vec<String>,
    pub text: String,
    pub disabled: bool,
    pub href: Option<String>,
    pub options: Vec<OptionElement>,
    pub value: String,
}

impl Element {
    pub fn new(kind: ElementKind, parent: Option<&'static str>) -> Self {
        Self {
            kind,
            parent,
            classes: Vec::new(),
            text: String::new(),
            disabled: false,
            href: None,
            options: Vec::new(),
            value: String::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn set_class(&mut self, class: &str, present: bool) {
        if present {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
    }

    /// Options a user can actually pick, i.e. without the placeholder.
    pub fn selectable_options(&self) -> impl Iterator<Item = &OptionElement> {
        self.options.iter().filter(|option| !option.disabled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    /// Replace a select's options; `placeholder` becomes a disabled first entry.
    SetOptions {
        id: &'static str,
        placeholder: Option<&'static str>,
        options: Vec<(String, String)>,
    },
    SetValue {
        id: &'static str,
        value: String,
    },
    SetEnabled {
        id: &'static str,
        enabled: bool,
    },
    SetText {
        id: &'static str,
        text: String,
    },
    SetHref {
        id: &'static str,
        href: Option<String>,
    },
    SetVisible {
        id: &'static str,
        visible: bool,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("no element with id {0:?}")]
    UnknownElement(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    elements: BTreeMap<&'static str, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &'static str, element: Element) {
        self.elements.insert(id, element);
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Visible when neither the element nor any ancestor carries `d-none`.
    pub fn is_visible(&self, id: &str) -> bool {
        let mut current = self.elements.get(id);
        while let Some(element) = current {
            if element.has_class(HIDDEN_CLASS) {
                return false;
            }
            current = element.parent.and_then(|parent| self.elements.get(parent));
        }
        self.elements.contains_key(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).map(|element| element.text.as_str())
    }

    pub fn is_enabled(&self, id: &str) -> bool {
        self.get(id).is_some_and(|element| !element.disabled)
    }

    pub fn apply(&mut self, command: DomCommand) -> Result<(), DomError> {
        match command {
            DomCommand::SetOptions {
                id,
                placeholder,
                options,
            } => {
                let element = self.element_mut(id)?;
                element.options = placeholder
                    .map(OptionElement::placeholder)
                    .into_iter()
                    .chain(options.into_iter().map(|(value, label)| OptionElement {
                        value,
                        label,
                        disabled: false,
                    }))
                    .collect();
                if !element.options.iter().any(|o| o.value == element.value) {
                    element.value.clear();
                }
            }
            DomCommand::SetValue { id, value } => self.element_mut(id)?.value = value,
            DomCommand::SetEnabled { id, enabled } => self.element_mut(id)?.disabled = !enabled,
            DomCommand::SetText { id, text } => self.element_mut(id)?.text = text,
            DomCommand::SetHref { id, href } => self.element_mut(id)?.href = href,
            DomCommand::SetVisible { id, visible } => {
                self.element_mut(id)?.set_class(HIDDEN_CLASS, !visible)
            }
        }
        Ok(())
    }

    /// Plain-text rendering of the visible document, one control per line.
    pub fn snapshot(&self) -> String {
        let mut out = String::new();
        for (id, element) in &self.elements {
            if !self.is_visible(id) {
                continue;
            }
            let state = if element.disabled { " (disabled)" } else { "" };
            let _ = match element.kind {
                ElementKind::Select => {
                    let options: Vec<String> = element
                        .selectable_options()
                        .enumerate()
                        .map(|(index, option)| {
                            let marker = if option.value == element.value { "*" } else { "" };
                            format!("{}. {}{}", index + 1, option.label, marker)
                        })
                        .collect();
                    writeln!(out, "[{id}]{state} {}", options.join(" | "))
                }
                ElementKind::Link => writeln!(
                    out,
                    "[{id}] {}",
                    element.href.as_deref().unwrap_or_default()
                ),
                ElementKind::Button => writeln!(out, "[{id}]{}", state.trim_end()),
                ElementKind::Span if !element.text.is_empty() => {
                    writeln!(out, "[{id}] {}", element.text)
                }
                _ => Ok(()),
            };
        }
        out
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| DomError::UnknownElement(id.to_string()))
    }
}
