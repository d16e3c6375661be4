//! Line commands accepted by the terminal front-end.

use report_form_core::Msg;
use thiserror::Error;

use super::ui::dom::Element;

pub const HELP: &str = "\
commands:
  sector <name|number>    pick a sector
  stock <ticker|number>   pick a stock
  field <name> [value]    set an extra form field (no value clears it)
  submit                  generate the report
  download                save the generated report
  show                    print the form
  quit                    exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Sector(String),
    Stock(String),
    Field { name: String, value: String },
    Submit,
    Download,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}; type `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "sector" => Ok(Command::Sector(rest.to_string())),
        "stock" => Ok(Command::Stock(rest.to_string())),
        "field" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("field"));
            }
            let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            Ok(Command::Field {
                name: name.to_string(),
                value: value.trim().to_string(),
            })
        }
        "submit" | "generate" => Ok(Command::Submit),
        "download" => Ok(Command::Download),
        "show" | "" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Resolves a 1-based option number against a select; anything else passes through.
pub fn resolve_choice(input: &str, select: Option<&Element>) -> String {
    let picked = input.parse::<usize>().ok().and_then(|number| {
        let select = select?;
        select
            .selectable_options()
            .nth(number.checked_sub(1)?)
            .map(|option| option.value.clone())
    });
    picked.unwrap_or_else(|| input.to_string())
}

/// The message a command sends to the controller, if any.
pub fn command_msg(command: &Command) -> Option<Msg> {
    match command {
        Command::Sector(sector) => Some(Msg::SectorChanged(sector.clone())),
        Command::Stock(ticker) => Some(Msg::StockChanged(ticker.clone())),
        Command::Field { name, value } => Some(Msg::FieldChanged {
            name: name.clone(),
            value: value.clone(),
        }),
        Command::Submit => Some(Msg::SubmitRequested),
        Command::Download => Some(Msg::DownloadClicked),
        Command::Show | Command::Help | Command::Quit => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ui::dom::{ElementKind, OptionElement};

    #[test]
    fn parses_multi_word_sector() {
        assert_eq!(
            parse_command("  sector Banking & Financials "),
            Ok(Command::Sector("Banking & Financials".to_string()))
        );
    }

    #[test]
    fn field_without_value_clears_it() {
        assert_eq!(
            parse_command("field period"),
            Ok(Command::Field {
                name: "period".to_string(),
                value: String::new(),
            })
        );
        assert_eq!(
            parse_command("field"),
            Err(CommandError::MissingArgument("field"))
        );
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            parse_command("launch"),
            Err(CommandError::Unknown("launch".to_string()))
        );
    }

    #[test]
    fn numbers_pick_selectable_options() {
        let mut select = Element::new(ElementKind::Select, None);
        select.options = vec![
            OptionElement::placeholder("-- Select Stock --"),
            OptionElement {
                value: "INFY.NS".to_string(),
                label: "Infosys (INFY.NS)".to_string(),
                disabled: false,
            },
        ];

        assert_eq!(resolve_choice("1", Some(&select)), "INFY.NS");
        assert_eq!(resolve_choice("2", Some(&select)), "2");
        assert_eq!(resolve_choice("0", Some(&select)), "0");
        assert_eq!(resolve_choice("TCS.NS", Some(&select)), "TCS.NS");
        assert_eq!(resolve_choice("1", None), "1");
    }
}
