//! Report form core: pure state machine and view-model helpers.
mod catalog;
mod effect;
mod fields;
mod msg;
mod state;
mod status;
mod update;
mod view_model;

pub use catalog::{Sector, Stock, StockCatalog};
pub use effect::Effect;
pub use fields::{FormFields, SECTOR_FIELD, STOCK_FIELD};
pub use msg::Msg;
pub use state::{
    FormState, UiState, BUTTON_LABEL_BUSY, BUTTON_LABEL_IDLE, CATALOG_LOAD_FAILED,
    UNKNOWN_ERROR,
};
pub use status::{StatusCycle, STATUS_MESSAGES, STATUS_PERIOD};
pub use update::update;
pub use view_model::{FormViewModel, SelectOption};
