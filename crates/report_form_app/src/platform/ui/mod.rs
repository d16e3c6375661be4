pub mod dom;
pub mod ids;
pub mod layout;
pub mod render;
