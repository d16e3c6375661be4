//! Report form application: DOM model, rendering and the interactive controller.
pub mod platform;
