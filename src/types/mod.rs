// Shared type definitions for the navigation core.

pub mod action;
pub mod address;
pub mod errors;
pub mod settings;
pub mod snapshot;
pub mod tab;
