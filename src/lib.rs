//! Browser crossword: slot model, navigation and validation engine with a yew front end.

pub mod components;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod state;
pub mod util;
