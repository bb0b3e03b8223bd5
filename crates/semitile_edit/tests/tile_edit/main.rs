//! Integration tests for the tile editing model

mod helpers;
mod history_tests;
mod mode_state_tests;
mod session_tests;
mod settings_tests;
