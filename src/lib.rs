//! Luxxor - the Luxxor Media marketing site and learner portal in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod ui;
pub mod view_state;
pub mod widgets;
