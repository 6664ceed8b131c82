// Library crate for integration tests.
// main.rs has its own mod declarations; this re-exports all modules.

pub mod catalog;
pub mod config;
pub mod error;
pub mod links;
pub mod page;
pub mod report;
pub mod suites;
pub mod verify;
pub mod webdriver;
