pub mod catalog;
pub mod config;
pub mod debounce;
pub mod logging;
pub mod trending;
pub mod ui;
pub mod worker;
