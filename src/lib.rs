// Mon Oct 19 2026 - Alex

pub mod config;
pub mod output;
pub mod register;
pub mod ui;

pub use config::Config;
pub use register::{family, sibling, suffix, Family, Register, RegisterCatalog, RegisterError, Width};
