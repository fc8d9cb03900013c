// Mon Oct 19 2026 - Alex

pub mod catalog;
pub mod error;
pub mod family;
pub mod register;
pub mod width;

pub use catalog::{family, sibling, RegisterCatalog};
pub use error::{RegisterError, RegisterResult};
pub use family::{Family, FamilyKind, FAMILIES};
pub use register::*;
pub use width::{suffix, Width};
