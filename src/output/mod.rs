// Mon Oct 19 2026 - Alex

pub mod formatter;
pub mod report;

pub use formatter::{OutputFormatter, TextRender};
pub use report::{CheckReport, FamilyReport, HeadReport, RegisterEntry, SiblingReport, SuffixReport};
