// Mon Oct 19 2026 - Alex

use super::report::{CheckReport, FamilyReport, HeadReport, RegisterEntry, SiblingReport, SuffixReport};
use crate::config::OutputFormat;
use crate::register::FamilyKind;
use colored::Colorize;
use serde::Serialize;

/// Plain-text rendering of a report. `color` toggles ANSI styling.
pub trait TextRender {
    fn render_text(&self, color: bool) -> String;
}

pub struct OutputFormatter {
    format: OutputFormat,
    use_color: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            use_color: false,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn render<T: Serialize + TextRender + ?Sized>(&self, value: &T) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Text => Ok(value.render_text(self.use_color)),
        }
    }
}

fn paint(text: &str, color: bool, style: fn(&str) -> colored::ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

fn none(color: bool) -> String {
    paint("none", color, |s| s.dimmed())
}

impl TextRender for [RegisterEntry] {
    fn render_text(&self, color: bool) -> String {
        let mut out = String::new();
        out.push_str(&paint(
            &format!("{:<8} {:<9} {:<6} {:<7} {}", "name", "width", "suffix", "arch", "family"),
            color,
            |s| s.bold(),
        ));
        out.push('\n');
        for entry in self {
            let suffix = if entry.suffix.is_empty() { "-" } else { entry.suffix };
            out.push_str(&format!(
                "{} {:<9} {:<6} {:<7} {}\n",
                paint(&format!("{:<8}", entry.name.name()), color, |s| s.cyan()),
                entry.width.name(),
                suffix,
                entry.architecture.name(),
                entry.family
            ));
        }
        out
    }
}

impl TextRender for Vec<RegisterEntry> {
    fn render_text(&self, color: bool) -> String {
        self.as_slice().render_text(color)
    }
}

impl TextRender for FamilyReport {
    fn render_text(&self, color: bool) -> String {
        let members: Vec<String> = self
            .family
            .iter()
            .map(|r| {
                if r == self.register {
                    paint(r.name(), color, |s| s.green().bold())
                } else {
                    r.name().to_string()
                }
            })
            .collect();
        let kind = match self.family.kind() {
            FamilyKind::Alias => "alias",
            FamilyKind::Group => "group",
        };
        format!("{} ({}): {}\n", self.family.name(), kind, members.join(" "))
    }
}

impl TextRender for SiblingReport {
    fn render_text(&self, color: bool) -> String {
        let sibling = match self.sibling {
            Some(reg) => paint(reg.name(), color, |s| s.green()),
            None => none(color),
        };
        format!("{} @ {} -> {}\n", self.register, self.width, sibling)
    }
}

impl TextRender for SuffixReport {
    fn render_text(&self, color: bool) -> String {
        let suffix = if self.suffix.is_empty() {
            paint("(none)", color, |s| s.dimmed())
        } else {
            paint(self.suffix, color, |s| s.green())
        };
        format!("{} -> {}\n", self.width, suffix)
    }
}

impl TextRender for HeadReport {
    fn render_text(&self, color: bool) -> String {
        let head = match self.head {
            Some(reg) => paint(reg.name(), color, |s| s.green()),
            None => none(color),
        };
        format!("head of {} on {} -> {}\n", self.register, self.architecture, head)
    }
}

impl TextRender for CheckReport {
    fn render_text(&self, color: bool) -> String {
        match &self.error {
            None => format!(
                "{} {} registers in {} families\n",
                paint("[+]", color, |s| s.green()),
                self.registers,
                self.families
            ),
            Some(e) => format!("{} {}\n", paint("[!]", color, |s| s.red()), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::*;

    fn text() -> OutputFormatter {
        OutputFormatter::new(OutputFormat::Text)
    }

    #[test]
    fn test_sibling_text() {
        let report = SiblingReport { register: BX, width: Width::Quad, sibling: sibling(BX, Width::Quad) };
        assert_eq!(text().render(&report).unwrap(), "bx @ quad -> rbx\n");

        let report = SiblingReport { register: DI, width: Width::Byte, sibling: sibling(DI, Width::Byte) };
        assert_eq!(text().render(&report).unwrap(), "di @ byte -> none\n");
    }

    #[test]
    fn test_family_text() {
        let report = FamilyReport { register: AH, family: family(AH) };
        assert_eq!(text().render(&report).unwrap(), "ax (alias): al ah ax eax rax\n");
    }

    #[test]
    fn test_suffix_text() {
        let report = SuffixReport { width: Width::Octaword, suffix: suffix(Width::Octaword) };
        assert_eq!(text().render(&report).unwrap(), "octaword -> (none)\n");
    }

    #[test]
    fn test_sibling_json() {
        let report = SiblingReport { register: EBX, width: Width::Word, sibling: Some(BX) };
        let json = OutputFormatter::new(OutputFormat::Json).render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["register"], "ebx");
        assert_eq!(value["width"], "word");
        assert_eq!(value["sibling"], "bx");
    }

    #[test]
    fn test_family_json() {
        let report = FamilyReport { register: R8, family: family(R8) };
        let json = OutputFormatter::new(OutputFormat::Json).render(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["family"]["name"], "r8");
        assert_eq!(value["family"]["kind"], "alias");
        assert_eq!(value["family"]["members"], serde_json::json!(["r8b", "r8w", "r8d", "r8"]));
    }

    #[test]
    fn test_register_list_text() {
        let entries = vec![RegisterEntry::new(XMM0)];
        let out = text().render(&entries).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("xmm0"));
        assert!(lines[1].contains("octaword"));
        assert!(lines[1].ends_with("xmm"));
    }
}
