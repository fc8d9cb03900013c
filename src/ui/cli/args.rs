// Mon Oct 19 2026 - Alex

use crate::config::OutputFormat;
use crate::register::{Architecture, Register, RegisterClass, Width};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "regcat")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "x86 register catalog: widths, families and siblings", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub no_color: bool,

    #[arg(long, global = true)]
    pub json_output: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every register
    List(ListArgs),
    /// Show the family a register belongs to
    Family(RegisterArgs),
    /// Resolve the sibling of a register at another width
    Sibling(SiblingArgs),
    /// Show the instruction suffix for a width
    Suffix(SuffixArgs),
    /// Show the widest family member available on an architecture
    Head(HeadArgs),
    /// Rebuild the catalog and verify its tables
    Check,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ClassFilter {
    Gp,
    Simd,
}

impl ClassFilter {
    pub fn matches(&self, register: Register) -> bool {
        match self {
            ClassFilter::Gp => register.class() == RegisterClass::GeneralPurpose,
            ClassFilter::Simd => register.class() == RegisterClass::Simd,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    #[arg(short, long)]
    pub arch: Option<Architecture>,

    #[arg(long, value_enum)]
    pub class: Option<ClassFilter>,

    #[arg(short, long)]
    pub width: Option<Width>,
}

#[derive(Parser, Debug)]
pub struct RegisterArgs {
    pub register: Register,
}

#[derive(Parser, Debug)]
pub struct SiblingArgs {
    pub register: Register,

    pub width: Width,
}

#[derive(Parser, Debug)]
pub struct SuffixArgs {
    pub width: Width,
}

#[derive(Parser, Debug)]
pub struct HeadArgs {
    pub register: Register,

    #[arg(short, long)]
    pub arch: Option<Architecture>,
}

impl Args {
    pub fn output_format(&self) -> Option<OutputFormat> {
        if self.json_output {
            Some(OutputFormat::Json)
        } else {
            None
        }
    }
}
