// Mon Oct 19 2026 - Alex

use crate::register::{
    Architecture, ByteHalf, Family, Register, RegisterCatalog, RegisterClass, Width,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RegisterEntry {
    pub name: Register,
    pub width: Width,
    pub bits: u16,
    pub suffix: &'static str,
    pub class: RegisterClass,
    pub byte_half: Option<ByteHalf>,
    pub architecture: Architecture,
    pub family: &'static str,
}

impl RegisterEntry {
    pub fn new(register: Register) -> Self {
        let width = register.width();
        Self {
            name: register,
            width,
            bits: width.bits(),
            suffix: width.suffix(),
            class: register.class(),
            byte_half: register.byte_half(),
            architecture: register.architecture(),
            family: register.family().name(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyReport {
    pub register: Register,
    pub family: &'static Family,
}

#[derive(Debug, Clone, Serialize)]
pub struct SiblingReport {
    pub register: Register,
    pub width: Width,
    pub sibling: Option<Register>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuffixReport {
    pub width: Width,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeadReport {
    pub register: Register,
    pub architecture: Architecture,
    pub head: Option<Register>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub ok: bool,
    pub registers: usize,
    pub families: usize,
    pub error: Option<String>,
}

impl CheckReport {
    pub fn run() -> Self {
        match RegisterCatalog::build() {
            Ok(catalog) => Self {
                ok: true,
                registers: catalog.registers().count(),
                families: catalog.families().len(),
                error: None,
            },
            Err(e) => Self {
                ok: false,
                registers: Register::COUNT,
                families: 0,
                error: Some(e.to_string()),
            },
        }
    }
}
