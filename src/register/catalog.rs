// Mon Oct 19 2026 - Alex

use super::error::{RegisterError, RegisterResult};
use super::family::{Family, FamilyKind, FAMILIES};
use super::register::{Register, RegisterClass};
use super::width::Width;
use std::collections::HashMap;
use std::sync::OnceLock;

const NO_FAMILY: u8 = u8::MAX;

/// Read-only index over the static register and family tables.
///
/// Built once per process. Every register maps straight to its family slot
/// so `family` and `sibling` never scan the table.
#[derive(Debug)]
pub struct RegisterCatalog {
    families: &'static [Family],
    family_of: [u8; Register::COUNT],
    by_name: HashMap<&'static str, Register>,
}

impl RegisterCatalog {
    pub fn build() -> RegisterResult<Self> {
        Self::from_families(&FAMILIES)
    }

    pub(crate) fn from_families(families: &'static [Family]) -> RegisterResult<Self> {
        let mut family_of = [NO_FAMILY; Register::COUNT];

        for (slot, family) in families.iter().enumerate() {
            Self::check_family(family)?;
            for reg in family.iter() {
                if family_of[reg.index()] != NO_FAMILY {
                    return Err(RegisterError::DuplicateMember {
                        family: family.name(),
                        register: reg.name(),
                    });
                }
                family_of[reg.index()] = slot as u8;
            }
        }

        let mut by_name = HashMap::with_capacity(Register::COUNT);
        for reg in Register::ALL {
            if family_of[reg.index()] == NO_FAMILY {
                return Err(RegisterError::MissingFamily(reg.name()));
            }
            by_name.insert(reg.name(), reg);
        }

        log::debug!(
            "Register catalog built: {} registers in {} families",
            by_name.len(),
            families.len()
        );

        Ok(Self {
            families,
            family_of,
            by_name,
        })
    }

    fn check_family(family: &Family) -> RegisterResult<()> {
        let mut class: Option<RegisterClass> = None;
        for reg in family.iter() {
            match class {
                None => class = Some(reg.class()),
                Some(c) if c != reg.class() => return Err(RegisterError::MixedFamily(family.name())),
                Some(_) => {}
            }
        }

        if family.kind() == FamilyKind::Alias {
            let members = family.members();
            for (i, reg) in members.iter().enumerate() {
                let clash = members[..i]
                    .iter()
                    .any(|other| other.width() == reg.width() && other.byte_half() == reg.byte_half());
                if clash {
                    let role = match reg.byte_half() {
                        Some(half) => format!("{:?} {}", half, reg.width()).to_lowercase(),
                        None => reg.width().to_string(),
                    };
                    return Err(RegisterError::AliasConflict {
                        family: family.name(),
                        role,
                    });
                }
            }
        }

        Ok(())
    }

    /// Process-wide catalog. The static tables are checked on first use; a
    /// failure there means the tables themselves are broken.
    pub fn global() -> &'static RegisterCatalog {
        static CATALOG: OnceLock<RegisterCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            RegisterCatalog::build()
                .unwrap_or_else(|e| panic!("register tables are inconsistent: {}", e))
        })
    }

    pub fn families(&self) -> &'static [Family] {
        self.families
    }

    pub fn registers(&self) -> impl Iterator<Item = Register> {
        Register::ALL.into_iter()
    }

    pub fn try_family(&self, register: Register) -> RegisterResult<&'static Family> {
        let families = self.families;
        match self.family_of[register.index()] {
            NO_FAMILY => Err(RegisterError::MissingFamily(register.name())),
            slot => Ok(&families[slot as usize]),
        }
    }

    pub fn family(&self, register: Register) -> &'static Family {
        self.try_family(register).unwrap_or_else(|e| panic!("{}", e))
    }

    /// The member of `register`'s family with the requested width.
    ///
    /// A register is its own sibling at its own width. Otherwise the first
    /// family member of that width wins, so a Byte request from `ax`, `eax`
    /// or `rax` yields `al`, never `ah`. Registers in a group only resolve
    /// to themselves.
    pub fn sibling(&self, register: Register, width: Width) -> Option<Register> {
        if register.width() == width {
            return Some(register);
        }
        let family = self.family(register);
        match family.kind() {
            FamilyKind::Alias => family.member(width),
            FamilyKind::Group => None,
        }
    }

    pub fn lookup(&self, name: &str) -> RegisterResult<Register> {
        let normalized = name.trim().trim_start_matches('%').to_lowercase();
        match self.by_name.get(normalized.as_str()) {
            Some(reg) => Ok(*reg),
            None => {
                log::trace!("No register named {:?}", name);
                Err(RegisterError::UnknownRegister(name.trim().to_string()))
            }
        }
    }
}

pub fn family(register: Register) -> &'static Family {
    RegisterCatalog::global().family(register)
}

pub fn sibling(register: Register, width: Width) -> Option<Register> {
    RegisterCatalog::global().sibling(register, width)
}
