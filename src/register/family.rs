// Mon Oct 19 2026 - Alex

use super::register::*;
use super::width::Width;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyKind {
    /// Every member names (part of) the same physical register.
    Alias,
    /// Independent registers grouped for uniform handling; members do not
    /// alias each other.
    Group,
}

/// Register names sharing one physical location, narrowest first.
///
/// The high/low byte pair is listed low byte first. `member` and the
/// catalog's sibling resolution return the first listed match, so the low
/// byte is what a Byte request resolves to.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Family {
    name: &'static str,
    kind: FamilyKind,
    members: &'static [Register],
}

impl Family {
    pub(crate) const fn alias(name: &'static str, members: &'static [Register]) -> Self {
        Self { name, kind: FamilyKind::Alias, members }
    }

    pub(crate) const fn group(name: &'static str, members: &'static [Register]) -> Self {
        Self { name, kind: FamilyKind::Group, members }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FamilyKind {
        self.kind
    }

    pub fn is_alias(&self) -> bool {
        self.kind == FamilyKind::Alias
    }

    pub fn members(&self) -> &'static [Register] {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Register> + ExactSizeIterator + 'static {
        self.members.iter().copied()
    }

    pub fn contains(&self, register: Register) -> bool {
        self.members.contains(&register)
    }

    /// First member of the given width, in family order.
    pub fn member(&self, width: Width) -> Option<Register> {
        self.iter().find(|r| r.width() == width)
    }

    pub fn widest(&self) -> Option<Register> {
        if !self.is_alias() {
            return None;
        }
        self.iter().rev().max_by_key(|r| r.width())
    }

    /// Widest member that exists on `arch`, e.g. `ebx` for the bx family on
    /// x86_32. Groups have no head.
    pub fn head(&self, arch: Architecture) -> Option<Register> {
        if !self.is_alias() {
            return None;
        }
        self.iter()
            .rev()
            .filter(|r| r.is_available_in(arch))
            .max_by_key(|r| r.width())
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [", self.name)?;
        for (i, reg) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", reg)?;
        }
        write!(f, "]")
    }
}

pub static FAMILIES: [Family; 18] = [
    Family::alias("ax", &[AL, AH, AX, EAX, RAX]),
    Family::alias("bx", &[BL, BH, BX, EBX, RBX]),
    Family::alias("cx", &[CL, CH, CX, ECX, RCX]),
    Family::alias("dx", &[DL, DH, DX, EDX, RDX]),
    Family::alias("di", &[DI, EDI, RDI]),
    Family::alias("si", &[SI, ESI, RSI]),
    Family::alias("bp", &[BP, EBP, RBP]),
    Family::alias("sp", &[SP, ESP, RSP]),
    Family::alias("ip", &[IP, EIP, RIP]),
    Family::alias("r8", &[R8B, R8W, R8D, R8]),
    Family::alias("r9", &[R9B, R9W, R9D, R9]),
    Family::alias("r10", &[R10B, R10W, R10D, R10]),
    Family::alias("r11", &[R11B, R11W, R11D, R11]),
    Family::alias("r12", &[R12B, R12W, R12D, R12]),
    Family::alias("r13", &[R13B, R13W, R13D, R13]),
    Family::alias("r14", &[R14B, R14W, R14D, R14]),
    Family::alias("r15", &[R15B, R15W, R15D, R15]),
    Family::group(
        "xmm",
        &[
            XMM0, XMM1, XMM2, XMM3, XMM4, XMM5, XMM6, XMM7,
            XMM8, XMM9, XMM10, XMM11, XMM12, XMM13, XMM14, XMM15,
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn by_name(name: &str) -> &'static Family {
        FAMILIES.iter().find(|f| f.name() == name).unwrap()
    }

    #[test]
    fn test_ax_family_order() {
        let family = by_name("ax");
        assert_eq!(family.members(), &[AL, AH, AX, EAX, RAX]);
        assert_eq!(family.to_string(), "ax: [al, ah, ax, eax, rax]");
    }

    #[test]
    fn test_member_prefers_low_byte() {
        assert_eq!(by_name("cx").member(Width::Byte), Some(CL));
        assert_eq!(by_name("dx").member(Width::Byte), Some(DL));
        assert_eq!(by_name("si").member(Width::Byte), None);
    }

    #[test]
    fn test_widest() {
        assert_eq!(by_name("bx").widest(), Some(RBX));
        assert_eq!(by_name("r13").widest(), Some(R13));
        assert_eq!(by_name("xmm").widest(), None);
    }

    #[test]
    fn test_head_per_architecture() {
        let bx = by_name("bx");
        assert_eq!(bx.head(Architecture::X86_16), Some(BX));
        assert_eq!(bx.head(Architecture::X86_32), Some(EBX));
        assert_eq!(bx.head(Architecture::X86_64), Some(RBX));
        assert_eq!(by_name("r8").head(Architecture::X86_32), None);
        assert_eq!(by_name("xmm").head(Architecture::X86_64), None);
    }

    #[test]
    fn test_simd_group_is_distinct() {
        let group = by_name("xmm");
        assert_eq!(group.kind(), FamilyKind::Group);
        assert_eq!(group.len(), 16);
        for (i, reg) in group.iter().enumerate() {
            assert_eq!(reg.name(), format!("xmm{}", i));
        }
    }
}
