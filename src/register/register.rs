// Mon Oct 19 2026 - Alex

use super::catalog::RegisterCatalog;
use super::error::RegisterError;
use super::family::Family;
use super::width::Width;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Every canonical x86 register name, from the 8086 byte registers up to
/// the x86_64 extended file and the SSE registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Register {
    Al,
    Ah,
    Bl,
    Bh,
    Cl,
    Ch,
    Dl,
    Dh,
    R8b,
    R9b,
    R10b,
    R11b,
    R12b,
    R13b,
    R14b,
    R15b,

    Ax,
    Bx,
    Cx,
    Dx,
    Di,
    Si,
    Bp,
    Sp,
    Ip,
    R8w,
    R9w,
    R10w,
    R11w,
    R12w,
    R13w,
    R14w,
    R15w,

    Eax,
    Ebx,
    Ecx,
    Edx,
    Edi,
    Esi,
    Ebp,
    Esp,
    Eip,
    R8d,
    R9d,
    R10d,
    R11d,
    R12d,
    R13d,
    R14d,
    R15d,

    Rax,
    Rbx,
    Rcx,
    Rdx,
    Rdi,
    Rsi,
    Rbp,
    Rsp,
    Rip,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,

    Xmm0,
    Xmm1,
    Xmm2,
    Xmm3,
    Xmm4,
    Xmm5,
    Xmm6,
    Xmm7,
    Xmm8,
    Xmm9,
    Xmm10,
    Xmm11,
    Xmm12,
    Xmm13,
    Xmm14,
    Xmm15,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegisterClass {
    GeneralPurpose,
    Simd,
}

/// Which half of a 16-bit register a byte register names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteHalf {
    Low,
    High,
}

/// Architecture generation in which a register name first exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Architecture {
    #[serde(rename = "x86_16")]
    X86_16,
    #[serde(rename = "x86_32")]
    X86_32,
    #[serde(rename = "x86_64")]
    X86_64,
}

impl Register {
    pub const COUNT: usize = 83;

    pub const ALL: [Register; Register::COUNT] = [
        Register::Al,
        Register::Ah,
        Register::Bl,
        Register::Bh,
        Register::Cl,
        Register::Ch,
        Register::Dl,
        Register::Dh,
        Register::R8b,
        Register::R9b,
        Register::R10b,
        Register::R11b,
        Register::R12b,
        Register::R13b,
        Register::R14b,
        Register::R15b,
        Register::Ax,
        Register::Bx,
        Register::Cx,
        Register::Dx,
        Register::Di,
        Register::Si,
        Register::Bp,
        Register::Sp,
        Register::Ip,
        Register::R8w,
        Register::R9w,
        Register::R10w,
        Register::R11w,
        Register::R12w,
        Register::R13w,
        Register::R14w,
        Register::R15w,
        Register::Eax,
        Register::Ebx,
        Register::Ecx,
        Register::Edx,
        Register::Edi,
        Register::Esi,
        Register::Ebp,
        Register::Esp,
        Register::Eip,
        Register::R8d,
        Register::R9d,
        Register::R10d,
        Register::R11d,
        Register::R12d,
        Register::R13d,
        Register::R14d,
        Register::R15d,
        Register::Rax,
        Register::Rbx,
        Register::Rcx,
        Register::Rdx,
        Register::Rdi,
        Register::Rsi,
        Register::Rbp,
        Register::Rsp,
        Register::Rip,
        Register::R8,
        Register::R9,
        Register::R10,
        Register::R11,
        Register::R12,
        Register::R13,
        Register::R14,
        Register::R15,
        Register::Xmm0,
        Register::Xmm1,
        Register::Xmm2,
        Register::Xmm3,
        Register::Xmm4,
        Register::Xmm5,
        Register::Xmm6,
        Register::Xmm7,
        Register::Xmm8,
        Register::Xmm9,
        Register::Xmm10,
        Register::Xmm11,
        Register::Xmm12,
        Register::Xmm13,
        Register::Xmm14,
        Register::Xmm15,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Register::Al => "al",
            Register::Ah => "ah",
            Register::Bl => "bl",
            Register::Bh => "bh",
            Register::Cl => "cl",
            Register::Ch => "ch",
            Register::Dl => "dl",
            Register::Dh => "dh",
            Register::R8b => "r8b",
            Register::R9b => "r9b",
            Register::R10b => "r10b",
            Register::R11b => "r11b",
            Register::R12b => "r12b",
            Register::R13b => "r13b",
            Register::R14b => "r14b",
            Register::R15b => "r15b",
            Register::Ax => "ax",
            Register::Bx => "bx",
            Register::Cx => "cx",
            Register::Dx => "dx",
            Register::Di => "di",
            Register::Si => "si",
            Register::Bp => "bp",
            Register::Sp => "sp",
            Register::Ip => "ip",
            Register::R8w => "r8w",
            Register::R9w => "r9w",
            Register::R10w => "r10w",
            Register::R11w => "r11w",
            Register::R12w => "r12w",
            Register::R13w => "r13w",
            Register::R14w => "r14w",
            Register::R15w => "r15w",
            Register::Eax => "eax",
            Register::Ebx => "ebx",
            Register::Ecx => "ecx",
            Register::Edx => "edx",
            Register::Edi => "edi",
            Register::Esi => "esi",
            Register::Ebp => "ebp",
            Register::Esp => "esp",
            Register::Eip => "eip",
            Register::R8d => "r8d",
            Register::R9d => "r9d",
            Register::R10d => "r10d",
            Register::R11d => "r11d",
            Register::R12d => "r12d",
            Register::R13d => "r13d",
            Register::R14d => "r14d",
            Register::R15d => "r15d",
            Register::Rax => "rax",
            Register::Rbx => "rbx",
            Register::Rcx => "rcx",
            Register::Rdx => "rdx",
            Register::Rdi => "rdi",
            Register::Rsi => "rsi",
            Register::Rbp => "rbp",
            Register::Rsp => "rsp",
            Register::Rip => "rip",
            Register::R8 => "r8",
            Register::R9 => "r9",
            Register::R10 => "r10",
            Register::R11 => "r11",
            Register::R12 => "r12",
            Register::R13 => "r13",
            Register::R14 => "r14",
            Register::R15 => "r15",
            Register::Xmm0 => "xmm0",
            Register::Xmm1 => "xmm1",
            Register::Xmm2 => "xmm2",
            Register::Xmm3 => "xmm3",
            Register::Xmm4 => "xmm4",
            Register::Xmm5 => "xmm5",
            Register::Xmm6 => "xmm6",
            Register::Xmm7 => "xmm7",
            Register::Xmm8 => "xmm8",
            Register::Xmm9 => "xmm9",
            Register::Xmm10 => "xmm10",
            Register::Xmm11 => "xmm11",
            Register::Xmm12 => "xmm12",
            Register::Xmm13 => "xmm13",
            Register::Xmm14 => "xmm14",
            Register::Xmm15 => "xmm15",
        }
    }

    pub const fn width(&self) -> Width {
        match self {
            Register::Al | Register::Ah | Register::Bl | Register::Bh
            | Register::Cl | Register::Ch | Register::Dl | Register::Dh
            | Register::R8b | Register::R9b | Register::R10b | Register::R11b
            | Register::R12b | Register::R13b | Register::R14b | Register::R15b => Width::Byte,
            Register::Ax | Register::Bx | Register::Cx | Register::Dx
            | Register::Di | Register::Si | Register::Bp | Register::Sp
            | Register::Ip | Register::R8w | Register::R9w | Register::R10w
            | Register::R11w | Register::R12w | Register::R13w | Register::R14w
            | Register::R15w => Width::Word,
            Register::Eax | Register::Ebx | Register::Ecx | Register::Edx
            | Register::Edi | Register::Esi | Register::Ebp | Register::Esp
            | Register::Eip | Register::R8d | Register::R9d | Register::R10d
            | Register::R11d | Register::R12d | Register::R13d | Register::R14d
            | Register::R15d => Width::Long,
            Register::Rax | Register::Rbx | Register::Rcx | Register::Rdx
            | Register::Rdi | Register::Rsi | Register::Rbp | Register::Rsp
            | Register::Rip | Register::R8 | Register::R9 | Register::R10
            | Register::R11 | Register::R12 | Register::R13 | Register::R14
            | Register::R15 => Width::Quad,
            Register::Xmm0 | Register::Xmm1 | Register::Xmm2 | Register::Xmm3
            | Register::Xmm4 | Register::Xmm5 | Register::Xmm6 | Register::Xmm7
            | Register::Xmm8 | Register::Xmm9 | Register::Xmm10 | Register::Xmm11
            | Register::Xmm12 | Register::Xmm13 | Register::Xmm14 | Register::Xmm15 => Width::Octaword,
        }
    }

    pub const fn index(&self) -> usize {
        *self as usize
    }

    pub const fn class(&self) -> RegisterClass {
        match self.width() {
            Width::Octaword => RegisterClass::Simd,
            _ => RegisterClass::GeneralPurpose,
        }
    }

    pub fn is_general_purpose(&self) -> bool {
        self.class() == RegisterClass::GeneralPurpose
    }

    pub fn is_simd(&self) -> bool {
        self.class() == RegisterClass::Simd
    }

    pub fn is_instruction_pointer(&self) -> bool {
        matches!(self, Register::Ip | Register::Eip | Register::Rip)
    }

    pub const fn byte_half(&self) -> Option<ByteHalf> {
        match self {
            Register::Ah | Register::Bh | Register::Ch | Register::Dh => Some(ByteHalf::High),
            _ => match self.width() {
                Width::Byte => Some(ByteHalf::Low),
                _ => None,
            },
        }
    }

    pub const fn architecture(&self) -> Architecture {
        match self {
            Register::Al | Register::Ah | Register::Bl | Register::Bh
            | Register::Cl | Register::Ch | Register::Dl | Register::Dh
            | Register::Ax | Register::Bx | Register::Cx | Register::Dx
            | Register::Di | Register::Si | Register::Bp | Register::Sp
            | Register::Ip => Architecture::X86_16,
            Register::Eax | Register::Ebx | Register::Ecx | Register::Edx
            | Register::Edi | Register::Esi | Register::Ebp | Register::Esp
            | Register::Eip | Register::Xmm0 | Register::Xmm1 | Register::Xmm2
            | Register::Xmm3 | Register::Xmm4 | Register::Xmm5 | Register::Xmm6
            | Register::Xmm7 => Architecture::X86_32,
            _ => Architecture::X86_64,
        }
    }

    pub fn is_available_in(&self, arch: Architecture) -> bool {
        self.architecture() <= arch
    }

    /// Resolves a register by name. Case is ignored and a leading AT&T `%`
    /// sigil is accepted.
    pub fn from_name(name: &str) -> Option<Register> {
        RegisterCatalog::global().lookup(name).ok()
    }

    pub fn family(&self) -> &'static Family {
        RegisterCatalog::global().family(*self)
    }

    pub fn sibling(&self, width: Width) -> Option<Register> {
        RegisterCatalog::global().sibling(*self, width)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Register {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RegisterCatalog::global().lookup(s)
    }
}

impl Serialize for Register {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl Architecture {
    pub const ALL: [Architecture; 3] = [Architecture::X86_16, Architecture::X86_32, Architecture::X86_64];

    pub fn name(&self) -> &'static str {
        match self {
            Architecture::X86_16 => "x86_16",
            Architecture::X86_32 => "x86_32",
            Architecture::X86_64 => "x86_64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "x86_16" | "x86-16" | "i8086" | "16" => Ok(Architecture::X86_16),
            "x86_32" | "x86-32" | "i386" | "x86" | "32" => Ok(Architecture::X86_32),
            "x86_64" | "x86-64" | "amd64" | "x64" | "64" => Ok(Architecture::X86_64),
            other => Err(format!("Unknown architecture: {}", other)),
        }
    }
}

// 8-bit
pub const AL: Register = Register::Al;
pub const AH: Register = Register::Ah;
pub const BL: Register = Register::Bl;
pub const BH: Register = Register::Bh;
pub const CL: Register = Register::Cl;
pub const CH: Register = Register::Ch;
pub const DL: Register = Register::Dl;
pub const DH: Register = Register::Dh;
pub const R8B: Register = Register::R8b;
pub const R9B: Register = Register::R9b;
pub const R10B: Register = Register::R10b;
pub const R11B: Register = Register::R11b;
pub const R12B: Register = Register::R12b;
pub const R13B: Register = Register::R13b;
pub const R14B: Register = Register::R14b;
pub const R15B: Register = Register::R15b;

// 16-bit
pub const AX: Register = Register::Ax;
pub const BX: Register = Register::Bx;
pub const CX: Register = Register::Cx;
pub const DX: Register = Register::Dx;
pub const DI: Register = Register::Di;
pub const SI: Register = Register::Si;
pub const BP: Register = Register::Bp;
pub const SP: Register = Register::Sp;
pub const IP: Register = Register::Ip;
pub const R8W: Register = Register::R8w;
pub const R9W: Register = Register::R9w;
pub const R10W: Register = Register::R10w;
pub const R11W: Register = Register::R11w;
pub const R12W: Register = Register::R12w;
pub const R13W: Register = Register::R13w;
pub const R14W: Register = Register::R14w;
pub const R15W: Register = Register::R15w;

// 32-bit
pub const EAX: Register = Register::Eax;
pub const EBX: Register = Register::Ebx;
pub const ECX: Register = Register::Ecx;
pub const EDX: Register = Register::Edx;
pub const EDI: Register = Register::Edi;
pub const ESI: Register = Register::Esi;
pub const EBP: Register = Register::Ebp;
pub const ESP: Register = Register::Esp;
pub const EIP: Register = Register::Eip;
pub const R8D: Register = Register::R8d;
pub const R9D: Register = Register::R9d;
pub const R10D: Register = Register::R10d;
pub const R11D: Register = Register::R11d;
pub const R12D: Register = Register::R12d;
pub const R13D: Register = Register::R13d;
pub const R14D: Register = Register::R14d;
pub const R15D: Register = Register::R15d;

// 64-bit
pub const RAX: Register = Register::Rax;
pub const RBX: Register = Register::Rbx;
pub const RCX: Register = Register::Rcx;
pub const RDX: Register = Register::Rdx;
pub const RDI: Register = Register::Rdi;
pub const RSI: Register = Register::Rsi;
pub const RBP: Register = Register::Rbp;
pub const RSP: Register = Register::Rsp;
pub const RIP: Register = Register::Rip;
pub const R8: Register = Register::R8;
pub const R9: Register = Register::R9;
pub const R10: Register = Register::R10;
pub const R11: Register = Register::R11;
pub const R12: Register = Register::R12;
pub const R13: Register = Register::R13;
pub const R14: Register = Register::R14;
pub const R15: Register = Register::R15;

// SSE
pub const XMM0: Register = Register::Xmm0;
pub const XMM1: Register = Register::Xmm1;
pub const XMM2: Register = Register::Xmm2;
pub const XMM3: Register = Register::Xmm3;
pub const XMM4: Register = Register::Xmm4;
pub const XMM5: Register = Register::Xmm5;
pub const XMM6: Register = Register::Xmm6;
pub const XMM7: Register = Register::Xmm7;
pub const XMM8: Register = Register::Xmm8;
pub const XMM9: Register = Register::Xmm9;
pub const XMM10: Register = Register::Xmm10;
pub const XMM11: Register = Register::Xmm11;
pub const XMM12: Register = Register::Xmm12;
pub const XMM13: Register = Register::Xmm13;
pub const XMM14: Register = Register::Xmm14;
pub const XMM15: Register = Register::Xmm15;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_lowercase() {
        let mut seen = HashSet::new();
        for reg in Register::ALL {
            let name = reg.name();
            assert_eq!(name, name.to_lowercase());
            assert!(seen.insert(name), "duplicate name {}", name);
        }
        assert_eq!(seen.len(), Register::COUNT);
    }

    #[test]
    fn test_all_matches_declaration_order() {
        for (i, reg) in Register::ALL.iter().enumerate() {
            assert_eq!(reg.index(), i);
        }
    }

    #[test]
    fn test_widths() {
        assert_eq!(AL.width(), Width::Byte);
        assert_eq!(R15B.width(), Width::Byte);
        assert_eq!(IP.width(), Width::Word);
        assert_eq!(R9D.width(), Width::Long);
        assert_eq!(RSP.width(), Width::Quad);
        assert_eq!(XMM15.width(), Width::Octaword);
    }

    #[test]
    fn test_counts_per_width() {
        let count = |w: Width| Register::ALL.iter().filter(|r| r.width() == w).count();
        assert_eq!(count(Width::Byte), 16);
        assert_eq!(count(Width::Word), 17);
        assert_eq!(count(Width::Long), 17);
        assert_eq!(count(Width::Quad), 17);
        assert_eq!(count(Width::Octaword), 16);
    }

    #[test]
    fn test_byte_half() {
        assert_eq!(AL.byte_half(), Some(ByteHalf::Low));
        assert_eq!(AH.byte_half(), Some(ByteHalf::High));
        assert_eq!(DH.byte_half(), Some(ByteHalf::High));
        assert_eq!(R8B.byte_half(), Some(ByteHalf::Low));
        assert_eq!(AX.byte_half(), None);
        assert_eq!(XMM0.byte_half(), None);
    }

    #[test]
    fn test_class() {
        assert!(RAX.is_general_purpose());
        assert!(RIP.is_general_purpose());
        assert!(RIP.is_instruction_pointer());
        assert!(XMM7.is_simd());
        assert!(!XMM7.is_general_purpose());
    }

    #[test]
    fn test_architecture() {
        assert_eq!(AH.architecture(), Architecture::X86_16);
        assert_eq!(SP.architecture(), Architecture::X86_16);
        assert_eq!(EDI.architecture(), Architecture::X86_32);
        assert_eq!(XMM7.architecture(), Architecture::X86_32);
        assert_eq!(XMM8.architecture(), Architecture::X86_64);
        assert_eq!(R8W.architecture(), Architecture::X86_64);
        assert!(DI.is_available_in(Architecture::X86_64));
        assert!(!RDI.is_available_in(Architecture::X86_32));
    }

    #[test]
    fn test_parse() {
        assert_eq!("rax".parse::<Register>(), Ok(RAX));
        assert_eq!("%EBX".parse::<Register>(), Ok(EBX));
        assert_eq!(Register::from_name(" r10d "), Some(R10D));
        assert_eq!(Register::from_name("xmm16"), None);
        assert!(matches!("zax".parse::<Register>(), Err(RegisterError::UnknownRegister(_))));
    }

    #[test]
    fn test_display() {
        assert_eq!(R12W.to_string(), "r12w");
        assert_eq!(format!("{}", XMM3), "xmm3");
    }

    #[test]
    fn test_architecture_parse() {
        assert_eq!("amd64".parse::<Architecture>(), Ok(Architecture::X86_64));
        assert_eq!("i386".parse::<Architecture>(), Ok(Architecture::X86_32));
        assert!("arm64".parse::<Architecture>().is_err());
    }
}
