// Mon Oct 19 2026 - Alex

use super::error::RegisterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bit-size class of a register. Declaration order is the size order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    Byte,
    Word,
    Long,
    Quad,
    Octaword,
}

impl Width {
    pub const ALL: [Width; 5] = [
        Width::Byte,
        Width::Word,
        Width::Long,
        Width::Quad,
        Width::Octaword,
    ];

    pub const fn bits(&self) -> u16 {
        match self {
            Width::Byte => 8,
            Width::Word => 16,
            Width::Long => 32,
            Width::Quad => 64,
            Width::Octaword => 128,
        }
    }

    pub const fn bytes(&self) -> u8 {
        match self {
            Width::Byte => 1,
            Width::Word => 2,
            Width::Long => 4,
            Width::Quad => 8,
            Width::Octaword => 16,
        }
    }

    /// Instruction suffix used by AT&T mnemonics (`movq`, `addl`, ...).
    /// Octaword operands take no suffix.
    pub const fn suffix(&self) -> &'static str {
        match self {
            Width::Byte => "b",
            Width::Word => "w",
            Width::Long => "l",
            Width::Quad => "q",
            Width::Octaword => "",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Width> {
        Width::ALL.iter().copied().find(|w| w.suffix() == suffix)
    }

    pub fn from_bits(bits: u16) -> Result<Width, RegisterError> {
        match bits {
            8 => Ok(Width::Byte),
            16 => Ok(Width::Word),
            32 => Ok(Width::Long),
            64 => Ok(Width::Quad),
            128 => Ok(Width::Octaword),
            _ => Err(RegisterError::InvalidWidth(bits)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Width::Byte => "byte",
            Width::Word => "word",
            Width::Long => "long",
            Width::Quad => "quad",
            Width::Octaword => "octaword",
        }
    }
}

pub fn suffix(width: Width) -> &'static str {
    width.suffix()
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Width {
    type Err = RegisterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if let Some(width) = Width::ALL.iter().copied().find(|w| w.name() == s) {
            return Ok(width);
        }
        if !s.is_empty() {
            if let Some(width) = Width::from_suffix(&s) {
                return Ok(width);
            }
        }
        match s.parse::<u16>() {
            Ok(bits) => Width::from_bits(bits),
            Err(_) => Err(RegisterError::UnknownWidth(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_suffixes() {
        assert_eq!(suffix(Width::Byte), "b");
        assert_eq!(suffix(Width::Word), "w");
        assert_eq!(suffix(Width::Long), "l");
        assert_eq!(suffix(Width::Quad), "q");
        assert_eq!(suffix(Width::Octaword), "");
    }

    #[test]
    fn test_suffixes_are_short_and_distinct() {
        let mut seen = HashSet::new();
        for width in Width::ALL {
            let s = width.suffix();
            assert!(s.len() <= 1);
            assert!(seen.insert(s), "suffix {:?} reused", s);
        }
        assert_eq!(seen.len(), Width::ALL.len());
    }

    #[test]
    fn test_ordering_follows_bits() {
        for pair in Width::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].bits() < pair[1].bits());
        }
        assert_eq!(Width::Octaword.bytes() as u16 * 8, Width::Octaword.bits());
    }

    #[test]
    fn test_from_bits() {
        assert_eq!(Width::from_bits(32), Ok(Width::Long));
        assert_eq!(Width::from_bits(24), Err(RegisterError::InvalidWidth(24)));
    }

    #[test]
    fn test_from_suffix() {
        assert_eq!(Width::from_suffix("q"), Some(Width::Quad));
        assert_eq!(Width::from_suffix(""), Some(Width::Octaword));
        assert_eq!(Width::from_suffix("x"), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("quad".parse::<Width>(), Ok(Width::Quad));
        assert_eq!("Byte".parse::<Width>(), Ok(Width::Byte));
        assert_eq!("l".parse::<Width>(), Ok(Width::Long));
        assert_eq!("128".parse::<Width>(), Ok(Width::Octaword));
        assert_eq!("7".parse::<Width>(), Err(RegisterError::InvalidWidth(7)));
        assert!(matches!("huge".parse::<Width>(), Err(RegisterError::UnknownWidth(_))));
        assert!(matches!("".parse::<Width>(), Err(RegisterError::UnknownWidth(_))));
    }
}
