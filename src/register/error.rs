// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    #[error("Invalid register width: {0} bits")]
    InvalidWidth(u16),
    #[error("Unknown register width: {0}")]
    UnknownWidth(String),
    #[error("Unknown register: {0}")]
    UnknownRegister(String),
    #[error("Register {0} does not have a family")]
    MissingFamily(&'static str),
    #[error("Register {register} listed more than once (family {family})")]
    DuplicateMember {
        family: &'static str,
        register: &'static str,
    },
    #[error("Family {family} has two members for the {role} slot")]
    AliasConflict {
        family: &'static str,
        role: String,
    },
    #[error("Family {0} mixes general purpose and SIMD registers")]
    MixedFamily(&'static str),
}

pub type RegisterResult<T> = Result<T, RegisterError>;
