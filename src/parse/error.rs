use thiserror::Error;

use crate::Bond;

/// Why a SMILES string was rejected. `pos` is the byte offset where the
/// problem was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SmilesError {
    #[error("Empty SMILES string at position {pos}")]
    EmptyInput { pos: usize },
    #[error("Malformed bracket atom starting at position {pos}")]
    MalformedBracketAtom { pos: usize },
    #[error("Isotope must be a positive number, got {isotope} at position {pos}")]
    InvalidIsotope { pos: usize, isotope: u16 },
    #[error("Unrecognized atom '{symbol}' at position {pos}")]
    UnrecognizedAtom { pos: usize, symbol: char },
    #[error("Bond symbol '{symbol}' at position {pos} is not followed by an atom or ring closure")]
    DanglingBondSymbol { pos: usize, symbol: char },
    #[error("Ring closure {label} at position {pos} closes with '{closing}' but was opened with '{opening}'")]
    ConflictingRingBond {
        pos: usize,
        label: u8,
        opening: Bond,
        closing: Bond,
    },
    #[error("Ring closure {label} at position {pos} would bond atom {atom} to itself or to an existing neighbor")]
    SelfRingClosure { pos: usize, label: u8, atom: usize },
    #[error("Ring closure {label} at position {pos} joins two disconnected fragments")]
    CrossComponentRingClosure { pos: usize, label: u8 },
    #[error("Ring closure {label} opened at position {pos} is never closed")]
    DanglingRingClosure { pos: usize, label: u8 },
    #[error("Bond symbol '{symbol}' at position {pos} without a preceding atom")]
    BondSymbolWithoutPrecedingAtom { pos: usize, symbol: char },
    #[error("Branch start '(' at position {pos} without a preceding atom")]
    BranchWithoutPrecedingAtom { pos: usize },
    #[error("Empty branch '()' at position {pos}")]
    EmptyBranch { pos: usize },
    #[error("Unmatched parenthesis at position {pos}")]
    UnmatchedParenthesis { pos: usize },
    #[error("Empty fragment at position {pos}")]
    EmptyFragment { pos: usize },
    #[error("Fragment separator '.' at position {pos} inside a branch")]
    DotInsideBranch { pos: usize },
    #[error("Unexpected character '{found}' at position {pos}")]
    UnexpectedCharacter { pos: usize, found: char },
    #[error("{reason} at position {pos}")]
    StrictViolation { pos: usize, reason: String },
}

/// The grammar rule behind a [`SmilesError`], without its location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    MalformedBracketAtom,
    InvalidIsotope,
    UnrecognizedAtom,
    DanglingBondSymbol,
    ConflictingRingBond,
    SelfRingClosure,
    CrossComponentRingClosure,
    DanglingRingClosure,
    BondSymbolWithoutPrecedingAtom,
    BranchWithoutPrecedingAtom,
    EmptyBranch,
    UnmatchedParenthesis,
    EmptyFragment,
    DotInsideBranch,
    UnexpectedCharacter,
    StrictViolation,
}

impl SmilesError {
    pub fn kind(&self) -> ErrorKind {
        use SmilesError::*;
        match self {
            EmptyInput { .. } => ErrorKind::EmptyInput,
            MalformedBracketAtom { .. } => ErrorKind::MalformedBracketAtom,
            InvalidIsotope { .. } => ErrorKind::InvalidIsotope,
            UnrecognizedAtom { .. } => ErrorKind::UnrecognizedAtom,
            DanglingBondSymbol { .. } => ErrorKind::DanglingBondSymbol,
            ConflictingRingBond { .. } => ErrorKind::ConflictingRingBond,
            SelfRingClosure { .. } => ErrorKind::SelfRingClosure,
            CrossComponentRingClosure { .. } => ErrorKind::CrossComponentRingClosure,
            DanglingRingClosure { .. } => ErrorKind::DanglingRingClosure,
            BondSymbolWithoutPrecedingAtom { .. } => ErrorKind::BondSymbolWithoutPrecedingAtom,
            BranchWithoutPrecedingAtom { .. } => ErrorKind::BranchWithoutPrecedingAtom,
            EmptyBranch { .. } => ErrorKind::EmptyBranch,
            UnmatchedParenthesis { .. } => ErrorKind::UnmatchedParenthesis,
            EmptyFragment { .. } => ErrorKind::EmptyFragment,
            DotInsideBranch { .. } => ErrorKind::DotInsideBranch,
            UnexpectedCharacter { .. } => ErrorKind::UnexpectedCharacter,
            StrictViolation { .. } => ErrorKind::StrictViolation,
        }
    }

    /// Byte offset into the input.
    pub fn position(&self) -> usize {
        use SmilesError::*;
        match self {
            EmptyInput { pos }
            | MalformedBracketAtom { pos }
            | InvalidIsotope { pos, .. }
            | UnrecognizedAtom { pos, .. }
            | DanglingBondSymbol { pos, .. }
            | ConflictingRingBond { pos, .. }
            | SelfRingClosure { pos, .. }
            | CrossComponentRingClosure { pos, .. }
            | DanglingRingClosure { pos, .. }
            | BondSymbolWithoutPrecedingAtom { pos, .. }
            | BranchWithoutPrecedingAtom { pos }
            | EmptyBranch { pos }
            | UnmatchedParenthesis { pos }
            | EmptyFragment { pos }
            | DotInsideBranch { pos }
            | UnexpectedCharacter { pos, .. }
            | StrictViolation { pos, .. } => *pos,
        }
    }
}
