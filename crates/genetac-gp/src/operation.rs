//! The fixed catalog of primitive operations.
//!
//! The catalog is closed: every operation is a variant of [`OperationKind`], and
//! evaluation is a single exhaustive `match` in [`GeneGraph::eval`](crate::GeneGraph::eval).
//! Adding an operation therefore means adding a variant, listing it in
//! [`OperationKind::ALL`] and giving it an arity and an evaluation rule.
//!
//! | Arity | Operations                                                                |
//! |-------|---------------------------------------------------------------------------|
//! | 0     | `Constant`                                                                |
//! | 1     | `Abs`, `Signum`, `IsTrue`, `IsFalse`, `IsEmpty`, `IsYourPiece`, `IsTheirPiece` |
//! | 2     | `Add`, `Subtract`, `Multiply`, `Divide`, `Modulo`, `Max`, `Min`, `Equals`, `NotEquals` |
//!
//! The display name of a kind is its variant name, which is also how it appears in
//! rendered expressions.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize)]
pub enum OperationKind {
    Constant,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Max,
    Min,
    Abs,
    Equals,
    NotEquals,
    IsTrue,
    IsFalse,
    Signum,
    IsEmpty,
    IsYourPiece,
    IsTheirPiece,
}

impl OperationKind {
    pub const LEN: usize = Self::ALL.len();

    /// Every operation, in declaration order.
    ///
    /// Random construction samples uniformly from this list, `Constant` included.
    pub const ALL: [Self; 17] = [
        Self::Constant,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
        Self::Max,
        Self::Min,
        Self::Abs,
        Self::Equals,
        Self::NotEquals,
        Self::IsTrue,
        Self::IsFalse,
        Self::Signum,
        Self::IsEmpty,
        Self::IsYourPiece,
        Self::IsTheirPiece,
    ];

    /// Number of operands the operation reads.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Constant => 0,
            Self::Abs
            | Self::Signum
            | Self::IsTrue
            | Self::IsFalse
            | Self::IsEmpty
            | Self::IsYourPiece
            | Self::IsTheirPiece => 1,
            Self::Add
            | Self::Subtract
            | Self::Multiply
            | Self::Divide
            | Self::Modulo
            | Self::Max
            | Self::Min
            | Self::Equals
            | Self::NotEquals => 2,
        }
    }

    #[must_use]
    pub const fn is_constant(self) -> bool {
        matches!(self, Self::Constant)
    }
}
