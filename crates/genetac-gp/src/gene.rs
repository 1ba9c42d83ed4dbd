use serde::Serialize;

use crate::{graph::Value, operation::OperationKind};

/// One operation record in a gene graph.
///
/// The meaning of the two fields depends on the arity of `kind`:
///
/// | Arity | `left`             | `right`       |
/// |-------|--------------------|---------------|
/// | 0     | literal value      | unused        |
/// | 1     | operand index      | unused        |
/// | 2     | left operand index | right operand |
///
/// Keeping both fields on every gene lets mutation swap the operation of a gene
/// while keeping its wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gene {
    kind: OperationKind,
    left: usize,
    right: usize,
}

impl Gene {
    #[must_use]
    pub const fn new(kind: OperationKind, left: usize, right: usize) -> Self {
        Self { kind, left, right }
    }

    #[must_use]
    pub const fn constant(value: usize) -> Self {
        Self::new(OperationKind::Constant, value, 0)
    }

    #[must_use]
    pub const fn unary(kind: OperationKind, operand: usize) -> Self {
        Self::new(kind, operand, 0)
    }

    #[must_use]
    pub const fn binary(kind: OperationKind, left: usize, right: usize) -> Self {
        Self::new(kind, left, right)
    }

    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        self.kind
    }

    #[must_use]
    pub const fn left(&self) -> usize {
        self.left
    }

    #[must_use]
    pub const fn right(&self) -> usize {
        self.right
    }

    /// Value of a constant gene.
    ///
    /// Literals larger than [`Value::MAX`] saturate.
    #[must_use]
    pub fn literal(&self) -> Value {
        Value::try_from(self.left).unwrap_or(Value::MAX)
    }

    /// Returns the same operation with different operand fields.
    #[must_use]
    pub const fn with_operands(self, left: usize, right: usize) -> Self {
        Self::new(self.kind, left, right)
    }

    /// Operand indices actually read during evaluation (none for constants).
    pub fn operands(&self) -> impl Iterator<Item = usize> {
        [self.left, self.right].into_iter().take(self.kind.arity())
    }
}
