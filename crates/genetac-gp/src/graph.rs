//! The gene graph and its evaluation.
//!
//! # Invariant
//!
//! For a graph with `F` input slots and `N` genes:
//!
//! - `F >= 1`, and genes `0..F` are constants (the input slots)
//! - every operand read by gene `i >= F` is strictly less than `i`
//!
//! Every constructor and mutator checks the invariant and returns a [`GraphError`]
//! instead of storing an invalid gene. Because operands always point backwards,
//! the structure is a DAG, recursion depth during evaluation is bounded by `N`, and
//! evaluation always terminates.
//!
//! # Evaluation
//!
//! [`GeneGraph::eval`] recursively evaluates a gene. Evaluation is total on every
//! `i32` input:
//!
//! - `Divide` and `Modulo` return 0 when the divisor is 0
//! - arithmetic wraps on overflow instead of panicking
//!
//! Nothing is cached; each call recomputes the whole subexpression, so the cost is
//! proportional to the size of the expression tree below the gene.

use serde::Serialize;

use crate::{expression::Expression, gene::Gene, operation::OperationKind};

/// Result type of evaluating a gene.
pub type Value = i32;

/// A violation of the gene graph invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GraphError {
    #[display("a gene graph needs at least one input slot")]
    NoInputSlots,
    #[display("expected at least {expected} genes for the input slots, got {actual}")]
    MissingInputSlots { expected: usize, actual: usize },
    #[display("input slot {index} must be a constant")]
    NonConstantInput { index: usize },
    #[display("gene {index} reads operand {operand}, which is not stored before it")]
    ForwardReference { index: usize, operand: usize },
    #[display("gene {index} is an input slot and cannot be replaced")]
    InputSlotReplaced { index: usize },
    #[display("gene index {index} is out of range for a graph of {len} genes")]
    OutOfRange { index: usize, len: usize },
}

/// An ordered sequence of genes forming an agent's decision function.
///
/// The last gene is the root; its value is the agent's proposed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneGraph {
    input_count: usize,
    genes: Vec<Gene>,
}

impl GeneGraph {
    /// Creates a graph holding only `input_count` input slots, all set to 0.
    pub fn new(input_count: usize) -> Result<Self, GraphError> {
        if input_count == 0 {
            return Err(GraphError::NoInputSlots);
        }
        Ok(Self {
            input_count,
            genes: vec![Gene::constant(0); input_count],
        })
    }

    /// Creates a graph from raw genes, the first `input_count` of which are input slots.
    pub fn from_genes(input_count: usize, genes: Vec<Gene>) -> Result<Self, GraphError> {
        let graph = Self { input_count, genes };
        graph.validate()?;
        Ok(graph)
    }

    /// Checks the whole graph against the invariant.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.input_count == 0 {
            return Err(GraphError::NoInputSlots);
        }
        if self.genes.len() < self.input_count {
            return Err(GraphError::MissingInputSlots {
                expected: self.input_count,
                actual: self.genes.len(),
            });
        }
        for (index, gene) in self.genes.iter().enumerate() {
            self.check_gene(index, gene)?;
        }
        Ok(())
    }

    fn check_gene(&self, index: usize, gene: &Gene) -> Result<(), GraphError> {
        if self.is_input(index) {
            if !gene.kind().is_constant() {
                return Err(GraphError::NonConstantInput { index });
            }
            return Ok(());
        }
        if let Some(operand) = gene.operands().find(|&operand| operand >= index) {
            return Err(GraphError::ForwardReference { index, operand });
        }
        Ok(())
    }

    /// Appends a gene, which becomes the new root.
    ///
    /// Returns the index of the appended gene.
    pub fn push(&mut self, gene: Gene) -> Result<usize, GraphError> {
        let index = self.genes.len();
        self.check_gene(index, &gene)?;
        self.genes.push(gene);
        Ok(index)
    }

    /// Replaces the gene at `index`, returning the previous one.
    ///
    /// Input slots cannot be replaced; use [`Self::set_inputs`] to change their values.
    pub fn replace(&mut self, index: usize, gene: Gene) -> Result<Gene, GraphError> {
        let len = self.genes.len();
        if index >= len {
            return Err(GraphError::OutOfRange { index, len });
        }
        if self.is_input(index) {
            return Err(GraphError::InputSlotReplaced { index });
        }
        self.check_gene(index, &gene)?;
        Ok(std::mem::replace(&mut self.genes[index], gene))
    }

    /// Number of input slots.
    #[must_use]
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Total number of genes, input slots included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    #[must_use]
    pub fn is_input(&self, index: usize) -> bool {
        index < self.input_count
    }

    #[must_use]
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    #[must_use]
    pub fn gene(&self, index: usize) -> Option<&Gene> {
        self.genes.get(index)
    }

    /// Index of the root, the highest-indexed gene.
    #[must_use]
    pub fn root_index(&self) -> usize {
        self.genes.len() - 1
    }

    /// Overwrites the input slots with encoded cell states.
    ///
    /// Codes are written to slots `0, 1, 2, ...` in order. Extra codes are ignored and
    /// slots without a code keep their previous value.
    pub fn set_inputs<I>(&mut self, codes: I)
    where
        I: IntoIterator<Item = u8>,
    {
        for (slot, code) in self.genes[..self.input_count].iter_mut().zip(codes) {
            *slot = Gene::constant(usize::from(code));
        }
    }

    /// Evaluates the gene at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn eval(&self, index: usize) -> Value {
        let gene = &self.genes[index];
        let left = || self.eval(gene.left());
        let right = || self.eval(gene.right());
        let flag = |cond: bool| Value::from(cond);

        match gene.kind() {
            OperationKind::Constant => gene.literal(),
            OperationKind::Add => left().wrapping_add(right()),
            OperationKind::Subtract => left().wrapping_sub(right()),
            OperationKind::Multiply => left().wrapping_mul(right()),
            OperationKind::Divide => {
                let (a, b) = (left(), right());
                if b == 0 { 0 } else { a.wrapping_div(b) }
            }
            OperationKind::Modulo => {
                let (a, b) = (left(), right());
                if b == 0 { 0 } else { a.wrapping_rem(b) }
            }
            OperationKind::Max => Value::max(left(), right()),
            OperationKind::Min => Value::min(left(), right()),
            OperationKind::Abs => left().wrapping_abs(),
            OperationKind::Equals => flag(left() == right()),
            OperationKind::NotEquals => flag(left() != right()),
            // IsTrue and IsFalse share the same rule.
            OperationKind::IsTrue | OperationKind::IsFalse => flag(left() == 0),
            OperationKind::Signum => left().signum(),
            OperationKind::IsEmpty => flag(left() == 0),
            OperationKind::IsYourPiece => flag(left() == 1),
            OperationKind::IsTheirPiece => flag(left() == 2),
        }
    }

    /// Evaluates the root gene.
    #[must_use]
    pub fn eval_root(&self) -> Value {
        self.eval(self.root_index())
    }

    /// Returns a displayable view of the expression rooted at `index`.
    #[must_use]
    pub fn expression(&self, index: usize) -> Expression<'_> {
        Expression::new(self, index)
    }

    #[must_use]
    pub fn root_expression(&self) -> Expression<'_> {
        self.expression(self.root_index())
    }
}
