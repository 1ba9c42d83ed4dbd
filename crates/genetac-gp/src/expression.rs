//! Textual reconstruction of the expression rooted at a gene.
//!
//! Rendering follows the operands recursively and prints a parenthesized tree:
//!
//! - input slots print as `Field[i]`
//! - other constants print as their literal
//! - unary operations print one argument, binary operations two: `Abs(Field[4])`,
//!   `Add(Field[0],3)`
//!
//! Shared subexpressions are printed once per use, so the text can be much longer
//! than the graph itself.

use std::fmt;

use crate::graph::GeneGraph;

/// Displayable view of the expression rooted at one gene of a graph.
#[derive(Debug, Clone, Copy)]
pub struct Expression<'a> {
    graph: &'a GeneGraph,
    index: usize,
}

impl<'a> Expression<'a> {
    #[must_use]
    pub fn new(graph: &'a GeneGraph, index: usize) -> Self {
        Self { graph, index }
    }

    fn operand(&self, operand: usize) -> Self {
        Self::new(self.graph, operand)
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gene = &self.graph.genes()[self.index];
        match gene.kind().arity() {
            0 if self.graph.is_input(self.index) => write!(f, "Field[{}]", self.index),
            0 => write!(f, "{}", gene.literal()),
            1 => write!(f, "{}({})", gene.kind(), self.operand(gene.left())),
            _ => write!(
                f,
                "{}({},{})",
                gene.kind(),
                self.operand(gene.left()),
                self.operand(gene.right())
            ),
        }
    }
}
