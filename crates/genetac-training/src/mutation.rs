//! The mutation operator.
//!
//! A mutant is built by applying a number of independent steps to a copy of the
//! parent's graph. Each step picks one gene and either replaces it with a gene of a
//! random kind or rewires its operands.
//!
//! # Step
//!
//! 1. `selected` is drawn uniformly over the whole graph, input slots included.
//! 2. Input slots are never modified. If `selected` is an input slot the step acts on
//!    the first gene after the slots instead; that gene is the `target`.
//! 3. With probability ½ the target is replaced by a gene of a random kind that reuses
//!    the *selected* gene's operand fields. Operands that would reach `target` or beyond
//!    are clamped to `target - 1`, so the graph stays acyclic.
//! 4. Otherwise the target keeps its kind and both operands are redrawn uniformly in
//!    `[0, target)`.
//!
//! Because an input slot stores its cell code as a literal in its operand field, a
//! replace step selected on a slot copies that code (clamped) as the new operands.
//!
//! # Draw Order
//!
//! Per step: the selected index, the coin, then either the kind or the left and right
//! operands. Seeded runs depend on this order.

use genetac_gp::{Gene, GeneGraph, GraphError, OperationKind, factory};
use rand::Rng;

use crate::agent::Agent;

/// A single mutation, fully determined.
///
/// [`MutationStep::random`] draws a step; [`MutationStep::apply`] performs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStep {
    /// Replace the target with a gene of `kind`, reusing the selected gene's operands.
    Replace { selected: usize, kind: OperationKind },
    /// Keep the target's kind and point its operands at `left` and `right`.
    Rewire {
        selected: usize,
        left: usize,
        right: usize,
    },
}

impl MutationStep {
    /// Draws a random step for `graph`.
    ///
    /// # Panics
    ///
    /// Panics if the graph has no gene after its input slots.
    pub fn random<R>(graph: &GeneGraph, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        assert!(
            graph.len() > graph.input_count(),
            "mutation needs at least one gene after the input slots"
        );
        let selected = rng.random_range(0..graph.len());
        let target = target_index(graph, selected);
        if rng.random_bool(0.5) {
            let kind = factory::random_kind(rng);
            Self::Replace { selected, kind }
        } else {
            let left = rng.random_range(0..target);
            let right = rng.random_range(0..target);
            Self::Rewire {
                selected,
                left,
                right,
            }
        }
    }

    #[must_use]
    pub fn selected(self) -> usize {
        match self {
            Self::Replace { selected, .. } | Self::Rewire { selected, .. } => selected,
        }
    }

    /// Applies the step and returns the gene it replaced.
    ///
    /// Fails without touching the graph if the step does not fit it, for example when
    /// `selected` is out of range or a rewire points forward.
    pub fn apply(self, graph: &mut GeneGraph) -> Result<Gene, GraphError> {
        let selected = self.selected();
        let len = graph.len();
        let source = *graph
            .gene(selected)
            .ok_or(GraphError::OutOfRange { index: selected, len })?;
        let target = target_index(graph, selected);
        let current = *graph
            .gene(target)
            .ok_or(GraphError::OutOfRange { index: target, len })?;
        let gene = match self {
            Self::Replace { kind, .. } => Gene::new(
                kind,
                clamp_operand(source.left(), target),
                clamp_operand(source.right(), target),
            ),
            Self::Rewire { left, right, .. } => current.with_operands(left, right),
        };
        graph.replace(target, gene)
    }
}

/// Index of the gene a step selected on `selected` acts on.
#[must_use]
pub fn target_index(graph: &GeneGraph, selected: usize) -> usize {
    if graph.is_input(selected) {
        graph.input_count()
    } else {
        selected
    }
}

/// Keeps a copied operand inside `[0, target)`.
///
/// # Panics
///
/// Panics if `target` is 0.
#[must_use]
pub fn clamp_operand(operand: usize, target: usize) -> usize {
    assert!(target > 0, "no operand fits before index 0");
    operand.min(target - 1)
}

impl Agent {
    /// Creates a mutant named `name` from a copy of this agent.
    ///
    /// The mutant inherits the parent's win record; it is reset at the start of the
    /// next evaluation.
    ///
    /// # Panics
    ///
    /// Panics if the graph has no gene after its input slots.
    #[must_use]
    pub fn mutate<R>(&self, name: impl Into<String>, mutation_count: usize, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut child = self.renamed(name.into());
        for _ in 0..mutation_count {
            let step = MutationStep::random(child.graph(), rng);
            let replaced = step
                .apply(child.graph_mut())
                .expect("randomly drawn steps always fit the graph");
            log::trace!("{}: {step:?} replaced {replaced:?}", child.name());
        }
        child
    }
}
