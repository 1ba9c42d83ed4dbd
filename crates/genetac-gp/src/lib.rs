//! Genetic-programming representation for tic-tac-toe agents.
//!
//! An agent's decision function is a [`GeneGraph`]: a flat, growable list of [`Gene`]s in
//! which every gene refers to its operands by index. The graph is acyclic by
//! construction because a gene may only refer to genes stored before it.
//!
//! # Modules
//!
//! - [`operation`] - The closed catalog of primitive operations ([`OperationKind`])
//! - [`gene`] - A single operation record with its operand indices ([`Gene`])
//! - [`graph`] - The gene graph, its invariant and evaluation ([`GeneGraph`])
//! - [`expression`] - Textual rendering of the expression rooted at a gene
//! - [`factory`] - Random construction of genes and graphs
//!
//! # Layout
//!
//! ```text
//! index:  0 .. F-1        F ..                N-1
//!         input slots     evolved genes       root
//!         (board cells)   (operands < index)  (proposed move)
//! ```
//!
//! The first `F` genes are input slots. They are always constants and are overwritten
//! with the encoded board before each move, so evolved genes read the board by
//! referring to them.
//!
//! # Example
//!
//! ```
//! use genetac_gp::{Gene, GeneGraph, OperationKind};
//!
//! // Two input slots; root = Add(slot0, Max(slot1, 7))
//! let mut graph = GeneGraph::from_genes(
//!     2,
//!     vec![
//!         Gene::constant(0),
//!         Gene::constant(0),
//!         Gene::constant(7),
//!         Gene::binary(OperationKind::Max, 1, 2),
//!         Gene::binary(OperationKind::Add, 0, 3),
//!     ],
//! )?;
//! graph.set_inputs([2, 1]);
//!
//! assert_eq!(graph.eval_root(), 9);
//! assert_eq!(graph.root_expression().to_string(), "Add(Field[0],Max(Field[1],7))");
//! # Ok::<(), genetac_gp::GraphError>(())
//! ```

pub use self::{expression::*, gene::*, graph::*, operation::*};

pub mod expression;
pub mod factory;
pub mod gene;
pub mod graph;
pub mod operation;
