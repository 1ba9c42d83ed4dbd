//! Random construction of genes and gene graphs.
//!
//! All functions take the random source explicitly so that construction is
//! reproducible under a fixed seed.
//!
//! # Draw Order
//!
//! [`random_wired_gene`] draws the operation first, then the left operand, then the
//! right operand. [`random_graph`] draws genes in index order. Changing either order
//! changes every seeded run.

use rand::Rng;

use crate::{
    gene::Gene,
    graph::{GeneGraph, GraphError},
    operation::OperationKind,
};

/// Picks an operation uniformly from [`OperationKind::ALL`].
pub fn random_kind<R>(rng: &mut R) -> OperationKind
where
    R: Rng + ?Sized,
{
    OperationKind::ALL[rng.random_range(0..OperationKind::LEN)]
}

/// Creates a gene with a random operation and both operand fields set to 0.
///
/// The caller is responsible for wiring the operands so that they refer to genes
/// stored before the insertion index.
pub fn random_gene<R>(rng: &mut R) -> Gene
where
    R: Rng + ?Sized,
{
    Gene::new(random_kind(rng), 0, 0)
}

/// Creates a random gene to be stored at `index`, with operands uniform in `[0, index)`.
///
/// Constants receive their literal the same way, so a fresh constant never exceeds
/// `index - 1`.
///
/// # Panics
///
/// Panics if `index` is 0.
pub fn random_wired_gene<R>(index: usize, rng: &mut R) -> Gene
where
    R: Rng + ?Sized,
{
    assert!(index > 0, "a wired gene needs at least one earlier gene");
    let gene = random_gene(rng);
    let left = rng.random_range(0..index);
    let right = rng.random_range(0..index);
    gene.with_operands(left, right)
}

/// Builds a graph of `input_count` input slots followed by `gene_count` random genes.
///
/// # Example
///
/// ```
/// use genetac_gp::factory;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg32;
///
/// let mut rng = Pcg32::seed_from_u64(42);
/// let graph = factory::random_graph(9, 40, &mut rng)?;
///
/// assert_eq!(graph.len(), 49);
/// assert_eq!(graph.root_index(), 48);
/// assert!(graph.validate().is_ok());
/// # Ok::<(), genetac_gp::GraphError>(())
/// ```
pub fn random_graph<R>(
    input_count: usize,
    gene_count: usize,
    rng: &mut R,
) -> Result<GeneGraph, GraphError>
where
    R: Rng + ?Sized,
{
    let mut graph = GeneGraph::new(input_count)?;
    for index in input_count..input_count + gene_count {
        graph.push(random_wired_gene(index, rng))?;
    }
    Ok(graph)
}
