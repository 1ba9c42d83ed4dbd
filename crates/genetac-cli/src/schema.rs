use chrono::{DateTime, Utc};
use genetac_gp::{GeneGraph, OperationKind, Value};
use genetac_training::{Agent, BaselineReport, EvolutionParams, RunSeed};
use serde::Serialize;

/// End-of-run report written as JSON.
///
/// Evolved programs are reported, not persisted: nothing reads this file back.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub seed: RunSeed,
    pub finished_at: DateTime<Utc>,
    pub generations: usize,
    pub params: EvolutionParams,
    pub champion: ChampionSummary,
    pub final_evaluation: BaselineReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChampionSummary {
    pub name: String,
    pub wins: usize,
    pub games: usize,
    pub expression: String,
    /// Genes from the root down to the first input slot.
    pub genes: Vec<GeneEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneEntry {
    pub index: usize,
    pub kind: OperationKind,
    pub left: usize,
    pub right: usize,
    /// Value under the inputs of the last board the agent saw.
    pub value: Value,
}

impl ChampionSummary {
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            name: agent.name().to_owned(),
            wins: agent.wins(),
            games: agent.games(),
            expression: agent.graph().root_expression().to_string(),
            genes: gene_entries(agent.graph()),
        }
    }
}

/// Lists every gene, highest index first.
pub fn gene_entries(graph: &GeneGraph) -> Vec<GeneEntry> {
    graph
        .genes()
        .iter()
        .enumerate()
        .rev()
        .map(|(index, gene)| GeneEntry {
            index,
            kind: gene.kind(),
            left: gene.left(),
            right: gene.right(),
            value: graph.eval(index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use genetac_gp::Gene;

    use super::*;

    fn graph() -> GeneGraph {
        GeneGraph::from_genes(
            2,
            vec![
                Gene::constant(0),
                Gene::constant(0),
                Gene::constant(7),
                Gene::binary(OperationKind::Add, 0, 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_gene_entries_start_at_root() {
        let mut graph = graph();
        graph.set_inputs([2, 1]);
        let entries = gene_entries(&graph);

        assert_eq!(entries.len(), 4);
        assert_eq!(
            entries[0],
            GeneEntry {
                index: 3,
                kind: OperationKind::Add,
                left: 0,
                right: 2,
                value: 9,
            }
        );
        assert_eq!(entries[3].index, 0);
        assert_eq!(entries[3].value, 2);
    }

    #[test]
    fn test_champion_summary_json() {
        let agent = Agent::new("genetic-7", graph());
        let summary = ChampionSummary::from_agent(&agent);
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["name"], "genetic-7");
        assert_eq!(json["expression"], "Add(Field[0],7)");
        assert_eq!(json["genes"][0]["kind"], "Add");
        assert_eq!(json["genes"].as_array().unwrap().len(), 4);
    }
}
