//! Graph Generator
//!
//! Random undirected graphs stored as a symmetric 0/1 adjacency matrix with
//! an empty diagonal. A graph is built once and never mutated afterward.

use rand::Rng;
use tracing::{debug, warn};
use voter_records::ConnectionMatrixRecord;

use crate::error::{validate_agents, validate_probability, SimError, SimResult};

/// Symmetric adjacency structure over `size` agents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    size: usize,
    /// Row-major N×N entries, each 0 or 1
    cells: Vec<u8>,
    /// Neighbor lists derived from `cells`, ascending. Generators connect
    /// pairs in row-major order, which keeps them sorted without extra work.
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyMatrix {
    /// Creates a graph with `size` agents and no edges.
    pub fn empty(size: usize) -> SimResult<Self> {
        validate_agents(size)?;
        Ok(Self {
            size,
            cells: vec![0; size * size],
            neighbors: vec![Vec::new(); size],
        })
    }

    /// Generates a random graph: every unordered pair `{i, j}` is connected
    /// with probability `p`.
    ///
    /// Exactly one uniform draw is consumed per unordered pair, walking the
    /// upper triangle row by row. A pair is connected when its draw is below
    /// `p`, so `p = 0` never connects and `p = 1` always does.
    pub fn random<R: Rng + ?Sized>(size: usize, p: f64, rng: &mut R) -> SimResult<Self> {
        validate_agents(size)?;
        validate_probability(p)?;

        let mut graph = Self::empty(size)?;
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen::<f64>() < p {
                    graph.connect(i, j);
                }
            }
        }

        let isolated = graph.isolated_agents().len();
        debug!(
            agents = size,
            p,
            edges = graph.edge_count(),
            isolated,
            "generated graph"
        );
        if isolated > 0 {
            warn!(isolated, "generated graph contains isolated agents");
        }

        Ok(graph)
    }

    /// Builds a graph from an explicit list of undirected edges.
    ///
    /// Duplicate edges (in either orientation) are collapsed.
    pub fn from_edges(size: usize, edges: &[(usize, usize)]) -> SimResult<Self> {
        let mut graph = Self::empty(size)?;
        for &(i, j) in edges {
            if i >= size || j >= size {
                return Err(SimError::invalid(
                    "edges",
                    format!("edge ({}, {}) is out of range for {} agents", i, j, size),
                ));
            }
            if i == j {
                return Err(SimError::invalid(
                    "edges",
                    format!("self-loop on agent {}", i),
                ));
            }
            if !graph.has_edge(i, j) {
                graph.connect(i, j);
            }
        }
        for list in &mut graph.neighbors {
            list.sort_unstable();
        }
        Ok(graph)
    }

    /// Complete graph: every pair of distinct agents is connected.
    pub fn complete(size: usize) -> SimResult<Self> {
        let mut graph = Self::empty(size)?;
        for i in 0..size {
            for j in (i + 1)..size {
                graph.connect(i, j);
            }
        }
        Ok(graph)
    }

    /// Restores a graph from its persisted form.
    pub fn from_record(record: &ConnectionMatrixRecord) -> SimResult<Self> {
        if !record.is_well_formed() {
            return Err(SimError::invalid(
                "connection_matrix",
                "must be a square, symmetric 0/1 matrix with an empty diagonal",
            ));
        }
        Self::from_edges(record.size(), &record.edges())
    }

    /// Persisted form of this graph
    pub fn to_record(&self) -> ConnectionMatrixRecord {
        ConnectionMatrixRecord::new(self.rows())
    }

    fn connect(&mut self, i: usize, j: usize) {
        self.cells[i * self.size + j] = 1;
        self.cells[j * self.size + i] = 1;
        self.neighbors[i].push(j);
        self.neighbors[j].push(i);
    }

    /// Number of agents
    pub fn size(&self) -> usize {
        self.size
    }

    /// Matrix entry at `(i, j)`: 1 when connected, else 0
    pub fn entry(&self, i: usize, j: usize) -> u8 {
        if i >= self.size || j >= self.size {
            return 0;
        }
        self.cells[i * self.size + j]
    }

    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.entry(i, j) == 1
    }

    /// Agents connected to `agent`, ascending. Empty for unknown agents.
    pub fn neighbors(&self, agent: usize) -> &[usize] {
        self.neighbors
            .get(agent)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn degree(&self, agent: usize) -> usize {
        self.neighbors(agent).len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.entry_count() / 2
    }

    /// Number of 1-entries in the matrix: twice the undirected edge count
    pub fn entry_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum()
    }

    /// Agents without any neighbor, ascending
    pub fn isolated_agents(&self) -> Vec<usize> {
        self.neighbors
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_empty())
            .map(|(agent, _)| agent)
            .collect()
    }

    /// Matrix rows as 0/1 vectors
    pub fn rows(&self) -> Vec<Vec<u8>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.size)
            .map(<[u8]>::to_vec)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn assert_symmetric_no_loops(graph: &AdjacencyMatrix) {
        let n = graph.size();
        for i in 0..n {
            assert_eq!(graph.entry(i, i), 0, "self-loop at {}", i);
            for j in 0..n {
                assert_eq!(graph.entry(i, j), graph.entry(j, i), "asymmetric at ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_random_graph_is_symmetric() {
        let mut rng = SmallRng::seed_from_u64(12345);
        for &p in &[0.0, 0.1, 0.5, 0.9, 1.0] {
            let graph = AdjacencyMatrix::random(30, p, &mut rng).unwrap();
            assert_symmetric_no_loops(&graph);
            assert_eq!(graph.entry_count(), 2 * graph.edge_count());
        }
    }

    #[test]
    fn test_probability_extremes() {
        let mut rng = SmallRng::seed_from_u64(42);

        let none = AdjacencyMatrix::random(12, 0.0, &mut rng).unwrap();
        assert_eq!(none.edge_count(), 0);
        assert_eq!(none.isolated_agents().len(), 12);

        let all = AdjacencyMatrix::random(12, 1.0, &mut rng).unwrap();
        assert_eq!(all.edge_count(), 12 * 11 / 2);
        for i in 0..12 {
            for j in 0..12 {
                assert_eq!(all.has_edge(i, j), i != j);
            }
        }
    }

    #[test]
    fn test_single_agent_has_no_edges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let graph = AdjacencyMatrix::random(1, 1.0, &mut rng).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.rows(), vec![vec![0]]);
    }

    #[test]
    fn test_one_draw_per_unordered_pair() {
        let n = 9;
        let mut rng = SmallRng::seed_from_u64(7);
        let _ = AdjacencyMatrix::random(n, 0.5, &mut rng).unwrap();
        let after_graph: f64 = rng.gen();

        let mut reference = SmallRng::seed_from_u64(7);
        for _ in 0..(n * (n - 1) / 2) {
            let _: f64 = reference.gen();
        }
        let expected: f64 = reference.gen();

        assert_eq!(after_graph, expected);
    }

    #[test]
    fn test_invalid_parameters() {
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(AdjacencyMatrix::random(0, 0.5, &mut rng).is_err());
        assert!(AdjacencyMatrix::random(10, -0.1, &mut rng).is_err());
        assert!(AdjacencyMatrix::random(10, 1.1, &mut rng).is_err());
        assert!(AdjacencyMatrix::random(10, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_from_edges() {
        let graph = AdjacencyMatrix::from_edges(4, &[(0, 1), (2, 1), (1, 0)]).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(graph.degree(3), 0);
        assert_eq!(graph.isolated_agents(), vec![3]);
        assert_symmetric_no_loops(&graph);

        assert!(AdjacencyMatrix::from_edges(3, &[(0, 3)]).is_err());
        assert!(AdjacencyMatrix::from_edges(3, &[(1, 1)]).is_err());
    }

    #[test]
    fn test_record_round_trip() {
        let graph = AdjacencyMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let record = graph.to_record();
        assert!(record.is_well_formed());
        assert_eq!(record.entry_count(), 6);
        assert_eq!(AdjacencyMatrix::from_record(&record).unwrap(), graph);

        let bad = ConnectionMatrixRecord::new(vec![vec![0, 1], vec![0, 0]]);
        assert!(AdjacencyMatrix::from_record(&bad).is_err());
    }

    #[test]
    fn test_out_of_range_queries() {
        let graph = AdjacencyMatrix::complete(3).unwrap();
        assert_eq!(graph.entry(5, 0), 0);
        assert!(graph.neighbors(5).is_empty());
        assert_eq!(graph.edge_count(), 3);
    }
}
