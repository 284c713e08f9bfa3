//! Connection Matrix Record
//!
//! Persisted form of the adjacency structure: `rows[i][j]` is 1 when agents
//! `i` and `j` are connected and 0 otherwise.

use serde::{Deserialize, Serialize};

/// Row-major 0/1 connection matrix
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionMatrixRecord {
    pub rows: Vec<Vec<u8>>,
}

impl ConnectionMatrixRecord {
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    /// Number of agents (rows)
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// True when every row has `size()` entries
    pub fn is_square(&self) -> bool {
        let n = self.rows.len();
        self.rows.iter().all(|row| row.len() == n)
    }

    /// True for a square, symmetric 0/1 matrix with an empty diagonal
    pub fn is_well_formed(&self) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.rows.len();
        for i in 0..n {
            if self.rows[i][i] != 0 {
                return false;
            }
            for j in (i + 1)..n {
                let a = self.rows[i][j];
                if a > 1 || a != self.rows[j][i] {
                    return false;
                }
            }
        }
        true
    }

    /// Number of 1-entries (twice the undirected edge count)
    pub fn entry_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&a| a == 1).count())
            .sum()
    }

    /// Unordered edges `(i, j)` with `i < j`
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::new();
        for (i, row) in self.rows.iter().enumerate() {
            for (j, &a) in row.iter().enumerate() {
                if i < j && a == 1 {
                    edges.push((i, j));
                }
            }
        }
        edges
    }
}
