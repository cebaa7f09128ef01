/// Square boolean relation matrix stored row-major.
///
/// Every matrix produced for one input shares the row/column ordering of the
/// [`VertexIndex`](crate::graph::index::VertexIndex) it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelationMatrix {
    n: usize,
    cells: Vec<bool>,
}

impl RelationMatrix {
    /// All-false `n`×`n` matrix.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![false; n * n],
        }
    }

    /// Build from nested rows. Panics if the rows are not square.
    #[cfg(test)]
    pub fn from_rows(rows: &[Vec<bool>]) -> Self {
        let n = rows.len();
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            assert_eq!(row.len(), n, "relation matrix rows must be square");
            cells.extend_from_slice(row);
        }
        Self { n, cells }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.n + j]
    }

    pub fn set(&mut self, i: usize, j: usize) {
        self.cells[i * self.n + j] = true;
    }

    pub fn row(&self, i: usize) -> &[bool] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.n.max(1))
    }

    /// Row-major cells, chunked by the closure to relax rows independently.
    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// `out[i][j] = self[j][i]`.
    pub fn transpose(&self) -> Self {
        let mut out = Self::new(self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                if self.get(j, i) {
                    out.set(i, j);
                }
            }
        }
        out
    }

    /// Cell-wise `self ∧ ¬other`.
    pub fn and_not(&self, other: &RelationMatrix) -> Self {
        debug_assert_eq!(self.n, other.n);
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(&a, &b)| a && !b)
            .collect();
        Self { n: self.n, cells }
    }

    /// Number of true cells.
    pub fn count_true(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate `(i, j)` over true cells in row-major order.
    pub fn true_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.n;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(move |(k, _)| (k / n, k % n))
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}
