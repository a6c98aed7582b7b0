use serde::Deserialize;

/// One row of the feature matrix as exported by the feature builder
///
/// `indices` are the non-zero vocabulary positions in strictly increasing
/// order; `values` holds the matching TF-IDF weights.
#[derive(Debug, Clone, Deserialize)]
pub struct SparseRow {
    pub indices: Vec<u32>,
    pub values: Vec<f32>,
}

/// Sparse feature matrix in CSR layout
///
/// Rows are weight vectors over a shared vocabulary of dimension `dim`,
/// pre-normalized to unit length by the upstream feature builder. Immutable
/// once loaded; the ranker only reads it.
#[derive(Debug)]
pub struct SparseMatrix {
    dim: usize,
    indptr: Vec<usize>,
    indices: Vec<u32>,
    values: Vec<f32>,
}

impl SparseMatrix {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            indptr: vec![0],
            indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.indptr.len() - 1
    }

    /// Vocabulary dimension shared by all rows
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Appends a row. Callers validate index ordering and bounds up front;
    /// see `FeatureStore::from_parts`.
    pub fn push_row(&mut self, indices: &[u32], values: &[f32]) {
        debug_assert_eq!(indices.len(), values.len());
        debug_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        self.indices.extend_from_slice(indices);
        self.values.extend_from_slice(values);
        self.indptr.push(self.indices.len());
    }

    /// The index and value slices for row `i`
    pub fn row(&self, i: usize) -> (&[u32], &[f32]) {
        let start = self.indptr[i];
        let end = self.indptr[i + 1];
        (&self.indices[start..end], &self.values[start..end])
    }

    /// Dot product of rows `a` and `b`, merge-joining the sorted index lists
    pub fn dot(&self, a: usize, b: usize) -> f32 {
        let (ai, av) = self.row(a);
        let (bi, bv) = self.row(b);
        let mut x = 0;
        let mut y = 0;
        let mut sum = 0.0;
        while x < ai.len() && y < bi.len() {
            match ai[x].cmp(&bi[y]) {
                std::cmp::Ordering::Less => x += 1,
                std::cmp::Ordering::Greater => y += 1,
                std::cmp::Ordering::Equal => {
                    sum += av[x] * bv[y];
                    x += 1;
                    y += 1;
                }
            }
        }
        sum
    }
}
