//! Latent semantic analysis: truncated SVD of the document-term matrix.
//!
//! Corpora here are tiny (one job plus its candidate pool), so instead of a
//! sparse iterative SVD we eigendecompose the documents-by-documents Gram
//! matrix G = X·Xᵀ with cyclic Jacobi rotations. For X = UΣVᵀ this gives
//! G = UΣ²Uᵀ, and the document coordinates in the latent space are UΣ — the
//! same thing a truncated SVD transform returns. Fully deterministic; no
//! random initialization.

use crate::vectorize::tfidf::TfidfMatrix;

const JACOBI_MAX_SWEEPS: usize = 100;
const JACOBI_EPS: f64 = 1e-12;

/// Projects the documents into a latent space of at most `n_components`
/// dimensions. Effective dimensionality is capped by the number of documents
/// and by `n_features - 1`; callers should skip LSA entirely when fewer than
/// two features exist.
pub fn project(matrix: &TfidfMatrix, n_components: usize) -> Vec<Vec<f64>> {
    let n_docs = matrix.rows.len();
    if n_docs == 0 {
        return Vec::new();
    }
    let k = effective_components(n_components, n_docs, matrix.n_features());
    if k == 0 {
        return vec![Vec::new(); n_docs];
    }

    let gram = gram_matrix(&matrix.rows);
    let (eigenvalues, eigenvectors) = jacobi_eigen(gram);

    // Largest eigenvalues first; negatives are numerical noise.
    let mut order: Vec<usize> = (0..n_docs).collect();
    order.sort_by(|&a, &b| {
        eigenvalues[b]
            .partial_cmp(&eigenvalues[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    // Coordinates: row i of U_k Σ_k, i.e. U[i][j] * sqrt(λ_j).
    (0..n_docs)
        .map(|i| {
            order
                .iter()
                .take(k)
                .map(|&j| eigenvectors[i][j] * eigenvalues[j].max(0.0).sqrt())
                .collect()
        })
        .collect()
}

/// min(requested, n_docs, n_features - 1), never negative.
pub fn effective_components(requested: usize, n_docs: usize, n_features: usize) -> usize {
    requested.min(n_docs).min(n_features.saturating_sub(1))
}

fn gram_matrix(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let n = rows.len();
    let mut gram = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let dot: f64 = rows[i].iter().zip(&rows[j]).map(|(a, b)| a * b).sum();
            gram[i][j] = dot;
            gram[j][i] = dot;
        }
    }
    gram
}

/// Cyclic Jacobi eigendecomposition of a symmetric matrix.
/// Returns (eigenvalues, eigenvectors) with eigenvectors as columns:
/// `vectors[row][col]` is component `row` of eigenvector `col`.
fn jacobi_eigen(mut a: Vec<Vec<f64>>) -> (Vec<f64>, Vec<Vec<f64>>) {
    let n = a.len();
    let mut v = vec![vec![0.0; n]; n];
    for (i, row) in v.iter_mut().enumerate() {
        row[i] = 1.0;
    }

    for _ in 0..JACOBI_MAX_SWEEPS {
        let off: f64 = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .map(|(i, j)| a[i][j] * a[i][j])
            .sum();
        if off < JACOBI_EPS {
            break;
        }

        for p in 0..n {
            for q in (p + 1)..n {
                if a[p][q].abs() < JACOBI_EPS {
                    continue;
                }
                let theta = (a[q][q] - a[p][p]) / (2.0 * a[p][q]);
                let t = theta.signum() / (theta.abs() + (theta * theta + 1.0).sqrt());
                let c = 1.0 / (t * t + 1.0).sqrt();
                let s = t * c;

                for i in 0..n {
                    let aip = a[i][p];
                    let aiq = a[i][q];
                    a[i][p] = c * aip - s * aiq;
                    a[i][q] = s * aip + c * aiq;
                }
                for j in 0..n {
                    let apj = a[p][j];
                    let aqj = a[q][j];
                    a[p][j] = c * apj - s * aqj;
                    a[q][j] = s * apj + c * aqj;
                }
                for i in 0..n {
                    let vip = v[i][p];
                    let viq = v[i][q];
                    v[i][p] = c * vip - s * viq;
                    v[i][q] = s * vip + c * viq;
                }
            }
        }
    }

    let eigenvalues = (0..n).map(|i| a[i][i]).collect();
    (eigenvalues, v)
}
