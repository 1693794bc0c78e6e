//! Property-based tests for SymNMF and the clustering helpers

#[cfg(test)]
mod tests {
    use crate::{assign_clusters, initialize_factor, kmeans, symnmf, KMeansOptions, SymNmfConfig};
    use proptest::prelude::*;
    use symnmf_core::Matrix;

    // Each case runs a full factorization, so keep the count modest
    fn proptest_config() -> ProptestConfig {
        ProptestConfig {
            cases: 16,
            ..ProptestConfig::default()
        }
    }

    /// Random symmetric non-negative matrix with zero diagonal
    fn symmetric_w(n: usize, seed: u64) -> Matrix {
        let raw = Matrix::random_uniform(n, n, 0.0, 1.0, seed);
        let mut w = Matrix::zeros(n, n);
        for i in 0..n {
            for j in (i + 1)..n {
                let v = (raw.get(i, j) + raw.get(j, i)) / 2.0;
                w.set(i, j, v);
                w.set(j, i, v);
            }
        }
        w
    }

    proptest! {
        #![proptest_config(proptest_config())]

        #[test]
        fn factor_stays_nonnegative_within_budget(
            n in 2usize..9,
            k_offset in 0usize..8,
            max_iter in 1usize..40,
            beta in 0.05f64..=1.0,
            seed in any::<u64>(),
        ) {
            let k = 1 + k_offset % n;
            let w = symmetric_w(n, seed);
            let h0 = initialize_factor(&w, k, seed.wrapping_add(1)).unwrap();
            let config = SymNmfConfig::default().with_max_iter(max_iter).with_beta(beta);

            let result = symnmf(&w, &h0, n, k, &config).unwrap();

            prop_assert_eq!(result.factor.shape(), (n, k));
            prop_assert!(result.factor.is_nonnegative());
            prop_assert!(result.iters >= 1 && result.iters <= max_iter);
            prop_assert_eq!(result.changes.len(), result.iters);
            if result.converged {
                prop_assert!(result.last_change() < config.tol);
            }
        }

        #[test]
        fn labels_are_in_range(
            n in 1usize..12,
            k in 1usize..6,
            seed in any::<u64>(),
        ) {
            let h = Matrix::random_uniform(n, k, 0.0, 1.0, seed);
            let labels = assign_clusters(&h);

            prop_assert_eq!(labels.len(), n);
            for (i, &label) in labels.iter().enumerate() {
                prop_assert!(label < k);
                let best = h.get(i, label);
                prop_assert!(h.row(i).iter().all(|&v| v <= best));
            }
        }

        #[test]
        fn kmeans_labels_cover_valid_clusters(
            n in 2usize..15,
            d in 1usize..4,
            k_offset in 0usize..6,
            seed in any::<u64>(),
        ) {
            let k = 1 + k_offset % n;
            let x = Matrix::random_uniform(n, d, -5.0, 5.0, seed);
            let options = KMeansOptions { seed, ..KMeansOptions::new(k) };

            let result = kmeans(&x, &options).unwrap();

            prop_assert_eq!(result.labels.len(), n);
            prop_assert!(result.labels.iter().all(|&c| c < k));
            prop_assert!(result.inertia >= 0.0);
            prop_assert!(result.n_iter <= options.max_iter);
        }
    }
}
