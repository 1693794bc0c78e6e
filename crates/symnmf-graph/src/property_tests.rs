//! Property-based tests for the graph matrices
//!
//! Point sets are drawn from a bounded box so every point keeps a non-zero degree.

#[cfg(test)]
mod tests {
    use crate::{build_graph, degree, normalized, similarity};
    use proptest::prelude::*;
    use symnmf_core::Matrix;
    use symnmf_kernels::row_sums;

    fn proptest_config() -> ProptestConfig {
        ProptestConfig {
            cases: 24,
            ..ProptestConfig::default()
        }
    }

    proptest! {
        #![proptest_config(proptest_config())]

        #[test]
        fn similarity_is_symmetric_with_zero_diagonal(
            n in 2usize..10,
            d in 1usize..5,
            seed in any::<u64>(),
        ) {
            let x = Matrix::random_uniform(n, d, -2.0, 2.0, seed);
            let a = similarity(&x, n, d).unwrap();

            prop_assert!(a.is_symmetric(0.0));
            for i in 0..n {
                prop_assert_eq!(a.get(i, i), 0.0);
            }
            prop_assert!(a.iter().all(|&v| (0.0..=1.0).contains(&v)));
        }

        #[test]
        fn degree_is_diagonal_row_sums(
            n in 2usize..10,
            d in 1usize..5,
            seed in any::<u64>(),
        ) {
            let x = Matrix::random_uniform(n, d, -2.0, 2.0, seed);
            let a = similarity(&x, n, d).unwrap();
            let deg = degree(&x, n, d).unwrap();

            prop_assert!(deg.is_diagonal());
            for (i, sum) in row_sums(&a).into_iter().enumerate() {
                prop_assert_eq!(deg.get(i, i), sum);
            }
        }

        #[test]
        fn normalized_is_symmetric(
            n in 2usize..10,
            d in 1usize..5,
            seed in any::<u64>(),
        ) {
            let x = Matrix::random_uniform(n, d, -2.0, 2.0, seed);
            let w = normalized(&x, n, d).unwrap();

            prop_assert!(w.is_symmetric(0.0));
            prop_assert!(w.iter().all(|v| v.is_finite() && *v >= 0.0));
        }

        #[test]
        fn pipeline_matches_individual_operations(
            n in 2usize..8,
            d in 1usize..4,
            seed in any::<u64>(),
        ) {
            let x = Matrix::random_uniform(n, d, -2.0, 2.0, seed);
            let graph = build_graph(&x, n, d).unwrap();

            prop_assert_eq!(&graph.similarity, &similarity(&x, n, d).unwrap());
            prop_assert_eq!(&graph.degree, &degree(&x, n, d).unwrap());
            prop_assert_eq!(&graph.normalized, &normalized(&x, n, d).unwrap());
        }

        #[test]
        fn wrong_declared_rows_is_an_error(
            n in 1usize..6,
            d in 1usize..4,
            extra in 1usize..3,
            seed in any::<u64>(),
        ) {
            let x = Matrix::random_uniform(n, d, -1.0, 1.0, seed);
            prop_assert!(similarity(&x, n + extra, d).is_err());
            prop_assert!(degree(&x, n + extra, d).is_err());
            prop_assert!(normalized(&x, n + extra, d).is_err());
        }
    }
}
