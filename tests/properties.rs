use comembership_kernel::{
    cluster_similarity, comembership_table, compute_comembership, compute_comembership_parallel,
    pair_count, ComembershipConfig, SimilarityMethod,
};
use proptest::prelude::*;

fn labels(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec((0u8..5).prop_map(f64::from), 0..=max_len)
}

#[test]
fn worked_examples() {
    assert_eq!(compute_comembership(&[]).unwrap(), Vec::<f64>::new());
    assert_eq!(compute_comembership(&[5.0]).unwrap(), Vec::<f64>::new());
    assert_eq!(compute_comembership(&[5.0, 5.0]).unwrap(), vec![1.0]);
    assert_eq!(compute_comembership(&[5.0, 7.0]).unwrap(), vec![0.0]);
    assert_eq!(compute_comembership(&[1.0, 1.0, 2.0]).unwrap(), vec![1.0, 0.0, 0.0]);
    assert_eq!(
        compute_comembership(&[1.0, 2.0, 1.0, 2.0]).unwrap(),
        vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0]
    );
}

#[test]
fn default_config_runs_small_inputs_sequentially() {
    assert!(ComembershipConfig::default().parallel_threshold > 4);
}

proptest! {
    #[test]
    fn output_length_is_pair_count(l in labels(60)) {
        let n = l.len();
        let out = compute_comembership(&l).unwrap();
        prop_assert_eq!(out.len(), n * n.saturating_sub(1) / 2);
        prop_assert_eq!(out.len(), pair_count(n).unwrap());
        prop_assert!(out.iter().all(|&v| v == 0.0 || v == 1.0));
    }

    #[test]
    fn relabeling_preserves_output(
        l in labels(40),
        mapping in Just(vec![-3.5, 0.25, 7.0, 1e9, 42.0, -0.0]).prop_shuffle(),
    ) {
        let relabeled: Vec<f64> = l.iter().map(|&x| mapping[x as usize]).collect();
        prop_assert_eq!(compute_comembership(&l).unwrap(), compute_comembership(&relabeled).unwrap());
    }

    #[test]
    fn repeated_calls_agree(l in labels(40)) {
        prop_assert_eq!(compute_comembership(&l).unwrap(), compute_comembership(&l).unwrap());
    }

    #[test]
    fn parallel_agrees_with_sequential(l in labels(80)) {
        prop_assert_eq!(compute_comembership_parallel(&l).unwrap(), compute_comembership(&l).unwrap());
    }

    #[test]
    fn table_sums_to_pair_count(a in labels(40), seed in 0u8..5) {
        let b: Vec<f64> = a.iter().map(|&x| ((x as u8 + seed) % 3) as f64).collect();
        let table = comembership_table(&a, &b).unwrap();
        prop_assert_eq!(table.total() as usize, pair_count(a.len()).unwrap());
        let rand = cluster_similarity(&a, &b, SimilarityMethod::Rand).unwrap();
        prop_assert!((0.0..=1.0).contains(&rand));
    }

    #[test]
    fn self_similarity_is_one(a in labels(40)) {
        let table = comembership_table(&a, &a).unwrap();
        prop_assert_eq!(table.n10, 0);
        prop_assert_eq!(table.n01, 0);
        prop_assert_eq!(table.rand(), 1.0);
        prop_assert_eq!(table.jaccard(), 1.0);
    }
}
