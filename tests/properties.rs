//! Property tests over small random graphs.

use proptest::prelude::*;

use kcolor_hea::coloring::{count_conflicts, local_conflicts, Coloring};
use kcolor_hea::dsatur::color_greedy;
use kcolor_hea::gpx::gpx_crossover;
use kcolor_hea::graph::Graph;
use kcolor_hea::random::create_rng;
use kcolor_hea::tabu::{TabuConfig, TabuRunner};

/// Graph on `1..=n` from arbitrary pairs; loops and duplicates are filtered.
fn graph_strategy(max_n: usize) -> impl Strategy<Value = Graph> {
    (1..=max_n).prop_flat_map(|n| {
        prop::collection::vec((1..=n, 1..=n), 0..(n * 2)).prop_map(move |pairs| {
            let edges: Vec<(usize, usize)> = pairs.into_iter().filter(|(a, b)| a != b).collect();
            Graph::with_vertex_count(n, &edges).expect("loops filtered, ids in range")
        })
    })
}

fn coloring_strategy(n: usize, k: usize) -> impl Strategy<Value = Coloring> {
    prop::collection::vec(1..=k, n).prop_map(Coloring::from_colors)
}

fn graph_and_coloring(max_n: usize, k: usize) -> impl Strategy<Value = (Graph, Coloring)> {
    graph_strategy(max_n).prop_flat_map(move |g| {
        let n = g.vertex_count();
        (Just(g), coloring_strategy(n, k))
    })
}

fn brute_force_conflicts(g: &Graph, coloring: &Coloring) -> usize {
    let n = g.vertex_count();
    let mut count = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            if g.are_adjacent(i, j) && coloring.get(i) != 0 && coloring.get(i) == coloring.get(j) {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn dsatur_colors_every_vertex(g in graph_strategy(20), k in 1usize..6) {
        let coloring = color_greedy(&g, k).unwrap();
        prop_assert_eq!(coloring.len(), g.vertex_count());
        prop_assert!(coloring.is_complete(k));
    }

    #[test]
    fn dsatur_with_enough_colors_is_proper(g in graph_strategy(20)) {
        let k = g.max_degree() + 1;
        let coloring = color_greedy(&g, k).unwrap();
        prop_assert_eq!(count_conflicts(&g, &coloring), 0);
    }

    #[test]
    fn evaluator_matches_brute_force((g, coloring) in graph_and_coloring(15, 3)) {
        prop_assert_eq!(count_conflicts(&g, &coloring), brute_force_conflicts(&g, &coloring));
        let local_sum: usize = (0..g.vertex_count())
            .map(|v| local_conflicts(&g, &coloring, v, coloring.get(v)))
            .sum();
        prop_assert_eq!(local_sum, 2 * count_conflicts(&g, &coloring));
    }

    #[test]
    fn gpx_child_is_complete(
        (g, p1, p2) in graph_strategy(20).prop_flat_map(|g| {
            let n = g.vertex_count();
            (Just(g), coloring_strategy(n, 4), coloring_strategy(n, 4))
        }),
        seed in any::<u64>(),
    ) {
        let child = gpx_crossover(&p1, &p2, 4, &g, &mut create_rng(seed)).unwrap();
        prop_assert_eq!(child.len(), g.vertex_count());
        prop_assert!(child.is_complete(4));
    }

    #[test]
    fn tabu_result_is_consistent(
        (g, start) in graph_and_coloring(15, 3),
        seed in any::<u64>(),
    ) {
        let config = TabuConfig::default().with_max_iterations(50);
        let result = TabuRunner::run(&g, 3, &start, &config, &mut create_rng(seed)).unwrap();
        prop_assert!(result.coloring.is_complete(3));
        prop_assert_eq!(result.conflicts, count_conflicts(&g, &result.coloring));
        prop_assert!(result.conflicts <= count_conflicts(&g, &start));
        prop_assert!(result.iterations <= 50);
        prop_assert!(result.best_iteration <= result.iterations);
    }
}
