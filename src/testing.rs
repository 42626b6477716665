/// Every `TraversalState` has to behave identically apart from its cost profile and the
/// parent reported for vertices without one. This macro generates the shared test suite.
macro_rules! test_traversal_state {
    ($env:ident, $state:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::algo::*;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a state that was informed about `n` vertices
            fn fresh(n: NumNodes) -> $state {
                let mut state = <$state>::default();
                for _ in 0..n {
                    state.on_vertex_created();
                }
                state
            }

            #[test]
            fn untouched_is_infinite() {
                let state = fresh(50);
                for u in 0..50 {
                    assert_eq!(state.distance(u), INFINITE_DISTANCE);
                }
                assert_eq!(state.touched(), 0);
            }

            #[test]
            fn set_and_get() {
                let mut state = fresh(10);

                state.set_distance(3, 0);
                state.set_distance(7, 2);
                state.set_parent(7, 3);
                state.set_distance(7, 1);

                assert_eq!(state.distance(3), 0);
                assert_eq!(state.distance(7), 1);
                assert_eq!(state.parent(7), 3);
                assert_eq!(state.distance(5), INFINITE_DISTANCE);
                assert!(state.touched() >= 2);
            }

            #[test]
            fn reset_forgets_everything() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);
                let n = 100;
                let mut state = fresh(n);

                for _ in 0..10 {
                    let touched = (0..20).map(|_| rng.random_range(0..n)).collect_vec();
                    for (i, &u) in touched.iter().enumerate() {
                        state.set_distance(u, i as Distance);
                        state.set_parent(u, touched[0]);
                    }

                    state.reset();

                    assert_eq!(state.touched(), 0);
                    for u in 0..n {
                        assert_eq!(state.distance(u), INFINITE_DISTANCE);
                    }
                }
            }

            #[test]
            fn find_path() {
                let mut state = fresh(6);

                // 4 -> 0 -> 5 -> 2
                state.set_distance(4, 0);
                for (i, (p, u)) in [4, 0, 5, 2].into_iter().tuple_windows().enumerate() {
                    state.set_distance(u, i as Distance + 1);
                    state.set_parent(u, p);
                }

                let path = state.find_path(4, 2);
                assert_eq!(path.length, 3);
                assert_eq!(path.vertices, vec![4, 0, 5, 2]);

                assert_eq!(state.find_path(4, 0).vertices, vec![4, 0]);
                assert_eq!(state.find_path(4, 4), Path::trivial(4));
            }

            #[test]
            fn find_long_path() {
                let n = 200_000;
                let mut state = fresh(n);

                state.set_distance(0, 0);
                for u in 1..n {
                    state.set_distance(u, u);
                    state.set_parent(u, u - 1);
                }

                let path = state.find_path(0, n - 1);
                assert_eq!(path.length, n - 1);
                assert!(path.vertices.iter().copied().eq(0..n));
            }

            #[test]
            fn state_is_reusable() {
                let mut state = fresh(4);

                state.set_distance(0, 0);
                state.set_distance(1, 1);
                state.set_parent(1, 0);
                assert_eq!(state.find_path(0, 1).vertices, vec![0, 1]);
                state.reset();

                state.set_distance(3, 0);
                state.set_distance(1, 1);
                state.set_parent(1, 3);
                assert_eq!(state.distance(0), INFINITE_DISTANCE);
                assert_eq!(state.find_path(3, 1).vertices, vec![3, 1]);
            }
        }
    };
}

pub(crate) use test_traversal_state;
