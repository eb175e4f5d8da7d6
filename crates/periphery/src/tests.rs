//! Property tests for insertion invariants across random command sequences.

use proptest::prelude::*;

use crate::prelude::*;

/// Map raw picks onto two distinct boundary positions.
fn pick(g: &GraphStore, a: usize, b: usize) -> (VertexId, VertexId) {
    let boundary = g.periphery();
    let n = boundary.len();
    let i = a % n;
    let j = (i + 1 + b % (n - 1)) % n;
    (boundary[i], boundary[j])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn insertion_counts_follow_arc_length(steps in prop::collection::vec((0usize..1000, 0usize..1000), 1..60)) {
        let mut g = GraphStore::new();
        g.start_basic_graph();
        for (a, b) in steps {
            let (vp, vq) = pick(&g, a, b);
            let (v0, e0, p0, next) = (g.vertex_count(), g.edge_count(), g.periphery_len(), g.next_id());
            let ins = g.insert_on_arc(vp, vq).unwrap();
            let k = ins.arc.len();
            prop_assert!(k >= 2);
            prop_assert_eq!(ins.id, next);
            prop_assert_eq!(g.vertex_count(), v0 + 1);
            prop_assert_eq!(g.edge_count(), e0 + k);
            prop_assert_eq!(g.periphery_len() as isize, p0 as isize + 1 - (k as isize - 2));
            prop_assert_eq!(ins.arc.first().copied(), Some(vp));
            prop_assert_eq!(ins.arc.last().copied(), Some(vq));

            let boundary = g.periphery();
            let at = boundary.iter().position(|&v| v == vp).unwrap();
            prop_assert_eq!(boundary[(at + 1) % boundary.len()], ins.id);
            prop_assert!(boundary.len() >= 3);
            prop_assert!(boundary.len() <= g.vertex_count());
            prop_assert!(g.validate().is_empty());
        }
    }

    #[test]
    fn failed_commands_leave_store_unchanged(seed in any::<u64>(), id in 0usize..40) {
        use rand::{rngs::StdRng, SeedableRng};
        let mut g = GraphStore::new();
        let mut rng = StdRng::seed_from_u64(seed);
        g.generate(20, &mut rng).unwrap();
        let (periphery, edges) = (g.periphery(), g.edge_count());
        let v = VertexId(id);
        prop_assert!(
            matches!(g.insert_on_arc(v, v), Err(GraphError::InvalidSelection { .. })),
            "same-vertex insertion must fail"
        );
        if !g.on_periphery(v) {
            let other = periphery[0];
            prop_assert!(g.insert_on_arc(v, other).is_err());
            prop_assert!(g.insert_on_arc(other, v).is_err());
        }
        let _ = g.set_color(periphery[0], (id % 8) as u8);
        prop_assert_eq!(g.periphery(), periphery);
        prop_assert_eq!(g.edge_count(), edges);
        prop_assert_eq!(g.vertex_count(), 20);
        prop_assert!(g.vertices().all(|v| (1..=4).contains(&v.color.get())));
    }
}
