//! Scenario and property tests for line ordering and section insertion.

use super::*;
use crate::domain::{Distance, ErrorKind, StationName};

fn st(id: u64) -> Station {
    Station::new(StationId(id), StationName::parse(&format!("S{id}")).unwrap())
}

fn section(up: u64, down: u64, distance: u32) -> Section {
    Section::new(st(up), st(down), Distance::new(distance).unwrap()).unwrap()
}

fn ids(stations: &[Station]) -> Vec<u64> {
    stations.iter().map(|s| s.id().0).collect()
}

fn line(sections: &[(u64, u64, u32)]) -> LineTopology {
    let mut topology = LineTopology::new();
    let mut iter = sections.iter();
    if let Some(&(up, down, d)) = iter.next() {
        topology.initialize(section(up, down, d)).unwrap();
    }
    for &(up, down, d) in iter {
        topology.add_section(section(up, down, d)).unwrap();
    }
    topology
}

/// Build a topology directly from sections, bypassing validation.
fn raw(sections: &[(u64, u64, u32)]) -> LineTopology {
    LineTopology {
        sections: sections
            .iter()
            .map(|&(up, down, d)| section(up, down, d))
            .collect(),
    }
}

fn distance_between(topology: &LineTopology, up: u64, down: u64) -> Option<u32> {
    topology
        .sections()
        .iter()
        .find(|s| s.up().id().0 == up && s.down().id().0 == down)
        .map(|s| s.distance().get())
}

// ============================================================================
// Initialization
// ============================================================================

#[test]
fn initialized_line_has_two_stations() {
    let topology = line(&[(1, 2, 10)]);

    assert_eq!(ids(&topology.ordered_stations().unwrap()), vec![1, 2]);
    assert_eq!(topology.len(), 1);
}

#[test]
fn initialize_twice_fails() {
    let mut topology = line(&[(1, 2, 10)]);

    let err = topology.initialize(section(3, 4, 5)).unwrap_err();
    assert_eq!(err, TopologyError::AlreadyInitialized(1));
    assert_eq!(err.kind(), ErrorKind::IllegalState);
    assert_eq!(topology, line(&[(1, 2, 10)]));
}

#[test]
fn empty_line_has_no_order() {
    let topology = LineTopology::new();

    assert!(topology.is_empty());
    let err = topology.ordered_stations().unwrap_err();
    assert_eq!(err, TopologyError::NoUniqueHead(0));
    assert_eq!(err.kind(), ErrorKind::IllegalState);
}

#[test]
fn add_to_empty_line_fails() {
    let mut topology = LineTopology::new();

    let err = topology.add_section(section(1, 2, 10)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSection);
    assert!(topology.is_empty());
}

// ============================================================================
// Extension at either end
// ============================================================================

#[test]
fn append_after_tail() {
    let topology = line(&[(1, 2, 10), (2, 3, 5)]);

    assert_eq!(ids(&topology.ordered_stations().unwrap()), vec![1, 2, 3]);
    assert_eq!(distance_between(&topology, 1, 2), Some(10));
    assert_eq!(distance_between(&topology, 2, 3), Some(5));
}

#[test]
fn prepend_before_head() {
    let topology = line(&[(1, 2, 10), (0, 1, 5)]);

    assert_eq!(ids(&topology.ordered_stations().unwrap()), vec![0, 1, 2]);
    assert_eq!(distance_between(&topology, 1, 2), Some(10));
}

#[test]
fn extension_ignores_distance_limit() {
    let topology = line(&[(1, 2, 10), (2, 3, 500)]);

    assert_eq!(ids(&topology.ordered_stations().unwrap()), vec![1, 2, 3]);
}

#[test]
fn attach_after_tail_via_shared_station() {
    // B is the tail, so B -> D simply continues the line.
    let topology = line(&[(1, 2, 10), (2, 4, 3)]);

    assert_eq!(ids(&topology.ordered_stations().unwrap()), vec![1, 2, 4]);
    assert_eq!(distance_between(&topology, 1, 2), Some(10));
}

// ============================================================================
// Splitting an existing section
// ============================================================================

#[test]
fn split_from_shared_up_station() {
    // A -> B -> C, then B -> D lands between B and C.
    let topology = line(&[(1, 2, 10), (2, 3, 10), (2, 4, 4)]);

    assert_eq!(ids(&topology.ordered_stations().unwrap()), vec![1, 2, 4, 3]);
    assert_eq!(distance_between(&topology, 2, 4), Some(4));
    assert_eq!(distance_between(&topology, 4, 3), Some(6));
    assert_eq!(distance_between(&topology, 2, 3), None);
    assert_eq!(topology.len(), 3);
}

#[test]
fn split_from_shared_down_station() {
    // A -> B -> C, then D -> C lands between B and C.
    let topology = line(&[(1, 2, 10), (2, 3, 10), (4, 3, 3)]);

    assert_eq!(ids(&topology.ordered_stations().unwrap()), vec![1, 2, 4, 3]);
    assert_eq!(distance_between(&topology, 2, 4), Some(7));
    assert_eq!(distance_between(&topology, 4, 3), Some(3));
}

#[test]
fn split_first_section_from_head() {
    let topology = line(&[(1, 2, 10), (1, 5, 2)]);

    assert_eq!(ids(&topology.ordered_stations().unwrap()), vec![1, 5, 2]);
    assert_eq!(distance_between(&topology, 5, 2), Some(8));
}

#[test]
fn split_with_equal_distance_fails() {
    let mut topology = line(&[(1, 2, 10), (2, 3, 10)]);
    let before = topology.clone();

    let err = topology.add_section(section(2, 4, 10)).unwrap_err();
    assert_eq!(
        err,
        TopologyError::DistanceTooLong {
            new: Distance::new(10).unwrap(),
            existing: Distance::new(10).unwrap(),
        }
    );
    assert_eq!(err.kind(), ErrorKind::InvalidSection);
    assert_eq!(topology, before);
}

#[test]
fn split_with_longer_distance_fails() {
    let mut topology = line(&[(1, 2, 10)]);
    let before = topology.clone();

    assert!(topology.add_section(section(3, 2, 11)).is_err());
    assert_eq!(topology, before);
}

// ============================================================================
// Rejected sections
// ============================================================================

#[test]
fn both_stations_registered_fails() {
    let mut topology = line(&[(1, 2, 10), (2, 3, 10)]);
    let before = topology.clone();

    let err = topology.add_section(section(1, 3, 5)).unwrap_err();
    assert_eq!(err, TopologyError::BothStationsRegistered(StationId(1), StationId(3)));
    assert_eq!(topology, before);

    // Reversing an existing section is rejected the same way
    let err = topology.add_section(section(2, 1, 5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSection);
    assert_eq!(topology, before);
}

#[test]
fn disconnected_section_fails() {
    let mut topology = line(&[(1, 2, 10)]);
    let before = topology.clone();

    let err = topology.add_section(section(8, 9, 5)).unwrap_err();
    assert_eq!(err, TopologyError::NoStationRegistered(StationId(8), StationId(9)));
    assert_eq!(topology, before);
}

#[test]
fn malformed_line_rejects_additions() {
    // Station 2 has two incoming sections, so the line has two heads.
    let mut topology = raw(&[(1, 2, 10), (3, 2, 10), (3, 4, 10)]);
    let before = topology.clone();

    let err = topology.add_section(section(2, 9, 1)).unwrap_err();
    assert_eq!(err, TopologyError::NoUniqueHead(2));
    assert_eq!(topology, before);
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn order_ignores_storage_order() {
    let topology = raw(&[(3, 4, 1), (1, 2, 1), (2, 3, 1)]);

    assert_eq!(ids(&topology.ordered_stations().unwrap()), vec![1, 2, 3, 4]);
    assert_eq!(topology.head().unwrap().id(), StationId(1));
    assert_eq!(topology.tail().unwrap().id(), StationId(4));
}

#[test]
fn ordering_is_idempotent() {
    let topology = line(&[(1, 2, 10), (2, 3, 10), (2, 4, 4), (0, 1, 3)]);

    let first = topology.ordered_stations().unwrap();
    let second = topology.ordered_stations().unwrap();
    assert_eq!(first, second);
    assert_eq!(topology.len(), 4);
}

#[test]
fn cycle_has_no_head() {
    let topology = raw(&[(1, 2, 1), (2, 3, 1), (3, 1, 1)]);

    assert_eq!(topology.ordered_stations().unwrap_err(), TopologyError::NoUniqueHead(0));
}

#[test]
fn two_heads_rejected() {
    let topology = raw(&[(1, 2, 1), (3, 4, 1)]);

    assert_eq!(topology.ordered_stations().unwrap_err(), TopologyError::NoUniqueHead(2));
}

#[test]
fn two_tails_rejected() {
    let topology = raw(&[(1, 2, 1), (1, 3, 1)]);

    let err = topology.tail().unwrap_err();
    assert_eq!(err, TopologyError::NoUniqueTail(2));
    assert_eq!(err.kind(), ErrorKind::IllegalState);
}

#[test]
fn empty_line_has_no_tail() {
    assert_eq!(LineTopology::new().tail().unwrap_err(), TopologyError::NoUniqueTail(0));
}

#[test]
fn fork_rejected() {
    let topology = raw(&[(1, 2, 1), (1, 3, 1)]);

    assert_eq!(topology.ordered_stations().unwrap_err(), TopologyError::Branching(StationId(1)));
}

#[test]
fn merge_rejected() {
    let topology = raw(&[(1, 2, 1), (2, 3, 1), (4, 2, 1), (0, 4, 1)]);

    let err = topology.ordered_stations().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IllegalState);
}

#[test]
fn detached_loop_breaks_chain() {
    // 1 -> 2 is a valid head segment, 3 -> 4 -> 3 is a loop off to the side.
    let topology = raw(&[(1, 2, 1), (3, 4, 1), (4, 3, 1)]);

    assert_eq!(topology.ordered_stations().unwrap_err(), TopologyError::BrokenChain(StationId(2)));
}

#[test]
fn contains_checks_both_endpoints() {
    let topology = line(&[(1, 2, 10), (2, 3, 10)]);

    assert!(topology.contains(&st(1)));
    assert!(topology.contains(&st(3)));
    assert!(!topology.contains(&st(4)));
}

// ============================================================================
// Property tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use proptest::sample::Index;

    const EXTEND_DISTANCE: u32 = 1_000;

    #[derive(Debug, Clone)]
    enum Op {
        Append,
        Prepend,
        SplitDown(Index),
        SplitUp(Index),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Append),
            Just(Op::Prepend),
            any::<Index>().prop_map(Op::SplitDown),
            any::<Index>().prop_map(Op::SplitUp),
        ]
    }

    /// Line model: stations in order and the gap after each one.
    struct Model {
        stations: Vec<u64>,
        gaps: Vec<u32>,
    }

    impl Model {
        /// Apply `op` to both the model and the topology, using station `new`.
        fn apply(&mut self, op: &Op, new: u64, topology: &mut LineTopology) {
            match op {
                Op::Append => {
                    let tail = *self.stations.last().unwrap();
                    topology.add_section(section(tail, new, EXTEND_DISTANCE)).unwrap();
                    self.stations.push(new);
                    self.gaps.push(EXTEND_DISTANCE);
                }
                Op::Prepend => {
                    let head = self.stations[0];
                    topology.add_section(section(new, head, EXTEND_DISTANCE)).unwrap();
                    self.stations.insert(0, new);
                    self.gaps.insert(0, EXTEND_DISTANCE);
                }
                Op::SplitDown(idx) | Op::SplitUp(idx) => {
                    let k = idx.index(self.gaps.len());
                    let gap = self.gaps[k];
                    if gap < 2 {
                        return;
                    }
                    let part = gap / 2;
                    if matches!(op, Op::SplitDown(_)) {
                        let up = self.stations[k];
                        topology.add_section(section(up, new, part)).unwrap();
                        self.gaps[k] = part;
                        self.gaps.insert(k + 1, gap - part);
                    } else {
                        let down = self.stations[k + 1];
                        topology.add_section(section(new, down, part)).unwrap();
                        self.gaps[k] = gap - part;
                        self.gaps.insert(k + 1, part);
                    }
                    self.stations.insert(k + 1, new);
                }
            }
        }
    }

    proptest! {
        /// Property: any sequence of valid insertions matches the model order.
        #[test]
        fn order_matches_model(ops in prop::collection::vec(op(), 0..30)) {
            let mut topology = line(&[(0, 1, EXTEND_DISTANCE)]);
            let mut model = Model { stations: vec![0, 1], gaps: vec![EXTEND_DISTANCE] };

            for (i, op) in ops.iter().enumerate() {
                model.apply(op, 100 + i as u64, &mut topology);
            }

            let ordered = topology.ordered_stations().unwrap();
            prop_assert_eq!(ids(&ordered), model.stations.clone());
            prop_assert_eq!(ordered.len(), topology.len() + 1);

            for (k, gap) in model.gaps.iter().enumerate() {
                prop_assert_eq!(
                    distance_between(&topology, model.stations[k], model.stations[k + 1]),
                    Some(*gap)
                );
            }
        }

        /// Property: splits never change the end-to-end distance.
        #[test]
        fn splits_preserve_total_distance(
            splits in prop::collection::vec((any::<bool>(), any::<Index>()), 0..20),
        ) {
            let mut topology = line(&[(0, 1, 4_096), (1, 2, 4_096)]);
            let mut model = Model { stations: vec![0, 1, 2], gaps: vec![4_096, 4_096] };

            for (i, (down, idx)) in splits.iter().enumerate() {
                let op = if *down { Op::SplitDown(idx.clone()) } else { Op::SplitUp(idx.clone()) };
                model.apply(&op, 100 + i as u64, &mut topology);
            }

            let total: u32 = topology.sections().iter().map(|s| s.distance().get()).sum();
            prop_assert_eq!(total, 8_192);
        }

        /// Property: rejected sections leave the topology untouched.
        #[test]
        fn rejection_is_side_effect_free(
            len in 1u64..10,
            a in 0u64..20,
            b in 0u64..20,
            d in 1u32..2_000,
        ) {
            prop_assume!(a != b);
            let sections: Vec<(u64, u64, u32)> = (0..len).map(|i| (i, i + 1, 1_000)).collect();
            let mut topology = line(&sections);
            let before = topology.clone();

            if topology.add_section(section(a, b, d)).is_err() {
                prop_assert_eq!(&topology, &before);
            } else {
                prop_assert_eq!(topology.len(), before.len() + 1);
                let ordered = topology.ordered_stations().unwrap();
                let unique: HashSet<u64> = ids(&ordered).into_iter().collect();
                prop_assert_eq!(unique.len(), ordered.len());
            }
        }
    }
}
