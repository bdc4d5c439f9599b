use heuristic_framework::tabu_search::{Reversible, TabuList, TabuNeighborhood};
use solution::test_utilities::{init_test_data, TestData};
use solution::Configuration;

use super::moves::FleetMove;
use super::FleetNeighborhood;

/// B1 active, every vessel type stationed up to the capacity of B1 in every charter period:
/// V1 one purchased plus one chartered per period, V2 one purchased
fn saturated_b1(d: &TestData) -> Configuration {
    let mut configuration = Configuration::empty(&d.problem)
        .with_base_active(d.b1, true)
        .with_purchased(d.b1, d.v1, 1)
        .with_purchased(d.b1, d.v2, 1);
    for charter_period in [d.cp0, d.cp1, d.cp2] {
        configuration = configuration.with_chartered(d.b1, d.v1, charter_period, 1);
    }
    configuration
}

fn assert_within_bounds(d: &TestData, configuration: &Configuration) {
    for ((base, vessel_type), _) in configuration.purchased_iter() {
        assert!(
            configuration.peak_stationed(base, vessel_type)
                <= d.problem.capacity_of(base, vessel_type)
        );
    }
    for vessel_type in [d.v1, d.v2] {
        for charter_period in [d.cp0, d.cp1, d.cp2] {
            assert!(
                configuration.chartered_total(vessel_type, charter_period)
                    <= d.problem.available_for_charter(vessel_type, charter_period)
            );
        }
    }
}

#[test]
fn neighbors_follow_generation_order() {
    // ARRANGE
    let d = init_test_data();
    let neighborhood = FleetNeighborhood::new(d.problem.clone());
    let configuration = Configuration::empty(&d.problem).with_base_active(d.b2, true);
    let tabu_list = TabuList::new(None);

    // ACT
    let moves: Vec<FleetMove> = neighborhood
        .neighbors_of(&configuration, &tabu_list)
        .map(|(mv, _)| mv)
        .collect();

    // ASSERT
    // on an empty fleet only the adds and the base moves are admissible:
    // 4 purchased adds, 12 chartered adds, close b2, replace b2 by b1
    assert_eq!(moves.len(), 4 + 12 + 2);
    assert_eq!(
        moves[0],
        FleetMove::AddPurchased {
            base: d.b1,
            vessel_type: d.v1
        }
    );
    assert_eq!(
        moves[4],
        FleetMove::AddChartered {
            base: d.b1,
            vessel_type: d.v1,
            charter_period: d.cp0
        }
    );
    assert_eq!(moves[16], FleetMove::CloseBase { base: d.b2 });
    assert_eq!(
        moves[17],
        FleetMove::ReplaceBase {
            from: d.b2,
            to: d.b1
        }
    );
}

#[test]
fn every_neighbor_respects_capacity_and_market() {
    let d = init_test_data();
    let neighborhood = FleetNeighborhood::new(d.problem.clone());
    let tabu_list = TabuList::new(None);
    let start = saturated_b1(&d);

    assert_within_bounds(&d, &start);
    let neighbors: Vec<_> = neighborhood.neighbors_of(&start, &tabu_list).collect();

    assert!(!neighbors.is_empty());
    for (_, neighbor) in neighbors.iter() {
        assert_within_bounds(&d, neighbor);
    }
    // second level
    for (_, neighbor) in neighbors.iter() {
        for (_, second) in neighborhood.neighbors_of(neighbor, &tabu_list) {
            assert_within_bounds(&d, &second);
        }
    }
}

#[test]
fn tabu_moves_are_skipped() {
    let d = init_test_data();
    let neighborhood = FleetNeighborhood::new(d.problem.clone());
    let configuration = Configuration::empty(&d.problem).with_base_active(d.b2, true);
    let replace = FleetMove::ReplaceBase {
        from: d.b2,
        to: d.b1,
    };
    let mut tabu_list = TabuList::new(None);
    tabu_list.insert(replace);

    let moves: Vec<FleetMove> = neighborhood
        .neighbors_of(&configuration, &tabu_list)
        .map(|(mv, _)| mv)
        .collect();

    assert!(!moves.contains(&replace));
    assert_eq!(moves.len(), 17);
}

#[test]
fn purchased_and_chartered_vessels_share_the_capacity() {
    // ARRANGE
    let d = init_test_data();
    let neighborhood = FleetNeighborhood::new(d.problem.clone());
    let tabu_list = TabuList::new(None);
    // B2 holds a single vessel of V1, taken by the purchased one
    let configuration = Configuration::empty(&d.problem)
        .with_base_active(d.b2, true)
        .with_purchased(d.b2, d.v1, 1)
        .with_chartered(d.b2, d.v2, d.cp0, 1);
    let blocked = [
        FleetMove::AddChartered {
            base: d.b2,
            vessel_type: d.v1,
            charter_period: d.cp0,
        },
        FleetMove::SwitchCharteredType {
            base: d.b2,
            charter_period: d.cp0,
            from: d.v2,
            to: d.v1,
        },
        FleetMove::AddPurchased {
            base: d.b2,
            vessel_type: d.v1,
        },
    ];

    // ACT
    let moves: Vec<FleetMove> = neighborhood
        .neighbors_of(&configuration, &tabu_list)
        .map(|(mv, _)| mv)
        .collect();

    // ASSERT
    for mv in blocked {
        assert!(mv.apply(&configuration, &d.problem).is_err());
        assert!(!moves.contains(&mv));
    }
    // V2 has room for a purchased vessel next to the chartered one
    assert!(moves.contains(&FleetMove::AddPurchased {
        base: d.b2,
        vessel_type: d.v2
    }));
}

#[test]
fn chartered_moves_into_a_full_cell_are_rejected() {
    let d = init_test_data();
    // B1: V1 one purchased and one chartered in cp0 (capacity 2), one more chartered in cp1
    let at_b1 = Configuration::empty(&d.problem)
        .with_base_active(d.b1, true)
        .with_purchased(d.b1, d.v1, 1)
        .with_chartered(d.b1, d.v1, d.cp0, 1)
        .with_chartered(d.b1, d.v1, d.cp1, 1);
    let with_b2 = at_b1
        .with_base_active(d.b2, true)
        .with_chartered(d.b2, d.v1, d.cp1, 1);

    let switch_period = FleetMove::SwitchCharteredPeriod {
        base: d.b1,
        vessel_type: d.v1,
        from: d.cp1,
        to: d.cp0,
    };
    let switch_base = FleetMove::SwitchCharteredBase {
        vessel_type: d.v1,
        charter_period: d.cp1,
        from: d.b2,
        to: d.b1,
    };
    let switch_purchased_base = FleetMove::SwitchPurchasedBase {
        vessel_type: d.v1,
        from: d.b1,
        to: d.b2,
    };

    assert!(switch_period.apply(&at_b1, &d.problem).is_err());
    assert!(switch_base.apply(&with_b2, &d.problem).is_err());
    assert!(switch_purchased_base.apply(&with_b2, &d.problem).is_err());
    // without the purchased vessel at B1 both chartered moves fit
    let chartered_only = with_b2.with_purchased(d.b1, d.v1, 0);
    assert!(switch_period.apply(&chartered_only, &d.problem).is_ok());
    assert!(switch_base.apply(&chartered_only, &d.problem).is_ok());
}

#[test]
fn replace_base_needs_room_at_new_base() {
    // ARRANGE
    let d = init_test_data();
    let neighborhood = FleetNeighborhood::new(d.problem.clone());
    let tabu_list = TabuList::new(None);
    // B1 can only hold one vessel of V2
    let configuration = Configuration::empty(&d.problem)
        .with_base_active(d.b2, true)
        .with_purchased(d.b2, d.v2, 2);

    // ACT
    let moves: Vec<FleetMove> = neighborhood
        .neighbors_of(&configuration, &tabu_list)
        .map(|(mv, _)| mv)
        .collect();

    // ASSERT
    assert!(!moves
        .iter()
        .any(|mv| matches!(mv, FleetMove::ReplaceBase { .. })));
    assert!(moves.contains(&FleetMove::CloseBase { base: d.b2 }));
}

#[test]
fn reverse_move_undoes_move() {
    let d = init_test_data();
    let neighborhood = FleetNeighborhood::new(d.problem.clone());
    let tabu_list = TabuList::new(None);
    let start = Configuration::empty(&d.problem)
        .with_base_active(d.b1, true)
        .with_purchased(d.b1, d.v1, 1)
        .with_chartered(d.b1, d.v2, d.cp1, 1);

    for (mv, neighbor) in neighborhood.neighbors_of(&start, &tabu_list) {
        if matches!(mv, FleetMove::CloseBase { .. }) {
            // reopening does not bring the vessels back
            continue;
        }
        assert_eq!(mv.reverse().apply(&neighbor, &d.problem), Ok(start.clone()));
        assert_eq!(mv.reverse().reverse(), mv);
    }
}

#[test]
fn chartered_add_is_limited_by_market() {
    let d = init_test_data();
    // two V1 chartered in cp0 at B1 exhaust the market of V1 in cp0
    let configuration = Configuration::empty(&d.problem)
        .with_base_active(d.b1, true)
        .with_chartered(d.b1, d.v1, d.cp0, 2);
    let add_at_b2 = FleetMove::AddChartered {
        base: d.b2,
        vessel_type: d.v1,
        charter_period: d.cp0,
    };
    let switch_to_b2 = FleetMove::SwitchCharteredBase {
        vessel_type: d.v1,
        charter_period: d.cp0,
        from: d.b1,
        to: d.b2,
    };

    assert!(add_at_b2.apply(&configuration, &d.problem).is_err());
    assert!(switch_to_b2.apply(&configuration, &d.problem).is_ok());
    assert!(FleetMove::ReopenBase { base: d.b1 }
        .apply(&configuration, &d.problem)
        .is_err());
}

#[test]
fn move_labels() {
    let d = init_test_data();
    let mv = FleetMove::SwitchCharteredPeriod {
        base: d.b1,
        vessel_type: d.v2,
        from: d.cp0,
        to: d.cp2,
    };
    assert_eq!(mv.to_string(), "switch chartered vt1 period at base0: cp0 -> cp2");
    assert_eq!(
        FleetMove::CloseBase { base: d.b2 }.reverse(),
        FleetMove::ReopenBase { base: d.b2 }
    );
}
