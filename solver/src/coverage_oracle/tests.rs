use solution::test_utilities::init_test_data;
use solution::Configuration;

use super::{CoverageOracle, Rejection};
use crate::oracle::{Oracle, Outcome, SolverStatus};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn one_purchased_vessel_covers_all_demand() {
    // ARRANGE
    let d = init_test_data();
    let mut oracle = CoverageOracle::new(d.problem.clone());
    // a V1 vessel at B1 works 10h - 2 * 20km / 40km/h = 9h per day
    let configuration = Configuration::empty(&d.problem)
        .with_base_active(d.b1, true)
        .with_purchased(d.b1, d.v1, 1);

    // ACT
    let outcome = oracle.evaluate(&configuration);

    // ASSERT
    // base 100 + purchase 50 + 18h * 2 operations
    assert_eq!(outcome, Outcome::Optimal(186.0));
    let assignment = oracle.variable_assignment();
    assert_eq!(assignment["status"], "optimal");
    assert_eq!(assignment["costs"]["bases"], serde_json::json!(100.0));
    assert_eq!(assignment["costs"]["purchase"], serde_json::json!(50.0));
    assert_eq!(assignment["costs"]["operations"], serde_json::json!(36.0));
    assert_eq!(assignment["costs"]["total"], serde_json::json!(186.0));
    assert_eq!(assignment["days"][2]["dispatched"]["B1/V1"], serde_json::json!(8.0));
    assert_eq!(assignment["days"][2]["backlog"], serde_json::json!(0.0));
}

#[test]
fn unserved_demand_costs_downtime_and_penalty() {
    let d = init_test_data();
    let mut oracle = CoverageOracle::new(d.problem.clone());
    let configuration = Configuration::empty(&d.problem).with_base_active(d.b1, true);

    let outcome = oracle.evaluate(&configuration);

    // backlog 6, 10, 18: downtime 5 * 34, penalty 20 * 18
    assert_eq!(outcome, Outcome::Optimal(100.0 + 170.0 + 360.0));
}

#[test]
fn chartered_vessel_only_works_in_its_charter_period() {
    // ARRANGE
    let d = init_test_data();
    let mut oracle = CoverageOracle::new(d.problem.clone());
    // a V2 vessel at B2 works 12h - 2 * 40km / 50km/h = 10.4h per day
    let configuration = Configuration::empty(&d.problem)
        .with_base_active(d.b2, true)
        .with_chartered(d.b2, d.v2, d.cp2, 1);

    // ACT
    let cost = oracle.evaluate(&configuration).cost();

    // ASSERT
    // base 80, charter 30, operations 31.2, downtime 5 * (6 + 10 + 7.6), penalty 20 * 7.6
    assert_close(cost, 80.0 + 30.0 + 31.2 + 118.0 + 152.0);
    let assignment = oracle.variable_assignment();
    assert_eq!(assignment["days"][0]["dispatched"], serde_json::json!({}));
    assert_close(assignment["days"][2]["backlog"].as_f64().unwrap(), 7.6);
}

#[test]
fn cheapest_vessels_are_dispatched_first() {
    let d = init_test_data();
    let mut oracle = CoverageOracle::new(d.problem.clone());
    let configuration = Configuration::empty(&d.problem)
        .with_base_active(d.b1, true)
        .with_purchased(d.b1, d.v2, 1)
        .with_purchased(d.b1, d.v1, 1);

    oracle.evaluate(&configuration);
    let assignment = oracle.variable_assignment();

    // day 0: 6h, all by V1 (2 per hour) although V2 (3 per hour) could do it as well
    assert_eq!(
        assignment["days"][0]["dispatched"],
        serde_json::json!({ "B1/V1": 6.0 })
    );
    // day 2: 8h, all by V1
    assert_eq!(
        assignment["days"][2]["dispatched"],
        serde_json::json!({ "B1/V1": 8.0 })
    );
}

#[test]
fn structurally_infeasible_configurations_are_rejected() {
    // ARRANGE
    let d = init_test_data();
    let mut oracle = CoverageOracle::new(d.problem.clone());
    let empty = Configuration::empty(&d.problem);
    let cases = [
        (empty.clone(), Rejection::NoActiveBase),
        (
            empty
                .with_base_active(d.b1, true)
                .with_purchased(d.b2, d.v1, 1),
            Rejection::VesselsAtInactiveBase(d.b2),
        ),
        (
            empty
                .with_base_active(d.b2, true)
                .with_purchased(d.b2, d.v1, 2),
            Rejection::CapacityExceeded {
                base: d.b2,
                vessel_type: d.v1,
                count: 2,
            },
        ),
        (
            empty
                .with_base_active(d.b2, true)
                .with_purchased(d.b2, d.v1, 1)
                .with_chartered(d.b2, d.v1, d.cp1, 1),
            Rejection::CapacityExceeded {
                base: d.b2,
                vessel_type: d.v1,
                count: 2,
            },
        ),
        (
            empty
                .with_base_active(d.b1, true)
                .with_base_active(d.b2, true)
                .with_chartered(d.b1, d.v1, d.cp0, 2)
                .with_chartered(d.b2, d.v1, d.cp0, 1),
            Rejection::MarketExceeded {
                vessel_type: d.v1,
                charter_period: d.cp0,
                count: 3,
            },
        ),
    ];

    for (configuration, rejection) in cases {
        // ACT
        oracle.set_bounds(&configuration);
        let status = oracle.solve();

        // ASSERT
        assert_eq!(status, SolverStatus::Infeasible);
        assert_eq!(
            oracle.variable_assignment()["reason"],
            serde_json::json!(rejection.to_string())
        );
        assert_eq!(oracle.evaluate(&configuration), Outcome::Infeasible);
    }
}

#[test]
fn nothing_solved_yet() {
    let d = init_test_data();
    let mut oracle = CoverageOracle::new(d.problem.clone());

    assert_eq!(oracle.variable_assignment(), serde_json::Value::Null);
    // solve without pinned configuration is an oracle failure, normalized to infeasible
    assert_eq!(oracle.solve(), SolverStatus::NumericalError);
}

#[test]
fn evaluation_is_idempotent() {
    let d = init_test_data();
    let mut oracle = CoverageOracle::new(d.problem.clone());
    let configuration = Configuration::empty(&d.problem)
        .with_base_active(d.b2, true)
        .with_purchased(d.b2, d.v2, 1)
        .with_chartered(d.b2, d.v1, d.cp1, 1);

    let first = oracle.evaluate(&configuration);
    let first_assignment = oracle.variable_assignment();
    oracle.evaluate(&Configuration::empty(&d.problem));
    let second = oracle.evaluate(&configuration);

    assert_eq!(first, second);
    assert_eq!(first_assignment, oracle.variable_assignment());
}
