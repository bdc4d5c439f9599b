use std::{fs::File, io::Read, sync::Arc};

use model::{
    base_types::{BaseIdx, CharterPeriodIdx, VesselTypeIdx},
    config::Config,
    json_serialisation::load_fleet_problem_from_json,
    FleetProblem,
};

/// The instance of `resources/test_instance.json`: bases B1 and B2, vessel types V1 and V2, three
/// charter periods of one day each.
pub struct TestData {
    pub problem: Arc<FleetProblem>,
    pub config: Arc<Config>,
    pub b1: BaseIdx,
    pub b2: BaseIdx,
    pub v1: VesselTypeIdx,
    pub v2: VesselTypeIdx,
    pub cp0: CharterPeriodIdx,
    pub cp1: CharterPeriodIdx,
    pub cp2: CharterPeriodIdx,
}

pub fn init_test_data() -> TestData {
    // load file from json
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../resources/test_instance.json");

    let mut file = File::open(path).unwrap();
    let mut input_data = String::new();
    file.read_to_string(&mut input_data).unwrap();
    let input_data: serde_json::Value = serde_json::from_str(&input_data).unwrap();
    let (problem, config) = load_fleet_problem_from_json(input_data).unwrap();

    TestData {
        problem,
        config,
        b1: BaseIdx::from(0),
        b2: BaseIdx::from(1),
        v1: VesselTypeIdx::from(0),
        v2: VesselTypeIdx::from(1),
        cp0: CharterPeriodIdx::from(0),
        cp1: CharterPeriodIdx::from(1),
        cp2: CharterPeriodIdx::from(2),
    }
}
