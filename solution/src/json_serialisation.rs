use model::FleetProblem;
use serde_json::{json, Map, Value};

use crate::Configuration;

/// Configuration in terms of the ids of the input:
/// `{"baseActive": {base: bool}, "purchased": {base: {type: n}},
///   "chartered": {base: {type: [n per charter period]}}, "encoded": [...]}`
pub fn configuration_to_json(configuration: &Configuration, problem: &FleetProblem) -> Value {
    let mut base_active = Map::new();
    let mut purchased = Map::new();
    let mut chartered = Map::new();
    for base in problem.bases() {
        let base_id = problem.base(base).id().to_string();
        base_active.insert(base_id.clone(), json!(configuration.is_active(base)));

        let mut purchased_at_base = Map::new();
        let mut chartered_at_base = Map::new();
        for vessel_type in problem.vessel_types() {
            let type_id = problem.vessel_type(vessel_type).id().to_string();
            purchased_at_base.insert(
                type_id.clone(),
                json!(configuration.purchased(base, vessel_type)),
            );
            let per_period: Vec<_> = problem
                .charter_periods()
                .map(|cp| configuration.chartered(base, vessel_type, cp))
                .collect();
            chartered_at_base.insert(type_id, json!(per_period));
        }
        purchased.insert(base_id.clone(), Value::Object(purchased_at_base));
        chartered.insert(base_id, Value::Object(chartered_at_base));
    }
    json!({
        "baseActive": base_active,
        "purchased": purchased,
        "chartered": chartered,
        "encoded": configuration.encode(),
    })
}
