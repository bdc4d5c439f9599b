use crate::{EvaluatedSolution, Level, ObjectiveValue};

/// A hierarchical objective: levels are minimized lexicographically, each level is a weighted
/// sum of indicators.
pub struct Objective<S> {
    hierarchy_levels: Vec<Level<S>>,
}

impl<S> Objective<S> {
    pub fn new(hierarchy_levels: Vec<Level<S>>) -> Objective<S> {
        Objective { hierarchy_levels }
    }

    pub fn evaluate(&self, solution: S) -> EvaluatedSolution<S> {
        let objective_value = self.objective_value_of(&solution);
        EvaluatedSolution::new(solution, objective_value)
    }

    pub fn objective_value_of(&self, solution: &S) -> ObjectiveValue {
        ObjectiveValue::new(
            self.hierarchy_levels
                .iter()
                .map(|level| level.evaluate(solution))
                .collect(),
        )
    }

    /// Every indicator value of every level plus the level totals. With a single level the
    /// json is flat: `{"indicator": value, ..., "total": value}`.
    pub fn breakdown_to_json(&self, solution: &S) -> serde_json::Value {
        let levels: Vec<serde_json::Value> = self
            .hierarchy_levels
            .iter()
            .map(|level| {
                let mut map = serde_json::Map::new();
                for (name, value) in level.summand_values(solution) {
                    map.insert(name, value.to_json());
                }
                map.insert("total".to_string(), level.evaluate(solution).to_json());
                serde_json::Value::Object(map)
            })
            .collect();
        match levels.len() {
            1 => levels.into_iter().next().unwrap_or(serde_json::Value::Null),
            _ => serde_json::Value::Array(levels),
        }
    }

    pub fn to_string(&self) -> String {
        self.hierarchy_levels
            .iter()
            .map(|level| level.to_string())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
