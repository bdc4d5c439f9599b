use server::SolveError;

/// Search parameters given on the command line. They replace the ones of the instance.
#[derive(Debug, Default, Clone)]
pub struct ParameterOverrides {
    pub max_iterations: Option<usize>,
    pub time_budget_in_seconds: Option<u64>,
    pub tabu_tenure: Option<usize>,
}

impl ParameterOverrides {
    fn apply(&self, input_data: &mut serde_json::Value) {
        let Some(instance) = input_data.as_object_mut() else {
            return; // the loader reports the malformed instance
        };
        let parameters = instance
            .entry("parameters")
            .or_insert_with(|| serde_json::json!({}));
        let Some(parameters) = parameters.as_object_mut() else {
            return;
        };
        if let Some(max_iterations) = self.max_iterations {
            parameters.insert("maxIterations".to_string(), max_iterations.into());
        }
        if let Some(time_budget) = self.time_budget_in_seconds {
            parameters.insert("timeBudgetInSeconds".to_string(), time_budget.into());
        }
        if let Some(tabu_tenure) = self.tabu_tenure {
            parameters.insert("tabuTenure".to_string(), tabu_tenure.into());
        }
    }
}

pub fn run(
    mut input_data: serde_json::Value,
    overrides: &ParameterOverrides,
) -> Result<serde_json::Value, SolveError> {
    overrides.apply(&mut input_data);
    server::solve_instance(input_data)
}

#[cfg(test)]
mod tests {
    use super::ParameterOverrides;

    #[test]
    fn overrides_replace_and_add_parameters() {
        // ARRANGE
        let mut input = serde_json::json!({
            "parameters": { "maxIterations": 15, "stagnationWindow": 3 }
        });
        let overrides = ParameterOverrides {
            max_iterations: Some(4),
            time_budget_in_seconds: None,
            tabu_tenure: Some(7),
        };

        // ACT
        overrides.apply(&mut input);

        // ASSERT
        assert_eq!(
            input["parameters"],
            serde_json::json!({ "maxIterations": 4, "stagnationWindow": 3, "tabuTenure": 7 })
        );
    }

    #[test]
    fn missing_parameters_object_is_created() {
        let mut input = serde_json::json!({ "bases": [] });
        let overrides = ParameterOverrides {
            time_budget_in_seconds: Some(10),
            ..ParameterOverrides::default()
        };

        overrides.apply(&mut input);

        assert_eq!(
            input["parameters"],
            serde_json::json!({ "timeBudgetInSeconds": 10 })
        );
    }

    #[test]
    fn run_respects_iteration_override() {
        let input: serde_json::Value =
            serde_json::from_str(include_str!("../../resources/test_instance.json")).unwrap();
        let overrides = ParameterOverrides {
            max_iterations: Some(1),
            ..ParameterOverrides::default()
        };

        let output = super::run(input, &overrides).unwrap();

        assert_eq!(output["info"]["iterations"], serde_json::json!(0));
        assert_eq!(
            output["info"]["termination"],
            serde_json::json!("iteration limit reached")
        );
    }

    #[test]
    fn zero_tabu_tenure_override_is_rejected() {
        let input: serde_json::Value =
            serde_json::from_str(include_str!("../../resources/test_instance.json")).unwrap();
        let overrides = ParameterOverrides {
            tabu_tenure: Some(0),
            ..ParameterOverrides::default()
        };

        let result = super::run(input, &overrides);

        assert!(matches!(result, Err(server::SolveError::Model(_))));
    }
}
