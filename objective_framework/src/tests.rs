use crate::{BaseValue, Coefficient, Indicator, Level, Objective, ObjectiveValue};

struct Fixed(&'static str, f64);

impl Indicator<()> for Fixed {
    fn evaluate(&self, _solution: &()) -> BaseValue {
        BaseValue::from_cost(self.1)
    }

    fn name(&self) -> String {
        String::from(self.0)
    }
}

#[test]
fn infeasible_is_larger_than_every_cost() {
    let cheap = ObjectiveValue::from_cost(10.0);
    let expensive = ObjectiveValue::from_cost(1e12);
    let infeasible = ObjectiveValue::infeasible();

    assert!(cheap < expensive);
    assert!(expensive < infeasible);
    assert_eq!(infeasible, ObjectiveValue::from_cost(f64::INFINITY));
    assert_eq!(infeasible, ObjectiveValue::from_cost(f64::NAN));
    assert!(!infeasible.is_feasible());
    assert_eq!(infeasible.total(), f64::INFINITY);
    assert_eq!(cheap.total(), 10.0);
}

#[test]
fn min_takes_first_of_equal_values() {
    let values = [
        (0, ObjectiveValue::from_cost(5.0)),
        (1, ObjectiveValue::from_cost(3.0)),
        (2, ObjectiveValue::from_cost(3.0)),
    ];
    let best = values.iter().min_by(|a, b| a.1.cmp(&b.1)).unwrap();
    assert_eq!(best.0, 1);
}

#[test]
fn objective_sums_weighted_indicators() {
    // ARRANGE
    let objective = Objective::new(vec![Level::new(vec![
        (Coefficient::Integer(1), Box::new(Fixed("bases", 80.0)) as Box<dyn Indicator<()>>),
        (Coefficient::Float(0.5), Box::new(Fixed("charter", 60.0))),
    ])]);

    // ACT
    let evaluated = objective.evaluate(());
    let breakdown = objective.breakdown_to_json(&());

    // ASSERT
    assert_eq!(evaluated.objective_value().total(), 110.0);
    assert_eq!(breakdown["bases"], serde_json::json!(80.0));
    assert_eq!(breakdown["charter"], serde_json::json!(30.0));
    assert_eq!(breakdown["total"], serde_json::json!(110.0));
    assert_eq!(objective.to_string(), "bases + 0.5*charter");
}

#[test]
fn infeasible_indicator_makes_level_infeasible() {
    let objective = Objective::new(vec![Level::new(vec![
        (Coefficient::Integer(1), Box::new(Fixed("a", 1.0)) as Box<dyn Indicator<()>>),
        (Coefficient::Integer(1), Box::new(Fixed("b", f64::INFINITY))),
    ])]);

    let evaluated = objective.evaluate(());

    assert!(!evaluated.objective_value().is_feasible());
    assert_eq!(
        objective.breakdown_to_json(&())["total"],
        serde_json::json!("infeasible")
    );
}
