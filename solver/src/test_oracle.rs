use std::collections::HashMap;

use model::base_types::{BaseIdx, Cost};
use solution::Configuration;

use crate::oracle::{Oracle, SolverStatus};

type Predicate = Box<dyn Fn(&Configuration) -> bool + Send + Sync>;

/// Deterministic oracle for tests: the cost is linear in base flags and vessel counts,
/// `sum base_cost[b] * active[b] + purchase_cost * purchased + charter_cost * chartered`.
/// A configuration without active base, with vessels at an inactive base or matching the
/// infeasibility predicate is infeasible.
pub struct LinearCostOracle {
    base_costs: HashMap<BaseIdx, Cost>,
    purchase_cost: Cost,
    charter_cost: Cost,
    infeasible_if: Option<Predicate>,
    pinned: Option<Configuration>,
    last_cost: Option<Cost>,
    calls: usize,
}

impl LinearCostOracle {
    pub fn new(
        base_costs: Vec<(BaseIdx, Cost)>,
        purchase_cost: Cost,
        charter_cost: Cost,
    ) -> LinearCostOracle {
        LinearCostOracle {
            base_costs: base_costs.into_iter().collect(),
            purchase_cost,
            charter_cost,
            infeasible_if: None,
            pinned: None,
            last_cost: None,
            calls: 0,
        }
    }

    pub fn with_infeasibility(
        mut self,
        predicate: impl Fn(&Configuration) -> bool + Send + Sync + 'static,
    ) -> LinearCostOracle {
        self.infeasible_if = Some(Box::new(predicate));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    pub fn cost_of(&self, configuration: &Configuration) -> Option<Cost> {
        let coherent = configuration.number_of_active_bases() > 0
            && configuration
                .inactive_bases()
                .all(|base| configuration.vessels_at(base) == 0);
        let excluded = self
            .infeasible_if
            .as_ref()
            .map(|predicate| predicate(configuration))
            .unwrap_or(false);
        if !coherent || excluded {
            return None;
        }
        let bases: Cost = configuration
            .active_bases()
            .map(|base| self.base_costs.get(&base).copied().unwrap_or(0.0))
            .sum();
        let purchased: Cost = configuration
            .purchased_iter()
            .map(|(_, count)| count as Cost)
            .sum();
        let chartered: Cost = configuration
            .chartered_iter()
            .map(|(_, count)| count as Cost)
            .sum();
        Some(bases + self.purchase_cost * purchased + self.charter_cost * chartered)
    }
}

impl Oracle for LinearCostOracle {
    fn set_bounds(&mut self, configuration: &Configuration) {
        self.pinned = Some(configuration.clone());
    }

    fn solve(&mut self) -> SolverStatus {
        self.calls += 1;
        self.last_cost = self
            .pinned
            .as_ref()
            .and_then(|configuration| self.cost_of(configuration));
        match self.last_cost {
            Some(cost) => SolverStatus::Optimal(cost),
            None => SolverStatus::Infeasible,
        }
    }

    fn variable_assignment(&self) -> serde_json::Value {
        serde_json::json!({ "cost": self.last_cost })
    }
}
