use std::sync::Arc;

use itertools::Itertools;
use model::base_types::{BaseIdx, Hours, PeriodIdx, VesselCount, VesselTypeIdx};
use model::FleetProblem;
use solution::Configuration;

/// Hours of one day.
#[derive(Debug, Clone)]
pub struct DayDispatch {
    pub period: PeriodIdx,
    pub demand: Hours,
    pub dispatched: Vec<(BaseIdx, VesselTypeIdx, Hours)>, // only cells with positive hours
    pub backlog: Hours, // open hours at the end of the day
}

/// Day-by-day dispatch of a fixed configuration: backlog plus new demand is served by the
/// available vessels, cheapest operating cost per hour first (ties by base, then type). What is
/// not served is carried over.
pub struct Dispatch {
    configuration: Configuration,
    days: Vec<DayDispatch>,
    problem: Arc<FleetProblem>,
}

impl Dispatch {
    pub fn compute(configuration: Configuration, problem: Arc<FleetProblem>) -> Dispatch {
        // cells sorted by operating cost per hour
        let cells: Vec<(BaseIdx, VesselTypeIdx)> = configuration
            .active_bases()
            .cartesian_product(problem.vessel_types().collect_vec())
            .sorted_by(|&(b1, vt1), &(b2, vt2)| {
                let cost1 = problem.vessel_type(vt1).operating_cost_per_hour();
                let cost2 = problem.vessel_type(vt2).operating_cost_per_hour();
                cost1.total_cmp(&cost2).then((b1, vt1).cmp(&(b2, vt2)))
            })
            .collect();

        let mut backlog = 0.0;
        let days = problem
            .periods()
            .map(|period| {
                let charter_period = problem.charter_period_of(period);
                let demand = problem.maintenance_demand_of(period);
                let mut open = backlog + demand;
                let mut dispatched = Vec::new();
                for &(base, vessel_type) in cells.iter() {
                    let vessels: VesselCount = configuration.purchased(base, vessel_type)
                        + configuration.chartered(base, vessel_type, charter_period);
                    let available =
                        vessels as Hours * problem.productive_hours(base, vessel_type);
                    let hours = available.min(open);
                    if hours > 0.0 {
                        dispatched.push((base, vessel_type, hours));
                        open -= hours;
                    }
                }
                backlog = open;
                DayDispatch {
                    period,
                    demand,
                    dispatched,
                    backlog,
                }
            })
            .collect();

        Dispatch {
            configuration,
            days,
            problem,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn problem(&self) -> &FleetProblem {
        &self.problem
    }

    pub fn days(&self) -> &[DayDispatch] {
        &self.days
    }

    pub fn final_backlog(&self) -> Hours {
        self.days.last().map(|day| day.backlog).unwrap_or(0.0)
    }

    pub fn days_to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.days
                .iter()
                .map(|day| {
                    let dispatched: serde_json::Map<String, serde_json::Value> = day
                        .dispatched
                        .iter()
                        .map(|&(base, vessel_type, hours)| {
                            (
                                format!(
                                    "{}/{}",
                                    self.problem.base(base).id(),
                                    self.problem.vessel_type(vessel_type).id()
                                ),
                                serde_json::json!(hours),
                            )
                        })
                        .collect();
                    serde_json::json!({
                        "day": day.period.idx(),
                        "demand": day.demand,
                        "dispatched": dispatched,
                        "backlog": day.backlog,
                    })
                })
                .collect(),
        )
    }
}
