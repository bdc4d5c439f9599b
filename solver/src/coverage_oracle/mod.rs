pub mod dispatch;
mod objective;
#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use model::base_types::{BaseIdx, CharterPeriodIdx, VesselCount, VesselTypeIdx};
use model::FleetProblem;
use objective_framework::Objective;
use solution::json_serialisation::configuration_to_json;
use solution::Configuration;

use crate::oracle::{Oracle, SolverStatus};
use dispatch::Dispatch;

/// Why a pinned configuration cannot be operated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NoActiveBase,
    VesselsAtInactiveBase(BaseIdx),
    /// purchased plus chartered vessels of one charter period above the base capacity
    CapacityExceeded {
        base: BaseIdx,
        vessel_type: VesselTypeIdx,
        count: VesselCount,
    },
    MarketExceeded {
        vessel_type: VesselTypeIdx,
        charter_period: CharterPeriodIdx,
        count: VesselCount,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NoActiveBase => write!(f, "no active base"),
            Rejection::VesselsAtInactiveBase(base) => {
                write!(f, "vessels stationed at inactive {}", base)
            }
            Rejection::CapacityExceeded {
                base,
                vessel_type,
                count,
            } => write!(
                f,
                "{} stationed vessels of {} exceed capacity of {}",
                count, vessel_type, base
            ),
            Rejection::MarketExceeded {
                vessel_type,
                charter_period,
                count,
            } => write!(
                f,
                "{} chartered vessels of {} exceed market availability in {}",
                count, vessel_type, charter_period
            ),
        }
    }
}

enum LastRun {
    NotSolved,
    Rejected(Rejection),
    Solved(Dispatch),
}

/// Deterministic stand-in for the scheduling optimizer. A pinned configuration is checked for
/// structural feasibility and then operated day by day (see `Dispatch`); its cost is the sum of
/// base, purchase, charter, operation, downtime and penalty costs.
pub struct CoverageOracle {
    problem: Arc<FleetProblem>,
    objective: Objective<Dispatch>,
    pinned: Option<Configuration>,
    last_run: LastRun,
}

impl CoverageOracle {
    pub fn new(problem: Arc<FleetProblem>) -> CoverageOracle {
        CoverageOracle {
            problem,
            objective: objective::build(),
            pinned: None,
            last_run: LastRun::NotSolved,
        }
    }

    fn check_structure(&self, configuration: &Configuration) -> Result<(), Rejection> {
        let problem = &self.problem;
        if configuration.number_of_active_bases() == 0 {
            return Err(Rejection::NoActiveBase);
        }
        if let Some(base) = configuration
            .inactive_bases()
            .find(|&base| configuration.vessels_at(base) > 0)
        {
            return Err(Rejection::VesselsAtInactiveBase(base));
        }
        for ((base, vessel_type), _) in configuration.purchased_iter() {
            let count = configuration.peak_stationed(base, vessel_type);
            if count > problem.capacity_of(base, vessel_type) {
                return Err(Rejection::CapacityExceeded {
                    base,
                    vessel_type,
                    count,
                });
            }
        }
        for vessel_type in problem.vessel_types() {
            for charter_period in problem.charter_periods() {
                let count = configuration.chartered_total(vessel_type, charter_period);
                if count > problem.available_for_charter(vessel_type, charter_period) {
                    return Err(Rejection::MarketExceeded {
                        vessel_type,
                        charter_period,
                        count,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Oracle for CoverageOracle {
    fn set_bounds(&mut self, configuration: &Configuration) {
        self.pinned = Some(configuration.clone());
    }

    fn solve(&mut self) -> SolverStatus {
        let configuration = match self.pinned.clone() {
            Some(configuration) => configuration,
            None => {
                tracing::warn!("solve called without pinned configuration");
                self.last_run = LastRun::NotSolved;
                return SolverStatus::NumericalError;
            }
        };
        if let Err(rejection) = self.check_structure(&configuration) {
            tracing::debug!(%rejection, "configuration rejected");
            self.last_run = LastRun::Rejected(rejection);
            return SolverStatus::Infeasible;
        }
        let dispatch = Dispatch::compute(configuration, self.problem.clone());
        let total = self.objective.objective_value_of(&dispatch).total();
        self.last_run = LastRun::Solved(dispatch);
        if total.is_finite() {
            SolverStatus::Optimal(total)
        } else {
            SolverStatus::NumericalError
        }
    }

    fn variable_assignment(&self) -> serde_json::Value {
        match &self.last_run {
            LastRun::NotSolved => serde_json::Value::Null,
            LastRun::Rejected(rejection) => serde_json::json!({
                "status": "infeasible",
                "reason": rejection.to_string(),
            }),
            LastRun::Solved(dispatch) => serde_json::json!({
                "status": "optimal",
                "costs": self.objective.breakdown_to_json(dispatch),
                "configuration": configuration_to_json(dispatch.configuration(), &self.problem),
                "days": dispatch.days_to_json(),
            }),
        }
    }
}
