use model::base_types::Cost;
use objective_framework::{BaseValue, Coefficient, Indicator, Level, Objective};

use super::dispatch::Dispatch;

/// Operating cost of all active bases.
struct BaseCostIndicator;

impl Indicator<Dispatch> for BaseCostIndicator {
    fn evaluate(&self, dispatch: &Dispatch) -> BaseValue {
        let problem = dispatch.problem();
        BaseValue::from_cost(
            dispatch
                .configuration()
                .active_bases()
                .map(|base| problem.base(base).operating_cost())
                .sum(),
        )
    }

    fn name(&self) -> String {
        String::from("bases")
    }
}

struct PurchaseCostIndicator;

impl Indicator<Dispatch> for PurchaseCostIndicator {
    fn evaluate(&self, dispatch: &Dispatch) -> BaseValue {
        let problem = dispatch.problem();
        BaseValue::from_cost(
            dispatch
                .configuration()
                .purchased_iter()
                .map(|((_, vessel_type), count)| {
                    count as Cost * problem.vessel_type(vessel_type).purchase_cost()
                })
                .sum(),
        )
    }

    fn name(&self) -> String {
        String::from("purchase")
    }
}

/// Day rate times the length of the charter period.
struct CharterCostIndicator;

impl Indicator<Dispatch> for CharterCostIndicator {
    fn evaluate(&self, dispatch: &Dispatch) -> BaseValue {
        let problem = dispatch.problem();
        let charter_periods = problem.charter_period_partition();
        BaseValue::from_cost(
            dispatch
                .configuration()
                .chartered_iter()
                .map(|((_, vessel_type, charter_period), count)| {
                    count as Cost
                        * problem.vessel_type(vessel_type).charter_cost_per_day()
                        * charter_periods.length_of(charter_period) as Cost
                })
                .sum(),
        )
    }

    fn name(&self) -> String {
        String::from("charter")
    }
}

/// Dispatched hours times the operating cost per hour.
struct OperationCostIndicator;

impl Indicator<Dispatch> for OperationCostIndicator {
    fn evaluate(&self, dispatch: &Dispatch) -> BaseValue {
        let problem = dispatch.problem();
        BaseValue::from_cost(
            dispatch
                .days()
                .iter()
                .flat_map(|day| day.dispatched.iter())
                .map(|&(_, vessel_type, hours)| {
                    hours * problem.vessel_type(vessel_type).operating_cost_per_hour()
                })
                .sum(),
        )
    }

    fn name(&self) -> String {
        String::from("operations")
    }
}

/// Backlog at the end of every day times the downtime cost per hour.
struct DowntimeCostIndicator;

impl Indicator<Dispatch> for DowntimeCostIndicator {
    fn evaluate(&self, dispatch: &Dispatch) -> BaseValue {
        let rate = dispatch.problem().penalties().downtime_cost_per_hour;
        BaseValue::from_cost(dispatch.days().iter().map(|day| day.backlog * rate).sum())
    }

    fn name(&self) -> String {
        String::from("downtime")
    }
}

/// Backlog at the end of the horizon times the penalty per unperformed hour.
struct PenaltyCostIndicator;

impl Indicator<Dispatch> for PenaltyCostIndicator {
    fn evaluate(&self, dispatch: &Dispatch) -> BaseValue {
        let penalty = dispatch.problem().penalties().unperformed_hour_penalty;
        BaseValue::from_cost(dispatch.final_backlog() * penalty)
    }

    fn name(&self) -> String {
        String::from("penalties")
    }
}

pub fn build() -> Objective<Dispatch> {
    let total_cost = Level::new(vec![
        (
            Coefficient::Integer(1),
            Box::new(BaseCostIndicator) as Box<dyn Indicator<Dispatch>>,
        ),
        (Coefficient::Integer(1), Box::new(PurchaseCostIndicator)),
        (Coefficient::Integer(1), Box::new(CharterCostIndicator)),
        (Coefficient::Integer(1), Box::new(OperationCostIndicator)),
        (Coefficient::Integer(1), Box::new(DowntimeCostIndicator)),
        (Coefficient::Integer(1), Box::new(PenaltyCostIndicator)),
    ]);

    Objective::new(vec![total_cost])
}
