pub mod moves;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use heuristic_framework::tabu_search::{TabuList, TabuNeighborhood};
use itertools::Itertools;
use model::FleetProblem;
use solution::Configuration;

use moves::FleetMove;

///////////////////////////////////////////////////////////
////////////////////// FleetNeighborhood //////////////////
///////////////////////////////////////////////////////////

/// All single-step moves of a configuration, in a fixed order:
/// first purchased moves (per base and vessel type: add, remove, switch type, switch base),
/// then chartered moves (per base, vessel type and charter period: add, remove, switch type,
/// switch period, switch base), finally base moves (per active base: close, replace by each
/// inactive base).
/// Tabu moves and moves violating a capacity or market bound are skipped.
pub struct FleetNeighborhood {
    problem: Arc<FleetProblem>,
}

impl FleetNeighborhood {
    pub fn new(problem: Arc<FleetProblem>) -> FleetNeighborhood {
        FleetNeighborhood { problem }
    }

    /// every candidate move in generation order, admissible or not
    pub fn moves_of<'a>(
        &'a self,
        configuration: &'a Configuration,
    ) -> impl Iterator<Item = FleetMove> + 'a {
        self.purchased_moves()
            .chain(self.chartered_moves())
            .chain(self.base_moves(configuration))
    }

    fn purchased_moves(&self) -> impl Iterator<Item = FleetMove> + '_ {
        let problem = &self.problem;
        problem
            .bases()
            .cartesian_product(problem.vessel_types().collect_vec())
            .flat_map(move |(base, vessel_type)| {
                let add_remove = [
                    FleetMove::AddPurchased { base, vessel_type },
                    FleetMove::RemovePurchased { base, vessel_type },
                ];
                let switch_type = problem
                    .vessel_types()
                    .filter(move |&other| other != vessel_type)
                    .map(move |to| FleetMove::SwitchPurchasedType {
                        base,
                        from: vessel_type,
                        to,
                    });
                let switch_base = problem
                    .bases()
                    .filter(move |&other| other != base)
                    .map(move |to| FleetMove::SwitchPurchasedBase {
                        vessel_type,
                        from: base,
                        to,
                    });
                add_remove.into_iter().chain(switch_type).chain(switch_base)
            })
    }

    fn chartered_moves(&self) -> impl Iterator<Item = FleetMove> + '_ {
        let problem = &self.problem;
        problem
            .bases()
            .cartesian_product(problem.vessel_types().collect_vec())
            .cartesian_product(problem.charter_periods().collect_vec())
            .flat_map(move |((base, vessel_type), charter_period)| {
                let add_remove = [
                    FleetMove::AddChartered {
                        base,
                        vessel_type,
                        charter_period,
                    },
                    FleetMove::RemoveChartered {
                        base,
                        vessel_type,
                        charter_period,
                    },
                ];
                let switch_type = problem
                    .vessel_types()
                    .filter(move |&other| other != vessel_type)
                    .map(move |to| FleetMove::SwitchCharteredType {
                        base,
                        charter_period,
                        from: vessel_type,
                        to,
                    });
                let switch_period = problem
                    .charter_periods()
                    .filter(move |&other| other != charter_period)
                    .map(move |to| FleetMove::SwitchCharteredPeriod {
                        base,
                        vessel_type,
                        from: charter_period,
                        to,
                    });
                let switch_base = problem
                    .bases()
                    .filter(move |&other| other != base)
                    .map(move |to| FleetMove::SwitchCharteredBase {
                        vessel_type,
                        charter_period,
                        from: base,
                        to,
                    });
                add_remove
                    .into_iter()
                    .chain(switch_type)
                    .chain(switch_period)
                    .chain(switch_base)
            })
    }

    fn base_moves<'a>(
        &'a self,
        configuration: &'a Configuration,
    ) -> impl Iterator<Item = FleetMove> + 'a {
        configuration.active_bases().flat_map(move |base| {
            std::iter::once(FleetMove::CloseBase { base }).chain(
                configuration
                    .inactive_bases()
                    .map(move |to| FleetMove::ReplaceBase { from: base, to }),
            )
        })
    }
}

impl TabuNeighborhood<Configuration, FleetMove> for FleetNeighborhood {
    fn neighbors_of<'a>(
        &'a self,
        configuration: &'a Configuration,
        tabu_list: &'a TabuList<FleetMove>,
    ) -> Box<dyn Iterator<Item = (FleetMove, Configuration)> + 'a> {
        Box::new(
            self.moves_of(configuration)
                .filter(move |mv| !tabu_list.is_tabu(mv))
                .filter_map(move |mv| match mv.apply(configuration, &self.problem) {
                    Ok(neighbor) => Some((mv, neighbor)),
                    Err(_) => None,
                }),
        )
    }
}
