use std::sync::Arc;

use heuristic_framework::Evaluator;
use model::base_types::VesselCount;
use model::FleetProblem;
use objective_framework::EvaluatedSolution;
use solution::Configuration;

/// Sequential construction: fixes the base, then the purchased counts, then the chartered counts,
/// one decision at a time. Every decision is the cheapest value of a full sweep (first wins on
/// ties), evaluated with all earlier decisions locked. Sweeps with zero as the only value are
/// skipped.
pub struct GreedyConstruction {
    problem: Arc<FleetProblem>,
}

impl GreedyConstruction {
    pub fn initialize(problem: Arc<FleetProblem>) -> GreedyConstruction {
        GreedyConstruction { problem }
    }

    pub fn solve(
        &self,
        evaluator: &mut impl Evaluator<Configuration>,
    ) -> EvaluatedSolution<Configuration> {
        let problem = &self.problem;

        // base selection: only the candidate base is active, its purchased cells at capacity.
        // Chartered vessels would share that capacity, so they stay at zero.
        let base_candidates: Vec<Configuration> = problem
            .bases()
            .map(|base| {
                problem.vessel_types().fold(
                    Configuration::empty(problem).with_base_active(base, true),
                    |configuration, vessel_type| {
                        configuration.with_purchased(
                            base,
                            vessel_type,
                            problem.capacity_of(base, vessel_type),
                        )
                    },
                )
            })
            .collect();
        let (base, selected) = match sweep(
            evaluator,
            problem.bases().zip(base_candidates).collect(),
        ) {
            Some(result) => result,
            None => return evaluator.evaluate(Configuration::empty(problem)),
        };
        tracing::info!(
            %base,
            objective_value = %selected.objective_value(),
            "base selected"
        );

        // purchased sizing
        let mut current = selected.solution().with_cleared_base(base);
        for vessel_type in problem.vessel_types() {
            let capacity = problem.capacity_of(base, vessel_type);
            if capacity == 0 {
                continue;
            }
            let candidates = (0..=capacity)
                .map(|count| (count, current.with_purchased(base, vessel_type, count)))
                .collect();
            if let Some((count, locked)) = sweep(evaluator, candidates) {
                tracing::info!(
                    %base,
                    %vessel_type,
                    count,
                    objective_value = %locked.objective_value(),
                    "purchased count locked"
                );
                current = locked.into_solution();
            }
        }

        // chartered sizing
        for vessel_type in problem.vessel_types() {
            let remaining_capacity = problem
                .capacity_of(base, vessel_type)
                .saturating_sub(current.purchased(base, vessel_type));
            if remaining_capacity == 0 {
                continue;
            }
            for charter_period in problem.charter_periods() {
                let upper: VesselCount = remaining_capacity
                    .min(problem.available_for_charter(vessel_type, charter_period));
                if upper == 0 {
                    continue;
                }
                let candidates = (0..=upper)
                    .map(|count| {
                        (
                            count,
                            current.with_chartered(base, vessel_type, charter_period, count),
                        )
                    })
                    .collect();
                if let Some((count, locked)) = sweep(evaluator, candidates) {
                    tracing::info!(
                        %base,
                        %vessel_type,
                        %charter_period,
                        count,
                        objective_value = %locked.objective_value(),
                        "chartered count locked"
                    );
                    current = locked.into_solution();
                }
            }
        }

        let constructed = evaluator.evaluate(current);
        tracing::info!(
            objective_value = %constructed.objective_value(),
            "construction finished: {}",
            constructed.solution()
        );
        constructed
    }
}

/// Evaluates all candidates and returns the first one with minimal objective value together with
/// its label.
fn sweep<T: Copy + std::fmt::Display>(
    evaluator: &mut impl Evaluator<Configuration>,
    candidates: Vec<(T, Configuration)>,
) -> Option<(T, EvaluatedSolution<Configuration>)> {
    candidates
        .into_iter()
        .map(|(label, configuration)| {
            let evaluated = evaluator.evaluate(configuration);
            tracing::debug!(
                %label,
                objective_value = %evaluated.objective_value(),
                "sweep evaluation"
            );
            (label, evaluated)
        })
        .min_by(|(_, a), (_, b)| a.cmp(b))
}
