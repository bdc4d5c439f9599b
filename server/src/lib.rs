use model::json_serialisation::load_fleet_problem_from_json;
use model::{FleetProblem, ModelError};
use solution::json_serialisation::configuration_to_json;
use solver::coverage_oracle::CoverageOracle;
use solver::error::SearchError;
use solver::FleetSolution;

use gethostname::gethostname;
use std::{error::Error, fmt};
use std::time as stdtime;

#[derive(Debug)]
pub enum SolveError {
    Model(ModelError),
    Search(SearchError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::Model(error) => write!(f, "invalid instance: {}", error),
            SolveError::Search(error) => write!(f, "search failed: {}", error),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolveError::Model(error) => Some(error),
            SolveError::Search(error) => Some(error),
        }
    }
}

impl From<ModelError> for SolveError {
    fn from(error: ModelError) -> Self {
        SolveError::Model(error)
    }
}

impl From<SearchError> for SolveError {
    fn from(error: SearchError) -> Self {
        SolveError::Search(error)
    }
}

pub fn solve_instance(input_data: serde_json::Value) -> Result<serde_json::Value, SolveError> {
    let start_time = stdtime::Instant::now();
    let (problem, config) = load_fleet_problem_from_json(input_data)?;
    tracing::info!(
        bases = problem.number_of_bases(),
        vessel_types = problem.number_of_vessel_types(),
        charter_periods = problem.number_of_charter_periods(),
        "instance with {} planning periods loaded (elapsed time: {:0.2}sec)",
        problem.planning_horizon(),
        start_time.elapsed().as_secs_f32()
    );

    let mut oracle = CoverageOracle::new(problem.clone());
    let fleet_solution = solver::solve(problem.clone(), &config, &mut oracle, start_time)?;

    let runtime_duration = start_time.elapsed();
    tracing::info!(
        objective_value = %fleet_solution.solution.objective_value(),
        "solved, running time: {:0.2}sec",
        runtime_duration.as_secs_f32()
    );

    Ok(create_output_json(
        &fleet_solution,
        &problem,
        runtime_duration,
    ))
}

pub fn create_output_json(
    fleet_solution: &FleetSolution,
    problem: &FleetProblem,
    runtime_duration: stdtime::Duration,
) -> serde_json::Value {
    let objective_value = match fleet_solution.assignment.get("costs") {
        Some(costs) => costs.clone(),
        None => fleet_solution.solution.objective_value().to_json(),
    };
    let trace: Vec<serde_json::Value> = fleet_solution
        .trace
        .iter()
        .map(|record| {
            let candidates: Vec<serde_json::Value> = record
                .candidates
                .iter()
                .map(|(mv, value)| {
                    serde_json::json!({
                        "move": mv.to_string(),
                        "objective": value.to_json(),
                    })
                })
                .collect();
            serde_json::json!({
                "iteration": record.iteration,
                "move": record.applied_move.to_string(),
                "objective": record.objective_value.to_json(),
                "best": record.best_objective_value.to_json(),
                "candidates": candidates,
            })
        })
        .collect();
    serde_json::json!({
        "info": {
            "runningTime": format!("{:0.2}sec", runtime_duration.as_secs_f32()),
            "oracleEvaluations": fleet_solution.oracle_evaluations,
            "iterations": fleet_solution.trace.len(),
            "termination": fleet_solution.termination.to_string(),
            "timestamp(UTC)": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            "hostname": gethostname().into_string().unwrap_or("unknown".to_string()),
        },
        "objectiveValue": objective_value,
        "construction": {
            "objective": fleet_solution.constructed.objective_value().to_json(),
            "configuration": configuration_to_json(fleet_solution.constructed.solution(), problem),
        },
        "configuration": configuration_to_json(fleet_solution.solution.solution(), problem),
        "trace": trace,
        "assignment": fleet_solution.assignment.clone(),
    })
}
