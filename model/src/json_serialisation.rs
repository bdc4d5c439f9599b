
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use crate::base_types::{BaseIdx, Idx, VesselTypeIdx};
use crate::bases::{Base, Bases};
use crate::charter_periods::CharterPeriods;
use crate::config::{Config, ConfigTabuSearch};
use crate::error::ModelError;
use crate::problem::{FleetProblem, Penalties};
use crate::vessel_types::{VesselType, VesselTypes};

type Integer = u32;
type Number = f64;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonVesselType {
    id: String,
    purchase_cost: Number,
    charter_cost_per_day: Number,
    operating_cost_per_hour: Number,
    speed_in_kmh: Number,
    workable_hours_per_day: Number,
    available_for_charter: Integer,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UpperBoundForVesselType {
    vessel_type: String,
    upper_bound: Integer,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonBase {
    id: String,
    operating_cost: Number,
    distance_to_wind_farm_in_km: Number,
    upper_bound_for_vessel_types: Vec<UpperBoundForVesselType>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Planning {
    maintenance_hours_per_period: Vec<Number>,
    charter_period_length: Integer,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonPenalties {
    downtime_cost_per_hour: Number,
    unperformed_hour_penalty: Number,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", default)]
struct Parameters {
    max_iterations: Option<usize>,
    time_budget_in_seconds: Option<u64>,
    stagnation_window: Option<usize>,
    tabu_tenure: Option<usize>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JsonInput {
    vessel_types: Vec<JsonVesselType>,
    bases: Vec<JsonBase>,
    planning: Planning,
    penalties: JsonPenalties,
    #[serde(default)]
    parameters: Parameters,
}

pub fn load_fleet_problem_from_json(
    input_data: serde_json::Value,
) -> Result<(Arc<FleetProblem>, Arc<Config>), ModelError> {
    let json_input: JsonInput = serde_json::from_value(input_data)?;

    let vessel_types = create_vessel_types(&json_input)?;
    let bases = create_bases(&json_input, &vessel_types)?;
    let (charter_periods, maintenance_demand) = create_planning(&json_input)?;
    let penalties = Penalties {
        downtime_cost_per_hour: non_negative(
            "penalties.downtimeCostPerHour",
            json_input.penalties.downtime_cost_per_hour,
        )?,
        unperformed_hour_penalty: non_negative(
            "penalties.unperformedHourPenalty",
            json_input.penalties.unperformed_hour_penalty,
        )?,
    };
    let config = create_config(&json_input.parameters)?;

    let problem = FleetProblem::new(
        bases,
        VesselTypes::new(vessel_types.into_values().collect()),
        charter_periods,
        maintenance_demand,
        penalties,
    );
    Ok((Arc::new(problem), Arc::new(config)))
}

fn create_vessel_types(json_input: &JsonInput) -> Result<HashMap<String, VesselType>, ModelError> {
    if json_input.vessel_types.is_empty() {
        return Err(ModelError::EmptySet("vessel types"));
    }
    let mut vessel_types: HashMap<String, VesselType> = HashMap::new();
    for (idx, vt) in json_input.vessel_types.iter().enumerate() {
        if vessel_types.contains_key(&vt.id) {
            return Err(ModelError::DuplicateId {
                set: "vessel types",
                id: vt.id.clone(),
            });
        }
        let field = |name: &str| format!("vesselTypes[{}].{}", vt.id, name);
        let vessel_type = VesselType::new(
            VesselTypeIdx::from(to_idx(idx, "vessel types")?),
            vt.id.clone(),
            non_negative(field("purchaseCost"), vt.purchase_cost)?,
            non_negative(field("charterCostPerDay"), vt.charter_cost_per_day)?,
            non_negative(field("operatingCostPerHour"), vt.operating_cost_per_hour)?,
            non_negative(field("speedInKmh"), vt.speed_in_kmh)?,
            non_negative(field("workableHoursPerDay"), vt.workable_hours_per_day)?,
            vt.available_for_charter,
        );
        vessel_types.insert(vt.id.clone(), vessel_type);
    }
    Ok(vessel_types)
}

fn create_bases(
    json_input: &JsonInput,
    vessel_types: &HashMap<String, VesselType>,
) -> Result<Bases, ModelError> {
    if json_input.bases.is_empty() {
        return Err(ModelError::EmptySet("bases"));
    }
    let mut ids: HashSet<&str> = HashSet::new();
    let mut bases = Vec::new();
    for (idx, base) in json_input.bases.iter().enumerate() {
        if !ids.insert(base.id.as_str()) {
            return Err(ModelError::DuplicateId {
                set: "bases",
                id: base.id.clone(),
            });
        }
        let mut capacities = HashMap::new();
        for bound in base.upper_bound_for_vessel_types.iter() {
            let vessel_type = vessel_types.get(&bound.vessel_type).ok_or_else(|| {
                ModelError::UnknownVesselType {
                    base: base.id.clone(),
                    vessel_type: bound.vessel_type.clone(),
                }
            })?;
            capacities.insert(vessel_type.idx(), bound.upper_bound);
        }
        let field = |name: &str| format!("bases[{}].{}", base.id, name);
        bases.push(Base::new(
            BaseIdx::from(to_idx(idx, "bases")?),
            base.id.clone(),
            non_negative(field("operatingCost"), base.operating_cost)?,
            non_negative(
                field("distanceToWindFarmInKm"),
                base.distance_to_wind_farm_in_km,
            )?,
            capacities,
        ));
    }
    Ok(Bases::new(bases))
}

fn create_planning(json_input: &JsonInput) -> Result<(CharterPeriods, Vec<f64>), ModelError> {
    let planning = &json_input.planning;
    if planning.maintenance_hours_per_period.is_empty() {
        return Err(ModelError::EmptySet("planning periods"));
    }
    let horizon = to_idx(planning.maintenance_hours_per_period.len(), "planning periods")?;
    let length = Idx::try_from(planning.charter_period_length)
        .map_err(|_| ModelError::InvalidCharterPeriodLength)?;
    let charter_periods =
        CharterPeriods::new(horizon, length).ok_or(ModelError::InvalidCharterPeriodLength)?;

    let maintenance_demand = planning
        .maintenance_hours_per_period
        .iter()
        .enumerate()
        .map(|(p, &hours)| non_negative(format!("planning.maintenanceHoursPerPeriod[{}]", p), hours))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((charter_periods, maintenance_demand))
}

fn create_config(parameters: &Parameters) -> Result<Config, ModelError> {
    let default = ConfigTabuSearch::default();
    // a tenure of zero would evict every reverse move right after inserting it
    if parameters.tabu_tenure == Some(0) {
        return Err(ModelError::InvalidValue {
            field: "parameters.tabuTenure".to_string(),
            value: 0.0,
        });
    }
    Ok(Config {
        tabu_search: ConfigTabuSearch {
            max_iterations: parameters.max_iterations.unwrap_or(default.max_iterations),
            time_budget: parameters
                .time_budget_in_seconds
                .map(Duration::from_secs)
                .unwrap_or(default.time_budget),
            stagnation_window: parameters
                .stagnation_window
                .unwrap_or(default.stagnation_window),
            tabu_tenure: parameters.tabu_tenure.or(default.tabu_tenure),
        },
    })
}

fn to_idx(value: usize, set: &'static str) -> Result<Idx, ModelError> {
    Idx::try_from(value).map_err(|_| ModelError::TooLarge(set))
}

fn non_negative(field: impl Into<String>, value: f64) -> Result<f64, ModelError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ModelError::InvalidValue {
            field: field.into(),
            value,
        })
    }
}
