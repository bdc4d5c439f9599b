use crate::base_types::{
    BaseIdx, CharterPeriodIdx, Cost, Hours, Idx, PeriodIdx, VesselCount, VesselTypeIdx,
};
use crate::bases::{Base, Bases};
use crate::charter_periods::CharterPeriods;
use crate::vessel_types::{VesselType, VesselTypes};

/// Cost rates for maintenance work that is not performed in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penalties {
    pub downtime_cost_per_hour: Cost, // per hour of backlog at the end of each period
    pub unperformed_hour_penalty: Cost, // per hour of backlog at the end of the horizon
}

/// All problem data the fleet search and the bundled oracle consume: candidate bases, vessel
/// types, the charter-period partition of the horizon and the maintenance demand.
pub struct FleetProblem {
    bases: Bases,
    vessel_types: VesselTypes,
    charter_periods: CharterPeriods,
    maintenance_demand: Vec<Hours>, // hours of maintenance work arising in each period
    penalties: Penalties,
}

// static
impl FleetProblem {
    pub fn new(
        bases: Bases,
        vessel_types: VesselTypes,
        charter_periods: CharterPeriods,
        maintenance_demand: Vec<Hours>,
        penalties: Penalties,
    ) -> FleetProblem {
        FleetProblem {
            bases,
            vessel_types,
            charter_periods,
            maintenance_demand,
            penalties,
        }
    }
}

// methods
impl FleetProblem {
    pub fn bases(&self) -> impl Iterator<Item = BaseIdx> + '_ {
        self.bases.iter()
    }

    pub fn vessel_types(&self) -> impl Iterator<Item = VesselTypeIdx> + '_ {
        self.vessel_types.iter()
    }

    pub fn charter_periods(&self) -> impl Iterator<Item = CharterPeriodIdx> + '_ {
        self.charter_periods.iter()
    }

    pub fn periods(&self) -> impl Iterator<Item = PeriodIdx> {
        (0..self.maintenance_demand.len()).map(|p| PeriodIdx::from(p as Idx))
    }

    pub fn base(&self, base: BaseIdx) -> &Base {
        self.bases
            .get(base)
            .unwrap_or_else(|| panic!("{} is not a base of this problem", base))
    }

    pub fn vessel_type(&self, vessel_type: VesselTypeIdx) -> &VesselType {
        self.vessel_types
            .get(vessel_type)
            .unwrap_or_else(|| panic!("{} is not a vessel type of this problem", vessel_type))
    }

    pub fn charter_period_partition(&self) -> &CharterPeriods {
        &self.charter_periods
    }

    pub fn number_of_bases(&self) -> usize {
        self.bases.len()
    }

    pub fn number_of_vessel_types(&self) -> usize {
        self.vessel_types.len()
    }

    pub fn number_of_charter_periods(&self) -> usize {
        self.charter_periods.len()
    }

    pub fn planning_horizon(&self) -> usize {
        self.maintenance_demand.len()
    }

    /// upper bound for the purchased count plus the chartered count of any charter period
    pub fn capacity_of(&self, base: BaseIdx, vessel_type: VesselTypeIdx) -> VesselCount {
        self.base(base).capacity_for(vessel_type)
    }

    /// upper bound for the number of chartered vessels of this type summed over all bases
    pub fn available_for_charter(
        &self,
        vessel_type: VesselTypeIdx,
        _charter_period: CharterPeriodIdx,
    ) -> VesselCount {
        self.vessel_type(vessel_type).available_for_charter()
    }

    pub fn maintenance_demand_of(&self, period: PeriodIdx) -> Hours {
        self.maintenance_demand
            .get(period.idx())
            .copied()
            .unwrap_or(0.0)
    }

    pub fn charter_period_of(&self, period: PeriodIdx) -> CharterPeriodIdx {
        self.charter_periods
            .charter_period_of(period)
            .unwrap_or_else(|| panic!("{} is outside of the planning horizon", period))
    }

    pub fn productive_hours(&self, base: BaseIdx, vessel_type: VesselTypeIdx) -> Hours {
        self.vessel_type(vessel_type)
            .productive_hours_from(self.base(base).distance_to_wind_farm())
    }

    pub fn penalties(&self) -> Penalties {
        self.penalties
    }
}
