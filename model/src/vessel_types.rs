use crate::base_types::{Cost, Hours, Kilometer, VesselCount, VesselTypeIdx};

pub struct VesselTypes {
    vessel_types: Vec<VesselType>, // sorted by idx
}

impl VesselTypes {
    pub fn new(vessel_types: Vec<VesselType>) -> VesselTypes {
        let mut vessel_types = vessel_types;
        vessel_types.sort_by_key(|vt| vt.idx);
        VesselTypes { vessel_types }
    }

    pub fn get(&self, idx: VesselTypeIdx) -> Option<&VesselType> {
        self.vessel_types.get(idx.idx())
    }

    pub fn iter(&self) -> impl Iterator<Item = VesselTypeIdx> + '_ {
        self.vessel_types.iter().map(|vt| vt.idx)
    }

    pub fn len(&self) -> usize {
        self.vessel_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vessel_types.is_empty()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct VesselType {
    idx: VesselTypeIdx,
    id: String,
    purchase_cost: Cost,
    charter_cost_per_day: Cost,
    operating_cost_per_hour: Cost,
    speed: f64, // km per hour
    workable_hours_per_day: Hours,
    available_for_charter: VesselCount, // market availability per charter period
}

impl VesselType {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        idx: VesselTypeIdx,
        id: String,
        purchase_cost: Cost,
        charter_cost_per_day: Cost,
        operating_cost_per_hour: Cost,
        speed: f64,
        workable_hours_per_day: Hours,
        available_for_charter: VesselCount,
    ) -> VesselType {
        VesselType {
            idx,
            id,
            purchase_cost,
            charter_cost_per_day,
            operating_cost_per_hour,
            speed,
            workable_hours_per_day,
            available_for_charter,
        }
    }

    pub fn idx(&self) -> VesselTypeIdx {
        self.idx
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn purchase_cost(&self) -> Cost {
        self.purchase_cost
    }

    pub fn charter_cost_per_day(&self) -> Cost {
        self.charter_cost_per_day
    }

    pub fn operating_cost_per_hour(&self) -> Cost {
        self.operating_cost_per_hour
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn workable_hours_per_day(&self) -> Hours {
        self.workable_hours_per_day
    }

    pub fn available_for_charter(&self) -> VesselCount {
        self.available_for_charter
    }

    /// Hours per day that a vessel of this type can spend at the wind farm when it operates from
    /// a base at the given distance (the round trip is subtracted). Never negative.
    pub fn productive_hours_from(&self, distance: Kilometer) -> Hours {
        let transit = if self.speed > 0.0 {
            2.0 * distance / self.speed
        } else {
            self.workable_hours_per_day
        };
        (self.workable_hours_per_day - transit).max(0.0)
    }
}
