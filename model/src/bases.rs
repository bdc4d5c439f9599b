use std::collections::HashMap;

use crate::base_types::{BaseIdx, Cost, Kilometer, VesselCount, VesselTypeIdx};

pub struct Bases {
    bases: Vec<Base>, // sorted by idx
}

impl Bases {
    pub fn new(bases: Vec<Base>) -> Bases {
        let mut bases = bases;
        bases.sort_by_key(|base| base.idx);
        Bases { bases }
    }

    pub fn get(&self, idx: BaseIdx) -> Option<&Base> {
        self.bases.get(idx.idx())
    }

    pub fn iter(&self) -> impl Iterator<Item = BaseIdx> + '_ {
        self.bases.iter().map(|base| base.idx)
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Base {
    idx: BaseIdx,
    id: String,
    operating_cost: Cost,
    distance_to_wind_farm: Kilometer,
    capacities: HashMap<VesselTypeIdx, VesselCount>, // types that are not listed cannot be
                                                     // stationed at this base
}

// methods
impl Base {
    pub fn idx(&self) -> BaseIdx {
        self.idx
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// operating cost over the whole planning horizon
    pub fn operating_cost(&self) -> Cost {
        self.operating_cost
    }

    pub fn distance_to_wind_farm(&self) -> Kilometer {
        self.distance_to_wind_farm
    }

    pub fn capacity_for(&self, vessel_type: VesselTypeIdx) -> VesselCount {
        self.capacities.get(&vessel_type).copied().unwrap_or(0)
    }
}

// static
impl Base {
    pub fn new(
        idx: BaseIdx,
        id: String,
        operating_cost: Cost,
        distance_to_wind_farm: Kilometer,
        capacities: HashMap<VesselTypeIdx, VesselCount>,
    ) -> Self {
        Self {
            idx,
            id,
            operating_cost,
            distance_to_wind_farm,
            capacities,
        }
    }
}
