mod modifications;

use std::fmt;

use im::OrdMap;
use itertools::Itertools;
use model::base_types::{BaseIdx, CharterPeriodIdx, VesselCount, VesselTypeIdx};
use model::FleetProblem;

pub type PurchasedCell = (BaseIdx, VesselTypeIdx);
pub type CharteredCell = (BaseIdx, VesselTypeIdx, CharterPeriodIdx);

// A fleet configuration: which bases are operated, how many vessels of each type are purchased
// per base and how many are chartered per base and charter period.
// It is an immutable object. Modifications return a new configuration that shares the unchanged
// parts of the maps with the old one.
// Every cell of the problem has an entry (zero included), so equality is equality of all values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Configuration {
    base_active: OrdMap<BaseIdx, bool>,
    purchased: OrdMap<PurchasedCell, VesselCount>,
    chartered: OrdMap<CharteredCell, VesselCount>,
}

// static
impl Configuration {
    /// All bases inactive, all counts zero.
    pub fn empty(problem: &FleetProblem) -> Configuration {
        let base_active = problem.bases().map(|b| (b, false)).collect();
        let purchased = problem
            .bases()
            .cartesian_product(problem.vessel_types().collect_vec())
            .map(|cell| (cell, 0 as VesselCount))
            .collect();
        let chartered = problem
            .bases()
            .cartesian_product(problem.vessel_types().collect_vec())
            .cartesian_product(problem.charter_periods().collect_vec())
            .map(|((b, vt), cp)| ((b, vt, cp), 0 as VesselCount))
            .collect();
        Configuration {
            base_active,
            purchased,
            chartered,
        }
    }

    pub(crate) fn from_maps(
        base_active: OrdMap<BaseIdx, bool>,
        purchased: OrdMap<PurchasedCell, VesselCount>,
        chartered: OrdMap<CharteredCell, VesselCount>,
    ) -> Configuration {
        Configuration {
            base_active,
            purchased,
            chartered,
        }
    }
}

// basic methods
impl Configuration {
    pub fn is_active(&self, base: BaseIdx) -> bool {
        self.base_active.get(&base).copied().unwrap_or(false)
    }

    pub fn purchased(&self, base: BaseIdx, vessel_type: VesselTypeIdx) -> VesselCount {
        self.purchased
            .get(&(base, vessel_type))
            .copied()
            .unwrap_or(0)
    }

    pub fn chartered(
        &self,
        base: BaseIdx,
        vessel_type: VesselTypeIdx,
        charter_period: CharterPeriodIdx,
    ) -> VesselCount {
        self.chartered
            .get(&(base, vessel_type, charter_period))
            .copied()
            .unwrap_or(0)
    }

    pub fn bases(&self) -> impl Iterator<Item = BaseIdx> + '_ {
        self.base_active.keys().copied()
    }

    pub fn active_bases(&self) -> impl Iterator<Item = BaseIdx> + '_ {
        self.base_active
            .iter()
            .filter(|(_, active)| **active)
            .map(|(base, _)| *base)
    }

    pub fn inactive_bases(&self) -> impl Iterator<Item = BaseIdx> + '_ {
        self.base_active
            .iter()
            .filter(|(_, active)| !**active)
            .map(|(base, _)| *base)
    }

    /// purchased cells in base-major, type-minor order
    pub fn purchased_iter(&self) -> impl Iterator<Item = (PurchasedCell, VesselCount)> + '_ {
        self.purchased.iter().map(|(cell, count)| (*cell, *count))
    }

    /// chartered cells in base-major, type-minor, period-minor order
    pub fn chartered_iter(&self) -> impl Iterator<Item = (CharteredCell, VesselCount)> + '_ {
        self.chartered.iter().map(|(cell, count)| (*cell, *count))
    }

    pub fn base_active_iter(&self) -> impl Iterator<Item = (BaseIdx, bool)> + '_ {
        self.base_active.iter().map(|(base, active)| (*base, *active))
    }

    /// chartered vessels of this type in this charter period, summed over all bases
    pub fn chartered_total(
        &self,
        vessel_type: VesselTypeIdx,
        charter_period: CharterPeriodIdx,
    ) -> VesselCount {
        self.chartered
            .iter()
            .filter(|((_, vt, cp), _)| *vt == vessel_type && *cp == charter_period)
            .map(|(_, count)| count)
            .sum()
    }

    /// purchased vessels plus chartered vessels of all charter periods at this base
    pub fn vessels_at(&self, base: BaseIdx) -> VesselCount {
        let purchased: VesselCount = self
            .purchased
            .iter()
            .filter(|((b, _), _)| *b == base)
            .map(|(_, count)| count)
            .sum();
        let chartered: VesselCount = self
            .chartered
            .iter()
            .filter(|((b, _, _), _)| *b == base)
            .map(|(_, count)| count)
            .sum();
        purchased + chartered
    }

    /// purchased vessels of this type at the base plus the chartered ones of its busiest charter
    /// period; this is what the base capacity for the type bounds
    pub fn peak_stationed(&self, base: BaseIdx, vessel_type: VesselTypeIdx) -> VesselCount {
        let chartered = self
            .chartered
            .iter()
            .filter(|((b, vt, _), _)| *b == base && *vt == vessel_type)
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0);
        self.purchased(base, vessel_type) + chartered
    }

    pub fn number_of_purchased_vessels(&self) -> VesselCount {
        self.purchased.values().sum()
    }

    pub fn number_of_active_bases(&self) -> usize {
        self.active_bases().count()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.active_bases().map(|b| b.to_string()).join(",");
        let purchased = self
            .purchased_iter()
            .filter(|(_, count)| *count > 0)
            .map(|((b, vt), count)| format!("{}/{}:{}", b, vt, count))
            .join(",");
        let chartered = self
            .chartered_iter()
            .filter(|(_, count)| *count > 0)
            .map(|((b, vt, cp), count)| format!("{}/{}/{}:{}", b, vt, cp, count))
            .join(",");
        write!(
            f,
            "active: [{}], purchased: [{}], chartered: [{}]",
            active, purchased, chartered
        )
    }
}
