//! Flat integer vector of a configuration, used at the serialisation boundary.
//!
//! Layout: all purchased counts (base-major, type-minor), then all chartered counts (base-major,
//! type-minor, charter-period-minor), then one flag per base (1 = active).

use std::{error::Error, fmt};

use im::OrdMap;
use itertools::Itertools;
use model::base_types::{BaseIdx, VesselCount};
use model::FleetProblem;

use crate::configuration::{CharteredCell, PurchasedCell};
use crate::Configuration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::LengthMismatch { expected, actual } => write!(
                f,
                "encoded configuration has length {} but the problem requires {}",
                actual, expected
            ),
        }
    }
}

impl Error for DecodeError {}

pub fn encoded_length(problem: &FleetProblem) -> usize {
    let cells = problem.number_of_bases() * problem.number_of_vessel_types();
    cells + cells * problem.number_of_charter_periods() + problem.number_of_bases()
}

impl Configuration {
    pub fn encode(&self) -> Vec<VesselCount> {
        self.purchased_iter()
            .map(|(_, count)| count)
            .chain(self.chartered_iter().map(|(_, count)| count))
            .chain(self.base_active_iter().map(|(_, active)| active as VesselCount))
            .collect()
    }

    /// Only the length is checked. Bounds and base activity are taken as they are, any nonzero
    /// flag is an active base.
    pub fn decode(
        problem: &FleetProblem,
        encoded: &[VesselCount],
    ) -> Result<Configuration, DecodeError> {
        let expected = encoded_length(problem);
        if encoded.len() != expected {
            return Err(DecodeError::LengthMismatch {
                expected,
                actual: encoded.len(),
            });
        }
        let bases = problem.bases().collect_vec();
        let vessel_types = problem.vessel_types().collect_vec();
        let charter_periods = problem.charter_periods().collect_vec();
        let mut values = encoded.iter().copied();

        let purchased: OrdMap<PurchasedCell, VesselCount> = bases
            .iter()
            .cartesian_product(vessel_types.iter())
            .zip(values.by_ref())
            .map(|((&b, &vt), count)| ((b, vt), count))
            .collect();
        let chartered: OrdMap<CharteredCell, VesselCount> = bases
            .iter()
            .cartesian_product(vessel_types.iter())
            .cartesian_product(charter_periods.iter())
            .zip(values.by_ref())
            .map(|(((&b, &vt), &cp), count)| ((b, vt, cp), count))
            .collect();
        let base_active: OrdMap<BaseIdx, bool> = bases
            .iter()
            .zip(values)
            .map(|(&b, flag)| (b, flag != 0))
            .collect();
        Ok(Configuration::from_maps(base_active, purchased, chartered))
    }
}
