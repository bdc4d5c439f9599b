use std::ops::Range;

use crate::base_types::{CharterPeriodIdx, Idx, PeriodIdx};

/// Partition of the planning horizon into contiguous windows of equal length (the last window
/// might be shorter). Chartered vessels are hired for a whole window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharterPeriods {
    windows: Vec<Range<Idx>>,
}

impl CharterPeriods {
    /// length must be positive, otherwise there is no partition.
    pub fn new(planning_horizon: Idx, length: Idx) -> Option<CharterPeriods> {
        if length == 0 {
            return None;
        }
        let windows = (0..planning_horizon)
            .step_by(length as usize)
            .map(|start| start..(start.saturating_add(length)).min(planning_horizon))
            .collect();
        Some(CharterPeriods { windows })
    }

    pub fn iter(&self) -> impl Iterator<Item = CharterPeriodIdx> + '_ {
        (0..self.windows.len()).map(|i| CharterPeriodIdx::from(i as Idx))
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn charter_period_of(&self, period: PeriodIdx) -> Option<CharterPeriodIdx> {
        self.windows
            .iter()
            .position(|window| window.contains(&(period.idx() as Idx)))
            .map(|i| CharterPeriodIdx::from(i as Idx))
    }

    pub fn periods_of(&self, charter_period: CharterPeriodIdx) -> impl Iterator<Item = PeriodIdx> {
        self.windows
            .get(charter_period.idx())
            .cloned()
            .unwrap_or(0..0)
            .map(PeriodIdx::from)
    }

    /// number of planning periods covered by the window
    pub fn length_of(&self, charter_period: CharterPeriodIdx) -> usize {
        self.windows
            .get(charter_period.idx())
            .map(|window| window.len())
            .unwrap_or(0)
    }
}
