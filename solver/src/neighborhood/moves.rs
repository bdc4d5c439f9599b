// © 2023-2024 ETH Zurich
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// any later version.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use std::fmt;

use heuristic_framework::tabu_search::Reversible;
use model::base_types::{BaseIdx, CharterPeriodIdx, VesselTypeIdx};
use model::FleetProblem;
use solution::Configuration;

/// An elementary modification of a configuration. Moves are compared by value, they are the keys
/// of the tabu list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FleetMove {
    AddPurchased {
        base: BaseIdx,
        vessel_type: VesselTypeIdx,
    },
    RemovePurchased {
        base: BaseIdx,
        vessel_type: VesselTypeIdx,
    },
    /// one purchased vessel at `base` changes its type
    SwitchPurchasedType {
        base: BaseIdx,
        from: VesselTypeIdx,
        to: VesselTypeIdx,
    },
    /// one purchased vessel is stationed at another base
    SwitchPurchasedBase {
        vessel_type: VesselTypeIdx,
        from: BaseIdx,
        to: BaseIdx,
    },
    AddChartered {
        base: BaseIdx,
        vessel_type: VesselTypeIdx,
        charter_period: CharterPeriodIdx,
    },
    RemoveChartered {
        base: BaseIdx,
        vessel_type: VesselTypeIdx,
        charter_period: CharterPeriodIdx,
    },
    SwitchCharteredType {
        base: BaseIdx,
        charter_period: CharterPeriodIdx,
        from: VesselTypeIdx,
        to: VesselTypeIdx,
    },
    SwitchCharteredPeriod {
        base: BaseIdx,
        vessel_type: VesselTypeIdx,
        from: CharterPeriodIdx,
        to: CharterPeriodIdx,
    },
    SwitchCharteredBase {
        vessel_type: VesselTypeIdx,
        charter_period: CharterPeriodIdx,
        from: BaseIdx,
        to: BaseIdx,
    },
    /// deactivates the base and removes all its vessels
    CloseBase { base: BaseIdx },
    /// only ever used as reverse of CloseBase
    ReopenBase { base: BaseIdx },
    /// moves all vessels and the activity of an active base to an inactive one
    ReplaceBase { from: BaseIdx, to: BaseIdx },
}

use FleetMove::*;

impl Reversible for FleetMove {
    fn reverse(&self) -> FleetMove {
        match *self {
            AddPurchased { base, vessel_type } => RemovePurchased { base, vessel_type },
            RemovePurchased { base, vessel_type } => AddPurchased { base, vessel_type },
            SwitchPurchasedType { base, from, to } => SwitchPurchasedType {
                base,
                from: to,
                to: from,
            },
            SwitchPurchasedBase {
                vessel_type,
                from,
                to,
            } => SwitchPurchasedBase {
                vessel_type,
                from: to,
                to: from,
            },
            AddChartered {
                base,
                vessel_type,
                charter_period,
            } => RemoveChartered {
                base,
                vessel_type,
                charter_period,
            },
            RemoveChartered {
                base,
                vessel_type,
                charter_period,
            } => AddChartered {
                base,
                vessel_type,
                charter_period,
            },
            SwitchCharteredType {
                base,
                charter_period,
                from,
                to,
            } => SwitchCharteredType {
                base,
                charter_period,
                from: to,
                to: from,
            },
            SwitchCharteredPeriod {
                base,
                vessel_type,
                from,
                to,
            } => SwitchCharteredPeriod {
                base,
                vessel_type,
                from: to,
                to: from,
            },
            SwitchCharteredBase {
                vessel_type,
                charter_period,
                from,
                to,
            } => SwitchCharteredBase {
                vessel_type,
                charter_period,
                from: to,
                to: from,
            },
            CloseBase { base } => ReopenBase { base },
            ReopenBase { base } => CloseBase { base },
            ReplaceBase { from, to } => ReplaceBase { from: to, to: from },
        }
    }
}

impl FleetMove {
    /// The configuration after the move, or an error if the move is not applicable (nothing to
    /// remove) or would violate a capacity or market bound.
    pub fn apply(
        &self,
        configuration: &Configuration,
        problem: &FleetProblem,
    ) -> Result<Configuration, String> {
        match *self {
            AddPurchased { base, vessel_type } => {
                let count = configuration.purchased(base, vessel_type) + 1;
                let result = configuration.with_purchased(base, vessel_type, count);
                check_capacity(problem, &result, base, vessel_type)?;
                Ok(result)
            }
            RemovePurchased { base, vessel_type } => {
                let count = decremented(configuration.purchased(base, vessel_type), self)?;
                Ok(configuration.with_purchased(base, vessel_type, count))
            }
            SwitchPurchasedType { base, from, to } => {
                let from_count = decremented(configuration.purchased(base, from), self)?;
                let to_count = configuration.purchased(base, to) + 1;
                let result = configuration
                    .with_purchased(base, from, from_count)
                    .with_purchased(base, to, to_count);
                check_capacity(problem, &result, base, to)?;
                Ok(result)
            }
            SwitchPurchasedBase {
                vessel_type,
                from,
                to,
            } => {
                let from_count = decremented(configuration.purchased(from, vessel_type), self)?;
                let to_count = configuration.purchased(to, vessel_type) + 1;
                let result = configuration
                    .with_purchased(from, vessel_type, from_count)
                    .with_purchased(to, vessel_type, to_count);
                check_capacity(problem, &result, to, vessel_type)?;
                Ok(result)
            }
            AddChartered {
                base,
                vessel_type,
                charter_period,
            } => {
                let count = configuration.chartered(base, vessel_type, charter_period) + 1;
                let result =
                    configuration.with_chartered(base, vessel_type, charter_period, count);
                check_capacity(problem, &result, base, vessel_type)?;
                check_market(problem, configuration, vessel_type, charter_period)?;
                Ok(result)
            }
            RemoveChartered {
                base,
                vessel_type,
                charter_period,
            } => {
                let count = decremented(
                    configuration.chartered(base, vessel_type, charter_period),
                    self,
                )?;
                Ok(configuration.with_chartered(base, vessel_type, charter_period, count))
            }
            SwitchCharteredType {
                base,
                charter_period,
                from,
                to,
            } => {
                let from_count =
                    decremented(configuration.chartered(base, from, charter_period), self)?;
                let to_count = configuration.chartered(base, to, charter_period) + 1;
                let result = configuration
                    .with_chartered(base, from, charter_period, from_count)
                    .with_chartered(base, to, charter_period, to_count);
                check_capacity(problem, &result, base, to)?;
                check_market(problem, configuration, to, charter_period)?;
                Ok(result)
            }
            SwitchCharteredPeriod {
                base,
                vessel_type,
                from,
                to,
            } => {
                let from_count =
                    decremented(configuration.chartered(base, vessel_type, from), self)?;
                let to_count = configuration.chartered(base, vessel_type, to) + 1;
                let result = configuration
                    .with_chartered(base, vessel_type, from, from_count)
                    .with_chartered(base, vessel_type, to, to_count);
                check_capacity(problem, &result, base, vessel_type)?;
                check_market(problem, configuration, vessel_type, to)?;
                Ok(result)
            }
            SwitchCharteredBase {
                vessel_type,
                charter_period,
                from,
                to,
            } => {
                let from_count = decremented(
                    configuration.chartered(from, vessel_type, charter_period),
                    self,
                )?;
                let to_count = configuration.chartered(to, vessel_type, charter_period) + 1;
                let result = configuration
                    .with_chartered(from, vessel_type, charter_period, from_count)
                    .with_chartered(to, vessel_type, charter_period, to_count);
                check_capacity(problem, &result, to, vessel_type)?;
                Ok(result)
            }
            CloseBase { base } => {
                if !configuration.is_active(base) {
                    return Err(format!("{}: {} is not active.", self, base));
                }
                Ok(configuration.with_closed_base(base))
            }
            ReopenBase { base } => {
                if configuration.is_active(base) {
                    return Err(format!("{}: {} is already active.", self, base));
                }
                Ok(configuration.with_base_active(base, true))
            }
            ReplaceBase { from, to } => {
                if !configuration.is_active(from) || configuration.is_active(to) {
                    return Err(format!(
                        "{}: needs active {} and inactive {}.",
                        self, from, to
                    ));
                }
                let result = configuration.with_transplanted_base(from, to);
                for vessel_type in problem.vessel_types() {
                    check_capacity(problem, &result, to, vessel_type)?;
                }
                Ok(result)
            }
        }
    }
}

fn decremented(count: u32, mv: &FleetMove) -> Result<u32, String> {
    count
        .checked_sub(1)
        .ok_or_else(|| format!("{}: no vessel to remove.", mv))
}

/// purchased plus chartered vessels of the type at the base must fit its capacity in every
/// charter period
fn check_capacity(
    problem: &FleetProblem,
    configuration: &Configuration,
    base: BaseIdx,
    vessel_type: VesselTypeIdx,
) -> Result<(), String> {
    let capacity = problem.capacity_of(base, vessel_type);
    let count = configuration.peak_stationed(base, vessel_type);
    if count > capacity {
        return Err(format!(
            "{} of {} at {} exceeds capacity {}.",
            count, vessel_type, base, capacity
        ));
    }
    Ok(())
}

/// one more chartered vessel of this type in this period must be available on the market
fn check_market(
    problem: &FleetProblem,
    configuration: &Configuration,
    vessel_type: VesselTypeIdx,
    charter_period: CharterPeriodIdx,
) -> Result<(), String> {
    let available = problem.available_for_charter(vessel_type, charter_period);
    if configuration.chartered_total(vessel_type, charter_period) + 1 > available {
        return Err(format!(
            "only {} vessels of {} available for charter in {}.",
            available, vessel_type, charter_period
        ));
    }
    Ok(())
}

impl fmt::Display for FleetMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddPurchased { base, vessel_type } => {
                write!(f, "add purchased {} at {}", vessel_type, base)
            }
            RemovePurchased { base, vessel_type } => {
                write!(f, "remove purchased {} at {}", vessel_type, base)
            }
            SwitchPurchasedType { base, from, to } => {
                write!(f, "switch purchased type at {}: {} -> {}", base, from, to)
            }
            SwitchPurchasedBase {
                vessel_type,
                from,
                to,
            } => write!(f, "switch purchased {} base: {} -> {}", vessel_type, from, to),
            AddChartered {
                base,
                vessel_type,
                charter_period,
            } => write!(
                f,
                "add chartered {} at {} in {}",
                vessel_type, base, charter_period
            ),
            RemoveChartered {
                base,
                vessel_type,
                charter_period,
            } => write!(
                f,
                "remove chartered {} at {} in {}",
                vessel_type, base, charter_period
            ),
            SwitchCharteredType {
                base,
                charter_period,
                from,
                to,
            } => write!(
                f,
                "switch chartered type at {} in {}: {} -> {}",
                base, charter_period, from, to
            ),
            SwitchCharteredPeriod {
                base,
                vessel_type,
                from,
                to,
            } => write!(
                f,
                "switch chartered {} period at {}: {} -> {}",
                vessel_type, base, from, to
            ),
            SwitchCharteredBase {
                vessel_type,
                charter_period,
                from,
                to,
            } => write!(
                f,
                "switch chartered {} base in {}: {} -> {}",
                vessel_type, charter_period, from, to
            ),
            CloseBase { base } => write!(f, "close {}", base),
            ReopenBase { base } => write!(f, "reopen {}", base),
            ReplaceBase { from, to } => write!(f, "replace {} by {}", from, to),
        }
    }
}
