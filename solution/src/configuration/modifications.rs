use model::base_types::{BaseIdx, CharterPeriodIdx, VesselCount, VesselTypeIdx};

use super::Configuration;

// modifications: each one returns a new configuration, the original is left untouched.
// Bounds are not checked here.
impl Configuration {
    pub fn with_base_active(&self, base: BaseIdx, active: bool) -> Configuration {
        Configuration::from_maps(
            self.base_active.update(base, active),
            self.purchased.clone(),
            self.chartered.clone(),
        )
    }

    pub fn with_purchased(
        &self,
        base: BaseIdx,
        vessel_type: VesselTypeIdx,
        count: VesselCount,
    ) -> Configuration {
        Configuration::from_maps(
            self.base_active.clone(),
            self.purchased.update((base, vessel_type), count),
            self.chartered.clone(),
        )
    }

    pub fn with_chartered(
        &self,
        base: BaseIdx,
        vessel_type: VesselTypeIdx,
        charter_period: CharterPeriodIdx,
        count: VesselCount,
    ) -> Configuration {
        Configuration::from_maps(
            self.base_active.clone(),
            self.purchased.clone(),
            self.chartered
                .update((base, vessel_type, charter_period), count),
        )
    }

    /// Sets all cells of the base to zero, the activity flag is kept.
    pub fn with_cleared_base(&self, base: BaseIdx) -> Configuration {
        let purchased = self
            .purchased
            .iter()
            .map(|(&(b, vt), &count)| ((b, vt), if b == base { 0 } else { count }))
            .collect();
        let chartered = self
            .chartered
            .iter()
            .map(|(&(b, vt, cp), &count)| ((b, vt, cp), if b == base { 0 } else { count }))
            .collect();
        Configuration::from_maps(self.base_active.clone(), purchased, chartered)
    }

    /// Zeroes all cells of the base and deactivates it.
    pub fn with_closed_base(&self, base: BaseIdx) -> Configuration {
        self.with_cleared_base(base).with_base_active(base, false)
    }

    /// Moves all cell values and the activity flag from `from` to `to`. The former cells of `to`
    /// are overwritten, the cells of `from` become zero.
    pub fn with_transplanted_base(&self, from: BaseIdx, to: BaseIdx) -> Configuration {
        let purchased = self
            .purchased
            .iter()
            .map(|(&(b, vt), _)| {
                let count = if b == to {
                    self.purchased(from, vt)
                } else if b == from {
                    0
                } else {
                    self.purchased(b, vt)
                };
                ((b, vt), count)
            })
            .collect();
        let chartered = self
            .chartered
            .iter()
            .map(|(&(b, vt, cp), _)| {
                let count = if b == to {
                    self.chartered(from, vt, cp)
                } else if b == from {
                    0
                } else {
                    self.chartered(b, vt, cp)
                };
                ((b, vt, cp), count)
            })
            .collect();
        let base_active = self
            .base_active
            .update(to, self.is_active(from))
            .update(from, false);
        Configuration::from_maps(base_active, purchased, chartered)
    }
}
