use derive_more::Display;
use derive_more::From;

pub type Idx = u16;

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "base{}", _0)]
pub struct BaseIdx(Idx);

#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "vt{}", _0)]
pub struct VesselTypeIdx(Idx);

/// A contiguous window of planning periods in which chartered counts are fixed.
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "cp{}", _0)]
pub struct CharterPeriodIdx(Idx);

/// A single planning period (one day of the horizon).
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "p{}", _0)]
pub struct PeriodIdx(Idx);

macro_rules! impl_idx {
    ($($t:ty),*) => {
        $(
            impl $t {
                pub fn idx(&self) -> usize {
                    self.0 as usize
                }
            }
        )*
    };
}

impl_idx!(BaseIdx, VesselTypeIdx, CharterPeriodIdx, PeriodIdx);

pub type VesselCount = u32;
pub type Cost = f64;
pub type Hours = f64;
pub type Kilometer = f64;
