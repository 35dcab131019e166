//! Driving-license categories.
//!
//! The backend stores a driver's categories as a `u32` bitmask (A=1, B=2, C=4,
//! D=8, E=16). [`LicenseCategories`] keeps that exact bit layout while letting
//! callers work with [`LicenseCategory`] values instead of raw bit operators.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Label shown when no category bit is set.
pub const NO_CATEGORY_LABEL: &str = "Nenhuma";

bitflags! {
    /// A set of license categories encoded as the backend's bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LicenseCategories: u32 {
        const A = 1 << 0;
        const B = 1 << 1;
        const C = 1 << 2;
        const D = 1 << 3;
        const E = 1 << 4;
    }
}

/// A single license category.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum LicenseCategory {
    A,
    B,
    C,
    D,
    E,
}

impl LicenseCategory {
    /// Display order, A through E.
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    #[must_use]
    pub const fn flag(self) -> LicenseCategories {
        match self {
            Self::A => LicenseCategories::A,
            Self::B => LicenseCategories::B,
            Self::C => LicenseCategories::C,
            Self::D => LicenseCategories::D,
            Self::E => LicenseCategories::E,
        }
    }

    /// The category whose bit equals `value` exactly, as submitted by a single-select control.
    #[must_use]
    pub fn from_bit(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.flag().bits() == value)
    }
}

impl LicenseCategories {
    /// Decodes a backend mask. Unknown bits are kept so the value round-trips unchanged.
    #[must_use]
    pub const fn from_mask(mask: u32) -> Self {
        Self::from_bits_retain(mask)
    }

    /// Known categories present in the set, always in A..E order.
    pub fn categories(self) -> impl Iterator<Item = LicenseCategory> {
        LicenseCategory::ALL.into_iter().filter(move |category| self.contains(category.flag()))
    }

    /// True when no known category bit is set.
    #[must_use]
    pub fn is_none(self) -> bool {
        self.categories().next().is_none()
    }

    /// Comma-joined category letters (`"A, C"`), or [`NO_CATEGORY_LABEL`].
    #[must_use]
    pub fn label(self) -> String {
        let letters: Vec<&'static str> = self.categories().map(<&'static str>::from).collect();
        if letters.is_empty() { NO_CATEGORY_LABEL.to_owned() } else { letters.join(", ") }
    }
}

impl From<LicenseCategory> for LicenseCategories {
    fn from(category: LicenseCategory) -> Self {
        category.flag()
    }
}

impl FromIterator<LicenseCategory> for LicenseCategories {
    fn from_iter<I: IntoIterator<Item = LicenseCategory>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, category| set | category.flag())
    }
}

impl From<u32> for LicenseCategories {
    fn from(mask: u32) -> Self {
        Self::from_mask(mask)
    }
}

impl Serialize for LicenseCategories {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for LicenseCategories {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}
