use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Lifecycle of an order, shared by orders and the expeditions dispatching them.
///
/// Orders carry it as an integer (`0..=4`); expedition records carry the member
/// name. Both forms deserialize, and `Cancelled` is accepted as an input alias
/// of [`OrderStatus::Canceled`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, IntoStaticStr,
)]
#[repr(u8)]
pub enum OrderStatus {
    Pending = 0,
    InSeparation = 1,
    InTransit = 2,
    Delivered = 3,
    #[strum(serialize = "Canceled", serialize = "Cancelled", to_string = "Canceled")]
    Canceled = 4,
}

impl OrderStatus {
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(Self::Pending),
            1 => Some(Self::InSeparation),
            2 => Some(Self::InTransit),
            3 => Some(Self::Delivered),
            4 => Some(Self::Canceled),
            _ => None,
        }
    }

    /// Member name as the backend spells it.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// pt-BR label used in tables and badges.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendente",
            Self::InSeparation => "Em Separação",
            Self::InTransit => "Em Trânsito",
            Self::Delivered => "Entregue",
            Self::Canceled => "Cancelado",
        }
    }

    /// Delivered and canceled orders are final.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Canceled)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(StatusVisitor)
    }
}

struct StatusVisitor;

impl Visitor<'_> for StatusVisitor {
    type Value = OrderStatus;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an order status code (0-4) or member name")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        OrderStatus::from_code(value)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        u64::try_from(value)
            .ok()
            .and_then(OrderStatus::from_code)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(|_| E::unknown_variant(value, VARIANT_NAMES))
    }
}

const VARIANT_NAMES: &[&str] =
    &["Pending", "InSeparation", "InTransit", "Delivered", "Canceled", "Cancelled"];

/// Serde adapter for fields that may be missing, empty, or carry a status the
/// dashboard does not know. All of those become `None`.
pub mod lenient {
    use super::OrderStatus;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Known(OrderStatus),
        Other(serde::de::IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OrderStatus>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Known(status)) => Some(status),
            Some(Raw::Other(_)) | None => None,
        })
    }

    /// Writes the member name, matching how expedition records carry it.
    #[allow(clippy::ref_option)]
    pub fn serialize<S>(status: &Option<OrderStatus>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        status.map(OrderStatus::name).serialize(serializer)
    }
}
