//! Identifier types for PTV entities.
//!
//! PTV identifies stops, runs and routes with plain integers. Wrapping them
//! keeps a stop id from being passed where a run id is expected.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Error returned when parsing an identifier from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {input:?}")]
pub struct InvalidId {
    kind: &'static str,
    input: String,
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $repr:ty, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub $repr);

        impl $name {
            /// Returns the raw numeric value.
            pub fn get(self) -> $repr {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<$repr>().map($name).map_err(|_| InvalidId {
                    kind: $kind,
                    input: s.to_string(),
                })
            }
        }
    };
}

numeric_id!(
    /// A PTV stop (station) identifier, e.g. `1162` for Richmond.
    StopId,
    u32,
    "stop"
);

numeric_id!(
    /// Identifies one vehicle trip. Unique for a given day and route type.
    RunId,
    u64,
    "run"
);

numeric_id!(
    /// A PTV route (line) identifier.
    RouteId,
    u32,
    "route"
);

numeric_id!(
    /// A direction of travel along a route.
    DirectionId,
    u32,
    "direction"
);

/// Transport mode as numbered by PTV.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct RouteType(pub u8);

impl RouteType {
    pub const TRAIN: RouteType = RouteType(0);
    pub const TRAM: RouteType = RouteType(1);
    pub const BUS: RouteType = RouteType(2);
    pub const VLINE: RouteType = RouteType(3);
    pub const NIGHT_BUS: RouteType = RouteType(4);
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
