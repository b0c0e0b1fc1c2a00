use crate::error::CoreError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Declares a closed set of labels as they appear in the input tables.
///
/// Variants are listed in ascending label order so the derived `Ord` agrees
/// with sorting by the label text.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label used for this value in the input tables.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| CoreError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

labelled_enum! {
    /// The content niche an influencer publishes in.
    Category, "category" {
        Beauty => "Beauty",
        Fashion => "Fashion",
        Fitness => "Fitness",
        HealthAndWellness => "Health & Wellness",
        Lifestyle => "Lifestyle",
    }
}

labelled_enum! {
    /// Audience-gender label attached to an influencer.
    Gender, "gender" {
        Female => "Female",
        Male => "Male",
    }
}

labelled_enum! {
    /// A social platform, used both as an influencer's primary platform and
    /// as the referring source of a conversion event.
    Platform, "platform" {
        Instagram => "Instagram",
        Twitter => "Twitter",
        YouTube => "YouTube",
    }
}

labelled_enum! {
    Campaign, "campaign" {
        NewLaunch => "NewLaunch",
        SummerSale => "SummerSale",
        WinterSpecial => "WinterSpecial",
    }
}

labelled_enum! {
    Product, "product" {
        EnergyBar => "EnergyBar",
        GymWear => "GymWear",
        ProteinPowder => "ProteinPowder",
        Vitamins => "Vitamins",
    }
}

labelled_enum! {
    /// The unit a payout rate is charged against.
    PayoutBasis, "payout basis" {
        Order => "order",
        Post => "post",
    }
}
