/*
[INPUT]:  Documented value sets for enumerated request parameters
[OUTPUT]: Typed Rust enums with wire values, parsing and serde support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the provider documents a new value for a parameter
*/

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Declares a closed set of wire values for one request parameter.
///
/// Parsing a value outside the set yields `ValidationError::NotOneOf`
/// tagged with the parameter name. `FromStr` reports the declared name;
/// `parse_as` reports a caller-chosen one for enums shared by several
/// parameters.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every value accepted by the provider, in documented order.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            pub fn parse_as(field: &'static str, value: &str) -> Result<Self, ValidationError> {
                match value {
                    $($wire => Ok($name::$variant),)+
                    other => Err(ValidationError::not_one_of(field, other, Self::VALUES)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse_as($field, value)
            }
        }
    };
}

wire_enum! {
    /// Listing status filter for `/coins/list`
    CoinStatus, field = "status" {
        Active => "active",
        Inactive => "inactive",
    }
}

wire_enum! {
    /// Time bucket for price-change percentages; also the top movers `duration`
    PriceChangeWindow, field = "price_change_percentage" {
        OneHour => "1h",
        OneDay => "24h",
        SevenDays => "7d",
        FourteenDays => "14d",
        ThirtyDays => "30d",
        TwoHundredDays => "200d",
        OneYear => "1y",
    }
}

wire_enum! {
    MarketsOrder, field = "order" {
        MarketCapDesc => "market_cap_desc",
        MarketCapAsc => "market_cap_asc",
        GeckoDesc => "gecko_desc",
        GeckoAsc => "gecko_asc",
        VolumeDesc => "volume_desc",
        VolumeAsc => "volume_asc",
        IdDesc => "id_desc",
        IdAsc => "id_asc",
    }
}

wire_enum! {
    /// Response language for localized fields
    Locale, field = "locale" {
        En => "en",
        De => "de",
        Es => "es",
        Fr => "fr",
        It => "it",
        Pt => "pt",
        Ru => "ru",
        Ko => "ko",
        Ja => "ja",
        Zh => "zh",
    }
}

wire_enum! {
    CategoriesOrder, field = "order" {
        MarketCapDesc => "market_cap_desc",
        MarketCapAsc => "market_cap_asc",
        NameDesc => "name_desc",
        NameAsc => "name_asc",
        MarketCapChange24hDesc => "market_cap_change_24h_desc",
        MarketCapChange24hAsc => "market_cap_change_24h_asc",
    }
}

wire_enum! {
    /// Ordering of coin and exchange tickers
    TickersOrder, field = "order" {
        TrustScoreDesc => "trust_score_desc",
        TrustScoreAsc => "trust_score_asc",
        VolumeDesc => "volume_desc",
        VolumeAsc => "volume_asc",
        IdDesc => "id_desc",
        IdAsc => "id_asc",
    }
}

wire_enum! {
    NftMarketsOrder, field = "order" {
        MarketCapDesc => "market_cap_desc",
        MarketCapAsc => "market_cap_asc",
        VolumeDesc => "volume_desc",
        VolumeAsc => "volume_asc",
        IdDesc => "id_desc",
        IdAsc => "id_asc",
    }
}

wire_enum! {
    NftTickersOrder, field = "order" {
        TrustScoreDesc => "trust_score_desc",
        TrustScoreAsc => "trust_score_asc",
        VolumeDesc => "volume_desc",
        VolumeAsc => "volume_asc",
    }
}

wire_enum! {
    /// Which derivative tickers to embed in an exchange response
    DerivativeTickersFilter, field = "include_tickers" {
        Unexpired => "unexpired",
        All => "all",
    }
}

wire_enum! {
    /// Coins with published public-company treasury data
    TreasuryCoin, field = "coin_id" {
        Bitcoin => "bitcoin",
        Ethereum => "ethereum",
    }
}
