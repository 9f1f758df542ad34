/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public CoinGecko adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    CoinGeckoClient,
    GeckoError,
    QueryParams,
    Result,
    Transport,
};

// Re-export all types
pub use types::*;
