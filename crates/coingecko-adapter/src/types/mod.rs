/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed request descriptors, response models and validation
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod coins;
pub mod derivatives;
pub mod enums;
pub mod exchanges;
pub mod market;
pub mod nfts;
pub mod requests;
pub(crate) mod serde_helpers;
pub mod validation;

pub use coins::*;
pub use derivatives::*;
pub use enums::*;
pub use exchanges::*;
pub use market::*;
pub use nfts::*;
pub use requests::*;
pub use validation::{Validate, ValidationError, ValidationErrorKind};
