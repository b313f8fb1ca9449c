mod cui;
mod nit;

pub use crate::checksum::cui::CuiChecksum;
pub use crate::checksum::nit::NitChecksum;

use lazy_static::lazy_static;
use metrics::{counter, Counter};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

pub trait Validator: Send + Sync {
    fn is_valid(&self, input: &str) -> bool;
}

/// Identifier validators selectable from field configuration.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(tag = "type")]
pub enum IdentifierValidator {
    CuiChecksum,
    NitChecksum,
}

// Counter handles are created once and shared across calls.
struct RejectionMetrics {
    cui: Counter,
    nit: Counter,
}

impl RejectionMetrics {
    fn new() -> Self {
        RejectionMetrics {
            cui: Self::rejected(IdentifierValidator::CuiChecksum),
            nit: Self::rejected(IdentifierValidator::NitChecksum),
        }
    }

    fn rejected(kind: IdentifierValidator) -> Counter {
        let kind: &'static str = kind.into();
        counter!("identifier_validation.rejected", "kind" => kind)
    }
}

lazy_static! {
    static ref REJECTIONS: RejectionMetrics = RejectionMetrics::new();
}

impl Validator for IdentifierValidator {
    fn is_valid(&self, input: &str) -> bool {
        let accepted = match self {
            IdentifierValidator::CuiChecksum => CuiChecksum.is_valid(input),
            IdentifierValidator::NitChecksum => NitChecksum.is_valid(input),
        };
        if !accepted {
            match self {
                IdentifierValidator::CuiChecksum => REJECTIONS.cui.increment(1),
                IdentifierValidator::NitChecksum => REJECTIONS.nit.increment(1),
            }
        }
        accepted
    }
}
