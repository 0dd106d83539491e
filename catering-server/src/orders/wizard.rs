//! Wizard stage machine
//!
//! Linear, back-navigable sequence: Landing -> CustomerInfo -> Ordering ->
//! Report. The only guarded transition is CustomerInfo -> Ordering, which
//! requires a non-empty customer name and phone. The summary itself is
//! computable from any stage.

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::CustomerParams;

/// The four wizard stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStage {
    Landing,
    CustomerInfo,
    Ordering,
    Report,
}

impl WizardStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::CustomerInfo => "customer_info",
            Self::Ordering => "ordering",
            Self::Report => "report",
        }
    }

    /// Advance to the next stage
    ///
    /// Report is terminal: advancing from it stays on Report.
    pub fn advance(self, customer: &CustomerParams) -> AppResult<WizardStage> {
        match self {
            Self::Landing => Ok(Self::CustomerInfo),
            Self::CustomerInfo => {
                if customer.name().trim().is_empty() || customer.phone().trim().is_empty() {
                    return Err(AppError::with_message(
                        ErrorCode::StageBlocked,
                        "customer name and phone are required before ordering",
                    ));
                }
                Ok(Self::Ordering)
            }
            Self::Ordering => Ok(Self::Report),
            Self::Report => Ok(Self::Report),
        }
    }

    /// Step back one stage; Landing stays on Landing
    pub fn back(self) -> WizardStage {
        match self {
            Self::Landing | Self::CustomerInfo => Self::Landing,
            Self::Ordering => Self::CustomerInfo,
            Self::Report => Self::Ordering,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer_with_contact() -> CustomerParams {
        let mut params = CustomerParams::new();
        params.set_field("name", json!("Chen"));
        params.set_field("phone", json!("13800000000"));
        params
    }

    #[test]
    fn test_full_forward_walk() {
        let customer = customer_with_contact();
        let mut stage = WizardStage::Landing;
        for expected in [
            WizardStage::CustomerInfo,
            WizardStage::Ordering,
            WizardStage::Report,
        ] {
            stage = stage.advance(&customer).unwrap();
            assert_eq!(stage, expected);
        }
        // Report is terminal
        assert_eq!(stage.advance(&customer).unwrap(), WizardStage::Report);
    }

    #[test]
    fn test_ordering_gated_on_name_and_phone() {
        let empty = CustomerParams::new();
        let err = WizardStage::CustomerInfo.advance(&empty).unwrap_err();
        assert_eq!(err.code, ErrorCode::StageBlocked);

        let mut name_only = CustomerParams::new();
        name_only.set_field("name", json!("Chen"));
        assert!(WizardStage::CustomerInfo.advance(&name_only).is_err());

        assert_eq!(
            WizardStage::CustomerInfo
                .advance(&customer_with_contact())
                .unwrap(),
            WizardStage::Ordering
        );
    }

    #[test]
    fn test_whitespace_contact_is_rejected() {
        let mut params = CustomerParams::new();
        params.set_field("name", json!("   "));
        params.set_field("phone", json!("13800000000"));
        assert!(WizardStage::CustomerInfo.advance(&params).is_err());
    }

    #[test]
    fn test_back_navigation() {
        assert_eq!(WizardStage::Report.back(), WizardStage::Ordering);
        assert_eq!(WizardStage::Ordering.back(), WizardStage::CustomerInfo);
        assert_eq!(WizardStage::CustomerInfo.back(), WizardStage::Landing);
        assert_eq!(WizardStage::Landing.back(), WizardStage::Landing);
    }

    #[test]
    fn test_landing_advances_without_validation() {
        let empty = CustomerParams::new();
        assert_eq!(
            WizardStage::Landing.advance(&empty).unwrap(),
            WizardStage::CustomerInfo
        );
    }
}
