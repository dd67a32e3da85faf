use super::prelude::*;
use crate::util::validate::Validate;

pub fn create_redeem<G: RedeemRequests>(gw: &G, new_redeem: NewRedeem) -> Result<Redeem> {
    new_redeem.validate()?;
    let redeem = gw.create_redeem(&new_redeem)?;
    log::info!(
        "Requested {} for user {} ({} points)",
        new_redeem.reward_name,
        new_redeem.user_id,
        new_redeem.reward_points
    );
    Ok(redeem)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::util::validate::{RedeemInvalidation, ShippingField};

    fn new_redeem() -> NewRedeem {
        NewRedeem {
            user_id: "u1".into(),
            reward_name: "Tote bag".into(),
            reward_points: 100,
            shipping_info: ShippingInfo {
                name: Some("Asha Rao".into()),
                address: Some("12 Lake View".into()),
                phone: Some("9876543210".into()),
                city: Some("Pune".into()),
                state: Some("Maharashtra".into()),
                postal_code: Some("411001".into()),
            },
        }
    }

    #[test]
    fn create_valid_redeem() {
        let gw = MockGateway::default();
        let redeem = create_redeem(&gw, new_redeem()).unwrap();
        assert_eq!(redeem.status, Some(RedeemStatus::Pending));
        assert_eq!(redeem.reward_points, Some(100));
        assert_eq!(gw.redeems.borrow().len(), 1);
    }

    #[test]
    fn invalid_shipping_info_is_not_sent() {
        let gw = MockGateway::default();
        let mut new = new_redeem();
        new.shipping_info.postal_code = Some("4110".into());
        let err = create_redeem(&gw, new).unwrap_err();
        match err {
            Error::Redeem(RedeemInvalidation::Shipping(invalid)) => {
                assert_eq!(invalid.0, vec![ShippingField::PostalCode]);
            }
            _ => panic!("unexpected error: {err}"),
        }
        assert!(gw.redeems.borrow().is_empty());
    }
}
