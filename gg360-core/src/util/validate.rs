use lazy_static::lazy_static;
use regex::Regex;
use strum::{Display, EnumIter, IntoStaticStr};
use thiserror::Error;

use crate::entities::{NewRedeem, ShippingInfo};

lazy_static! {
    static ref POSTAL_CODE_REGEX: Regex = Regex::new(r"^\d{5,6}$").unwrap();
    static ref PLACE_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z ]+$").unwrap();
}

const PHONE_DIGITS: usize = 10;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr, Display)]
pub enum ShippingField {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "address")]
    Address,
    #[strum(serialize = "phone")]
    Phone,
    #[strum(serialize = "city")]
    City,
    #[strum(serialize = "state")]
    State,
    #[strum(serialize = "postal code")]
    PostalCode,
}

/// The offending fields of a shipping address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid shipping information ({})", join(.0))]
pub struct ShippingInvalidation(pub Vec<ShippingField>);

fn join(fields: &[ShippingField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn postal_code(code: &str) -> bool {
    POSTAL_CODE_REGEX.is_match(code.trim())
}

/// Letters and spaces only.
pub fn place_name(name: &str) -> bool {
    PLACE_NAME_REGEX.is_match(name.trim())
}

/// Ten digits, ignoring spaces, dashes, dots and parentheses.
pub fn phone(phone: &str) -> bool {
    let mut digits = 0;
    for c in phone.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return false,
        }
    }
    digits == PHONE_DIGITS
}

impl Validate for ShippingInfo {
    type Error = ShippingInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        let checks: [(ShippingField, &Option<String>, fn(&str) -> bool); 6] = [
            (ShippingField::Name, &self.name, |_| true),
            (ShippingField::Address, &self.address, |_| true),
            (ShippingField::Phone, &self.phone, phone),
            (ShippingField::City, &self.city, place_name),
            (ShippingField::State, &self.state, place_name),
            (ShippingField::PostalCode, &self.postal_code, postal_code),
        ];
        let invalid: Vec<_> = checks
            .into_iter()
            .filter(|(_, value, is_valid)| !non_blank(value).is_some_and(is_valid))
            .map(|(field, _, _)| field)
            .collect();
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(ShippingInvalidation(invalid))
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RedeemInvalidation {
    #[error("Missing user")]
    User,
    #[error("Missing reward")]
    Reward,
    #[error(transparent)]
    Shipping(#[from] ShippingInvalidation),
}

impl Validate for NewRedeem {
    type Error = RedeemInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if !self.user_id.is_valid() {
            return Err(RedeemInvalidation::User);
        }
        if self.reward_name.trim().is_empty() {
            return Err(RedeemInvalidation::Reward);
        }
        self.shipping_info.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            name: Some("Asha Rao".into()),
            address: Some("12 Lake View".into()),
            phone: Some("98765-43210".into()),
            city: Some("Pune".into()),
            state: Some("Maharashtra".into()),
            postal_code: Some("411001".into()),
        }
    }

    #[test]
    fn postal_codes() {
        assert!(postal_code("12345"));
        assert!(postal_code("411001"));
        assert!(!postal_code("1234"));
        assert!(!postal_code("1234567"));
        assert!(!postal_code("12a45"));
    }

    #[test]
    fn place_names() {
        assert!(place_name("New Delhi"));
        assert!(!place_name("Pune 1"));
        assert!(!place_name("St. Louis"));
    }

    #[test]
    fn phone_numbers() {
        assert!(phone("9876543210"));
        assert!(phone("(987) 654-3210"));
        assert!(!phone("987654321"));
        assert!(!phone("+919876543210"));
    }

    #[test]
    fn valid_shipping_info() {
        assert!(shipping().validate().is_ok());
    }

    #[test]
    fn reports_offending_fields() {
        let mut info = shipping();
        info.postal_code = Some("12".into());
        info.city = Some("Pune 1".into());
        info.state = Some("  ".into());
        info.address = None;
        let err = info.validate().unwrap_err();
        assert_eq!(
            err.0,
            vec![
                ShippingField::Address,
                ShippingField::City,
                ShippingField::State,
                ShippingField::PostalCode
            ]
        );
        assert_eq!(
            err.to_string(),
            "Invalid shipping information (address, city, state, postal code)"
        );
    }

    #[test]
    fn new_redeem() {
        let mut new = NewRedeem {
            user_id: "u1".into(),
            reward_name: "Tote bag".into(),
            reward_points: 100,
            shipping_info: shipping(),
        };
        assert!(new.validate().is_ok());
        new.shipping_info.phone = None;
        assert_eq!(
            new.validate(),
            Err(RedeemInvalidation::Shipping(ShippingInvalidation(vec![
                ShippingField::Phone
            ])))
        );
        new.reward_name = " ".into();
        assert_eq!(new.validate(), Err(RedeemInvalidation::Reward));
        new.user_id = "".into();
        assert_eq!(new.validate(), Err(RedeemInvalidation::User));
    }
}
