use thiserror::Error;

use crate::entities::RedeemStatus;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct TransitionRejected {
    pub from: RedeemStatus,
    pub to: RedeemStatus,
    pub reason: &'static str,
}

/// Checks a requested redeem status change.
///
/// The only valid transitions are `pending -> shipped` and
/// `shipped -> delivered`; `delivered` is terminal.
pub fn next_state(
    current: RedeemStatus,
    requested: RedeemStatus,
) -> Result<RedeemStatus, TransitionRejected> {
    use RedeemStatus as S;
    let reason = match (current, requested) {
        (from, _) if from.is_terminal() => "Delivered redeems cannot change status",
        (S::Pending, S::Shipped) | (S::Shipped, S::Delivered) => return Ok(requested),
        (S::Pending, _) => "Can only mark pending redeems as shipped",
        _ => "Can only mark shipped redeems as delivered",
    };
    Err(TransitionRejected {
        from: current,
        to: requested,
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn valid_transitions() {
        assert_eq!(
            next_state(RedeemStatus::Pending, RedeemStatus::Shipped),
            Ok(RedeemStatus::Shipped)
        );
        assert_eq!(
            next_state(RedeemStatus::Shipped, RedeemStatus::Delivered),
            Ok(RedeemStatus::Delivered)
        );
    }

    #[test]
    fn pending_cannot_skip_shipping() {
        let err = next_state(RedeemStatus::Pending, RedeemStatus::Delivered).unwrap_err();
        assert_eq!(err.to_string(), "Can only mark pending redeems as shipped");
        assert_eq!(err.from, RedeemStatus::Pending);
        assert_eq!(err.to, RedeemStatus::Delivered);
    }

    #[test]
    fn shipped_cannot_go_back() {
        let err = next_state(RedeemStatus::Shipped, RedeemStatus::Pending).unwrap_err();
        assert_eq!(err.to_string(), "Can only mark shipped redeems as delivered");
    }

    #[test]
    fn delivered_is_terminal() {
        for requested in RedeemStatus::iter() {
            let err = next_state(RedeemStatus::Delivered, requested).unwrap_err();
            assert_eq!(err.reason, "Delivered redeems cannot change status");
        }
    }

    #[test]
    fn same_state_is_rejected() {
        for status in RedeemStatus::iter() {
            assert!(next_state(status, status).is_err());
        }
    }
}
