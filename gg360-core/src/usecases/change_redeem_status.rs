use super::{notify, prelude::*};
use crate::transition::next_state;

/// Moves a redeem one step along `pending -> shipped -> delivered`.
///
/// Invalid transitions are rejected before anything is sent.
pub fn change_redeem_status<G, N>(
    gw: &G,
    notifications: &N,
    id: &Id,
    requested: RedeemStatus,
) -> Result<Redeem>
where
    G: Collection<Redeem> + StatusChange<Redeem>,
    N: NotificationStore,
{
    let redeem = gw.get(id)?;
    let current = redeem.status.ok_or(Error::UnknownStatus)?;
    let next = next_state(current, requested)?;
    let updated = gw.change_status(id, next)?;
    let reward = redeem.reward_name.as_deref().unwrap_or("reward");
    notify(
        notifications,
        "Redeem status updated",
        format!("Redeem {id} ({reward}) marked as {}", next.label()),
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::*, *};
    use crate::notification::InMemoryInbox;

    fn gateway_with(status: Option<RedeemStatus>) -> MockGateway {
        let gw = MockGateway::default();
        let mut redeem = Redeem::build().id("r1").reward("Tote bag", 100).finish();
        redeem.status = status;
        gw.redeems.borrow_mut().push(redeem);
        gw
    }

    #[test]
    fn ship_pending_redeem() {
        let gw = gateway_with(Some(RedeemStatus::Pending));
        let inbox = InMemoryInbox::default();
        let updated =
            change_redeem_status(&gw, &inbox, &"r1".into(), RedeemStatus::Shipped).unwrap();
        assert_eq!(updated.status, Some(RedeemStatus::Shipped));
        assert_eq!(gw.redeems.borrow()[0].status, Some(RedeemStatus::Shipped));
        assert_eq!(gw.status_changes.get(), 1);
        let notifications = inbox.list().unwrap();
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0].message,
            "Redeem r1 (Tote bag) marked as shipped"
        );
    }

    #[test]
    fn rejected_transitions_are_never_sent() {
        let gw = gateway_with(Some(RedeemStatus::Pending));
        let inbox = InMemoryInbox::default();
        let err = change_redeem_status(&gw, &inbox, &"r1".into(), RedeemStatus::Delivered)
            .unwrap_err();
        assert_eq!(err.to_string(), "Can only mark pending redeems as shipped");
        assert_eq!(gw.status_changes.get(), 0);
        assert_eq!(gw.redeems.borrow()[0].status, Some(RedeemStatus::Pending));
        assert!(inbox.list().unwrap().is_empty());
    }

    #[test]
    fn delivered_is_final() {
        let gw = gateway_with(Some(RedeemStatus::Delivered));
        let inbox = InMemoryInbox::default();
        let err =
            change_redeem_status(&gw, &inbox, &"r1".into(), RedeemStatus::Pending).unwrap_err();
        assert!(matches!(err, Error::Transition(_)));
        assert_eq!(gw.status_changes.get(), 0);
    }

    #[test]
    fn unknown_current_status() {
        let gw = gateway_with(None);
        let inbox = InMemoryInbox::default();
        let err =
            change_redeem_status(&gw, &inbox, &"r1".into(), RedeemStatus::Shipped).unwrap_err();
        assert!(matches!(err, Error::UnknownStatus));
        assert_eq!(gw.status_changes.get(), 0);
    }

    #[test]
    fn missing_redeem() {
        let gw = MockGateway::default();
        let inbox = InMemoryInbox::default();
        let err =
            change_redeem_status(&gw, &inbox, &"r9".into(), RedeemStatus::Shipped).unwrap_err();
        assert!(matches!(err, Error::Gateway(crate::gateways::Error::NotFound)));
    }
}
