use thiserror::Error;

use crate::{
    export, gateways,
    transition::TransitionRejected,
    util::validate::RedeemInvalidation,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid id")]
    Id,
    #[error(transparent)]
    Redeem(#[from] RedeemInvalidation),
    #[error(transparent)]
    Transition(#[from] TransitionRejected),
    #[error("The record already has the status '{0}'")]
    SameStatus(&'static str),
    #[error("The current status of the record is unknown")]
    UnknownStatus,
    #[error(transparent)]
    Gateway(#[from] gateways::Error),
    #[error(transparent)]
    Export(#[from] export::Error),
}
