use cosmwasm_std::StdError;
use cw_asset::AssetError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SharedError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Asset(#[from] AssetError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Callbacks can only be invoked by the contract itself")]
    UnauthorizedCallbackOnlyCallableByContract {},

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Not supported asset info")]
    NotSupportedAssetInfo(),

    #[error("Contract name mismatch: stored {0}, expected {1}")]
    ContractMismatch(String, String),

    #[error("Cannot migrate from a newer version: stored {0}, new {1}")]
    MigrationDowngrade(String, String),
}
