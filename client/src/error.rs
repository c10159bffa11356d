use thiserror::Error;

use crate::storage::ReadError;

/// Errors surfaced by the client. Lookup failures carry the dictionary and
/// item key that was being resolved when the node call failed.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid owner identity `{0}`")]
    InvalidIdentity(String),
    #[error("failed to encode canonical key bytes: {0}")]
    Encoding(String),
    #[error("lookup failed for item key `{item_key}` in `{dictionary}`: {source}")]
    LookupFailed {
        dictionary: String,
        item_key: String,
        #[source]
        source: ReadError,
    },
    #[error("failed to resolve contract named keys: {0}")]
    NamedKeysUnavailable(#[source] ReadError),
    #[error("missing storage uref for `{0}`")]
    MissingStorageUref(String),
    #[error("unexpected stored value under `{0}`")]
    InvalidStoredValue(String),
    #[error("unexpected key variant")]
    UnexpectedKeyVariant,
    #[error("invalid whitelist mode `{0}`")]
    InvalidWhitelistMode(u8),
    #[error("invalid holder mode `{0}`")]
    InvalidHolderMode(u8),
    #[error("invalid minting mode `{0}`")]
    InvalidMintingMode(u8),
    #[error("invalid nft kind `{0}`")]
    InvalidNftKind(u8),
    #[error("invalid nft metadata kind `{0}`")]
    InvalidNFTMetadataKind(u8),
    #[error("invalid ownership mode `{0}`")]
    InvalidOwnershipMode(u8),
    #[error("invalid identifier mode `{0}`")]
    InvalidIdentifierMode(u8),
    #[error("invalid metadata mutability `{0}`")]
    InvalidMetadataMutability(u8),
    #[error("invalid burn mode `{0}`")]
    InvalidBurnMode(u8),
    #[error("invalid reporting mode `{0}`")]
    InvalidReportingMode(u8),
    #[error("invalid token identifier `{0}`")]
    InvalidTokenIdentifier(String),
    #[error("malformed CEP-78 metadata: {0}")]
    MalformedCep78Metadata(String),
    #[error("malformed NFT-721 metadata: {0}")]
    MalformedNft721Metadata(String),
    #[error("malformed custom metadata: {0}")]
    MalformedCustomMetadata(String),
}
