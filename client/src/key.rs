//! Item key derivation for the contract's dictionary storage.
//!
//! Per-account records (`balances`, `page_table`, `page_<n>`) are addressed
//! by the lowercase hex of the owner's 32-byte hash. Pairwise operator
//! records are addressed by the blake2b digest of the two tagged key
//! encodings, caller first. Both derivations are pure.

use std::convert::TryFrom;

use blake2::{
    digest::{Update, VariableOutput},
    VarBlake2b,
};
use casper_types::{
    account::AccountHash, bytesrepr::ToBytes, AsymmetricType, ContractHash, Key, PublicKey,
    BLAKE2B_DIGEST_LENGTH,
};

use crate::constants::{ACCOUNT_HASH_PREFIX, CONTRACT_PREFIX, HASH_PREFIX};
use crate::error::ClientError;

/// An identity that can own tokens or act as an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerIdentity {
    PublicKey(PublicKey),
    Account(AccountHash),
    Contract(ContractHash),
}

impl OwnerIdentity {
    /// Parses a textual identity: a formatted `account-hash-`/`hash-`/
    /// `contract-` string, a public key hex string, or a bare 64-character
    /// account hash which passes through unchanged.
    pub fn from_text(input: &str) -> Result<Self, ClientError> {
        if input.starts_with(ACCOUNT_HASH_PREFIX) {
            let account_hash = AccountHash::from_formatted_str(input)
                .map_err(|_| ClientError::InvalidIdentity(input.to_string()))?;
            return Ok(OwnerIdentity::Account(account_hash));
        }
        if let Some(stripped) = input.strip_prefix(HASH_PREFIX) {
            let hash_addr = decode_hash(stripped)
                .ok_or_else(|| ClientError::InvalidIdentity(input.to_string()))?;
            return Ok(OwnerIdentity::Contract(ContractHash::new(hash_addr)));
        }
        if input.starts_with(CONTRACT_PREFIX) {
            let contract_hash = ContractHash::from_formatted_str(input)
                .map_err(|_| ClientError::InvalidIdentity(input.to_string()))?;
            return Ok(OwnerIdentity::Contract(contract_hash));
        }
        if let Some(hash_addr) = decode_hash(input) {
            return Ok(OwnerIdentity::Account(AccountHash::new(hash_addr)));
        }
        PublicKey::from_hex(input)
            .map(OwnerIdentity::PublicKey)
            .map_err(|_| ClientError::InvalidIdentity(input.to_string()))
    }

    /// The canonical on-chain key for this identity.
    pub fn to_key(&self) -> Key {
        match self {
            OwnerIdentity::PublicKey(public_key) => Key::Account(public_key.to_account_hash()),
            OwnerIdentity::Account(account_hash) => Key::Account(*account_hash),
            OwnerIdentity::Contract(contract_hash) => Key::Hash(contract_hash.value()),
        }
    }

    /// The underlying 32-byte hash, without the key tag.
    pub fn hash_bytes(&self) -> [u8; 32] {
        match self {
            OwnerIdentity::PublicKey(public_key) => public_key.to_account_hash().value(),
            OwnerIdentity::Account(account_hash) => account_hash.value(),
            OwnerIdentity::Contract(contract_hash) => contract_hash.value(),
        }
    }

    /// The tagged bytesrepr serialization of the canonical key.
    pub fn key_bytes(&self) -> Result<Vec<u8>, ClientError> {
        self.to_key()
            .to_bytes()
            .map_err(|error| ClientError::Encoding(format!("{:?}", error)))
    }
}

impl From<PublicKey> for OwnerIdentity {
    fn from(public_key: PublicKey) -> Self {
        OwnerIdentity::PublicKey(public_key)
    }
}

impl From<AccountHash> for OwnerIdentity {
    fn from(account_hash: AccountHash) -> Self {
        OwnerIdentity::Account(account_hash)
    }
}

impl From<ContractHash> for OwnerIdentity {
    fn from(contract_hash: ContractHash) -> Self {
        OwnerIdentity::Contract(contract_hash)
    }
}

impl TryFrom<Key> for OwnerIdentity {
    type Error = ClientError;

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        match key {
            Key::Account(account_hash) => Ok(OwnerIdentity::Account(account_hash)),
            Key::Hash(hash_addr) => Ok(OwnerIdentity::Contract(ContractHash::new(hash_addr))),
            _ => Err(ClientError::UnexpectedKeyVariant),
        }
    }
}

/// Item key addressing an identity's per-account dictionary records.
pub fn identity_item_key(identity: &OwnerIdentity) -> String {
    base16::encode_lower(&identity.hash_bytes())
}

/// Item key addressing the pairwise operator approval record for
/// (`caller`, `operator`). The digest input order is fixed; swapping the
/// two identities addresses a different record.
pub fn composite_item_key(
    caller: &OwnerIdentity,
    operator: &OwnerIdentity,
) -> Result<String, ClientError> {
    let mut preimage = caller.key_bytes()?;
    preimage.extend(operator.key_bytes()?);
    let digest = blake2b(&preimage)?;
    Ok(base16::encode_lower(&digest))
}

fn blake2b(data: &[u8]) -> Result<[u8; BLAKE2B_DIGEST_LENGTH], ClientError> {
    let mut hasher = VarBlake2b::new(BLAKE2B_DIGEST_LENGTH)
        .map_err(|_| ClientError::Encoding("invalid digest length".to_string()))?;
    hasher.update(data);
    let mut digest = [0u8; BLAKE2B_DIGEST_LENGTH];
    hasher.finalize_variable(|slice| digest.copy_from_slice(slice));
    Ok(digest)
}

fn decode_hash(input: &str) -> Option<[u8; 32]> {
    let bytes = hex::decode(input).ok()?;
    <[u8; 32]>::try_from(bytes.as_slice()).ok()
}
