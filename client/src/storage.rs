use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use thiserror::Error;

use casper_types::CLValue;

use crate::constants::{
    BALANCES, BURNT_TOKENS, DEFAULT_PAGE_COUNT, HASH_BY_INDEX, INDEX_BY_HASH, METADATA_CEP78,
    METADATA_CUSTOM_VALIDATED, METADATA_NFT721, METADATA_RAW, OPERATORS, OWNED_TOKENS, PAGE_TABLE,
    TOKEN_ISSUERS, TOKEN_OWNERS,
};
use crate::error::ClientError;
use crate::page::page_dictionary_name;

/// Failure modes of the external node collaborator. The client never retries;
/// these pass through and are attached to the failing lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("value not found")]
    NotFound,
    #[error("transport failure: {0}")]
    Transport(String),
}

/// The node-facing collaborator. Implementations own the transport and the
/// value decoding; the client only interprets the decoded `CLValue` shapes.
pub trait NodeReader {
    /// Reads a named contract field (a value under the contract's named keys).
    fn contract_field(&self, name: &str) -> Result<CLValue, ReadError>;

    /// Reads one dictionary record through its storage handle and item key.
    fn dictionary_item(&self, storage_handle: &str, item_key: &str)
        -> Result<CLValue, ReadError>;

    /// Resolves storage handles for the requested named keys. Names absent
    /// from the contract are simply omitted from the result.
    fn contract_named_keys(
        &self,
        names: &[String],
    ) -> Result<BTreeMap<String, String>, ReadError>;
}

/// Dictionary names the client resolves handles for at construction.
pub static DEFAULT_DICTIONARIES: Lazy<Vec<String>> = Lazy::new(|| {
    let mut names: Vec<String> = [
        BALANCES,
        BURNT_TOKENS,
        METADATA_CEP78,
        METADATA_CUSTOM_VALIDATED,
        METADATA_NFT721,
        METADATA_RAW,
        OPERATORS,
        OWNED_TOKENS,
        TOKEN_ISSUERS,
        TOKEN_OWNERS,
        PAGE_TABLE,
        HASH_BY_INDEX,
        INDEX_BY_HASH,
    ]
    .iter()
    .map(|name| name.to_string())
    .collect();
    for page_number in 0..DEFAULT_PAGE_COUNT {
        names.push(page_dictionary_name(page_number));
    }
    names
});

/// Storage handle cache, populated once at client construction and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct NamedKeys(BTreeMap<String, String>);

impl NamedKeys {
    pub fn new(handles: BTreeMap<String, String>) -> Self {
        NamedKeys(handles)
    }

    pub fn handle(&self, name: &str) -> Result<&str, ClientError> {
        self.0
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ClientError::MissingStorageUref(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
