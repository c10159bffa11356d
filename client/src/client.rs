use std::convert::TryFrom;

use casper_types::{bytesrepr::FromBytes, CLTyped, CLValue, Key};
use tracing::debug;

use crate::constants::{
    ALLOW_MINTING, BALANCES, BURNT_TOKENS, BURN_MODE, COLLECTION_NAME, COLLECTION_SYMBOL,
    HASH_BY_INDEX, HOLDER_MODE, IDENTIFIER_MODE, INDEX_BY_HASH, INSTALLER, JSON_SCHEMA,
    METADATA_MUTABILITY, MINTING_MODE, NFT_KIND, NFT_METADATA_KIND, NUMBER_OF_MINTED_TOKENS,
    OPERATORS, OWNED_TOKENS, OWNERSHIP_MODE, PAGE_TABLE, RECEIPT_NAME, REPORTING_MODE,
    TOKEN_ISSUERS, TOKEN_OWNERS, TOTAL_TOKEN_SUPPLY, WHITELIST_MODE,
};
use crate::error::ClientError;
use crate::key::{composite_item_key, identity_item_key, OwnerIdentity};
use crate::metadata::{metadata_dictionary_name, validate_token_metadata};
use crate::modalities::{
    BurnMode, MetadataMutability, MintingMode, NFTHolderMode, NFTIdentifierMode, NFTKind,
    NFTMetadataKind, OwnerReverseLookupMode, OwnershipMode, TokenIdentifier, WhitelistMode,
};
use crate::page::{page_dictionary_name, set_bit_indices};
use crate::storage::{NamedKeys, NodeReader, ReadError, DEFAULT_DICTIONARIES};

/// Read-side view of one CEP-78 contract instance.
///
/// The storage handle cache is populated once at construction and never
/// mutated afterwards, so `&self` methods may be called concurrently. Every
/// operation is an independent sequence of node round trips; nothing is
/// retried and nothing is cached across calls.
pub struct Cep78Client<R> {
    reader: R,
    named_keys: NamedKeys,
}

impl<R: NodeReader> Cep78Client<R> {
    /// Builds a client, resolving storage handles for the standard CEP-78
    /// dictionaries.
    pub fn new(reader: R) -> Result<Self, ClientError> {
        Self::with_named_keys(reader, &[])
    }

    /// Builds a client that additionally resolves handles for
    /// `extra_dictionaries` (for contracts installed with custom regions).
    pub fn with_named_keys(reader: R, extra_dictionaries: &[String]) -> Result<Self, ClientError> {
        let mut names = DEFAULT_DICTIONARIES.clone();
        names.extend(extra_dictionaries.iter().cloned());
        let handles = reader
            .contract_named_keys(&names)
            .map_err(ClientError::NamedKeysUnavailable)?;
        let named_keys = NamedKeys::new(handles);
        debug!(cached = named_keys.len(), "resolved contract storage handles");
        Ok(Cep78Client { reader, named_keys })
    }

    pub fn named_keys(&self) -> &NamedKeys {
        &self.named_keys
    }

    // Named contract fields.

    pub fn collection_name(&self) -> Result<String, ClientError> {
        self.field(COLLECTION_NAME)
    }

    pub fn collection_symbol(&self) -> Result<String, ClientError> {
        self.field(COLLECTION_SYMBOL)
    }

    pub fn total_token_supply(&self) -> Result<u64, ClientError> {
        self.field(TOTAL_TOKEN_SUPPLY)
    }

    pub fn number_of_minted_tokens(&self) -> Result<u64, ClientError> {
        self.field(NUMBER_OF_MINTED_TOKENS)
    }

    pub fn allow_minting(&self) -> Result<bool, ClientError> {
        self.field(ALLOW_MINTING)
    }

    pub fn json_schema(&self) -> Result<String, ClientError> {
        self.field(JSON_SCHEMA)
    }

    pub fn receipt_name(&self) -> Result<String, ClientError> {
        self.field(RECEIPT_NAME)
    }

    pub fn installer(&self) -> Result<Key, ClientError> {
        self.field(INSTALLER)
    }

    pub fn minting_mode(&self) -> Result<MintingMode, ClientError> {
        self.modality_field(MINTING_MODE)
    }

    pub fn ownership_mode(&self) -> Result<OwnershipMode, ClientError> {
        self.modality_field(OWNERSHIP_MODE)
    }

    pub fn nft_kind(&self) -> Result<NFTKind, ClientError> {
        self.modality_field(NFT_KIND)
    }

    pub fn holder_mode(&self) -> Result<NFTHolderMode, ClientError> {
        self.modality_field(HOLDER_MODE)
    }

    pub fn whitelist_mode(&self) -> Result<WhitelistMode, ClientError> {
        self.modality_field(WHITELIST_MODE)
    }

    pub fn nft_metadata_kind(&self) -> Result<NFTMetadataKind, ClientError> {
        self.modality_field(NFT_METADATA_KIND)
    }

    /// Contract-wide identifier mode. Fetch once per logical session and
    /// thread the value through calls that interpret token identifiers.
    pub fn identifier_mode(&self) -> Result<NFTIdentifierMode, ClientError> {
        self.modality_field(IDENTIFIER_MODE)
    }

    pub fn metadata_mutability(&self) -> Result<MetadataMutability, ClientError> {
        self.modality_field(METADATA_MUTABILITY)
    }

    pub fn burn_mode(&self) -> Result<BurnMode, ClientError> {
        self.modality_field(BURN_MODE)
    }

    pub fn reporting_mode(&self) -> Result<OwnerReverseLookupMode, ClientError> {
        self.modality_field(REPORTING_MODE)
    }

    // Per-account and per-token records.

    pub fn balance_of(&self, owner: &OwnerIdentity) -> Result<u64, ClientError> {
        self.dictionary_value(BALANCES, &identity_item_key(owner))
    }

    pub fn owner_of(&self, token: &TokenIdentifier) -> Result<Key, ClientError> {
        self.dictionary_value(TOKEN_OWNERS, &token.get_dictionary_item_key())
    }

    pub fn token_issuer(&self, token: &TokenIdentifier) -> Result<Key, ClientError> {
        self.dictionary_value(TOKEN_ISSUERS, &token.get_dictionary_item_key())
    }

    pub fn is_burnt(&self, token: &TokenIdentifier) -> Result<bool, ClientError> {
        let record: Option<()> =
            self.try_dictionary_value(BURNT_TOKENS, &token.get_dictionary_item_key())?;
        Ok(record.is_some())
    }

    /// Raw stored metadata of `token`, read from the dictionary matching
    /// `metadata_kind`.
    pub fn token_metadata(
        &self,
        metadata_kind: NFTMetadataKind,
        token: &TokenIdentifier,
    ) -> Result<String, ClientError> {
        self.dictionary_value(
            metadata_dictionary_name(metadata_kind),
            &token.get_dictionary_item_key(),
        )
    }

    /// Stored metadata of `token`, validated against the shape the contract
    /// enforces for `metadata_kind`.
    pub fn checked_token_metadata(
        &self,
        metadata_kind: NFTMetadataKind,
        token: &TokenIdentifier,
    ) -> Result<String, ClientError> {
        let raw = self.token_metadata(metadata_kind, token)?;
        validate_token_metadata(metadata_kind, &raw)
    }

    // The account-scoped ownership index.

    /// Pages of the owner's page table with at least one bit set, ascending.
    pub fn page_table(&self, owner: &OwnerIdentity) -> Result<Vec<u64>, ClientError> {
        let item_key = identity_item_key(owner);
        match self.try_dictionary_value::<Vec<bool>>(PAGE_TABLE, &item_key)? {
            Some(bits) => Ok(set_bit_indices(&bits)),
            None => Ok(Vec::new()),
        }
    }

    /// Set bit positions within one `page_<n>` record of the owner.
    pub fn page_details(
        &self,
        page_number: u64,
        owner: &OwnerIdentity,
    ) -> Result<Vec<u64>, ClientError> {
        let dictionary = page_dictionary_name(page_number);
        let bits: Vec<bool> = self.dictionary_value(&dictionary, &identity_item_key(owner))?;
        Ok(set_bit_indices(&bits))
    }

    /// Walks the owner's page table and every populated page, accumulating
    /// the per-page set bit positions in ascending page order.
    ///
    /// The result deliberately mirrors the contract's reverse-lookup layout:
    /// each entry is a bit position local to the page it was found on, not
    /// combined with the page number. An owner without a page table record
    /// resolves to an empty sequence without issuing any page lookups.
    pub fn owned_token_indices(&self, owner: &OwnerIdentity) -> Result<Vec<u64>, ClientError> {
        let item_key = identity_item_key(owner);
        let table_bits = match self.try_dictionary_value::<Vec<bool>>(PAGE_TABLE, &item_key)? {
            Some(bits) => bits,
            None => return Ok(Vec::new()),
        };
        let present_pages = set_bit_indices(&table_bits);
        debug!(
            owner = %item_key,
            pages = present_pages.len(),
            "decoded page table"
        );

        let mut token_indices = Vec::new();
        for page_number in present_pages {
            let dictionary = page_dictionary_name(page_number);
            let page_bits: Vec<bool> = self.dictionary_value(&dictionary, &item_key)?;
            token_indices.extend(set_bit_indices(&page_bits));
        }
        Ok(token_indices)
    }

    /// The hash-qualified variant of [`Self::owned_token_indices`]: each
    /// accumulated index is resolved through the `hash_by_index` dictionary,
    /// keyed by its decimal string, preserving order.
    pub fn owned_token_hashes(&self, owner: &OwnerIdentity) -> Result<Vec<String>, ClientError> {
        let token_indices = self.owned_token_indices(owner)?;
        let mut hashes = Vec::with_capacity(token_indices.len());
        for token_index in token_indices {
            hashes.push(self.dictionary_value(HASH_BY_INDEX, &token_index.to_string())?);
        }
        Ok(hashes)
    }

    /// Owned tokens interpreted under the supplied identifier mode.
    pub fn owned_tokens(
        &self,
        identifier_mode: NFTIdentifierMode,
        owner: &OwnerIdentity,
    ) -> Result<Vec<TokenIdentifier>, ClientError> {
        match identifier_mode {
            NFTIdentifierMode::Ordinal => Ok(self
                .owned_token_indices(owner)?
                .into_iter()
                .map(TokenIdentifier::new_index)
                .collect()),
            NFTIdentifierMode::Hash => Ok(self
                .owned_token_hashes(owner)?
                .into_iter()
                .map(TokenIdentifier::new_hash)
                .collect()),
        }
    }

    /// Tokens recorded in the legacy `owned_tokens` dictionary, if the owner
    /// has an entry there.
    pub fn tracked_owned_tokens(
        &self,
        identifier_mode: NFTIdentifierMode,
        owner: &OwnerIdentity,
    ) -> Result<Option<Vec<TokenIdentifier>>, ClientError> {
        let item_key = identity_item_key(owner);
        match identifier_mode {
            NFTIdentifierMode::Ordinal => {
                let indices: Option<Vec<u64>> =
                    self.try_dictionary_value(OWNED_TOKENS, &item_key)?;
                Ok(indices
                    .map(|indices| indices.into_iter().map(TokenIdentifier::new_index).collect()))
            }
            NFTIdentifierMode::Hash => {
                let hashes: Option<Vec<String>> =
                    self.try_dictionary_value(OWNED_TOKENS, &item_key)?;
                Ok(hashes
                    .map(|hashes| hashes.into_iter().map(TokenIdentifier::new_hash).collect()))
            }
        }
    }

    /// The ordinal tracking index persisted for a hash-identified token.
    pub fn token_index_by_hash(&self, token_hash: &str) -> Result<Option<u64>, ClientError> {
        self.try_dictionary_value(INDEX_BY_HASH, token_hash)
    }

    // Operator approvals.

    /// Whether `operator` is approved for all of `caller`'s tokens. A missing
    /// record means the contract holds no such relationship and resolves to
    /// `None`, not an error.
    pub fn approved_operator(
        &self,
        caller: &OwnerIdentity,
        operator: &OwnerIdentity,
    ) -> Result<Option<bool>, ClientError> {
        let item_key = composite_item_key(caller, operator)?;
        self.try_dictionary_value(OPERATORS, &item_key)
    }

    // Lookup plumbing.

    fn field<T: CLTyped + FromBytes>(&self, name: &str) -> Result<T, ClientError> {
        let value = self
            .reader
            .contract_field(name)
            .map_err(|source| ClientError::LookupFailed {
                dictionary: name.to_string(),
                item_key: String::new(),
                source,
            })?;
        convert(name, value)
    }

    fn modality_field<M>(&self, name: &str) -> Result<M, ClientError>
    where
        M: TryFrom<u8, Error = ClientError>,
    {
        M::try_from(self.field::<u8>(name)?)
    }

    fn raw_dictionary_item(
        &self,
        dictionary: &str,
        item_key: &str,
    ) -> Result<CLValue, ClientError> {
        let storage_handle = self.named_keys.handle(dictionary)?;
        self.reader
            .dictionary_item(storage_handle, item_key)
            .map_err(|source| ClientError::LookupFailed {
                dictionary: dictionary.to_string(),
                item_key: item_key.to_string(),
                source,
            })
    }

    fn dictionary_value<T: CLTyped + FromBytes>(
        &self,
        dictionary: &str,
        item_key: &str,
    ) -> Result<T, ClientError> {
        let value = self.raw_dictionary_item(dictionary, item_key)?;
        convert(&format!("{}[{}]", dictionary, item_key), value)
    }

    fn try_dictionary_value<T: CLTyped + FromBytes>(
        &self,
        dictionary: &str,
        item_key: &str,
    ) -> Result<Option<T>, ClientError> {
        match self.raw_dictionary_item(dictionary, item_key) {
            Ok(value) => Ok(Some(convert(
                &format!("{}[{}]", dictionary, item_key),
                value,
            )?)),
            Err(ClientError::LookupFailed {
                source: ReadError::NotFound,
                ..
            }) => Ok(None),
            Err(error) => Err(error),
        }
    }
}

fn convert<T: CLTyped + FromBytes>(location: &str, value: CLValue) -> Result<T, ClientError> {
    value
        .into_t()
        .map_err(|_| ClientError::InvalidStoredValue(location.to_string()))
}
