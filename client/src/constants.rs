// Dictionaries addressed by owner item key.
pub const BALANCES: &str = "balances";
pub const PAGE_TABLE: &str = "page_table";
pub const OWNED_TOKENS: &str = "owned_tokens";

// Dictionaries addressed by token identifier.
pub const BURNT_TOKENS: &str = "burnt_tokens";
pub const TOKEN_OWNERS: &str = "token_owners";
pub const TOKEN_ISSUERS: &str = "token_issuers";
pub const METADATA_CEP78: &str = "metadata_cep78";
pub const METADATA_NFT721: &str = "metadata_nft721";
pub const METADATA_RAW: &str = "metadata_raw";
pub const METADATA_CUSTOM_VALIDATED: &str = "metadata_custom_validated";

// Reverse lookup dictionaries.
pub const HASH_BY_INDEX: &str = "hash_by_index";
pub const INDEX_BY_HASH: &str = "index_by_hash";

// Dictionary addressed by the blake2b composite of (owner, operator).
pub const OPERATORS: &str = "operators";

pub const PAGE_DICTIONARY_PREFIX: &str = "page_";

// Named contract fields.
pub const COLLECTION_NAME: &str = "collection_name";
pub const COLLECTION_SYMBOL: &str = "collection_symbol";
pub const TOTAL_TOKEN_SUPPLY: &str = "total_token_supply";
pub const NUMBER_OF_MINTED_TOKENS: &str = "number_of_minted_tokens";
pub const ALLOW_MINTING: &str = "allow_minting";
pub const MINTING_MODE: &str = "minting_mode";
pub const OWNERSHIP_MODE: &str = "ownership_mode";
pub const NFT_KIND: &str = "nft_kind";
pub const HOLDER_MODE: &str = "holder_mode";
pub const WHITELIST_MODE: &str = "whitelist_mode";
pub const NFT_METADATA_KIND: &str = "nft_metadata_kind";
pub const IDENTIFIER_MODE: &str = "identifier_mode";
pub const METADATA_MUTABILITY: &str = "metadata_mutability";
pub const BURN_MODE: &str = "burn_mode";
pub const REPORTING_MODE: &str = "reporting_mode";
pub const JSON_SCHEMA: &str = "json_schema";
pub const RECEIPT_NAME: &str = "receipt_name";
pub const INSTALLER: &str = "installer";

// Width of one ownership page, mirroring the contract's configuration.
pub const PAGE_SIZE: u64 = 10;
// Number of `page_<n>` dictionaries the contract seeds at installation.
pub const DEFAULT_PAGE_COUNT: u64 = 11;

// Textual prefixes accepted when parsing owner identities.
pub const ACCOUNT_HASH_PREFIX: &str = "account-hash-";
pub const HASH_PREFIX: &str = "hash-";
pub const CONTRACT_PREFIX: &str = "contract-";
