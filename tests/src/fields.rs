use casper_types::Key;

use cep78_client::metadata::validate_token_metadata;
use cep78_client::modalities::OwnerReverseLookupMode;
use cep78_client::storage::ReadError;
use cep78_client::{
    Cep78Client, ClientError, NFTIdentifierMode, NFTMetadataKind, TokenIdentifier,
};

use crate::utility::{
    constants::{
        ACCOUNT_USER_1, MALFORMED_META_DATA, TEST_PRETTY_721_META_DATA,
        TEST_PRETTY_CEP78_METADATA,
    },
    support::{self, MockNode},
};

#[test]
fn typed_field_getters_should_decode_stored_values() {
    let mut node = MockNode::new();
    node.set_field("collection_name", "nft_test".to_string());
    node.set_field("collection_symbol", "TEST".to_string());
    node.set_field("total_token_supply", 100u64);
    node.set_field("number_of_minted_tokens", 3u64);
    node.set_field("allow_minting", true);
    node.set_field("identifier_mode", 0u8);
    node.set_field("nft_metadata_kind", 3u8);
    node.set_field("reporting_mode", 1u8);

    let client = Cep78Client::new(node).expect("should build client");

    assert_eq!(client.collection_name().expect("field"), "nft_test");
    assert_eq!(client.collection_symbol().expect("field"), "TEST");
    assert_eq!(client.total_token_supply().expect("field"), 100);
    assert_eq!(client.number_of_minted_tokens().expect("field"), 3);
    assert!(client.allow_minting().expect("field"));
    assert_eq!(
        client.identifier_mode().expect("field"),
        NFTIdentifierMode::Ordinal
    );
    assert_eq!(
        client.nft_metadata_kind().expect("field"),
        NFTMetadataKind::CustomValidated
    );
    assert_eq!(
        client.reporting_mode().expect("field"),
        OwnerReverseLookupMode::Complete
    );
}

#[test]
fn out_of_range_modality_byte_should_be_rejected() {
    let mut node = MockNode::new();
    node.set_field("identifier_mode", 2u8);

    let client = Cep78Client::new(node).expect("should build client");
    assert!(matches!(
        client.identifier_mode(),
        Err(ClientError::InvalidIdentifierMode(2))
    ));
}

#[test]
fn missing_field_should_surface_as_lookup_failed() {
    let client = Cep78Client::new(MockNode::new()).expect("should build client");
    assert!(matches!(
        client.collection_name(),
        Err(ClientError::LookupFailed {
            source: ReadError::NotFound,
            ..
        })
    ));
}

#[test]
fn balance_of_should_read_the_owner_record() {
    let owner = support::dummy_owner(ACCOUNT_USER_1);
    let mut node = MockNode::new();
    node.put_dictionary_item("balances", &cep78_client::identity_item_key(&owner), 3u64);

    let client = Cep78Client::new(node).expect("should build client");
    assert_eq!(client.balance_of(&owner).expect("should read balance"), 3);
}

#[test]
fn owner_of_should_decode_the_stored_key() {
    let owner = support::dummy_owner(ACCOUNT_USER_1);
    let owner_key = owner.to_key();
    let mut node = MockNode::new();
    node.put_dictionary_item("token_owners", "0", owner_key);

    let client = Cep78Client::new(node).expect("should build client");
    let resolved = client
        .owner_of(&TokenIdentifier::new_index(0))
        .expect("should resolve owner");
    assert_eq!(resolved, owner_key);
}

#[test]
fn is_burnt_should_treat_missing_record_as_not_burnt() {
    let mut node = MockNode::new();
    node.put_dictionary_item("burnt_tokens", "0", ());

    let client = Cep78Client::new(node).expect("should build client");
    assert!(client
        .is_burnt(&TokenIdentifier::new_index(0))
        .expect("should read burn record"));
    assert!(!client
        .is_burnt(&TokenIdentifier::new_index(1))
        .expect("absent record is not an error"));
}

#[test]
fn token_metadata_should_dispatch_on_kind() {
    let mut node = MockNode::new();
    node.put_dictionary_item(
        "metadata_cep78",
        "0",
        TEST_PRETTY_CEP78_METADATA.to_string(),
    );
    node.put_dictionary_item("metadata_raw", "0", "opaque blob".to_string());

    let client = Cep78Client::new(node).expect("should build client");
    let token = TokenIdentifier::new_index(0);

    assert_eq!(
        client
            .token_metadata(NFTMetadataKind::CEP78, &token)
            .expect("should read metadata"),
        TEST_PRETTY_CEP78_METADATA
    );
    assert_eq!(
        client
            .token_metadata(NFTMetadataKind::Raw, &token)
            .expect("should read metadata"),
        "opaque blob"
    );
}

#[test]
fn checked_token_metadata_should_reject_malformed_payloads() {
    let mut node = MockNode::new();
    node.put_dictionary_item(
        "metadata_nft721",
        "1",
        MALFORMED_META_DATA.to_string(),
    );

    let client = Cep78Client::new(node).expect("should build client");
    let result = client.checked_token_metadata(
        NFTMetadataKind::NFT721,
        &TokenIdentifier::new_index(1),
    );
    assert!(matches!(
        result,
        Err(ClientError::MalformedNft721Metadata(_))
    ));
}

#[test]
fn metadata_validation_should_enforce_required_properties() {
    let ok = validate_token_metadata(NFTMetadataKind::NFT721, TEST_PRETTY_721_META_DATA)
        .expect("well-formed metadata should validate");
    assert!(ok.contains("John Doe"));

    let missing = validate_token_metadata(
        NFTMetadataKind::CEP78,
        r#"{"name": "", "token_uri": "https://x", "checksum": "y"}"#,
    );
    assert!(matches!(
        missing,
        Err(ClientError::MalformedCep78Metadata(_))
    ));

    let raw = validate_token_metadata(NFTMetadataKind::Raw, "anything at all")
        .expect("raw metadata passes through");
    assert_eq!(raw, "anything at all");
}

#[test]
fn custom_validated_metadata_should_accept_string_maps_only() {
    let attributes =
        serde_json::json!({ "deity": "Athena", "domain": "wisdom" }).to_string();
    let validated = validate_token_metadata(NFTMetadataKind::CustomValidated, &attributes)
        .expect("string map should validate");
    assert!(validated.contains("Athena"));

    let nested = serde_json::json!({ "deity": { "name": "Athena" } }).to_string();
    assert!(matches!(
        validate_token_metadata(NFTMetadataKind::CustomValidated, &nested),
        Err(ClientError::MalformedCustomMetadata(_))
    ));
}

#[test]
fn tracked_owned_tokens_should_decode_per_identifier_mode() {
    let owner = support::dummy_owner(ACCOUNT_USER_1);
    let item_key = cep78_client::identity_item_key(&owner);

    let mut node = MockNode::new();
    node.put_dictionary_item("owned_tokens", &item_key, vec![0u64, 4u64]);
    let client = Cep78Client::new(node).expect("should build client");
    assert_eq!(
        client
            .tracked_owned_tokens(NFTIdentifierMode::Ordinal, &owner)
            .expect("should decode tracked tokens"),
        Some(vec![TokenIdentifier::Index(0), TokenIdentifier::Index(4)])
    );

    let mut node = MockNode::new();
    node.put_dictionary_item(
        "owned_tokens",
        &item_key,
        vec!["aaa".to_string(), "bbb".to_string()],
    );
    let client = Cep78Client::new(node).expect("should build client");
    assert_eq!(
        client
            .tracked_owned_tokens(NFTIdentifierMode::Hash, &owner)
            .expect("should decode tracked tokens"),
        Some(vec![
            TokenIdentifier::Hash("aaa".to_string()),
            TokenIdentifier::Hash("bbb".to_string())
        ])
    );
}

#[test]
fn token_index_by_hash_should_distinguish_absent_from_failure() {
    let mut node = MockNode::new();
    node.put_dictionary_item("index_by_hash", "known", 7u64);

    let client = Cep78Client::new(node).expect("should build client");
    assert_eq!(
        client
            .token_index_by_hash("known")
            .expect("should resolve index"),
        Some(7)
    );
    assert_eq!(
        client
            .token_index_by_hash("unknown")
            .expect("absent record is not an error"),
        None
    );
}

#[test]
fn token_identifier_should_parse_raw_input_per_mode() {
    assert_eq!(
        TokenIdentifier::from_raw(NFTIdentifierMode::Ordinal, "42")
            .expect("decimal input should parse"),
        TokenIdentifier::Index(42)
    );
    assert!(matches!(
        TokenIdentifier::from_raw(NFTIdentifierMode::Ordinal, "not-a-number"),
        Err(ClientError::InvalidTokenIdentifier(_))
    ));
    assert_eq!(
        TokenIdentifier::from_raw(NFTIdentifierMode::Hash, "abc")
            .expect("hash input should parse"),
        TokenIdentifier::Hash("abc".to_string())
    );
}
