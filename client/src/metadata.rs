use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{
    METADATA_CEP78, METADATA_CUSTOM_VALIDATED, METADATA_NFT721, METADATA_RAW,
};
use crate::error::ClientError;
use crate::modalities::NFTMetadataKind;

// Using structures for the purposes of serialization formatting.
#[derive(Serialize, Deserialize)]
pub struct MetadataNFT721 {
    name: String,
    symbol: String,
    token_uri: String,
}

#[derive(Serialize, Deserialize)]
pub struct MetadataCEP78 {
    name: String,
    token_uri: String,
    checksum: String,
}

/// The dictionary holding token metadata of the given kind.
pub fn metadata_dictionary_name(metadata_kind: NFTMetadataKind) -> &'static str {
    match metadata_kind {
        NFTMetadataKind::CEP78 => METADATA_CEP78,
        NFTMetadataKind::NFT721 => METADATA_NFT721,
        NFTMetadataKind::Raw => METADATA_RAW,
        NFTMetadataKind::CustomValidated => METADATA_CUSTOM_VALIDATED,
    }
}

/// Checks a metadata payload against the shape the contract enforces for its
/// kind and re-serializes it in the contract's pretty format. Raw metadata
/// passes through untouched.
pub fn validate_token_metadata(
    metadata_kind: NFTMetadataKind,
    token_metadata: &str,
) -> Result<String, ClientError> {
    match metadata_kind {
        NFTMetadataKind::CEP78 => {
            let metadata = serde_json::from_str::<MetadataCEP78>(token_metadata)
                .map_err(|error| ClientError::MalformedCep78Metadata(error.to_string()))?;
            if metadata.name.is_empty() || metadata.token_uri.is_empty() || metadata.checksum.is_empty()
            {
                return Err(ClientError::MalformedCep78Metadata(
                    "missing required property".to_string(),
                ));
            }
            serde_json::to_string_pretty(&metadata)
                .map_err(|error| ClientError::MalformedCep78Metadata(error.to_string()))
        }
        NFTMetadataKind::NFT721 => {
            let metadata = serde_json::from_str::<MetadataNFT721>(token_metadata)
                .map_err(|error| ClientError::MalformedNft721Metadata(error.to_string()))?;
            if metadata.name.is_empty() || metadata.symbol.is_empty() || metadata.token_uri.is_empty()
            {
                return Err(ClientError::MalformedNft721Metadata(
                    "missing required property".to_string(),
                ));
            }
            serde_json::to_string_pretty(&metadata)
                .map_err(|error| ClientError::MalformedNft721Metadata(error.to_string()))
        }
        NFTMetadataKind::Raw => Ok(token_metadata.to_string()),
        NFTMetadataKind::CustomValidated => {
            let attributes = serde_json::from_str::<BTreeMap<String, String>>(token_metadata)
                .map_err(|error| ClientError::MalformedCustomMetadata(error.to_string()))?;
            serde_json::to_string_pretty(&attributes)
                .map_err(|error| ClientError::MalformedCustomMetadata(error.to_string()))
        }
    }
}
