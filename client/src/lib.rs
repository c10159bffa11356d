//! Read-side client for a CEP-78 enhanced NFT contract.
//!
//! The contract keeps per-owner ownership state as a two-level bitmap index
//! in dictionary storage: a `page_table` record marks which fixed-width pages
//! are populated, and each `page_<n>` record marks the owned slots within
//! that page. This crate reconstructs owner views from those records and
//! derives the dictionary item keys that address them. All node access goes
//! through the [`storage::NodeReader`] trait; no transport is provided here.

pub mod client;
pub mod constants;
pub mod error;
pub mod key;
pub mod metadata;
pub mod modalities;
pub mod page;
pub mod storage;

pub use client::Cep78Client;
pub use error::ClientError;
pub use key::{composite_item_key, identity_item_key, OwnerIdentity};
pub use modalities::{NFTIdentifierMode, NFTMetadataKind, TokenIdentifier};
pub use page::set_bit_indices;
pub use storage::{NamedKeys, NodeReader, ReadError};
