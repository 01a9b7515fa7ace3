//! NFT metadata preparation

/// Attribute assembly and mint-field validation
pub mod attributes;

pub use attributes::{AttributeValue, MetadataDraft, NftAttribute};
