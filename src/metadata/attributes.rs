//! NFT attribute assembly and mint-field validation
//!
//! Produces the `trait_type`/`value` pairs embedded in the metadata
//! document uploaded before minting. Upload, signing, and the metadata
//! protocol itself live outside this crate; only the document content is
//! prepared here.

use crate::io::configuration::{MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH};
use crate::io::error::{Result, invalid_parameter};
use crate::rarity::stats::RarityOutcome;
use serde::Serialize;

/// Token symbol stamped on every minted piece
pub const SYMBOL: &str = "FORGE";

/// Attribute value: a display string or a number
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Textual value, such as a tier name
    Text(String),
    /// Integer value, such as a pixel count
    Integer(u64),
    /// Fractional value, such as a quality score
    Number(f64),
}

/// One NFT attribute key/value pair
#[derive(Debug, Clone, Serialize)]
pub struct NftAttribute {
    /// Attribute key as shown by marketplaces
    pub trait_type: String,
    /// Attribute value
    pub value: AttributeValue,
}

impl NftAttribute {
    fn text(trait_type: &str, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Text(value.into()),
        }
    }

    fn integer(trait_type: &str, value: u64) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Integer(value),
        }
    }

    fn number(trait_type: &str, value: f64) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: AttributeValue::Number(value),
        }
    }
}

/// Metadata document skeleton prepared for upload
#[derive(Debug, Clone, Serialize)]
pub struct MetadataDraft {
    /// NFT display name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Attribute list including the rarity breakdown
    pub attributes: Vec<NftAttribute>,
}

/// Validate an NFT name against mint limits
///
/// # Errors
///
/// Returns an error if the trimmed name is empty or longer than 32
/// characters.
pub fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(invalid_parameter("name", &name, &"NFT name is required"));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(invalid_parameter(
            "name",
            &name,
            &format!("NFT name must be {MAX_NAME_LENGTH} characters or less"),
        ));
    }
    Ok(())
}

/// Validate a creator message against mint limits
///
/// # Errors
///
/// Returns an error if the message is longer than 80 characters.
pub fn validate_message(message: &str) -> Result<()> {
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(invalid_parameter(
            "message",
            &message,
            &format!("Creator message must be {MAX_MESSAGE_LENGTH} characters or less"),
        ));
    }
    Ok(())
}

/// Build the attribute list for a rarity outcome
///
/// Attribute order is fixed: Rarity, Pixels Used, Colors Used, Quality
/// Score, Canvas Size, then Creator Message when a non-empty message is
/// supplied. The quality score value is the 2-decimal display rounding.
pub fn prepare_attributes(
    outcome: &RarityOutcome,
    canvas_size: usize,
    creator_message: Option<&str>,
) -> Vec<NftAttribute> {
    let mut attributes = vec![
        NftAttribute::text("Rarity", outcome.rarity.name()),
        NftAttribute::integer("Pixels Used", outcome.stats.pixels_used as u64),
        NftAttribute::integer("Colors Used", outcome.stats.colors_used as u64),
        NftAttribute::number("Quality Score", outcome.stats.quality_score),
        NftAttribute::text("Canvas Size", format!("{canvas_size}x{canvas_size}")),
    ];

    if let Some(message) = creator_message {
        let trimmed = message.trim();
        if !trimmed.is_empty() {
            attributes.push(NftAttribute::text("Creator Message", trimmed));
        }
    }

    attributes
}

/// Validate mint fields and assemble the metadata document skeleton
///
/// # Errors
///
/// Returns an error if the name or creator message fails validation.
pub fn prepare_metadata_draft(
    name: &str,
    outcome: &RarityOutcome,
    canvas_size: usize,
    creator_message: Option<&str>,
) -> Result<MetadataDraft> {
    validate_name(name)?;
    if let Some(message) = creator_message {
        validate_message(message)?;
    }

    Ok(MetadataDraft {
        name: name.trim().to_string(),
        symbol: SYMBOL.to_string(),
        attributes: prepare_attributes(outcome, canvas_size, creator_message),
    })
}
