//! # Faction Error Types
//!
//! Most of these are ingestion warnings: the offending call is ignored, the
//! warning is logged and recorded on the builder, and loading continues.
//! Only `AlreadyRegistered` and `InvalidConfig` abort an operation.

use thiserror::Error;

/// Errors and warnings raised while defining factions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactionError {
    /// A builder was added to the registry a second time.
    #[error("faction '{0}' already added")]
    AlreadyRegistered(String),

    /// Government type exists but cannot be assigned randomly.
    #[error("government type out of range: Faction{{{faction}}}:govtype_weight('{gov}', {weight})")]
    GovTypeOutOfRange {
        /// Faction name.
        faction: String,
        /// Government type name.
        gov: String,
        /// Requested weight.
        weight: i64,
    },

    /// Government type name was not recognised.
    #[error("unknown government type: Faction{{{faction}}}:govtype_weight('{gov}', {weight})")]
    UnknownGovType {
        /// Faction name.
        faction: String,
        /// Government type name.
        gov: String,
        /// Requested weight.
        weight: i64,
    },

    /// Government weights must be non-negative.
    #[error("weight must be a positive integer: Faction{{{faction}}}:govtype_weight('{gov}', {weight})")]
    NegativeWeight {
        /// Faction name.
        faction: String,
        /// Government type name.
        gov: String,
        /// Requested weight.
        weight: i64,
    },

    /// Sum of government weights no longer fits in an `i32`.
    #[error("total weight overflow: Faction{{{faction}}}:govtype_weight('{gov}', {weight})")]
    WeightOverflow {
        /// Faction name.
        faction: String,
        /// Government type name.
        gov: String,
        /// Requested weight.
        weight: i64,
    },

    /// Equipment exists but is not a tradeable commodity.
    #[error("argument out of range: Faction{{{faction}}}:illegal_goods_probability('{item}', {probability})")]
    CommodityOutOfRange {
        /// Faction name.
        faction: String,
        /// Equipment name.
        item: String,
        /// Requested probability.
        probability: i64,
    },

    /// Equipment name was not recognised.
    #[error("unknown equipment: Faction{{{faction}}}:illegal_goods_probability('{item}', {probability})")]
    UnknownCommodity {
        /// Faction name.
        faction: String,
        /// Equipment name.
        item: String,
        /// Requested probability.
        probability: i64,
    },

    /// Illegality probability above 100.
    #[error("argument (probability 0-100) out of range: Faction{{{faction}}}:illegal_goods_probability('{item}', {probability})")]
    ProbabilityOutOfRange {
        /// Faction name.
        faction: String,
        /// Equipment name.
        item: String,
        /// Requested probability.
        probability: i64,
    },

    /// Homeworld does not resolve to a generated system.
    #[error("invalid homeworld for faction '{faction}': system {system_index} of sector {sector:?}")]
    InvalidHomeworld {
        /// Faction name.
        faction: String,
        /// Sector coordinates.
        sector: [i64; 3],
        /// Requested system index.
        system_index: i64,
    },

    /// Invalid faction definition file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for faction operations.
pub type FactionResult<T> = Result<T, FactionError>;
