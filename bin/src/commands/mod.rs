//! CLI command implementations.

pub(crate) mod buckets;
pub(crate) mod plan;
pub(crate) mod zones;
