//! Reserved reverse-DNS zones and their SOA definitions.

mod definition;
mod reserved;

pub use definition::{ZoneDefinition, DEFAULT_SOA_TTL};
pub use reserved::{reserved_zone_definitions, CANONICAL_SOA, RESERVED_ZONES};
