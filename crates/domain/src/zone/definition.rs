/// TTL served on every zone SOA record.
pub const DEFAULT_SOA_TTL: u32 = 3600;

/// A zone apex paired with the textual SOA definition that describes it.
///
/// The text is zone-file presentation syntax holding exactly one SOA record
/// owned by `apex`; it is parsed when the zone table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneDefinition {
    pub apex: String,
    pub soa: String,
}

impl ZoneDefinition {
    pub fn new(apex: impl Into<String>, soa: impl Into<String>) -> Self {
        Self {
            apex: apex.into(),
            soa: soa.into(),
        }
    }
}
