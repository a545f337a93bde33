//! Zone Table
//!
//! Immutable mapping from zone apex to the SOA record served for it. Built
//! once at startup and shared read-only between listeners, so lookups need
//! no locking.

use as112_domain::zone::{reserved_zone_definitions, ZoneDefinition, DEFAULT_SOA_TTL};
use as112_domain::DomainError;
use hickory_proto::rr::{LowerName, Name, Record, RecordType};
use hickory_proto::serialize::txt::Parser;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug)]
pub struct ZoneTable {
    zones: HashMap<LowerName, Record>,
}

impl ZoneTable {
    /// Build the table of reserved reverse zones.
    pub fn reserved() -> Result<Self, DomainError> {
        Self::from_definitions(&reserved_zone_definitions())
    }

    /// Parse every definition into its own SOA record.
    ///
    /// Fails on the first malformed definition or on a repeated apex.
    pub fn from_definitions(definitions: &[ZoneDefinition]) -> Result<Self, DomainError> {
        let mut zones = HashMap::with_capacity(definitions.len());

        for definition in definitions {
            let record = parse_soa_definition(definition)?;
            let apex = LowerName::from(record.name());

            debug!(zone = %apex, "Registered zone");

            if zones.insert(apex, record).is_some() {
                return Err(DomainError::zone_definition(
                    &definition.apex,
                    "zone is registered more than once",
                ));
            }
        }

        Ok(Self { zones })
    }

    /// Exact apex lookup.
    pub fn lookup(&self, apex: &LowerName) -> Option<&Record> {
        self.zones.get(apex)
    }

    /// Find the registered zone containing `name`.
    ///
    /// Walks from `name` towards the root and returns the first apex present
    /// in the table.
    pub fn find(&self, name: &LowerName) -> Option<(&LowerName, &Record)> {
        let mut candidate = name.clone();
        loop {
            if let Some(found) = self.zones.get_key_value(&candidate) {
                return Some(found);
            }
            if candidate.is_root() {
                return None;
            }
            candidate = candidate.base_name();
        }
    }

    pub fn zones(&self) -> impl Iterator<Item = &LowerName> {
        self.zones.keys()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Parse a zone definition into the SOA record served for its apex.
///
/// The text must hold exactly one record, an SOA owned by the apex. Relative
/// names resolve against the apex unless the text sets its own `$ORIGIN`.
/// The record TTL is always [`DEFAULT_SOA_TTL`].
pub fn parse_soa_definition(definition: &ZoneDefinition) -> Result<Record, DomainError> {
    let invalid = |reason: String| DomainError::zone_definition(&definition.apex, reason);

    let apex = Name::from_ascii(&definition.apex).map_err(|e| invalid(e.to_string()))?;
    if !apex.is_fqdn() {
        return Err(invalid("apex is not fully qualified".to_string()));
    }

    let (_, records) = Parser::new(definition.soa.as_str(), None, Some(apex.clone()))
        .parse()
        .map_err(|e| invalid(e.to_string()))?;

    let mut parsed = records
        .values()
        .flat_map(|set| set.records_without_rrsigs());
    let record = match (parsed.next(), parsed.next()) {
        (Some(record), None) => record,
        (None, _) => return Err(invalid("no SOA record found".to_string())),
        (Some(_), Some(_)) => {
            return Err(invalid(
                "definition must contain exactly one record".to_string(),
            ))
        }
    };

    if record.record_type() != RecordType::SOA {
        return Err(invalid(format!(
            "expected an SOA record, found {}",
            record.record_type()
        )));
    }
    if record.name() != &apex {
        return Err(invalid(format!(
            "SOA owner {} does not match the zone apex",
            record.name()
        )));
    }

    let mut record = record.clone();
    record.set_ttl(DEFAULT_SOA_TTL);
    Ok(record)
}
