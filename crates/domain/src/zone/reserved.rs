use super::definition::ZoneDefinition;

/// SOA shared by every reserved zone; only the `$ORIGIN` differs.
pub const CANONICAL_SOA: &str = "@ SOA prisoner.iana.org. hostmaster.root-servers.org. 2002040800 1800 900 0604800 604800";

/// Reverse zones for RFC 1918 and link-local address space.
pub const RESERVED_ZONES: [&str; 19] = [
    "10.in-addr.arpa.",
    "254.169.in-addr.arpa.",
    "168.192.in-addr.arpa.",
    "16.172.in-addr.arpa.",
    "17.172.in-addr.arpa.",
    "18.172.in-addr.arpa.",
    "19.172.in-addr.arpa.",
    "20.172.in-addr.arpa.",
    "21.172.in-addr.arpa.",
    "22.172.in-addr.arpa.",
    "23.172.in-addr.arpa.",
    "24.172.in-addr.arpa.",
    "25.172.in-addr.arpa.",
    "26.172.in-addr.arpa.",
    "27.172.in-addr.arpa.",
    "28.172.in-addr.arpa.",
    "29.172.in-addr.arpa.",
    "30.172.in-addr.arpa.",
    "31.172.in-addr.arpa.",
];

pub fn reserved_zone_definitions() -> Vec<ZoneDefinition> {
    RESERVED_ZONES
        .iter()
        .map(|apex| ZoneDefinition::new(*apex, format!("$ORIGIN {apex}\n{CANONICAL_SOA}")))
        .collect()
}
