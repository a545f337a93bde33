#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::SOA;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use std::str::FromStr;

pub fn name(value: &str) -> Name {
    Name::from_str(value).unwrap()
}

pub fn query(id: u16, qname: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(Query::query(name(qname), record_type));
    message
}

/// The SOA every reserved zone is expected to carry.
pub fn canonical_soa(apex: &str) -> Record {
    let soa = SOA::new(
        name("prisoner.iana.org."),
        name("hostmaster.root-servers.org."),
        2002040800,
        1800,
        900,
        604800,
        604800,
    );
    Record::from_rdata(name(apex), 3600, RData::SOA(soa))
}
