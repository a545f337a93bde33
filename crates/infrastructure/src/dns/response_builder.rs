//! Negative Response Builder
//!
//! Builds the authoritative "nothing here" answer for reserved zones: the
//! question is echoed, the answer section stays empty and the authority
//! section carries the zone's SOA record.

use hickory_proto::op::{Header, Message, ResponseCode};
use hickory_proto::rr::Record;

pub struct NegativeResponseBuilder;

impl NegativeResponseBuilder {
    /// Response header for an authoritative negative answer to `request`.
    ///
    /// Keeps the request id, opcode and RD flag.
    pub fn negative_header(request: &Header) -> Header {
        let mut header = Header::response_from_request(request);
        header.set_authoritative(true);
        header.set_response_code(ResponseCode::NoError);
        header
    }

    /// Build the full reply to `query` for the zone owning `soa`.
    pub fn build(query: &Message, soa: &Record) -> Message {
        let mut response = Message::new();
        response.set_header(Self::negative_header(query.header()));
        response.add_queries(query.queries().iter().cloned());
        response.add_name_server(soa.clone());
        response
    }

    /// Reply carrying only a response code and the echoed question.
    pub fn error(query: &Message, code: ResponseCode) -> Message {
        let mut header = Header::response_from_request(query.header());
        header.set_response_code(code);

        let mut response = Message::new();
        response.set_header(header);
        response.add_queries(query.queries().iter().cloned());
        response
    }
}
