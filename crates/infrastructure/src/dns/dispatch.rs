//! Routes inbound queries to the reserved zone that owns their question name.
//!
//! Queries outside every registered zone fall through to the default policy
//! (REFUSED) and never receive an SOA.

use super::response_builder::NegativeResponseBuilder;
use super::zone_table::ZoneTable;
use hickory_proto::op::{Header, Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::{LowerName, Record};
use std::sync::Arc;
use tracing::debug;

/// Outcome of routing one query.
#[derive(Debug, PartialEq)]
pub enum Route<'a> {
    Zone {
        apex: &'a LowerName,
        soa: &'a Record,
    },
    Unregistered,
    NotImplemented,
    FormatError,
    /// Not a query at all; nothing is sent back.
    Ignored,
}

impl Route<'_> {
    /// Response code of the reply for this route; `None` when nothing is sent.
    pub fn response_code(&self) -> Option<ResponseCode> {
        match self {
            Route::Zone { .. } => Some(ResponseCode::NoError),
            Route::Unregistered => Some(ResponseCode::Refused),
            Route::NotImplemented => Some(ResponseCode::NotImp),
            Route::FormatError => Some(ResponseCode::FormErr),
            Route::Ignored => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ZoneDispatcher {
    zones: Arc<ZoneTable>,
}

impl ZoneDispatcher {
    pub fn new(zones: Arc<ZoneTable>) -> Self {
        Self { zones }
    }

    pub fn route_name(&self, name: &LowerName) -> Route<'_> {
        match self.zones.find(name) {
            Some((apex, soa)) => Route::Zone { apex, soa },
            None => Route::Unregistered,
        }
    }

    /// Classify a request from its header and its single question.
    ///
    /// `question` is `None` unless the request carries exactly one question.
    pub fn route_request(&self, header: &Header, question: Option<&LowerName>) -> Route<'_> {
        if header.message_type() != MessageType::Query {
            return Route::Ignored;
        }
        if header.op_code() != OpCode::Query {
            return Route::NotImplemented;
        }

        match question {
            Some(name) => self.route_name(name),
            None => Route::FormatError,
        }
    }

    pub fn route(&self, query: &Message) -> Route<'_> {
        let question = match query.queries() {
            [question] => Some(LowerName::from(question.name())),
            _ => None,
        };
        self.route_request(query.header(), question.as_ref())
    }

    /// Route `query` and build the reply to send, if any.
    pub fn respond(&self, query: &Message) -> Option<Message> {
        let route = self.route(query);
        let code = route.response_code()?;

        let response = match route {
            Route::Zone { apex, soa } => {
                debug!(id = query.id(), zone = %apex, "Answering with zone SOA");
                NegativeResponseBuilder::build(query, soa)
            }
            _ => {
                debug!(id = query.id(), code = ?code, "Sending error response");
                NegativeResponseBuilder::error(query, code)
            }
        };
        Some(response)
    }
}
