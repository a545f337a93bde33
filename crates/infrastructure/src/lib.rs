//! hickory-backed zone table, response construction and request dispatch
//! for the AS112 server.
pub mod dns;
