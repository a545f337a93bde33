pub mod dispatch;
pub mod response_builder;
pub mod server;
pub mod zone_table;

pub use dispatch::{Route, ZoneDispatcher};
pub use response_builder::NegativeResponseBuilder;
pub use server::As112RequestHandler;
pub use zone_table::{parse_soa_definition, ZoneTable};
