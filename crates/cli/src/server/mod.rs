pub mod dns;

#[cfg(test)]
pub(crate) mod test_support;

pub use dns::DnsListeners;
