pub mod changes;
pub mod domain_filter;
pub mod endpoint;
pub mod provider;
