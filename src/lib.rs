//! Porkbun DNS provider for external DNS reconciliation controllers.
//!
//! [`PorkbunProvider`] implements [`Provider`]: it lists the records of every
//! zone in its [`DomainFilter`] as generic [`Endpoint`]s, and converges a
//! [`Changes`] set onto the Porkbun API with create, edit and delete calls.

pub mod config;
pub mod core;
pub mod error;
pub mod providers;

pub use crate::config::Config;
pub use crate::core::changes::Changes;
pub use crate::core::domain_filter::DomainFilter;
pub use crate::core::endpoint::{Endpoint, RecordType};
pub use crate::core::provider::Provider;
pub use crate::error::Error;
pub use crate::providers::porkbun::PorkbunProvider;
