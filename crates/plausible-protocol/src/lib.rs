//! Plausible Protocol - Query, filter and result types for the Plausible API
//!
//! This crate holds everything that does not touch the network:
//! - Value types (dates, periods, metrics, properties, filters)
//! - Query objects with validation and query-argument encoding
//! - Wire shapes of API responses and their conversion to public results
//! - Provisioning and event payloads

mod aggregate;
mod breakdown;
mod datetime;
mod error;
mod events;
mod filters;
mod metrics;
mod pagination;
mod properties;
mod query_args;
mod sites;
mod time_period;
mod timeseries;

pub use aggregate::*;
pub use breakdown::*;
pub use datetime::*;
pub use error::*;
pub use events::*;
pub use filters::*;
pub use metrics::*;
pub use pagination::*;
pub use properties::*;
pub use query_args::*;
pub use sites::*;
pub use time_period::*;
pub use timeseries::*;
