//! Plausible Client - Blocking client for the Plausible Analytics API
//!
//! Covers the Stats API (current visitors, aggregate, timeseries and
//! breakdown queries), the Sites API (site creation, listing and shared
//! links) and the Events API.
//!
//! ```no_run
//! use plausible_client::{AggregateQuery, Client, Metrics, TimePeriod};
//!
//! let client = Client::new("<api token>")?;
//! let site = client.site("example.com");
//!
//! let query = AggregateQuery::new(TimePeriod::last_7_days(), Metrics::all());
//! let result = site.aggregate(&query)?;
//! println!("{} visitors", result.visitors);
//! # Ok::<(), plausible_client::PlausibleError>(())
//! ```

mod client;
mod config;
mod error;
mod events;
mod response_handling;
mod site;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
pub use error::{PlausibleError, PlausibleResult};
pub use plausible_protocol::*;
pub use secrecy::SecretString;
pub use site::Site;
