//! Per-site stats and shared link requests

use plausible_protocol::{
    AggregateQuery, AggregateResult, BreakdownQuery, BreakdownResult, QueryArgs,
    RawAggregateResponse, RawBreakdownResponse, RawTimeseriesResponse, SharedLinkRequest,
    SharedLinkResult, TimeseriesQuery, TimeseriesResult,
};
use reqwest::Method;

use crate::response_handling::parse_visitor_count;
use crate::{Client, PlausibleResult};

/// Handle to one site, obtained from [`Client::site`].
///
/// Every query is validated locally first; an invalid query returns
/// [`crate::PlausibleError::InvalidQuery`] without touching the network.
#[derive(Debug, Clone)]
pub struct Site {
    client: Client,
    id: String,
}

impl Site {
    pub(crate) fn new(client: Client, id: String) -> Self {
        Self { client, id }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of visitors on the site in the last 5 minutes
    pub fn current_visitors(&self) -> PlausibleResult<u64> {
        let body = self.get("stats/realtime/visitors", QueryArgs::new())?;
        parse_visitor_count(&body)
    }

    /// Metrics aggregated over the query period.
    ///
    /// A period without data yields an all-zero result rather than an error.
    pub fn aggregate(&self, query: &AggregateQuery) -> PlausibleResult<AggregateResult> {
        query.validate()?;
        let body = self.get("stats/aggregate", query.to_query_args())?;
        let raw: RawAggregateResponse = serde_json::from_slice(&body)?;
        Ok(raw.into())
    }

    /// One data point per interval of the query period
    pub fn timeseries(&self, query: &TimeseriesQuery) -> PlausibleResult<TimeseriesResult> {
        query.validate()?;
        let body = self.get("stats/timeseries", query.to_query_args())?;
        let raw: RawTimeseriesResponse = serde_json::from_slice(&body)?;
        Ok(raw.into())
    }

    /// Metrics for each value of the queried property
    pub fn breakdown(&self, query: &BreakdownQuery) -> PlausibleResult<BreakdownResult> {
        query.validate()?;
        let body = self.get("stats/breakdown", query.to_query_args())?;
        let raw: RawBreakdownResponse = serde_json::from_slice(&body)?;
        Ok(raw.into())
    }

    /// Create a shared link to the site dashboard, or return the existing
    /// link with the same name.
    ///
    /// Requires a token with access to the Sites API.
    pub fn shared_link(&self, request: &SharedLinkRequest) -> PlausibleResult<SharedLinkResult> {
        request.validate()?;
        self.client.fetch_json(
            Method::PUT,
            "sites/shared-links",
            &QueryArgs::new(),
            Some(&request.to_form_args(&self.id)),
        )
    }

    /// GET with `site_id` appended after the query's own arguments
    fn get(&self, endpoint: &str, mut query: QueryArgs) -> PlausibleResult<Vec<u8>> {
        query.add("site_id", self.id.as_str());
        self.client.execute(Method::GET, endpoint, &query, None)
    }
}
