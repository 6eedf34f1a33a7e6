//! Effects - side effects declared by the reducer

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current conditions for a registry city.
    ///
    /// `request_id` comes back on the result action so stale results can be dropped.
    FetchWeather { request_id: u64, city: String },
}
