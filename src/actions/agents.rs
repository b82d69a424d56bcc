//! One-shot agent health fetch for the navbar.

#[cfg(test)]
#[path = "agents_test.rs"]
mod agents_test;

use crate::net::api::ChatApi;
use crate::state::agents::AgentsState;
use crate::util::shared::SharedState;

/// Fetch agent statuses once. No retry; failure leaves the list empty.
pub async fn load_agents<A, S>(api: &A, store: &S)
where
    A: ChatApi,
    S: SharedState<AgentsState>,
{
    let result = api.agents().await;
    match &result {
        Ok(agents) => leptos::logging::log!("agent status loaded: {} agents", agents.len()),
        Err(e) => leptos::logging::warn!("agent status fetch failed: {e}"),
    }
    store.modify(|s| s.apply(result));
}
