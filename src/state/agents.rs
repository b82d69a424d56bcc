//! Backend agent health shown in the navbar.

#[cfg(test)]
#[path = "agents_test.rs"]
mod agents_test;

use crate::net::api::ApiError;
use crate::net::types::AgentStatus;

/// Agent indicators and the navbar spinner flag.
///
/// Starts in the loading state because the fetch is issued on mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentsState {
    pub agents: Vec<AgentStatus>,
    pub loading: bool,
}

impl Default for AgentsState {
    fn default() -> Self {
        Self { agents: Vec::new(), loading: true }
    }
}

impl AgentsState {
    /// Settle the one-time fetch. Failure leaves the list empty.
    pub fn apply(&mut self, result: Result<Vec<AgentStatus>, ApiError>) {
        self.agents = result.unwrap_or_default();
        self.loading = false;
    }

    pub fn healthy_count(&self) -> usize {
        self.agents.iter().filter(|a| a.healthy).count()
    }
}
