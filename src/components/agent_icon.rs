//! Robot icon with a health badge for one backend agent.

#[cfg(test)]
#[path = "agent_icon_test.rs"]
mod agent_icon_test;

use leptos::prelude::*;

/// Agent indicator. With `tooltip`, the agent name shows on hover.
#[component]
pub fn AgentIcon(name: String, healthy: bool, #[prop(optional)] tooltip: bool) -> impl IntoView {
    let title = tooltip.then_some(name);

    view! {
        <span class="agent-icon" title=title>
            <button class="agent-icon__button" aria-label="agent status">
                "🤖"
            </button>
            <span class=badge_class(healthy)>{badge_symbol(healthy)}</span>
        </span>
    }
}

pub(crate) fn badge_symbol(healthy: bool) -> &'static str {
    if healthy { "✓" } else { "!" }
}

pub(crate) fn badge_class(healthy: bool) -> &'static str {
    if healthy { "agent-icon__badge agent-icon__badge--success" } else { "agent-icon__badge agent-icon__badge--danger" }
}
