//! Top navigation bar with the logo, nav links and agent health indicators.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the one-time agent status fetch: the request is issued when the
//! navbar mounts and the spinner stays up until it settles either way.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::agent_icon::AgentIcon;
use crate::config::{NAV_ITEMS, SITE_NAME};
use crate::net::types::AgentStatus;
use crate::state::agents::AgentsState;

#[component]
pub fn Navbar() -> impl IntoView {
    let agents = expect_context::<RwSignal<AgentsState>>();
    let menu_open = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        let api = expect_context::<crate::net::api::HttpChatApi>();
        leptos::task::spawn_local(async move {
            crate::actions::agents::load_agents(&api, &agents).await;
        });
    }

    let loading = move || agents.with(|s| s.loading);
    let spinner = move || loading().then(|| view! { <div class="spinner spinner--sm" role="status"></div> });

    view! {
        <nav class="navbar">
            <div class="navbar__brand">
                <A href="/">
                    <span class="navbar__logo" aria-label=SITE_NAME>"🤖"</span>
                </A>
            </div>

            <div class="navbar__links">
                {NAV_ITEMS
                    .iter()
                    .map(|item| view! { <A href=item.href>{item.label}</A> })
                    .collect::<Vec<_>>()}
            </div>

            <div
                class="navbar__agents"
                aria-label=move || agents.with(|s| format!("{} of {} agents healthy", s.healthy_count(), s.agents.len()))
            >
                {spinner}
                {move || {
                    agents
                        .get()
                        .agents
                        .into_iter()
                        .map(|agent| view! { <AgentIcon name=agent.name healthy=agent.healthy tooltip=true/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <button
                class="navbar__menu-toggle"
                aria-label=move || menu_toggle_label(menu_open.get())
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <Show when=move || menu_open.get()>
                <div class="navbar__menu">
                    {spinner}
                    {move || {
                        agents
                            .get()
                            .agents
                            .into_iter()
                            .map(|agent| {
                                let label = menu_label(&agent);
                                view! {
                                    <div class="navbar__menu-item">
                                        <AgentIcon name=agent.name healthy=agent.healthy/>
                                        <span>{label}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </nav>
    }
}

fn menu_toggle_label(open: bool) -> &'static str {
    if open { "Close menu" } else { "Open menu" }
}

pub(crate) fn menu_label(agent: &AgentStatus) -> String {
    let status = if agent.healthy { "Healthy" } else { "Unhealthy" };
    format!("{} - {status}", agent.name)
}
