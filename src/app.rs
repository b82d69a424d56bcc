//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::config::{AppConfig, SITE_DESCRIPTION, SITE_NAME};
use crate::net::api::HttpChatApi;
use crate::pages::{about::AboutPage, chat::ChatPage};
use crate::state::{agents::AgentsState, conversation::ConversationState};
use crate::util::session::SessionContext;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Resolves the backend URL and session once, then provides them and the
/// shared state signals to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    leptos::logging::log!("backend: {}", config.backend_url);
    let session = SessionContext::establish(&BrowserStorage);

    provide_context(HttpChatApi::new(config.clone()));
    provide_context(config);
    provide_context(session);
    provide_context(RwSignal::new(ConversationState::default()));
    provide_context(RwSignal::new(AgentsState::default()));

    view! {
        <Title text=SITE_NAME/>
        <Meta name="description" content=SITE_DESCRIPTION/>

        <Router>
            <Navbar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
            </Routes>
        </Router>
    }
}
