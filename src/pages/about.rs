//! Static about page.

use leptos::prelude::*;

use crate::config::{SITE_DESCRIPTION, SITE_NAME, SITE_REPOSITORY};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <main class="about-page">
            <h1>{SITE_NAME}</h1>
            <p>{SITE_DESCRIPTION}</p>
            <p>
                "Source code: "
                <a href=SITE_REPOSITORY target="_blank" rel="noopener noreferrer">{SITE_REPOSITORY}</a>
            </p>
        </main>
    }
}
