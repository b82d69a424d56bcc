//! Runtime configuration and static site metadata.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only environment-driven setting is the backend base URL. It is read
//! from a `<meta name="backend-url">` tag in the host page first so one built
//! bundle can be pointed at different backends, then from the `BACKEND_URL`
//! variable captured at compile time, then a local default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const BACKEND_URL_META: &str = "backend-url";

pub const SITE_NAME: &str = "RAG AI chatbot";
pub const SITE_DESCRIPTION: &str = "An AI-powered chatbot utilizing Retrieval-Augmented Generation (RAG) to deliver \
     accurate and contextually relevant responses by combining the strengths of pre-trained language models with \
     dynamic, real-time information retrieval.";
pub const SITE_REPOSITORY: &str = "https://github.com/fabimass/rag-ai-chatbot";

/// A labelled link shown in the navbar and its mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[NavItem { label: "Home", href: "/" }, NavItem { label: "About", href: "/about" }];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub backend_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { backend_url: DEFAULT_BACKEND_URL.to_owned() }
    }
}

impl AppConfig {
    /// Build config from explicit sources in precedence order.
    pub fn resolve(meta: Option<&str>, compiled: Option<&str>) -> Self {
        let backend_url = [meta, compiled]
            .into_iter()
            .flatten()
            .map(normalize_base_url)
            .find(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        Self { backend_url }
    }

    /// Load config from the host page and the compile-time environment.
    pub fn load() -> Self {
        let meta = read_meta_backend_url();
        Self::resolve(meta.as_deref(), option_env!("BACKEND_URL"))
    }

    /// Absolute URL for an API path such as `/api/ask`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn read_meta_backend_url() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{BACKEND_URL_META}\"]");
        let element = document.query_selector(&selector).ok().flatten()?;
        element.get_attribute("content")
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
