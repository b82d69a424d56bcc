use super::*;

#[test]
fn resolve_defaults_when_no_source_is_set() {
    let cfg = AppConfig::resolve(None, None);
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
    assert_eq!(cfg, AppConfig::default());
}

#[test]
fn resolve_prefers_meta_over_compiled_value() {
    let cfg = AppConfig::resolve(Some("https://meta.example"), Some("https://compiled.example"));
    assert_eq!(cfg.backend_url, "https://meta.example");
}

#[test]
fn resolve_falls_back_when_meta_is_blank() {
    let cfg = AppConfig::resolve(Some("   "), Some("https://compiled.example/"));
    assert_eq!(cfg.backend_url, "https://compiled.example");
}

#[test]
fn resolve_trims_trailing_slashes() {
    let cfg = AppConfig::resolve(Some(" http://localhost:9000// "), None);
    assert_eq!(cfg.backend_url, "http://localhost:9000");
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = AppConfig::resolve(Some("http://api.test/"), None);
    assert_eq!(cfg.endpoint("/api/ask"), "http://api.test/api/ask");
    assert_eq!(cfg.endpoint("api/agents"), "http://api.test/api/agents");
}

#[test]
fn nav_items_link_home_and_about() {
    let hrefs: Vec<_> = NAV_ITEMS.iter().map(|item| item.href).collect();
    assert_eq!(hrefs, vec!["/", "/about"]);
}
