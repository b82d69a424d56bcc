use super::*;

#[test]
fn menu_label_includes_health() {
    let healthy = AgentStatus { name: "Agent1".to_owned(), healthy: true };
    let unhealthy = AgentStatus { name: "Agent2".to_owned(), healthy: false };
    assert_eq!(menu_label(&healthy), "Agent1 - Healthy");
    assert_eq!(menu_label(&unhealthy), "Agent2 - Unhealthy");
}

#[test]
fn menu_toggle_label_tracks_open_state() {
    assert_eq!(menu_toggle_label(false), "Open menu");
    assert_eq!(menu_toggle_label(true), "Close menu");
}
