use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
    assert!(!UiState::default().theme.is_dark());
}

#[test]
fn stored_theme_wins_over_os_preference() {
    assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
}

#[test]
fn os_preference_used_when_nothing_stored() {
    assert_eq!(Theme::resolve(None, true), Theme::Dark);
    assert_eq!(Theme::resolve(None, false), Theme::Light);
}

#[test]
fn unknown_stored_value_is_ignored() {
    assert_eq!(Theme::resolve(Some("true"), true), Theme::Dark);
    assert_eq!(Theme::resolve(Some("sepia"), false), Theme::Light);
}

#[test]
fn theme_toggle_round_trips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    assert_eq!(Theme::from_stored(Theme::Dark.as_str()), Some(Theme::Dark));
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn menu_toggles_and_link_click_closes() {
    let mut ui = UiState::default();
    assert!(!ui.menu_open);
    ui.toggle_menu();
    assert!(ui.menu_open);
    assert_eq!(ui.menu_class("nav-menu"), "nav-menu active");
    ui.close_menu();
    assert!(!ui.menu_open);
    assert_eq!(ui.menu_class("mobile-menu-btn"), "mobile-menu-btn");
}

#[test]
fn close_menu_is_idempotent() {
    let mut ui = UiState::default();
    ui.close_menu();
    ui.close_menu();
    assert!(!ui.menu_open);
}

#[test]
fn nav_links_are_in_page_anchors() {
    assert!(NAV_LINKS.iter().all(|(href, _)| href.starts_with('#')));
}
