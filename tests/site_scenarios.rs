//! End-to-end scenarios over route resolution, content and page state
//!
//! These drive the same state machines the browser components use, without
//! a DOM.

use insta::assert_snapshot;
use shavolts_app::message::{FooterMessage, HeaderMessage, ShaPhoneMessage};
use shavolts_app::motion::{shabook_device, shaphone_device, ScrollRange};
use shavolts_app::state::{FooterState, HeaderState, ShaPhoneState, ShaWatchState};
use shavolts_app::{dispatch, document_title, resolve, UpdateAction};
use shavolts_core::content::home::{self, HomeSection};
use shavolts_core::content::shaphone::{MOBILE_SPECS_PANEL, STORAGE};
use shavolts_core::{footer_section, FooterSectionKey, Route, MAIN_NAV};

#[test]
fn test_every_route_resolves_to_exactly_its_page() {
    for route in Route::ALL {
        assert_eq!(resolve(route.path()), Some(route), "{route}");
        let others = Route::ALL
            .into_iter()
            .filter(|other| resolve(other.path()) == Some(route))
            .count();
        assert_eq!(others, 1, "{route}");
    }
    assert_eq!(resolve("/store/"), Some(Route::Store));
}

#[test]
fn test_main_nav_targets_are_registered_routes() {
    for link in MAIN_NAV {
        assert!(resolve(link.href).is_some(), "{}", link.href);
    }
}

#[test]
fn test_unknown_path_keeps_shell_with_empty_body() {
    assert_eq!(resolve("/bag"), None);
    assert_eq!(document_title("/bag"), "ShaVolts");
}

#[test]
fn test_home_renders_hero_then_arrivals_then_watch_promo() {
    assert_eq!(
        home::SECTIONS,
        &[
            HomeSection::Hero,
            HomeSection::NewArrivals,
            HomeSection::WatchPromo
        ]
    );
    assert_eq!(home::HERO_HEADING, "Where Technology Meets Elegance");
    assert_eq!(home::NEW_ARRIVALS.len(), 3);
    assert!(home::NEW_ARRIVALS.iter().all(|item| item.badge.is_some()));
    assert_eq!(home::WATCH_PROMO.title, "SHAWATCH");
}

#[test]
fn test_shaphone_storage_changes_price() {
    let mut state = ShaPhoneState::new();
    assert_eq!(STORAGE[state.storage.index()].size, "128GB");
    assert_eq!(state.cta_text(), "Starting from $999");

    dispatch(&mut state, ShaPhoneMessage::SelectStorage(1));
    assert_eq!(state.storage.current().size, "256GB");
    assert_eq!(state.cta_text(), "Starting from $1099");
}

#[test]
fn test_shaphone_rejects_missing_storage_option() {
    let mut state = ShaPhoneState::new();
    dispatch(&mut state, ShaPhoneMessage::SelectStorage(2));
    dispatch(&mut state, ShaPhoneMessage::SelectStorage(STORAGE.len()));
    assert_eq!(state.price(), 1299);
}

#[test]
fn test_footer_starts_collapsed_and_toggles_one_section() {
    let mut footer = FooterState::new();
    for key in FooterSectionKey::ALL {
        assert!(!footer.is_expanded(key));
    }

    dispatch(&mut footer, FooterMessage::ToggleSection(FooterSectionKey::Shop));
    assert!(footer.is_expanded(FooterSectionKey::Shop));
    assert!(!footer.is_expanded(FooterSectionKey::Services));
    assert_eq!(footer_section(FooterSectionKey::Shop).links.len(), 6);

    dispatch(&mut footer, FooterMessage::ToggleSection(FooterSectionKey::Shop));
    assert_eq!(footer.expanded_count(), 0);
}

#[test]
fn test_mobile_menu_lists_seven_links_and_closes_on_select() {
    let mut header = HeaderState::new();
    dispatch(&mut header, HeaderMessage::OpenMenu);
    assert!(header.menu_open);
    assert_eq!(MAIN_NAV.len(), 7);

    for link in MAIN_NAV {
        dispatch(&mut header, HeaderMessage::OpenMenu);
        let actions = dispatch(&mut header, HeaderMessage::SelectMenuLink(link.href));
        assert!(!header.menu_open);
        assert_eq!(actions, vec![UpdateAction::Navigate { href: link.href }]);
    }
}

#[test]
fn test_search_and_menu_are_independent() {
    let mut header = HeaderState::new();
    let actions = dispatch(&mut header, HeaderMessage::OpenSearch);
    assert_eq!(actions, vec![UpdateAction::FocusSearchInput]);
    dispatch(&mut header, HeaderMessage::OpenMenu);
    dispatch(&mut header, HeaderMessage::CloseSearch);
    assert!(header.menu_open);
    assert!(!header.search_open);
}

#[test]
fn test_single_select_disclosures() {
    let mut phone = ShaPhoneState::new();
    dispatch(&mut phone, ShaPhoneMessage::TogglePanel("sustainability"));
    dispatch(&mut phone, ShaPhoneMessage::TogglePanel(MOBILE_SPECS_PANEL));
    assert_eq!(phone.panels.open(), Some(MOBILE_SPECS_PANEL));
    dispatch(&mut phone, ShaPhoneMessage::TogglePanel(MOBILE_SPECS_PANEL));
    assert_eq!(phone.panels.open(), None);

    let mut watch = ShaWatchState::new();
    dispatch(
        &mut watch,
        shavolts_app::message::ShaWatchMessage::ToggleLink("ShaStraps"),
    );
    assert!(watch.links.is_open("ShaStraps"));
}

#[test]
fn test_device_transforms_follow_scroll() {
    // 1000px page in an 800px viewport, scrolled 20px: a tenth of the way
    let p = ScrollRange::SHAPHONE.progress(-20.0, 1000.0, 800.0);
    assert_snapshot!(shaphone_device(p, false).to_css(), @"translateY(25px) scale(0.975) rotateY(2.5deg)");
    assert!(shaphone_device(p, true).is_identity());
    assert!(shabook_device(1.0, 1.0, true).is_identity());
}
