use navtoggle_core::config::ARIA_EXPANDED;
use navtoggle_core::{
    ElementRole, MenuState, NavDocument, NavElement, NavToggle, NavToggleConfig, NavToggleError,
    SyntheticDocument, SyntheticElement,
};

fn page(initial: MenuState, links: usize) -> NavToggle<SyntheticDocument> {
    let config = NavToggleConfig::default();
    let doc = SyntheticDocument::nav_fixture(&config, initial, links);
    NavToggle::new(doc, config)
}

fn element(toggle: &NavToggle<SyntheticDocument>, id: &str) -> SyntheticElement {
    toggle.document().element_by_id(id).unwrap()
}

fn links(toggle: &NavToggle<SyntheticDocument>) -> Vec<SyntheticElement> {
    let menu = element(toggle, "nav-toggle-menu");
    toggle.document().links_within(&menu, "dropdown__btn--mobile")
}

fn assert_lockstep(toggle: &NavToggle<SyntheticDocument>) {
    let button = element(toggle, "nav-toggle");
    let menu = element(toggle, "nav-toggle-menu");
    let expanded = button.attribute(ARIA_EXPANDED);
    assert_eq!(expanded.as_deref() == Some("true"), button.has_class("active"));
    assert_ne!(button.has_class("active"), button.has_class("closed"));
    assert_ne!(menu.has_class("active"), menu.has_class("closed"));

    let expected = if menu.has_class("active") { 0 } else { -1 };
    for link in links(toggle) {
        assert_eq!(link.tab_index(), Some(expected));
    }
}

#[test]
fn one_click_flips_and_two_clicks_return() {
    for start in [MenuState::Open, MenuState::Closed] {
        let toggle = page(start, 2);
        assert_eq!(toggle.toggle().unwrap(), start.toggled());
        assert_lockstep(&toggle);
        assert_eq!(toggle.toggle().unwrap(), start);
        assert_eq!(toggle.current_state().unwrap(), start);
        assert_lockstep(&toggle);
    }
}

#[test]
fn three_link_scenario_opens_then_closes() {
    let toggle = page(MenuState::Closed, 3);
    let button = element(&toggle, "nav-toggle");
    let menu = element(&toggle, "nav-toggle-menu");

    toggle.toggle().unwrap();
    assert!(button.has_class("active") && !button.has_class("closed"));
    assert_eq!(button.attribute(ARIA_EXPANDED).as_deref(), Some("true"));
    assert!(menu.has_class("active") && !menu.has_class("closed"));
    let tab_indexes: Vec<_> = links(&toggle).iter().map(SyntheticElement::tab_index).collect();
    assert_eq!(tab_indexes, vec![Some(0); 3]);

    toggle.toggle().unwrap();
    assert!(button.has_class("closed") && !button.has_class("active"));
    assert_eq!(button.attribute(ARIA_EXPANDED).as_deref(), Some("false"));
    assert!(menu.has_class("closed") && !menu.has_class("active"));
    let tab_indexes: Vec<_> = links(&toggle).iter().map(SyntheticElement::tab_index).collect();
    assert_eq!(tab_indexes, vec![Some(-1); 3]);
}

#[test]
fn menu_without_links_still_toggles() {
    let toggle = page(MenuState::Closed, 0);
    assert_eq!(toggle.toggle().unwrap(), MenuState::Open);
    assert!(element(&toggle, "nav-toggle-menu").has_class("active"));
    assert_eq!(
        element(&toggle, "nav-toggle").attribute(ARIA_EXPANDED).as_deref(),
        Some("true")
    );
}

#[test]
fn rapid_clicks_match_spaced_clicks() {
    for clicks in 0..7 {
        let rapid = page(MenuState::Closed, 2);
        let spaced = page(MenuState::Closed, 2);
        let rapid_state = rapid.toggle_n(clicks).unwrap();
        let mut spaced_state = spaced.current_state().unwrap();
        for _ in 0..clicks {
            spaced_state = spaced.toggle().unwrap();
            assert_lockstep(&spaced);
        }
        assert_eq!(rapid_state, spaced_state);
        let expected = if clicks % 2 == 1 {
            MenuState::Open
        } else {
            MenuState::Closed
        };
        assert_eq!(rapid_state, expected);
        assert_lockstep(&rapid);
    }
}

#[test]
fn unexpected_aria_value_opens_menu() {
    for value in ["", "yes", "True", "mixed"] {
        let toggle = page(MenuState::Closed, 1);
        element(&toggle, "nav-toggle").set_attribute(ARIA_EXPANDED, value);
        assert_eq!(toggle.toggle().unwrap(), MenuState::Open);
        assert_lockstep(&toggle);
    }

    let toggle = page(MenuState::Closed, 1);
    element(&toggle, "nav-toggle").remove_attribute(ARIA_EXPANDED);
    assert_eq!(toggle.toggle().unwrap(), MenuState::Open);
}

#[test]
fn missing_menu_fails_that_click_only() {
    let config = NavToggleConfig::default();
    let doc = SyntheticDocument::nav_fixture(&config, MenuState::Closed, 1);
    let menu = doc.element_by_id("nav-toggle-menu").unwrap();
    let toggle = NavToggle::new(doc, config);

    toggle.document().remove_by_id("nav-toggle-menu");
    let err = toggle.toggle().unwrap_err();
    assert!(matches!(
        err,
        NavToggleError::MissingElement {
            role: ElementRole::MenuContainer,
            ..
        }
    ));

    toggle.document().append(menu);
    // The failed click already flipped the button, so this one closes it again.
    assert_eq!(toggle.toggle().unwrap(), MenuState::Closed);
    assert_lockstep(&toggle);
}

#[test]
fn custom_keys_are_honoured() {
    let config = NavToggleConfig::from_json(
        r#"{"toggleId":"burger","menuId":"drawer","linkClass":"drawer-link","activeClass":"is-open","closedClass":"is-closed"}"#,
    )
    .unwrap();
    let doc = SyntheticDocument::nav_fixture(&config, MenuState::Closed, 2);
    let toggle = NavToggle::new(doc, config);
    assert_eq!(toggle.toggle().unwrap(), MenuState::Open);

    let drawer = toggle.document().element_by_id("drawer").unwrap();
    assert!(drawer.has_class("is-open"));
    assert!(!drawer.has_class("active"));
    for link in toggle.document().links_within(&drawer, "drawer-link") {
        assert_eq!(link.tab_index(), Some(0));
    }
}

#[test]
fn apply_forces_state_idempotently() {
    let toggle = page(MenuState::Closed, 2);
    assert_eq!(toggle.apply(MenuState::Open).unwrap(), MenuState::Open);
    assert_eq!(toggle.apply(MenuState::Open).unwrap(), MenuState::Open);
    assert_lockstep(&toggle);
    assert_eq!(toggle.toggle().unwrap(), MenuState::Closed);
}

#[test]
fn menu_inserted_after_load_is_found_on_next_click() {
    let doc = SyntheticDocument::new();
    doc.append(
        SyntheticElement::new()
            .with_id("nav-toggle")
            .with_attribute(ARIA_EXPANDED, "false"),
    );
    let toggle = NavToggle::new(doc, NavToggleConfig::default());
    assert!(matches!(
        toggle.sync(),
        Err(NavToggleError::MissingElement {
            role: ElementRole::MenuContainer,
            ..
        })
    ));

    let link = SyntheticElement::new().with_class("dropdown__btn--mobile");
    toggle.document().append(
        SyntheticElement::new()
            .with_id("nav-toggle-menu")
            .with_child(link.clone()),
    );
    assert_eq!(toggle.toggle().unwrap(), MenuState::Open);
    assert_eq!(link.tab_index(), Some(0));
    assert_lockstep(&toggle);
}
