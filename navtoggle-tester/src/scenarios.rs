use anyhow::{Result, bail, ensure};
use navtoggle_core::config::ARIA_EXPANDED;
use navtoggle_core::{
    ElementRole, MenuState, NavDocument, NavElement, NavToggle, NavToggleConfig, NavToggleError,
    SyntheticDocument,
};

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub config: NavToggleConfig,
    pub initial: MenuState,
    pub links: usize,
    pub clicks: usize,
    pub verbose: bool,
}

impl ScenarioCtx {
    fn page(&self, initial: MenuState, links: usize) -> NavToggle<SyntheticDocument> {
        let doc = SyntheticDocument::nav_fixture(&self.config, initial, links);
        NavToggle::new(doc, self.config.clone())
    }

    fn trace(&self, message: &str) {
        if self.verbose {
            println!("    {message}");
        }
    }
}

type ScenarioFn = fn(&ScenarioCtx) -> Result<()>;

pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    run: ScenarioFn,
}

impl Scenario {
    pub fn run(&self, ctx: &ScenarioCtx) -> Result<()> {
        (self.run)(ctx)
    }
}

static SCENARIOS: &[Scenario] = &[
    Scenario {
        key: "involution",
        description: "One click flips the state, a second click restores it",
        run: involution,
    },
    Scenario {
        key: "aria-lockstep",
        description: "aria-expanded is \"true\" exactly when the button is active",
        run: aria_lockstep,
    },
    Scenario {
        key: "tab-order",
        description: "Menu links are reachable exactly when the menu is active",
        run: tab_order,
    },
    Scenario {
        key: "empty-menu",
        description: "A menu without links still toggles",
        run: empty_menu,
    },
    Scenario {
        key: "three-links",
        description: "Closed page with three links opens and closes",
        run: three_links,
    },
    Scenario {
        key: "rapid-clicks",
        description: "Back-to-back clicks end where spaced clicks end",
        run: rapid_clicks,
    },
    Scenario {
        key: "missing-menu",
        description: "A missing menu fails one click without poisoning the next",
        run: missing_menu,
    },
];

pub fn list_scenarios() -> impl Iterator<Item = (&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description))
}

pub fn get_scenario(key: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.key == key)
}

pub fn all_keys() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.key.to_string()).collect()
}

fn check_lockstep(ctx: &ScenarioCtx, toggle: &NavToggle<SyntheticDocument>) -> Result<MenuState> {
    let doc = toggle.document();
    let Some(button) = doc.element_by_id(&ctx.config.toggle_id) else {
        bail!("toggle button disappeared");
    };
    let Some(menu) = doc.element_by_id(&ctx.config.menu_id) else {
        bail!("menu container disappeared");
    };

    let active = button.has_class(&ctx.config.active_class);
    let expanded = button.attribute(ARIA_EXPANDED);
    ensure!(
        active == (expanded.as_deref() == Some("true")),
        "button active={active} but aria-expanded={expanded:?}"
    );
    ensure!(
        active != button.has_class(&ctx.config.closed_class),
        "button carries both or neither state class"
    );

    let state = MenuState::from_active_class(menu.has_class(&ctx.config.active_class));
    ensure!(
        state.is_open() != menu.has_class(&ctx.config.closed_class),
        "menu carries both or neither state class"
    );
    for (idx, link) in doc
        .links_within(&menu, &ctx.config.link_class)
        .iter()
        .enumerate()
    {
        ensure!(
            link.tab_index() == Some(state.tab_index()),
            "link {idx} has tab index {:?} while menu is {state}",
            link.tab_index()
        );
    }
    Ok(state)
}

fn involution(ctx: &ScenarioCtx) -> Result<()> {
    for start in [MenuState::Closed, MenuState::Open] {
        let toggle = ctx.page(start, ctx.links);
        let once = toggle.toggle()?;
        ensure!(once == start.toggled(), "{start} -> {once} after one click");
        let twice = toggle.toggle()?;
        ensure!(twice == start, "{start} -> {twice} after two clicks");
        check_lockstep(ctx, &toggle)?;
        ctx.trace(&format!("{start} -> {once} -> {twice}"));
    }
    Ok(())
}

fn aria_lockstep(ctx: &ScenarioCtx) -> Result<()> {
    let toggle = ctx.page(ctx.initial, ctx.links);
    for click in 1..=ctx.clicks {
        let state = toggle.toggle()?;
        check_lockstep(ctx, &toggle)?;
        ctx.trace(&format!("click {click}: {state}"));
    }
    Ok(())
}

fn tab_order(ctx: &ScenarioCtx) -> Result<()> {
    let toggle = ctx.page(ctx.initial, ctx.links.max(1));
    for _ in 0..ctx.clicks {
        let state = toggle.toggle()?;
        let lockstep = check_lockstep(ctx, &toggle)?;
        ensure!(state == lockstep, "toggle reported {state}, page shows {lockstep}");
    }
    Ok(())
}

fn empty_menu(ctx: &ScenarioCtx) -> Result<()> {
    let toggle = ctx.page(ctx.initial, 0);
    let state = toggle.toggle()?;
    ensure!(state == ctx.initial.toggled(), "empty menu stayed {state}");
    check_lockstep(ctx, &toggle)?;
    Ok(())
}

fn three_links(ctx: &ScenarioCtx) -> Result<()> {
    let toggle = ctx.page(MenuState::Closed, 3);
    ensure!(toggle.toggle()? == MenuState::Open, "first click did not open");
    ensure!(check_lockstep(ctx, &toggle)? == MenuState::Open, "page not open");
    ensure!(toggle.toggle()? == MenuState::Closed, "second click did not close");
    ensure!(check_lockstep(ctx, &toggle)? == MenuState::Closed, "page not closed");
    Ok(())
}

fn rapid_clicks(ctx: &ScenarioCtx) -> Result<()> {
    let rapid = ctx.page(ctx.initial, ctx.links);
    let spaced = ctx.page(ctx.initial, ctx.links);
    let rapid_end = rapid.toggle_n(ctx.clicks)?;
    let mut spaced_end = spaced.current_state()?;
    for _ in 0..ctx.clicks {
        spaced_end = spaced.toggle()?;
        check_lockstep(ctx, &spaced)?;
    }
    ensure!(rapid_end == spaced_end, "rapid={rapid_end} spaced={spaced_end}");
    check_lockstep(ctx, &rapid)?;
    ctx.trace(&format!("{} clicks end {rapid_end}", ctx.clicks));
    Ok(())
}

fn missing_menu(ctx: &ScenarioCtx) -> Result<()> {
    let toggle = ctx.page(ctx.initial, ctx.links);
    let Some(menu) = toggle.document().element_by_id(&ctx.config.menu_id) else {
        bail!("fixture has no menu");
    };
    toggle.document().remove_by_id(&ctx.config.menu_id);
    match toggle.toggle() {
        Err(NavToggleError::MissingElement {
            role: ElementRole::MenuContainer,
            ..
        }) => {}
        other => bail!("expected missing menu error, got {other:?}"),
    }
    toggle.document().append(menu);
    toggle.toggle()?;
    check_lockstep(ctx, &toggle)?;
    Ok(())
}
