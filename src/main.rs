mod anchor;
mod config;
mod counter;
mod dom;
mod input;
mod menu;
mod reveal;
mod scroll_spy;
mod tiers;
mod view_toggle;

use std::{cell::RefCell, rc::Rc};

use anchor::LinkKind;
use config::SiteConfig;
use counter::{CounterAnimation, CounterPhase};
use menu::{ClickOrigin, Menu, OutsideClose};
use reveal::RevealSet;
use scroll_spy::{ScrollSpy, Section};
use tiers::state::TierCatalog;
use tiers::{Calculator, CalculatorRender};
use view_toggle::{Settle, TierView, ViewToggle};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, ScrollToOptions,
};

fn main() {
    console_error_panic_hook::set_once();

    let Some(doc) = dom::document() else {
        return;
    };
    let config = Rc::new(load_config(&doc));

    let nav_menu = bind_menu(&doc, "mobileMenuToggle", "navMenu", OutsideClose::Always);
    let sidebar = bind_menu(
        &doc,
        "menuToggle",
        "sidebar",
        OutsideClose::AtOrBelow(config.sidebar_breakpoint),
    );

    bind_in_page_links(&doc, &config, nav_menu, sidebar);
    bind_scroll_spy(&doc, &config);
    bind_reveal(&doc, &config);
    bind_stats_counters(&doc, &config);
    bind_calculator(&doc, &config);
    bind_view_toggle(&doc, &config);
}

/// Defaults, overridden by the `#site-config` JSON block when present.
fn load_config(doc: &Document) -> SiteConfig {
    let Some(json) = doc
        .get_element_by_id(config::CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    SiteConfig::from_json(&json).unwrap_or_else(|e| {
        dom::warn(&format!("site-config ignored: {e}"));
        SiteConfig::default()
    })
}

// ── Menus ──────────────────────────────────────────────────────

/// A menu's state together with the panel that shows it.
struct MenuBinding {
    state: RefCell<Menu>,
    panel: Element,
}

impl MenuBinding {
    fn close_on_navigate(&self) {
        if self.state.borrow_mut().on_navigate(dom::viewport_width()) {
            dom::set_class(&self.panel, "active", false);
        }
    }
}

fn bind_menu(
    doc: &Document,
    toggle_id: &str,
    panel_id: &str,
    outside_close: OutsideClose,
) -> Option<Rc<MenuBinding>> {
    let (Some(toggle), Some(panel)) = (
        doc.get_element_by_id(toggle_id),
        doc.get_element_by_id(panel_id),
    ) else {
        dom::debug(&format!("menu #{panel_id}: markup missing, skipped"));
        return None;
    };
    let binding = Rc::new(MenuBinding {
        state: RefCell::new(Menu::new(outside_close)),
        panel,
    });

    dom::on(&toggle, "click", {
        let binding = binding.clone();
        move |_| {
            let open = binding.state.borrow_mut().toggle();
            dom::set_class(&binding.panel, "active", open);
        }
    });

    dom::on(doc, "click", {
        let binding = binding.clone();
        move |event| {
            let target = event.target();
            let origin = ClickOrigin {
                inside_menu: dom::contains_target(&binding.panel, target.as_ref()),
                inside_toggle: dom::contains_target(&toggle, target.as_ref()),
            };
            let closed = binding
                .state
                .borrow_mut()
                .on_document_click(origin, dom::viewport_width());
            if closed {
                dom::set_class(&binding.panel, "active", false);
            }
        }
    });

    Some(binding)
}

// ── In-page navigation ─────────────────────────────────────────

/// `#` links: docs sidebar links scroll their section into view, every other
/// anchor smooth-scrolls below the fixed navbar.
fn bind_in_page_links(
    doc: &Document,
    config: &Rc<SiteConfig>,
    nav_menu: Option<Rc<MenuBinding>>,
    sidebar: Option<Rc<MenuBinding>>,
) {
    for link in dom::query_all(doc, anchor::IN_PAGE_LINKS) {
        let kind = LinkKind::classify(
            dom::within(&link, anchor::DOCS_SIDEBAR),
            dom::has_class(&link, "nav-link"),
        );
        let doc = doc.clone();
        let config = config.clone();
        let menu = match kind {
            LinkKind::Page => nav_menu.clone(),
            LinkKind::DocsNav => sidebar.clone(),
        };
        let href = link.get_attribute("href").unwrap_or_default();
        dom::on(&link, "click", move |event| {
            event.prevent_default();
            let Some(target) = input::anchor_fragment(&href).and_then(|id| doc.get_element_by_id(id))
            else {
                return;
            };
            match kind {
                LinkKind::Page => scroll_below_navbar(&doc, &target, &config),
                LinkKind::DocsNav => {
                    let opts = ScrollIntoViewOptions::new();
                    opts.set_behavior(ScrollBehavior::Smooth);
                    opts.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&opts);
                }
            }
            if let Some(menu) = &menu {
                menu.close_on_navigate();
            }
        });
    }
}

fn scroll_below_navbar(doc: &Document, target: &Element, config: &SiteConfig) {
    let Some(win) = dom::window() else {
        return;
    };
    let nav_height = dom::query(doc, ".navbar").and_then(|nav| dom::offset_height(&nav));
    let top = anchor::scroll_destination(
        target.get_bounding_client_rect().top(),
        win.page_y_offset().unwrap_or(0.0),
        nav_height,
        config.fallback_nav_height,
    );
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}

fn bind_scroll_spy(doc: &Document, config: &SiteConfig) {
    let section_els: Vec<Element> = dom::query_all(doc, ".section")
        .into_iter()
        .filter(|el| !el.id().is_empty())
        .collect();
    let links = dom::query_all(doc, anchor::DOCS_NAV_LINKS);
    if section_els.is_empty() || links.is_empty() {
        dom::debug("scroll-spy: no sections or nav links, skipped");
        return;
    }

    let measure = |els: &[Element]| -> Vec<f64> {
        els.iter().map(|el| dom::offset_top(el).unwrap_or(0.0)).collect()
    };
    let sections: Vec<Section> = section_els
        .iter()
        .zip(measure(&section_els))
        .map(|(el, top)| Section { id: el.id(), top })
        .collect();
    let spy = match ScrollSpy::new(sections.clone(), config.scroll_spy_offset) {
        Ok(spy) => spy,
        Err(e) => {
            dom::warn(&format!("scroll-spy: {e}; sorting sections by offset"));
            ScrollSpy::sorted(sections, config.scroll_spy_offset)
        }
    };
    // Element order must follow the spy's (possibly re-sorted) section order.
    let section_els: Vec<Element> = spy
        .sections()
        .iter()
        .filter_map(|s| section_els.iter().find(|el| el.id() == s.id).cloned())
        .collect();
    let spy = Rc::new(RefCell::new(spy));

    let update = {
        let spy = spy.clone();
        move || {
            let mut spy = spy.borrow_mut();
            spy.on_scroll(dom::scroll_y());
            for link in &links {
                let href = link.get_attribute("href").unwrap_or_default();
                dom::set_class(link, "active", spy.is_link_active(&href));
            }
        }
    };
    update();

    let Some(win) = dom::window() else {
        return;
    };
    let update = Rc::new(update);
    dom::on(&win, "scroll", {
        let update = update.clone();
        move |_| update()
    });
    dom::on(&win, "resize", move |_| {
        if let Err(e) = spy.borrow_mut().set_tops(&measure(&section_els)) {
            dom::warn(&format!("scroll-spy: {e}"));
        }
        update();
    });
}

// ── Scroll animations ──────────────────────────────────────────

fn bind_reveal(doc: &Document, config: &SiteConfig) {
    let cards = dom::query_all(doc, reveal::REVEAL_SELECTOR);
    if cards.is_empty() {
        return;
    }
    for card in &cards {
        dom::set_styles(card, reveal::HIDDEN_STYLE);
    }

    let mut revealed = RevealSet::new(cards.len());
    let observed = cards.clone();
    let Some(observer) = dom::intersection_observer(
        config.reveal_threshold,
        Some(&config.reveal_root_margin),
        move |entries, _| {
            for entry in entries {
                let target = entry.target();
                let Some(index) = observed.iter().position(|c| dom::same_element(c, &target)) else {
                    continue;
                };
                if revealed.on_intersect(index, entry.is_intersecting()) {
                    dom::set_styles(&target, reveal::SHOWN_STYLE);
                }
            }
        },
    ) else {
        // No observer support: show everything rather than leave cards invisible.
        for card in &cards {
            dom::set_styles(card, reveal::SHOWN_STYLE);
        }
        return;
    };
    for card in &cards {
        observer.observe(card);
    }
}

/// Interval handle of a running counter, cleared on settle or restart.
type CounterSlot = Rc<RefCell<Option<i32>>>;

fn bind_stats_counters(doc: &Document, config: &Rc<SiteConfig>) {
    let Some(section) = dom::query(doc, ".stats-section") else {
        dom::debug("stats: no .stats-section, skipped");
        return;
    };
    let stats: Vec<(Element, CounterSlot)> = dom::query_all_in(&section, ".stat-number")
        .into_iter()
        .map(|el| (el, CounterSlot::default()))
        .collect();

    let Some(observer) = dom::intersection_observer(config.stats_threshold, None, {
        let config = config.clone();
        move |entries, observer| {
            for entry in entries.iter().filter(|e| e.is_intersecting()) {
                for (el, slot) in &stats {
                    start_counter(el, slot, &config);
                }
                observer.unobserve(&entry.target());
            }
        }
    }) else {
        return;
    };
    observer.observe(&section);
}

fn start_counter(el: &Element, slot: &CounterSlot, config: &SiteConfig) {
    let raw = el.get_attribute("data-target").unwrap_or_default();
    let Some(target) = input::parse_counter_target(&raw) else {
        dom::warn(&format!("stat counter: bad data-target `{raw}`"));
        return;
    };
    let suffix = el.get_attribute("data-suffix").unwrap_or_default();

    if let Some(handle) = slot.borrow_mut().take() {
        dom::clear_interval(handle);
    }
    let mut animation = CounterAnimation::new(
        target,
        suffix,
        config.counter_duration_ms,
        config.counter_tick_ms,
    );
    animation.start();

    let handle = dom::set_interval(config.counter_tick_ms, {
        let el = el.clone();
        let slot = slot.clone();
        move || {
            if let Some(text) = animation.tick() {
                dom::set_text(&el, &text);
            }
            if animation.phase() != CounterPhase::Animating {
                if let Some(handle) = slot.borrow_mut().take() {
                    dom::clear_interval(handle);
                }
            }
        }
    });
    *slot.borrow_mut() = handle;
}

// ── Benefits calculator ────────────────────────────────────────

fn bind_calculator(doc: &Document, config: &Rc<SiteConfig>) {
    let Some(slider) = doc
        .get_element_by_id("charging-sessions")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        dom::debug("calculator: no #charging-sessions slider, skipped");
        return;
    };
    let Some(count_display) = doc.get_element_by_id("session-count") else {
        dom::debug("calculator: no #session-count, skipped");
        return;
    };
    let results = doc.get_element_by_id("calculator-results");

    let catalog = match TierCatalog::standard() {
        Ok(catalog) => catalog,
        Err(e) => {
            dom::warn(&format!("calculator: invalid tier catalog: {e}"));
            return;
        }
    };
    let calculator = Calculator::from_slider_value(catalog, &slider.value());
    dom::log(&format!("calculator: {} sessions", calculator.sessions()));
    project_calculator(&calculator.render(), &count_display, results.as_ref(), config);
    let calculator = Rc::new(RefCell::new(calculator));

    let config = config.clone();
    let input_target = slider.clone();
    dom::on(&input_target, "input", move |_| {
        let value = slider.value();
        let render = calculator.borrow_mut().handle_input(&value);
        match render {
            Some(render) => {
                project_calculator(&render, &count_display, results.as_ref(), &config)
            }
            None => dom::warn(&format!("calculator: ignoring slider value `{value}`")),
        }
    });
}

fn project_calculator(
    render: &CalculatorRender,
    count_display: &Element,
    results: Option<&Element>,
    config: &SiteConfig,
) {
    dom::set_text(count_display, &render.count_text);
    let Some(results) = results else {
        return;
    };
    results.set_inner_html(&render.html);

    for value in dom::query_all_in(results, ".calc-metric-value") {
        dom::set_class(&value, "updating", true);
        dom::set_timeout(config.value_pulse_ms, move || {
            dom::set_class(&value, "updating", false);
        });
    }
}

// ── Grid / table toggle ────────────────────────────────────────

struct ViewPanels {
    grid: Element,
    table: Element,
}

impl ViewPanels {
    fn get(&self, view: TierView) -> &Element {
        match view {
            TierView::Grid => &self.grid,
            TierView::Table => &self.table,
        }
    }
}

fn bind_view_toggle(doc: &Document, config: &Rc<SiteConfig>) {
    let (Some(grid), Some(table)) = (
        dom::query(doc, ".tiers-grid"),
        dom::query(doc, ".tiers-table"),
    ) else {
        dom::debug("view toggle: tier grid/table missing, skipped");
        return;
    };
    let panels = Rc::new(ViewPanels { grid, table });
    let buttons = Rc::new(dom::query_all(doc, ".view-toggle-btn"));
    let toggle = ViewToggle::new(config.initial_view);
    mark_active_view(&buttons, config.initial_view);
    apply_settle(&panels, toggle.settled());
    let toggle = Rc::new(RefCell::new(toggle));

    for button in buttons.iter() {
        let view = button.get_attribute("data-view").unwrap_or_default();
        let Ok(view) = view.parse::<TierView>() else {
            dom::warn(&format!("view toggle: unknown data-view `{view}`"));
            continue;
        };
        let panels = panels.clone();
        let buttons = buttons.clone();
        let toggle = toggle.clone();
        let config = config.clone();
        dom::on(button, "click", move |_| {
            let Some(transition) = toggle.borrow_mut().click(view) else {
                return;
            };
            mark_active_view(&buttons, transition.activate);
            dom::set_class(panels.get(transition.fade_out), "fade-out", true);

            let panels = panels.clone();
            let toggle = toggle.clone();
            dom::set_timeout(config.fade_ms, move || {
                let settle = toggle.borrow_mut().complete(transition.generation);
                if let Some(settle) = settle {
                    apply_settle(&panels, settle);
                }
            });
        });
    }
}

fn mark_active_view(buttons: &[Element], view: TierView) {
    for b in buttons {
        let is_view = b.get_attribute("data-view").as_deref() == Some(view.as_str());
        dom::set_class(b, "active", is_view);
    }
}

fn apply_settle(panels: &ViewPanels, settle: Settle) {
    if let Some(hidden) = settle.hide {
        dom::set_style(panels.get(hidden), "display", "none");
    }
    let shown = panels.get(settle.show);
    dom::set_style(shown, "display", settle.show.display());
    dom::set_class(shown, "fade-out", false);
}
