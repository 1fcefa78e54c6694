//! In-page link handling: which links belong to the docs sidebar, and where
//! smooth-scrolling lands under a fixed navbar.

/// Every in-page link, marketing and docs alike.
pub const IN_PAGE_LINKS: &str = "a[href^=\"#\"]";

/// Docs sidebar container. Its `.nav-link`s scroll sections into view and
/// drive the scroll-spy.
pub const DOCS_SIDEBAR: &str = "#sidebar";

pub const DOCS_NAV_LINKS: &str = "#sidebar .nav-link";

/// How a clicked in-page link navigates, and which menu it closes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinkKind {
    /// Offset scroll below the navbar; closes the mobile nav menu.
    Page,
    /// `scrollIntoView` to the section start; closes the docs sidebar.
    DocsNav,
}

impl LinkKind {
    /// Only `.nav-link`s inside the docs sidebar are docs navigation. A
    /// marketing `#navMenu .nav-link` is an ordinary page link.
    pub fn classify(in_docs_sidebar: bool, is_nav_link: bool) -> Self {
        if in_docs_sidebar && is_nav_link {
            LinkKind::DocsNav
        } else {
            LinkKind::Page
        }
    }
}

/// Document Y to scroll to so the target's top sits just below the navbar.
///
/// `target_rect_top` is the target's viewport-relative top
/// (`getBoundingClientRect().top`), `page_y_offset` the current scroll.
/// `nav_height` is the measured navbar height, if a navbar exists.
pub fn scroll_destination(
    target_rect_top: f64,
    page_y_offset: f64,
    nav_height: Option<f64>,
    fallback_nav_height: f64,
) -> f64 {
    target_rect_top + page_y_offset - nav_height.unwrap_or(fallback_nav_height)
}
