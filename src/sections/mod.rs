// Landing page sections

/// A navigation target: `id` matches a section element in the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub title: &'static str,
}

/// Ordered nav links (single source of truth). Order drives both display
/// order and the tie-break when several sections intersect at once.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { id: "home", title: "Home" },
    NavLink { id: "features", title: "Features" },
    NavLink { id: "product", title: "Product" },
    NavLink { id: "pricing", title: "Pricing" },
];

/// Label shown as active before any hash or intersection says otherwise.
pub const DEFAULT_SECTION: &str = "Home";

mod content;
mod footer;
mod hero;
pub(crate) mod nav;

pub use content::{Features, Pricing, Product};
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Navbar;
