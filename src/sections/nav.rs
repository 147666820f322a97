//! Navigation bar: scroll-spy, hash sync, and the mobile menu.
//!
//! Three bits of state live here: the active section title, the mobile menu
//! flag, and a "page is scrolled" flag for the shadow. Listeners attach when
//! their owning condition starts (mount, menu open) and detach when it ends,
//! so repeated toggles and unmount leave nothing behind.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use super::{DEFAULT_SECTION, NAV_LINKS, NavLink};

/// Vertical offset (px) above which the nav casts its shadow.
const SCROLL_SHADOW_OFFSET: f64 = 4.0;

/// Fraction of a section that must be visible before it claims the nav.
const SECTION_VISIBILITY_THRESHOLD: f64 = 0.5;

#[component]
pub fn Navbar() -> impl IntoView {
    let (active, set_active) = signal(DEFAULT_SECTION);
    let (menu_open, set_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    // Live listener handles; populated by the effects below, drained on
    // detach/unmount so the closures stay alive exactly as long as they are
    // registered.
    let keydown_handler: Rc<RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>> =
        Rc::new(RefCell::new(None));
    let hashchange_handler: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let scroll_handler: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    #[allow(clippy::type_complexity)]
    let section_observer: Rc<
        RefCell<Option<(IntersectionObserver, Closure<dyn FnMut(Vec<IntersectionObserverEntry>)>)>>,
    > = Rc::new(RefCell::new(None));

    // Menu open: lock page scroll and close on Escape. Both side effects
    // reverse on close and on unmount.
    {
        let keydown_handler = keydown_handler.clone();
        Effect::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            if menu_open.get() {
                lock_scroll();
                let closure = Closure::<dyn FnMut(KeyboardEvent)>::new(move |ev: KeyboardEvent| {
                    if ev.key() == "Escape" {
                        set_menu_open.set(false);
                    }
                });
                let _ = window
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
                *keydown_handler.borrow_mut() = Some(closure);
            } else {
                unlock_scroll();
                if let Some(closure) = keydown_handler.borrow_mut().take() {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // Scroll spy: seed from the URL fragment, follow hashchange, and observe
    // every section the markup actually has. Runs once after mount.
    {
        let hashchange_handler = hashchange_handler.clone();
        let section_observer = section_observer.clone();
        Effect::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            sync_active_from_hash(set_active);

            let closure = Closure::<dyn FnMut()>::new(move || sync_active_from_hash(set_active));
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
            *hashchange_handler.borrow_mut() = Some(closure);

            let Some(document) = window.document() else {
                return;
            };
            let callback = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>)>::new(
                move |entries: Vec<IntersectionObserverEntry>| {
                    let visible: Vec<String> = entries
                        .iter()
                        .filter(|entry| entry.is_intersecting())
                        .map(|entry| entry.target().id())
                        .collect();
                    if let Some(title) = resolve_active(&visible) {
                        set_active.set(title);
                    }
                },
            );
            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(SECTION_VISIBILITY_THRESHOLD));
            let observer_fn: &js_sys::Function = callback.as_ref().unchecked_ref();
            if let Ok(observer) = IntersectionObserver::new_with_options(observer_fn, &options) {
                for link in NAV_LINKS {
                    // Links without a matching section are skipped.
                    if let Some(section) = document.get_element_by_id(link.id) {
                        observer.observe(&section);
                    }
                }
                *section_observer.borrow_mut() = Some((observer, callback));
            }
        });
    }

    // Shadow flag: recomputed on every scroll tick, seeded eagerly.
    {
        let scroll_handler = scroll_handler.clone();
        Effect::new(move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let read_offset = move || {
                if let Some(window) = web_sys::window() {
                    if let Ok(offset) = window.scroll_y() {
                        set_scrolled.set(is_scrolled(offset));
                    }
                }
            };
            read_offset();
            let closure = Closure::<dyn FnMut()>::new(read_offset);
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            *scroll_handler.borrow_mut() = Some(closure);
        });
    }

    on_cleanup({
        let keydown_handler = keydown_handler.clone();
        let hashchange_handler = hashchange_handler.clone();
        let scroll_handler = scroll_handler.clone();
        let section_observer = section_observer.clone();
        // `on_cleanup` demands `Send + Sync`; the handles are main-thread
        // `Rc`s, so satisfy the bound with `SendWrapper` (single-threaded
        // wasm never crosses threads).
        let cleanup = leptos::__reexports::send_wrapper::SendWrapper::new(move || {
            unlock_scroll();
            if let Some(window) = web_sys::window() {
                if let Some(closure) = keydown_handler.borrow_mut().take() {
                    let _ = window.remove_event_listener_with_callback(
                        "keydown",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                if let Some(closure) = hashchange_handler.borrow_mut().take() {
                    let _ = window.remove_event_listener_with_callback(
                        "hashchange",
                        closure.as_ref().unchecked_ref(),
                    );
                }
                if let Some(closure) = scroll_handler.borrow_mut().take() {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
            if let Some((observer, _callback)) = section_observer.borrow_mut().take() {
                observer.disconnect();
            }
        });
        move || cleanup.take()()
    });

    // Smooth-scroll to a section, push the fragment, and mark it active
    // before the scroll animation lands. Missing targets fall back to a
    // plain hash assignment.
    let smooth_nav = move |ev: MouseEvent, link: &'static NavLink, close_menu: bool| {
        ev.prevent_default();
        if let Some(window) = web_sys::window() {
            let target = window
                .document()
                .and_then(|document| document.get_element_by_id(link.id));
            match target {
                Some(section) => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    section.scroll_into_view_with_scroll_into_view_options(&options);
                    if let Ok(history) = window.history() {
                        let _ = history.push_state_with_url(
                            &JsValue::NULL,
                            "",
                            Some(&format!("#{}", link.id)),
                        );
                    }
                }
                None => {
                    let _ = window.location().set_hash(&format!("#{}", link.id));
                }
            }
        }
        set_active.set(link.title);
        if close_menu {
            set_menu_open.set(false);
        }
    };

    view! {
        <nav
            class=move || if scrolled.get() { "navbar scrolled" } else { "navbar" }
            aria-label="Primary Navigation"
        >
            <a href="#home" class="nav-brand" aria-label="Go to homepage">
                <img src="assets/logo.svg" alt="HooBank logo" class="nav-logo" />
            </a>

            <ul class="nav-links" role="menubar">
                {NAV_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li class=move || {
                                if active.get() == link.title { "nav-item active" } else { "nav-item" }
                            }>
                                <a
                                    href=format!("#{}", link.id)
                                    class="nav-link"
                                    aria-current=move || (active.get() == link.title).then_some("page")
                                    on:click=move |ev| smooth_nav(ev, link, false)
                                >
                                    {link.title}
                                </a>
                                <span class="nav-indicator" aria-hidden="true"></span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <div class="nav-mobile">
                <button
                    type="button"
                    class="menu-toggle"
                    aria-controls="mobile-menu"
                    aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                    aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <img
                        src=move || if menu_open.get() { "assets/close.svg" } else { "assets/menu.svg" }
                        alt="Menu"
                        class="menu-glyph"
                    />
                </button>

                <button
                    class=move || if menu_open.get() { "backdrop open" } else { "backdrop" }
                    aria-hidden=move || if menu_open.get() { "false" } else { "true" }
                    tabindex="-1"
                    on:click=move |_| set_menu_open.set(false)
                ></button>

                <div
                    id="mobile-menu"
                    class=move || if menu_open.get() { "mobile-menu open" } else { "mobile-menu" }
                    aria-hidden=move || if menu_open.get() { "false" } else { "true" }
                >
                    <ul class="mobile-links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <li class=move || {
                                        if active.get() == link.title { "nav-item active" } else { "nav-item" }
                                    }>
                                        <a
                                            href=format!("#{}", link.id)
                                            class="nav-link"
                                            aria-current=move || (active.get() == link.title).then_some("page")
                                            on:click=move |ev| smooth_nav(ev, link, true)
                                        >
                                            {link.title}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </nav>
    }
}

fn link_for_id(id: &str) -> Option<&'static NavLink> {
    NAV_LINKS.iter().find(|link| link.id == id)
}

fn active_for_hash(hash: &str) -> Option<&'static str> {
    let id = hash.trim_start_matches('#');
    if id.is_empty() {
        return None;
    }
    link_for_id(id).map(|link| link.title)
}

fn sync_active_from_hash(set_active: WriteSignal<&'static str>) {
    if let Some(window) = web_sys::window() {
        if let Ok(hash) = window.location().hash() {
            if let Some(title) = active_for_hash(&hash) {
                set_active.set(title);
            }
        }
    }
}

fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_SHADOW_OFFSET
}

/// Tie-break for a batch of simultaneously intersecting sections: the last
/// link in `NAV_LINKS` order wins, independent of callback entry order.
fn resolve_active(visible_ids: &[String]) -> Option<&'static str> {
    NAV_LINKS
        .iter()
        .rev()
        .find(|link| visible_ids.iter().any(|id| id == link.id))
        .map(|link| link.title)
}

pub(crate) fn lock_scroll() {
    if let Some(root) = document_root() {
        let _ = root.class_list().add_1("no-scroll");
    }
}

pub(crate) fn unlock_scroll() {
    if let Some(root) = document_root() {
        let _ = root.class_list().remove_1("no-scroll");
    }
}

fn document_root() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hash_lookup_matches_known_section() {
        assert_eq!(active_for_hash("#pricing"), Some("Pricing"));
        assert_eq!(active_for_hash("pricing"), Some("Pricing"));
    }

    #[test]
    fn hash_lookup_ignores_unknown_or_empty_fragment() {
        assert_eq!(active_for_hash("#careers"), None);
        assert_eq!(active_for_hash("#"), None);
        assert_eq!(active_for_hash(""), None);
    }

    #[test]
    fn shadow_engages_strictly_above_four_pixels() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(4.0));
        assert!(is_scrolled(5.0));
    }

    #[test]
    fn single_visible_section_becomes_active() {
        assert_eq!(resolve_active(&["pricing".to_string()]), Some("Pricing"));
    }

    #[test]
    fn last_link_in_nav_order_wins_simultaneous_intersections() {
        let visible = vec!["product".to_string(), "home".to_string()];
        assert_eq!(resolve_active(&visible), Some("Product"));

        let visible = vec!["pricing".to_string(), "features".to_string()];
        assert_eq!(resolve_active(&visible), Some("Pricing"));
    }

    #[test]
    fn unknown_sections_are_ignored() {
        assert_eq!(resolve_active(&["footer".to_string()]), None);
        assert_eq!(resolve_active(&[]), None);
    }

    #[test]
    fn nav_link_ids_are_unique_and_nonempty() {
        for (i, link) in NAV_LINKS.iter().enumerate() {
            assert!(!link.id.is_empty());
            for other in &NAV_LINKS[i + 1..] {
                assert_ne!(link.id, other.id);
            }
        }
    }

    #[test]
    fn default_section_is_a_known_title() {
        assert!(NAV_LINKS.iter().any(|link| link.title == DEFAULT_SECTION));
    }
}
