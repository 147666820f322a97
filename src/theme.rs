//! Dark-theme bootstrap.
//!
//! The landing page ships dark-only: any stored preference is cleared and the
//! `dark` class is pinned on the document root before the app mounts. Every
//! step degrades silently; a failed storage or class-list call just leaves
//! default browser behavior in place.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

const THEME_STORAGE_KEY: &str = "theme";

/// Force the dark theme and clear any persisted preference.
///
/// The `theme-ready` class is added one timeout tick later so CSS transitions
/// apply only to dynamic UI, not to the initial paint.
pub fn force_dark_theme() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return;
    };

    let _ = root.class_list().remove_1("light");
    let _ = root.class_list().add_1("dark");

    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.remove_item(THEME_STORAGE_KEY);
    }

    let closure = Closure::once(Box::new(move || {
        let _ = root.class_list().add_1("theme-ready");
    }) as Box<dyn FnOnce()>);
    let _ = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), 0);
    closure.forget();
}

/// Undo everything `force_dark_theme` applied, restoring default behavior.
pub fn restore_default_theme() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        let _ = root.class_list().remove_1("dark");
        let _ = root.class_list().remove_1("theme-ready");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::sections::nav::{lock_scroll, unlock_scroll};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn root_classes() -> web_sys::DomTokenList {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|e| e.class_list())
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn force_dark_pins_class_and_clears_preference() {
        let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
        storage.set_item(THEME_STORAGE_KEY, "light").unwrap();
        root_classes().add_1("light").unwrap();

        force_dark_theme();

        assert!(root_classes().contains("dark"));
        assert!(!root_classes().contains("light"));
        assert_eq!(storage.get_item(THEME_STORAGE_KEY).unwrap(), None);

        restore_default_theme();
        assert!(!root_classes().contains("dark"));
    }

    #[wasm_bindgen_test]
    fn scroll_lock_leaves_no_residue_across_cycles() {
        for _ in 0..3 {
            lock_scroll();
            assert!(root_classes().contains("no-scroll"));
            unlock_scroll();
            assert!(!root_classes().contains("no-scroll"));
        }
    }
}
