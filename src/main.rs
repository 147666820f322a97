// HooBank Landing Page — Leptos 0.8 CSR Edition

mod sections;
mod theme;

use leptos::prelude::*;
use sections::*;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();

    // Dark theme is forced before first paint; there is no user toggle.
    theme::force_dark_theme();

    web_sys::console::log_2(
        &JsValue::from_str("%choobank — dark mode locked in"),
        &JsValue::from_str("color: #00f6ff; font-family: monospace;"),
    );

    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Navbar />
        <main>
            <Hero />
            <Features />
            <Product />
            <Pricing />
        </main>
        <Footer />
    }
}
