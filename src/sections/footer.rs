use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">
                        <img src="assets/logo.svg" alt="HooBank" />
                    </span>
                    <span class="footer-title">"HooBank"</span>
                </div>
                <div class="footer-links">
                    <a href="#features" class="footer-link">"Features"</a>
                    <a href="#product" class="footer-link">"Product"</a>
                    <a href="#pricing" class="footer-link">"Pricing"</a>
                </div>
                <p class="footer-copyright">
                    "HooBank (c)2026. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
