use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "20% discount for one-month account"
                    </div>
                    <h1 class="hero-title">
                        "The next "
                        <span class="hero-title-accent">"generation"</span>
                        <br />
                        "payment method."
                    </h1>
                    <p class="hero-description">
                        "Our team of experts uses a methodology to identify the credit cards "
                        "most likely to fit your needs. We examine annual percentage rates "
                        "and fees, so you don't have to."
                    </p>
                    <div class="hero-actions">
                        <a href="#pricing" class="btn btn-primary">
                            "Get Started"
                        </a>
                        <a href="#features" class="btn btn-secondary">
                            "Explore Features →"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
