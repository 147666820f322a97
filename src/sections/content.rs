//! Static content sections. Their ids anchor the navbar's scroll spy.

use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Features"</p>
                    <h2 class="section-title">"You do the business, we handle the money"</h2>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="★"
                        title="Rewards"
                        description="The best credit cards offer tempting rewards: cash back, points, and real perks on everyday spending."
                    />
                    <FeatureCard
                        icon="🛡"
                        title="100% Secured"
                        description="We take proactive steps to keep your information and transactions secure, end to end."
                    />
                    <FeatureCard
                        icon="⇄"
                        title="Balance Transfer"
                        description="A balance transfer credit card can save you a lot of money in interest charges."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}

#[component]
pub fn Product() -> impl IntoView {
    view! {
        <section id="product" class="product">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Product"</p>
                    <h2 class="section-title">"Find a better card deal in a few easy steps"</h2>
                    <p class="section-description">
                        "Arcu tortor, purus in mattis at sed integer faucibus. "
                        "Aliquet quis aliquet eget mauris tortor."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Pricing"</p>
                    <h2 class="section-title">"Try our service now"</h2>
                    <p class="section-description">
                        "Everything you need to accept card payments and grow your "
                        "business anywhere on the planet."
                    </p>
                    <a href="#home" class="btn btn-primary">
                        "Get Started"
                    </a>
                </div>
            </div>
        </section>
    }
}
