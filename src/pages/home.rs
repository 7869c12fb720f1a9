use leptos::prelude::*;

use crate::components::{Countdown, RevealOnScroll, WaitlistForm};
use crate::server_fns::waitlist_count;

#[component]
pub fn HomePage() -> impl IntoView {
    let signups = Resource::new(|| (), |_| waitlist_count());

    view! {
        <div class="home-page" id="top">
            <section class="hero">
                <h1>"Launchlist"</h1>
                <p class="subtitle">"Ship Your Next Launch Without the Chaos"</p>
                <p class="description">
                    "One place to plan, announce, and track a product launch. "
                    "We're putting the finishing touches on it right now."
                </p>

                <p class="hero-countdown-label">"Public launch in"</p>
                <Countdown/>

                <div class="cta-buttons">
                    <a href="#waitlist" class="btn btn-primary">"Get Early Access"</a>
                    <a href="#features" class="btn btn-secondary">"See What's Coming"</a>
                </div>
            </section>

            <section class="features" id="features">
                <h2>"Why Launchlist?"</h2>
                <div class="feature-grid">
                    <RevealOnScroll>
                        <div class="feature">
                            <h3>"Launch Checklists"</h3>
                            <p>"Every step from first commit to launch day, templated and trackable"</p>
                        </div>
                    </RevealOnScroll>
                    <RevealOnScroll>
                        <div class="feature">
                            <h3>"Audience Warm-up"</h3>
                            <p>"Build your waitlist and keep early users in the loop automatically"</p>
                        </div>
                    </RevealOnScroll>
                    <RevealOnScroll>
                        <div class="feature">
                            <h3>"Day-one Metrics"</h3>
                            <p>"See signups, conversions, and traffic sources the moment you go live"</p>
                        </div>
                    </RevealOnScroll>
                </div>
            </section>

            <section class="how-it-works" id="how-it-works">
                <h2>"How It Works"</h2>
                <div class="steps">
                    <RevealOnScroll>
                        <div class="step">
                            <span class="step-number">"1"</span>
                            <h3>"Join the waitlist"</h3>
                            <p>"Tell us where to reach you"</p>
                        </div>
                    </RevealOnScroll>
                    <RevealOnScroll>
                        <div class="step">
                            <span class="step-number">"2"</span>
                            <h3>"Get your invite"</h3>
                            <p>"Early access invites go out in signup order"</p>
                        </div>
                    </RevealOnScroll>
                    <RevealOnScroll>
                        <div class="step">
                            <span class="step-number">"3"</span>
                            <h3>"Launch with us"</h3>
                            <p>"Plan your first launch before everyone else"</p>
                        </div>
                    </RevealOnScroll>
                </div>
            </section>

            <section class="waitlist" id="waitlist">
                <h2>"Join the Waitlist"</h2>
                <Suspense fallback=|| ()>
                    {move || {
                        signups
                            .get()
                            .map(|result| {
                                match result {
                                    Ok(n) if n > 0 => {
                                        view! {
                                            <p class="signup-count">
                                                <strong>{n}</strong>
                                                " people are already in line"
                                            </p>
                                        }
                                            .into_any()
                                    }
                                    _ => {
                                        view! {
                                            <p class="signup-count">"Be among the first to get access"</p>
                                        }
                                            .into_any()
                                    }
                                }
                            })
                    }}
                </Suspense>
                <WaitlistForm/>
            </section>

            <footer class="footer">
                <p>"Launchlist — launching soon"</p>
                <p class="footer-fine">"We'll only email you about the launch. No spam, ever."</p>
            </footer>
        </div>
    }
}
