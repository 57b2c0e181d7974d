use yew::prelude::*;

use crate::components::{
    advantages::Advantages, contact::Contact, footer::Footer, header::Header, hero::Hero,
    services::Services,
};
use crate::reveal::{use_reveal, RevealRegistry};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Every <Reveal> below registers here; one observer serves them all.
    let reveal = use_reveal();

    html! {
        <ContextProvider<RevealRegistry> context={reveal}>
            <div class="landing-page">
                <Header />
                <main>
                    <Hero />
                    <Services />
                    <Advantages />
                    <Contact />
                </main>
                <Footer />
                <style>{ LANDING_CSS }</style>
            </div>
        </ContextProvider<RevealRegistry>>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    min-height: 100vh;
    background: #0d1117;
    color: #ffffff;
    font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    -webkit-font-smoothing: antialiased;
}

.accent-gradient {
    background: linear-gradient(90deg, #06b6d4 0%, #3b82f6 100%);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
    background-clip: text;
}

.animate-on-scroll {
    opacity: 0;
    transform: translateY(30px);
    transition: opacity 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94),
                transform 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94);
}
.animate-on-scroll.loaded {
    opacity: 1;
    transform: translateY(0);
}
.animate-delay-1 { transition-delay: 0.1s; }
.animate-delay-2 { transition-delay: 0.2s; }
.animate-delay-3 { transition-delay: 0.3s; }
.animate-delay-4 { transition-delay: 0.4s; }

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(13, 17, 23, 0.95);
    backdrop-filter: blur(4px);
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
}
.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    height: 4rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo {
    display: flex;
    align-items: center;
}
.nav-logo-img {
    height: 2.25rem;
}
.nav-links {
    display: flex;
    gap: 2rem;
    align-items: center;
}
.nav-link {
    color: #d1d5db;
    font-weight: 500;
    text-decoration: none;
    transition: color 0.3s ease-in-out;
}
.nav-link:hover {
    color: #22d3ee;
}
.nav-contact-pill {
    display: block;
    padding: 0.25rem 1rem;
    border-radius: 9999px;
    background: #0891b2;
    color: #ffffff;
    font-weight: 600;
    text-decoration: none;
    transition: background 0.3s ease-in-out;
}
.nav-contact-pill:hover {
    background: #06b6d4;
}
.burger-menu {
    display: none;
    background: none;
    border: none;
    color: #d1d5db;
    cursor: pointer;
}
.burger-icon {
    width: 1.5rem;
    height: 1.5rem;
}
.mobile-menu {
    display: none;
}

@media (max-width: 768px) {
    .nav-links {
        display: none;
    }
    .burger-menu {
        display: block;
    }
    .mobile-menu.mobile-menu-open {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.25rem;
        padding: 0.5rem 0.75rem 0.75rem;
        background: #0d1117;
    }
    .mobile-link {
        display: block;
        width: 100%;
        padding: 0.5rem 0.75rem;
        border-radius: 0.375rem;
        color: #d1d5db;
        text-align: center;
        text-decoration: none;
    }
    .mobile-link:hover {
        background: #1f2937;
        color: #22d3ee;
    }
    .mobile-contact {
        width: 100%;
        margin-top: 0.5rem;
        text-align: center;
        text-decoration: none;
    }
}

/* Hero */
.hero {
    position: relative;
    overflow: hidden;
    padding: 10rem 0;
    background: #111827;
    border-bottom: 1px solid #1f2937;
}
.hero-embed {
    position: absolute;
    inset: 0;
    z-index: 0;
    width: 100%;
    height: 100%;
    opacity: 0.4;
    pointer-events: none;
    transition: opacity 1s;
}
.hero-content {
    position: relative;
    z-index: 20;
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    text-align: center;
}
.hero-kicker {
    margin-bottom: 1rem;
    color: #22d3ee;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.1em;
}
.hero-title {
    margin: 0 0 1.5rem;
    font-size: clamp(2.25rem, 6vw, 4.5rem);
    font-weight: 800;
    line-height: 1.1;
    letter-spacing: -0.05em;
}
.hero-title-accent {
    display: block;
}
.hero-subtitle {
    max-width: 48rem;
    margin: 0 auto 2.5rem;
    font-size: 1.25rem;
    color: #9ca3af;
}
.hero-cta-group {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1.5rem;
}
.hero-cta {
    position: relative;
    z-index: 30;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0.75rem 2rem;
    border: 1px solid transparent;
    border-radius: 0.5rem;
    background: #0891b2;
    color: #ffffff;
    font-weight: 600;
    text-decoration: none;
    transition: all 0.3s ease-in-out;
}
.hero-cta:hover {
    background: #0e7490;
    transform: scale(1.02);
}
.hero-cta-outline {
    background: transparent;
    border-color: #06b6d4;
    color: #22d3ee;
}
.hero-cta-outline:hover {
    background: #1f2937;
    transform: none;
}
.hero-badge {
    position: absolute;
    bottom: 1.5rem;
    left: 50%;
    transform: translateX(-50%);
    z-index: 30;
    display: flex;
    width: 12rem;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    background: #1f2937;
}
.hero-badge-img {
    height: 1.75rem;
    margin: auto;
}

/* Sections */
.section {
    padding: 9rem 0;
}
.section-alt {
    background: #111827;
    border-top: 1px solid #1f2937;
    border-bottom: 1px solid #1f2937;
}
.section-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}
.section-heading {
    margin-bottom: 4rem;
    text-align: center;
}
.section-heading h2 {
    margin: 0 0 1rem;
    font-size: 3rem;
    font-weight: 800;
}
.section-heading p {
    max-width: 42rem;
    margin: 0 auto;
    font-size: 1.125rem;
    color: #9ca3af;
}

.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
    gap: 2.5rem;
}
.service-card {
    padding: 2rem;
    border-radius: 0.75rem;
    border-top: 4px solid;
    background: #1f2937;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}
.service-card h3 {
    margin: 0 0 0.75rem;
    font-size: 1.5rem;
}
.service-card p,
.service-list {
    color: #9ca3af;
}
.service-list {
    margin-top: 1rem;
    padding-left: 1.25rem;
    font-size: 0.875rem;
}
.service-icon svg {
    width: 2.5rem;
    height: 2.5rem;
    margin-bottom: 1rem;
}
.accent-cyan { border-color: #06b6d4; }
.accent-cyan .service-icon { color: #22d3ee; }
.accent-blue { border-color: #3b82f6; }
.accent-blue .service-icon { color: #60a5fa; }
.accent-green { border-color: #22c55e; }
.accent-green .service-icon { color: #4ade80; }

.advantages-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
    gap: 2rem;
}
.advantage-item {
    padding: 1.5rem;
    border-radius: 0.75rem;
    background: #1f2937;
}
.advantage-item:hover {
    background: rgba(55, 65, 81, 0.5);
}
.advantage-number {
    margin-bottom: 0.75rem;
    font-size: 1.875rem;
    font-weight: 600;
    color: #22d3ee;
}
.advantage-item h3 {
    margin: 0 0 0.5rem;
    font-size: 1.25rem;
}
.advantage-item p {
    font-size: 0.875rem;
    color: #9ca3af;
}

.contact-card {
    padding: 4rem;
    border-radius: 1.5rem;
    background: #1f2937;
    box-shadow: 0 25px 50px rgba(22, 78, 99, 0.5);
    text-align: center;
}
.contact-card h2 {
    margin: 0 0 1rem;
    font-size: 2.25rem;
    font-weight: 800;
}
.contact-card p {
    max-width: 48rem;
    margin: 0 auto 2rem;
    font-size: 1.125rem;
    color: #9ca3af;
}
.contact-cta {
    display: inline-flex;
    padding: 1rem 2.5rem;
    border-radius: 9999px;
    background: #2563eb;
    color: #ffffff;
    font-size: 1.125rem;
    font-weight: 700;
    text-decoration: none;
    transition: all 0.3s ease-in-out;
}
.contact-cta:hover {
    background: #1d4ed8;
    transform: scale(1.05);
}

/* Footer */
.site-footer {
    margin-top: 3rem;
    padding: 2.5rem 0;
    background: #111827;
    border-top: 1px solid #1f2937;
}
.footer-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
    gap: 2rem;
    margin-bottom: 2rem;
}
.footer-grid h4 {
    margin: 0 0 1rem;
    font-size: 1.125rem;
}
.footer-blurb,
.footer-list,
.footer-address {
    font-size: 0.875rem;
    color: #9ca3af;
}
.footer-list {
    list-style: none;
    padding: 0;
}
.footer-list li + li {
    margin-top: 0.5rem;
}
.footer-address {
    font-style: normal;
}
.footer-link {
    color: #9ca3af;
    text-decoration: none;
    transition: color 0.2s;
}
.footer-link:hover {
    color: #22d3ee;
}
.footer-bottom {
    padding-top: 1.5rem;
    border-top: 1px solid #374151;
    text-align: center;
    font-size: 0.875rem;
    color: #6b7280;
}
"#;
