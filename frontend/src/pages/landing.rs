use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::reveal::RevealSection;
use crate::content::SectionId;
use crate::sections::cta::Cta;
use crate::sections::features::Features;
use crate::sections::hero::Hero;
use crate::sections::how_it_works::HowItWorks;
use crate::sections::pricing::Pricing;
use crate::sections::solutions::Solutions;
use crate::sections::testimonials::Testimonials;
use crate::sections::why_choose_us::WhyChooseUs;
use crate::styles::BASE_CSS;
use crate::utils::smooth_scroll::SmoothScrollProvider;
use crate::utils::visibility::Reveal;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Start at the top on a fresh mount; the browser may restore an old offset.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <SmoothScrollProvider>
            <div class="landing-page">
                <style>{BASE_CSS}</style>
                <Navbar />
                <main>
                    <div id={SectionId::Hero.as_str()} class="page-transition">
                        <Hero />
                    </div>
                    <RevealSection id={SectionId::Features} reveal={Reveal::Up}>
                        <Features />
                    </RevealSection>
                    <RevealSection id={SectionId::HowItWorks} reveal={Reveal::Scale}>
                        <HowItWorks />
                    </RevealSection>
                    <RevealSection id={SectionId::Solutions} reveal={Reveal::Left}>
                        <Solutions />
                    </RevealSection>
                    <RevealSection id={SectionId::WhyChooseUs} reveal={Reveal::Up}>
                        <WhyChooseUs />
                    </RevealSection>
                    <RevealSection id={SectionId::Testimonials} reveal={Reveal::Scale}>
                        <Testimonials />
                    </RevealSection>
                    <RevealSection id={SectionId::Pricing} reveal={Reveal::Right}>
                        <Pricing />
                    </RevealSection>
                    <RevealSection id={SectionId::Cta} reveal={Reveal::Up}>
                        <Cta />
                    </RevealSection>
                </main>
                <Footer />
            </div>
        </SmoothScrollProvider>
    }
}
