use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactSection;
use super::projects::{OngoingSection, ProjectsSection};
use super::skills::SkillsSection;
use crate::content::{ABOUT, FOCUS_TAGS, INTRO, OWNER, STATS, TAGLINE};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <SkillsSection />
        <ProjectsSection />
        <OngoingSection />
        <ContactSection />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center justify-center px-8">
            <div class="max-w-6xl mx-auto text-center">
                <div class="mb-12">
                    <h1 class="text-7xl md:text-9xl font-black mb-6 leading-none">
                        <span class="bg-gradient-to-r from-white via-blue/60 to-purple/60 bg-clip-text text-transparent">
                            {OWNER.to_uppercase()}
                        </span>
                    </h1>
                    <div class="text-xl md:text-2xl text-white/60 font-light tracking-wider mb-8">
                        {TAGLINE}
                    </div>
                    <div class="w-24 h-px bg-gradient-to-r from-transparent via-blue to-transparent mx-auto"></div>
                </div>
                <p class="text-xl md:text-2xl text-white/80 max-w-4xl mx-auto mb-16 leading-relaxed font-light">
                    {INTRO}
                </p>
                <div class="flex flex-col sm:flex-row gap-6 justify-center">
                    <a
                        href="#projects"
                        class="bg-white text-black hover:bg-white/90 px-12 py-4 text-lg font-semibold rounded-full transition-all duration-300"
                    >
                        "View Engineering Projects"
                    </a>
                    <a
                        href="#contact"
                        class="border border-white/30 text-white hover:bg-white/10 px-12 py-4 text-lg font-semibold rounded-full transition-all duration-300"
                    >
                        "Connect & Collaborate"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-32 px-8">
            <div class="max-w-7xl mx-auto grid lg:grid-cols-2 gap-20 items-center">
                <div>
                    <h2 class="text-5xl md:text-6xl font-black mb-12 leading-tight">
                        <span class="bg-gradient-to-r from-blue to-purple bg-clip-text text-transparent">
                            "Engineering"
                        </span>
                        <br />
                        "Excellence"
                    </h2>
                    <div class="space-y-8 text-lg text-white/80 leading-relaxed">
                        {ABOUT.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                    <div class="flex flex-wrap gap-3 mt-12">
                        {FOCUS_TAGS
                            .iter()
                            .map(|tag| {
                                view! {
                                    <span class="bg-blue/10 text-blue border border-blue/20 px-4 py-2 rounded-full">
                                        {*tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="bg-white/5 backdrop-blur-xl border border-white/10 rounded-3xl p-12">
                    <div class="grid grid-cols-2 gap-8">
                        {STATS
                            .iter()
                            .map(|(value, label)| {
                                view! {
                                    <div class="text-center">
                                        <div class="text-4xl font-black text-blue mb-2">{*value}</div>
                                        <div class="text-white/60 text-sm">{*label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
