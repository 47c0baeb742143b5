use leptos::prelude::*;

use crate::content::{Skill, OWNER, SKILLS, SKILL_SUMMARY, TECH_STACK};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-32 px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-20">
                    <h2 class="text-5xl md:text-6xl font-black mb-8">
                        <span class="bg-gradient-to-r from-blue to-purple bg-clip-text text-transparent">
                            "Tech Arsenal"
                        </span>
                    </h2>
                    <p class="text-xl text-white/60 max-w-3xl mx-auto">
                        "Technologies I wield to build the future of web and finance"
                    </p>
                </div>
                <TechStackTerminal />
                <div class="bg-white/5 backdrop-blur-xl border border-white/10 rounded-3xl p-8">
                    <div class="flex items-center justify-between mb-8">
                        <div>
                            <h3 class="text-2xl font-bold">"Technical Proficiency"</h3>
                            <p class="text-white/60 text-sm">
                                "Real-time skill assessment & performance metrics"
                            </p>
                        </div>
                        <div class="flex items-center gap-2">
                            <div class="w-2 h-2 bg-green rounded-full animate-pulse"></div>
                            <span class="text-green text-sm font-medium">"Live"</span>
                        </div>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {SKILLS.iter().map(|skill| view! { <SkillCard skill=skill /> }).collect_view()}
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-8 pt-8 border-t border-white/10">
                        {SKILL_SUMMARY
                            .iter()
                            .map(|(label, value)| {
                                view! {
                                    <div>
                                        <p class="text-white/60 text-sm">{*label}</p>
                                        <p class="text-white font-bold">{*value}</p>
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

#[component]
fn TechStackTerminal() -> impl IntoView {
    let prompt = format!("{}@engineer:~$", OWNER.to_lowercase());
    let last = TECH_STACK.len() - 1;
    view! {
        <div class="bg-black/40 border border-white/10 rounded-2xl mb-16 font-mono text-sm overflow-hidden">
            <div class="flex items-center gap-4 px-6 py-3 border-b border-white/10">
                <div class="flex gap-2">
                    <div class="w-3 h-3 rounded-full bg-red"></div>
                    <div class="w-3 h-3 rounded-full bg-yellow"></div>
                    <div class="w-3 h-3 rounded-full bg-green"></div>
                </div>
                <div class="text-white/60">{prompt}</div>
            </div>
            <div class="p-6 space-y-1">
                <div>
                    <span class="text-green">"$"</span>
                    " cat tech_stack.json"
                </div>
                <div>"{"</div>
                {TECH_STACK
                    .iter()
                    .enumerate()
                    .map(|(i, (key, value))| {
                        view! {
                            <div class="pl-4">
                                <span class="text-blue">{format!("\"{key}\"")}</span>
                                ": "
                                <span class="text-green">{*value}</span>
                                {(i != last).then_some(",")}
                            </div>
                        }
                    })
                    .collect_view()}
                <div>"}"</div>
                <div>
                    <span class="text-purple">"> "</span>
                    <span class="animate-pulse">"█"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SkillCard(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="bg-white/5 border border-white/10 rounded-2xl p-6">
            <div class="flex items-baseline gap-1 mb-2">
                <span class=format!("text-3xl font-black text-{}", skill.color)>
                    {skill.level.to_string()}
                </span>
                <span class="text-white/60">"%"</span>
            </div>
            <p class="text-white font-semibold">{skill.name}</p>
            <p class="text-white/40 text-xs mb-4">"Expert Level"</p>
            <div class="w-full bg-white/10 rounded-full h-2">
                <div
                    class=format!("h-2 rounded-full bg-{}", skill.color)
                    style=format!("width: {}%", skill.level)
                ></div>
            </div>
        </div>
    }
}
