use leptos::prelude::*;

use crate::content::{OngoingProject, Project, ONGOING, PROJECTS};

#[component]
fn SectionHeading(title: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-20">
            <h2 class="text-5xl md:text-6xl font-black mb-8">
                <span class="bg-gradient-to-r from-blue to-purple bg-clip-text text-transparent">
                    {title}
                </span>
            </h2>
            <p class="text-xl text-white/60 max-w-3xl mx-auto">{blurb}</p>
        </div>
    }
}

fn tech_chips(tech: &'static [&'static str]) -> impl IntoView {
    tech.iter()
        .map(|t| {
            view! {
                <span class="bg-white/5 border border-white/10 px-3 py-1 rounded-lg text-sm text-white/80">
                    {*t}
                </span>
            }
        })
        .collect_view()
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="py-32 px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    title="Featured Projects"
                    blurb="Innovative solutions built with cutting-edge technologies and modern engineering practices."
                />
                <div class="space-y-12">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project=project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="bg-white/5 backdrop-blur-xl border border-white/10 rounded-3xl p-10 hover:border-blue/30 transition-all duration-500">
            <div class="flex flex-wrap items-center gap-4 mb-4">
                <span class="bg-blue/10 text-blue border border-blue/20 px-3 py-1 rounded-full text-xs">
                    {project.category}
                </span>
                <div class="text-green text-sm font-mono">{project.metrics}</div>
            </div>
            <h3 class="text-3xl font-bold mb-6">{project.title}</h3>
            <p class="text-white/70 text-lg leading-relaxed mb-8">{project.description}</p>
            <h4 class="text-sm font-semibold text-white/50 uppercase tracking-wider mb-4">
                "Tech Stack:"
            </h4>
            <div class="flex flex-wrap gap-2">{tech_chips(project.tech)}</div>
        </div>
    }
}

#[component]
pub fn OngoingSection() -> impl IntoView {
    view! {
        <section id="ongoing" class="py-32 px-8">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    title="Active Development"
                    blurb="Current projects in development - building the future one commit at a time."
                />
                <div class="grid lg:grid-cols-3 gap-8">
                    {ONGOING.iter().map(|project| view! { <OngoingCard project=project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn OngoingCard(project: &'static OngoingProject) -> impl IntoView {
    view! {
        <div class="bg-white/5 backdrop-blur-xl border border-white/10 rounded-3xl p-8 flex flex-col">
            <div class="flex items-start justify-between mb-6">
                <div>
                    <div class="flex gap-2 mb-4">
                        <span class=format!(
                            "{} px-3 py-1 text-xs font-medium border rounded-full",
                            project.status.badge_class(),
                        )>{project.status.label()}</span>
                        <span class=format!(
                            "{} px-3 py-1 text-xs font-medium border rounded-full",
                            project.priority.badge_class(),
                        )>{project.priority.label()}</span>
                    </div>
                    <h3 class="text-2xl font-bold">{project.title}</h3>
                </div>
                <div class="text-right text-sm text-white/60">
                    <div>{project.timeline}</div>
                    <div class="text-xs">{project.last_update}</div>
                </div>
            </div>
            <p class="text-white/70 leading-relaxed mb-6">{project.description}</p>
            <div class="mb-6">
                <div class="flex justify-between text-sm mb-2">
                    <span class="text-white/60">"Progress"</span>
                    <span class="text-blue font-semibold">{format!("{}%", project.progress)}</span>
                </div>
                <div class="w-full bg-white/10 rounded-full h-2">
                    <div
                        class="h-2 rounded-full bg-gradient-to-r from-blue to-purple"
                        style=format!("width: {}%", project.progress)
                    ></div>
                </div>
            </div>
            <h4 class="text-sm font-semibold text-white/50 uppercase tracking-wider mb-3">
                "Tech Stack"
            </h4>
            <div class="flex flex-wrap gap-2 mb-6">{tech_chips(project.tech)}</div>
            <div class="grid grid-cols-2 gap-4 mb-6">
                <div class="bg-white/5 rounded-xl p-4">
                    <div class="text-white/60 text-xs">"Team Size"</div>
                    <div class="text-xl font-bold">{project.team_size.to_string()}</div>
                </div>
                <div class="bg-white/5 rounded-xl p-4">
                    <div class="text-white/60 text-xs">"Commits"</div>
                    <div class="text-xl font-bold">{project.commits.to_string()}</div>
                </div>
            </div>
            <h4 class="text-sm font-semibold text-yellow mb-3">"Looking For"</h4>
            <div class="flex flex-wrap gap-2 mt-auto">
                {project
                    .looking_for
                    .iter()
                    .map(|role| {
                        view! {
                            <span class="bg-yellow/10 text-yellow border border-yellow/20 px-3 py-1 rounded-full text-xs">
                                {*role}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
