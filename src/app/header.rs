use leptos::prelude::*;

use crate::content::{section_id, NAV_SECTIONS, OWNER};

#[component]
pub fn Nav() -> impl IntoView {
    let (active, set_active) = signal("home".to_string());

    view! {
        <nav class="fixed top-8 left-1/2 -translate-x-1/2 z-50">
            <div class="bg-black/20 backdrop-blur-xl border border-white/10 rounded-full px-8 py-4">
                <div class="flex items-center space-x-8">
                    <a
                        href="#home"
                        on:click=move |_| set_active.set("home".to_string())
                        class="text-lg font-bold bg-gradient-to-r from-blue to-purple bg-clip-text text-transparent"
                    >
                        {OWNER.to_uppercase()}
                    </a>
                    <div class="h-4 w-px bg-white/20"></div>
                    <div class="flex space-x-6">
                        {NAV_SECTIONS
                            .iter()
                            .map(|label| {
                                let id = section_id(label);
                                let href = format!("#{id}");
                                let is_active = {
                                    let id = id.clone();
                                    move || active.with(|a| *a == id)
                                };
                                view! {
                                    <a
                                        href=href
                                        on:click=move |_| set_active.set(id.clone())
                                        class=move || {
                                            if is_active() {
                                                "text-sm font-medium transition-all duration-300 text-blue"
                                            } else {
                                                "text-sm font-medium transition-all duration-300 text-white/70 hover:text-blue"
                                            }
                                        }
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}
