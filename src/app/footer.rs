use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use crate::content::{CONTACT_LINKS, OWNER};

/// (copyright year, "last built" date) from the timestamp build.rs stamps in.
fn build_stamp(build_time: &str) -> Option<(i32, String)> {
    let dt = DateTime::parse_from_rfc3339(build_time).ok()?;
    Some((dt.year(), dt.format("%b %e, %Y").to_string()))
}

#[component]
pub fn Footer() -> impl IntoView {
    let stamp = build_stamp(env!("BUILD_TIME"));
    let copyright = match &stamp {
        Some((year, _)) => format!("© {year} {OWNER}. All rights reserved."),
        None => format!("© {OWNER}. All rights reserved."),
    };
    let built = stamp.map(|(_, date)| format!("Last built {date}"));

    view! {
        <footer class="relative z-10 border-t border-white/10 py-16 px-8">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row items-center justify-between gap-8">
                <div>
                    <div class="text-2xl font-bold bg-gradient-to-r from-blue to-purple bg-clip-text text-transparent">
                        {OWNER.to_uppercase()}
                    </div>
                    <p class="text-white/60 mt-2">"Building the future, one line of code at a time."</p>
                </div>
                <div class="flex gap-6">
                    {CONTACT_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label
                                    class="text-white/60 hover:text-white text-2xl transition-colors duration-200"
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="max-w-7xl mx-auto mt-8 pt-8 border-t border-white/10 text-center text-white/40 text-sm">
                <p>{copyright}</p>
                <p class="text-xs mt-1">{built}</p>
            </div>
        </footer>
    }
}
