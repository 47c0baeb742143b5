use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use crate::contact::{
    client::submit,
    form::{ContactFields, ContactForm, RESET_DELAY},
};
use crate::content::{CONTACT_LINKS, PROJECT_TYPES};

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-32 px-8">
            <div class="max-w-7xl mx-auto">
                <div class="text-center mb-20">
                    <h2 class="text-5xl md:text-6xl font-black mb-8">
                        <span class="bg-gradient-to-r from-blue to-purple bg-clip-text text-transparent">
                            "Let's Build Together"
                        </span>
                    </h2>
                    <p class="text-xl text-white/60 max-w-3xl mx-auto">
                        "Have a project in mind or want to collaborate? I'd love to hear from you."
                    </p>
                </div>
                <div class="grid lg:grid-cols-2 gap-16">
                    <div class="space-y-6">
                        {CONTACT_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-6 bg-white/5 border border-white/10 rounded-2xl p-6 hover:border-blue/30 transition-all duration-300"
                                    >
                                        <i class=format!("{} text-2xl text-blue", link.icon)></i>
                                        <div>
                                            <div class="text-white font-semibold">{link.label}</div>
                                            <div class="text-white/60">{link.detail}</div>
                                        </div>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                    <MessageForm />
                </div>
            </div>
        </section>
    }
}

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/5 border border-white/10 rounded-xl text-white placeholder-white/40 focus:outline-none focus:border-blue/50";

fn field_value(
    form: RwSignal<ContactForm>,
    get: fn(&ContactFields) -> &String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || form.with(|f| get(&f.fields).clone())
}

fn field_input(
    form: RwSignal<ContactForm>,
    set: fn(&mut ContactFields, String),
) -> impl Fn(Event) + Copy + 'static {
    move |ev: Event| form.update(|f| set(&mut f.fields, event_target_value(&ev)))
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some((ticket, request)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        spawn_local(async move {
            let origin = window().location().origin().unwrap_or_default();
            let outcome = submit(&origin, &request).await;
            form.update(|f| {
                f.complete(ticket, outcome);
            });
            set_timeout(
                move || {
                    form.update(|f| {
                        f.expire(ticket);
                    })
                },
                RESET_DELAY,
            );
        });
    };

    let busy = move || form.with(ContactForm::is_busy);

    view! {
        <form
            on:submit=on_submit
            class="bg-white/5 backdrop-blur-xl border border-white/10 rounded-3xl p-10 space-y-6"
        >
            <div class="grid md:grid-cols-2 gap-6">
                <div>
                    <label for="name" class="block text-sm font-medium text-white/80 mb-2">
                        "Name"
                    </label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        required=true
                        placeholder="Your name"
                        class=INPUT_CLASS
                        prop:value=field_value(form, |f| &f.name)
                        on:input=field_input(form, |f, v| f.name = v)
                    />
                </div>
                <div>
                    <label for="email" class="block text-sm font-medium text-white/80 mb-2">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        required=true
                        placeholder="your@email.com"
                        class=INPUT_CLASS
                        prop:value=field_value(form, |f| &f.email)
                        on:input=field_input(form, |f, v| f.email = v)
                    />
                </div>
            </div>
            <div>
                <label for="projectType" class="block text-sm font-medium text-white/80 mb-2">
                    "Project Type"
                </label>
                <select
                    id="projectType"
                    name="projectType"
                    class=INPUT_CLASS
                    prop:value=field_value(form, |f| &f.project_type)
                    on:change=field_input(form, |f, v| f.project_type = v)
                >
                    {PROJECT_TYPES
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <option value={*value} class="bg-slate-900">
                                    {*label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label for="message" class="block text-sm font-medium text-white/80 mb-2">
                    "Message"
                </label>
                <textarea
                    id="message"
                    name="message"
                    required=true
                    rows="6"
                    placeholder="Tell me about your project..."
                    class=format!("{INPUT_CLASS} resize-none")
                    prop:value=field_value(form, |f| &f.message)
                    on:input=field_input(form, |f, v| f.message = v)
                ></textarea>
            </div>
            {move || {
                let status = form.with(|f| f.status().clone());
                (!status.is_idle())
                    .then(|| {
                        view! {
                            <div class=format!(
                                "p-4 rounded-xl border {}",
                                status.banner_class(),
                            )>{status.message().to_string()}</div>
                        }
                    })
            }}
            <button
                type="submit"
                disabled=busy
                class="w-full bg-white text-black hover:bg-white/90 disabled:opacity-50 py-4 text-lg font-semibold rounded-full transition-all duration-300"
            >
                {move || if busy() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
