use leptos::prelude::*;

use crate::app::components::PdfIcon;

const FEATURES: [(&str, &str); 3] = [
    (
        "Private by default",
        "Your images are converted in the browser and never leave your device.",
    ),
    (
        "Keep your order",
        "Arrange pages before converting so the PDF reads the way you expect.",
    ),
    (
        "Free, no sign-up",
        "No accounts, no watermarks, no limits on how often you convert.",
    ),
];

/// Marketing landing page
#[component]
pub fn HomePage(on_navigate: Callback<()>) -> impl IntoView {
    view! {
        <section class="flex flex-col items-center text-center py-12 sm:py-20">
            <PdfIcon class="w-16 h-16 text-blue-400 mb-6" />
            <h1 class="text-4xl sm:text-5xl font-extrabold tracking-tight">
                "Turn JPG images into a PDF in seconds"
            </h1>
            <p class="mt-4 max-w-2xl text-lg text-slate-400">
                "Combine photos, scans and screenshots into a single, shareable PDF document."
            </p>
            <button
                class="mt-8 px-6 py-3 rounded-lg bg-blue-500 hover:bg-blue-400 font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-blue-300"
                on:click=move |_| on_navigate.run(())
            >
                "Start converting"
            </button>
        </section>

        <section class="grid gap-6 sm:grid-cols-3">
            {FEATURES
                .iter()
                .map(|(title, body)| {
                    view! {
                        <div class="p-6 rounded-xl bg-slate-800/60 border border-slate-700/50">
                            <h2 class="text-lg font-semibold text-white">{*title}</h2>
                            <p class="mt-2 text-sm text-slate-400">{*body}</p>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
