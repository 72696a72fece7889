use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <article class="max-w-3xl mx-auto space-y-6 py-8">
            <h1 class="text-3xl font-bold">"About JPG to PDF Pro"</h1>
            <p class="text-slate-300">
                "JPG to PDF Pro is a small, focused tool for turning images into PDF documents. "
                "It runs entirely in your browser: files are read locally, converted locally "
                "and saved straight to your device."
            </p>
            <h2 class="text-xl font-semibold">"Why we built it"</h2>
            <p class="text-slate-300">
                "Most converters upload your files to a server you know nothing about. "
                "We wanted something fast and free that never sees your documents."
            </p>
            <h2 class="text-xl font-semibold">"How it works"</h2>
            <ol class="list-decimal list-inside space-y-1 text-slate-300">
                <li>"Pick one or more JPG images on the Tools page."</li>
                <li>"Reorder them so the pages come out the way you want."</li>
                <li>"Convert and download your PDF."</li>
            </ol>
        </article>
    }
}
