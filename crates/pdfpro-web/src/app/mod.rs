use leptos::prelude::*;
use pdfpro_app::{NavItem, Page, ToastKind};

pub mod components;
pub mod pages;
pub mod services;

use components::{PdfIcon, Toast};
use pages::{AboutPage, HomePage, ToolsPage};
use services::config::load_config;
use services::shell::{use_shell, ShellHandle};

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    log::info!("Rendering App component");

    let config = load_config();
    let shell = ShellHandle::new(config.clone());

    // Provide global state context
    provide_context(shell);
    provide_context(config);

    // Derives the initial page now; listener released when App unmounts
    shell.mount_router();

    view! {
        <div class="min-h-screen bg-slate-900 text-white font-sans flex flex-col">
            <ToastHost />
            <Header />
            <MainContent />
            <Footer />
        </div>
    }
}

/// Renders the shell's single toast slot
#[component]
fn ToastHost() -> impl IntoView {
    let shell = use_shell();
    let duration = shell.config().toast_duration();

    move || {
        shell.toast().get().map(|toast| {
            let id = toast.id;
            view! {
                <Toast
                    message=toast.message
                    kind=toast.kind
                    duration=duration
                    on_close=Callback::new(move |_| shell.dismiss_toast())
                    on_timeout=Callback::new(move |_| shell.expire_toast(id))
                />
            }
        })
    }
}

/// Header component with brand and page navigation
#[component]
fn Header() -> impl IntoView {
    let shell = use_shell();
    let app_name = shell.config().app_name;
    let items = Memo::new(move |_| shell.nav_items());

    view! {
        <header class="sticky top-0 z-40 w-full backdrop-blur-sm bg-slate-900/75 border-b border-slate-700/50">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        class="flex items-center space-x-3 cursor-pointer focus:outline-none focus:ring-2 focus:ring-blue-400 rounded-lg p-1 -ml-1"
                        on:click=move |_| shell.navigate(Page::Home)
                    >
                        <PdfIcon class="w-8 h-8 text-blue-400" />
                        <span class="text-xl font-bold text-white hidden sm:inline">{app_name}</span>
                    </button>
                    <nav class="flex items-center space-x-4 sm:space-x-6">
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|item| view! { <NavButton item=item /> })
                                .collect_view()
                        }}
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Header navigation button
#[component]
fn NavButton(item: NavItem) -> impl IntoView {
    let shell = use_shell();
    let page = item.page;
    let class = if item.active {
        "text-sm sm:text-base font-medium transition-colors duration-200 text-blue-400"
    } else {
        "text-sm sm:text-base font-medium transition-colors duration-200 text-slate-400 hover:text-white"
    };

    view! {
        <button
            class=class
            aria-current=item.active.then_some("page")
            on:click=move |_| {
                log::info!("Navigating to {page}");
                shell.navigate(page);
            }
        >
            {item.label}
        </button>
    }
}

/// Page body for the current route
#[component]
fn MainContent() -> impl IntoView {
    let shell = use_shell();
    let current = shell.page();

    let on_navigate = Callback::new(move |_| shell.navigate(Page::Tools));
    let show_toast = Callback::new(move |(message, kind): (String, ToastKind)| {
        shell.show_toast(message, kind);
    });

    view! {
        <main class="flex-grow w-full max-w-5xl mx-auto p-4 sm:p-6 lg:p-8">
            {move || match current.get() {
                Page::Home => view! { <HomePage on_navigate=on_navigate /> }.into_any(),
                Page::Tools => view! { <ToolsPage show_toast=show_toast /> }.into_any(),
                Page::About => view! { <AboutPage /> }.into_any(),
            }}
        </main>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let app_name = use_shell().config().app_name;
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="w-full py-6 mt-auto border-t border-slate-800">
            <div class="text-center text-slate-500 text-sm">
                <p>{format!("© {year} {app_name}. All rights reserved.")}</p>
                <p class="mt-1">"Made with ❤️ for people who just need a PDF."</p>
            </div>
        </footer>
    }
}
