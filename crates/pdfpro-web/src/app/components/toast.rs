use std::time::Duration;

use leptos::prelude::*;
use pdfpro_app::ToastKind;

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "bg-green-600/90 border-green-400",
        ToastKind::Error => "bg-red-600/90 border-red-400",
        ToastKind::Info => "bg-blue-600/90 border-blue-400",
    }
}

/// Transient notification
///
/// Closes itself after `duration` through `on_timeout`; the close button
/// goes through `on_close`. The timer is cleared if the toast is replaced
/// or unmounted first.
#[component]
pub fn Toast(
    #[prop(into)] message: String,
    kind: ToastKind,
    duration: Duration,
    on_close: Callback<()>,
    on_timeout: Callback<()>,
) -> impl IntoView {
    match set_timeout_with_handle(move || on_timeout.run(()), duration) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => log::warn!("Toast timer unavailable, toast stays until closed"),
    }

    view! {
        <div
            role="status"
            aria-live="polite"
            class=format!(
                "fixed top-20 right-4 z-50 flex items-start gap-3 max-w-sm px-4 py-3 rounded-lg border shadow-lg text-white {}",
                kind_class(kind),
            )
        >
            <span class="font-bold" aria-hidden="true">{kind.icon()}</span>
            <p class="flex-1 text-sm">{message}</p>
            <button
                class="text-white/80 hover:text-white focus:outline-none"
                aria-label="Dismiss notification"
                on:click=move |_| on_close.run(())
            >
                "×"
            </button>
        </div>
    }
}
