use std::collections::HashMap;

use leptos::prelude::*;
use pdfpro_app::{
    conversion_toast, format_size, AppConfig, ConversionQueue, ConversionStatus, FileId,
    QueuedFile, ToastKind,
};
use web_sys::{File, HtmlInputElement};

use crate::app::components::UploadIcon;
use crate::app::services::converter;

/// JPG to PDF converter
///
/// Keeps queue metadata in a signal and the browser `File` handles beside it,
/// keyed by `FileId`. Outcomes are reported only through `show_toast`.
#[component]
pub fn ToolsPage(show_toast: Callback<(String, ToastKind)>) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let accept = config.accepted_types.join(",");
    let output_file_name = StoredValue::new(config.output_file_name.clone());

    let queue = RwSignal::new(ConversionQueue::new(config.queue_limits()));
    let handles = StoredValue::new_local(HashMap::<FileId, File>::new());

    let status = Memo::new(move |_| queue.with(ConversionQueue::status));
    let busy = move || status.get() == ConversionStatus::Processing;

    let on_select = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(list) = input.files() else {
            return;
        };
        let selected: Vec<File> = (0..list.length()).filter_map(|i| list.get(i)).collect();
        log::info!("{} files selected", selected.len());

        let batch = selected.into_iter().map(|file| {
            let (name, size, mime) = (file.name(), file.size() as u64, file.type_());
            (file, name, size, mime)
        });
        let Some(report) = queue.try_update(|q| q.add_many(batch)) else {
            return;
        };
        if let Some(request) = report.toast() {
            show_toast.run((request.message, request.kind));
        }
        handles.update_value(|h| h.extend(report.added));
        // Allow picking the same file again after removing it
        input.set_value("");
    };

    let remove = move |id: FileId| {
        let removed = queue.try_update(|q| q.remove(id)).flatten();
        if removed.is_some() {
            handles.update_value(|h| {
                h.remove(&id);
            });
        }
    };

    let start_over = move || {
        queue.update(ConversionQueue::reset);
        handles.update_value(HashMap::clear);
    };

    let convert = move || {
        let ids = match queue.try_update(ConversionQueue::begin) {
            Some(Ok(ids)) => ids,
            Some(Err(err)) => {
                show_toast.run((err.to_string(), ToastKind::Error));
                return;
            }
            None => return,
        };
        let count = ids.len();
        let files: Vec<File> =
            handles.with_value(|h| ids.iter().filter_map(|id| h.get(id).cloned()).collect());
        let file_name = output_file_name.get_value();

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = converter::convert(files, &file_name)
                .await
                .map_err(|e| e.to_string());
            // Queue is disposed if the page was left while converting
            let request = queue
                .try_update(|q| q.finish(outcome.clone()))
                .unwrap_or_else(|| {
                    log::info!("Conversion finished after the tools page closed");
                    conversion_toast(count, &outcome)
                });
            show_toast.run((request.message, request.kind));
        });
    };

    view! {
        <section class="max-w-3xl mx-auto space-y-6">
            <header class="text-center">
                <h1 class="text-3xl font-bold">"JPG to PDF Converter"</h1>
                <p class="mt-2 text-slate-400">"Select images, arrange them, and convert."</p>
            </header>

            <label class=move || {
                if busy() {
                    "flex flex-col items-center gap-3 p-10 rounded-xl border-2 border-dashed border-slate-700 opacity-50 cursor-not-allowed"
                } else {
                    "flex flex-col items-center gap-3 p-10 rounded-xl border-2 border-dashed border-slate-600 hover:border-blue-400 cursor-pointer"
                }
            }>
                <UploadIcon class="w-10 h-10 text-blue-400" />
                <span class="font-medium">"Choose JPG images"</span>
                <span class="text-xs text-slate-500">
                    {format!("Up to {} files", config.max_files)}
                </span>
                <input
                    type="file"
                    class="sr-only"
                    multiple=true
                    accept=accept
                    disabled=busy
                    on:change=on_select
                />
            </label>

            <Show when=move || !queue.with(ConversionQueue::is_empty)>
                <div class="flex items-center justify-between text-sm text-slate-400">
                    <span>
                        {move || {
                            queue.with(|q| format!("{} files, {}", q.len(), format_size(q.total_size())))
                        }}
                    </span>
                    <button
                        class="hover:text-white disabled:opacity-50"
                        disabled=busy
                        on:click=move |_| start_over()
                    >
                        "Clear all"
                    </button>
                </div>
                <ul class="divide-y divide-slate-800 rounded-xl bg-slate-800/60 border border-slate-700/50">
                    <For
                        each=move || queue.with(|q| q.files().to_vec())
                        key=|file| file.id
                        children=move |file: QueuedFile| {
                            let id = file.id;
                            view! {
                                <li class="flex items-center gap-3 px-4 py-3">
                                    <span class="flex-1 truncate">{file.name.clone()}</span>
                                    <span class="text-xs text-slate-500">{format_size(file.size_bytes)}</span>
                                    <button
                                        class="px-2 text-slate-400 hover:text-white disabled:opacity-30"
                                        aria-label="Move up"
                                        disabled=busy
                                        on:click=move |_| queue.update(|q| {
                                            q.move_up(id);
                                        })
                                    >
                                        "↑"
                                    </button>
                                    <button
                                        class="px-2 text-slate-400 hover:text-white disabled:opacity-30"
                                        aria-label="Move down"
                                        disabled=busy
                                        on:click=move |_| queue.update(|q| {
                                            q.move_down(id);
                                        })
                                    >
                                        "↓"
                                    </button>
                                    <button
                                        class="px-2 text-red-400 hover:text-red-300 disabled:opacity-30"
                                        aria-label="Remove"
                                        disabled=busy
                                        on:click=move |_| remove(id)
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            {move || match status.get() {
                ConversionStatus::Success => view! {
                    <div class="text-center space-y-3">
                        <p class="text-green-400 font-medium">"Your PDF is ready."</p>
                        <button
                            class="px-6 py-3 rounded-lg bg-slate-700 hover:bg-slate-600 font-semibold"
                            on:click=move |_| start_over()
                        >
                            "Convert more images"
                        </button>
                    </div>
                }.into_any(),
                ConversionStatus::Processing => view! {
                    <button class="w-full px-6 py-3 rounded-lg bg-blue-500/60 font-semibold cursor-wait" disabled=true>
                        "Converting…"
                    </button>
                }.into_any(),
                ConversionStatus::Idle => view! {
                    <button
                        class="w-full px-6 py-3 rounded-lg bg-blue-500 hover:bg-blue-400 font-semibold disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || queue.with(ConversionQueue::is_empty)
                        on:click=move |_| convert()
                    >
                        "Convert to PDF"
                    </button>
                }.into_any(),
            }}
        </section>
    }
}
