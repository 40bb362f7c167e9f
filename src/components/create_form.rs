use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use web_sys::{console, FormData};

use crate::api::{ApiClient, DEFAULT_API_BASE};

/// 新建公告的弹层表单。
///
/// 标题和描述走 HTML required 校验，附件可选。提交期间
/// 两个按钮都禁用；失败时把服务端 detail 显示在表单内，
/// 弹层保持打开可直接重试。关闭即丢弃全部输入。
#[component]
pub fn CreateAnnouncementForm(on_close: Callback<()>, on_success: Callback<()>) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(DEFAULT_API_BASE));

    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let title_ref = NodeRef::<html::Input>::new();
    let description_ref = NodeRef::<html::Textarea>::new();
    let file_ref = NodeRef::<html::Input>::new();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let (Some(title_el), Some(description_el), Some(file_el)) =
            (title_ref.get(), description_ref.get(), file_ref.get())
        else {
            return;
        };

        let form = match FormData::new() {
            Ok(form) => form,
            Err(_) => return,
        };
        let _ = form.append_with_str("title", &title_el.value());
        // 描述按原样作为纯字符串提交，不做任何转换
        let _ = form.append_with_str("description", &description_el.value());
        if let Some(file) = file_el.files().and_then(|files| files.get(0)) {
            let _ = form.append_with_blob_and_filename("file", &file, &file.name());
        }

        submitting.set(true);
        error.set(None);

        let api = api.clone();
        spawn_local(async move {
            match api.create_announcement(form).await {
                Ok(_) => {
                    on_success.run(());
                    on_close.run(());
                }
                Err(message) => {
                    console::error_2(
                        &"[Announcements] 创建失败:".into(),
                        &JsValue::from_str(&message),
                    );
                    error.set(Some(message));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
            <div class="bg-white rounded-lg p-6 w-full max-w-lg">
                <div class="flex justify-between items-center mb-4">
                    <h2 class="text-xl font-semibold">"Create New Announcement"</h2>
                    <button
                        class="text-gray-500 hover:text-gray-700"
                        disabled=move || submitting.get()
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                <form on:submit=handle_submit>
                    <div class="mb-4">
                        <label class="block text-gray-700 text-sm font-bold mb-2">"Title"</label>
                        <input
                            type="text"
                            node_ref=title_ref
                            class="shadow appearance-none border rounded w-full py-2 px-3 text-gray-700"
                            required
                        />
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 text-sm font-bold mb-2">
                            "Description"
                        </label>
                        <textarea
                            node_ref=description_ref
                            class="shadow appearance-none border rounded w-full py-2 px-3 text-gray-700 h-32"
                            required
                        ></textarea>
                    </div>
                    <div class="mb-4">
                        <label class="block text-gray-700 text-sm font-bold mb-2">
                            "Attachment (optional)"
                        </label>
                        <input
                            type="file"
                            node_ref=file_ref
                            class="shadow appearance-none border rounded w-full py-2 px-3 text-gray-700"
                        />
                    </div>
                    {move || {
                        error
                            .get()
                            .map(|message| {
                                view! { <div class="mb-4 text-red-500 text-sm">{message}</div> }
                            })
                    }}
                    <div class="flex justify-end space-x-2">
                        <button
                            type="button"
                            class="bg-gray-300 hover:bg-gray-400 text-gray-800 font-bold py-2 px-4 rounded"
                            disabled=move || submitting.get()
                            on:click=move |_| on_close.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded disabled:opacity-50"
                            disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Creating..." } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
