use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::types::{format_created_at, Announcement};

/// 单条公告卡片。
///
/// 点击整行切换展开；删除按钮自带确认框，
/// 请求进行中按钮禁用，点击不冒泡到行上。
#[component]
pub fn AnnouncementCard(
    announcement: Announcement,
    is_expanded: Memo<bool>,
    is_deleting: Memo<bool>,
    on_toggle: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let title = announcement.title.clone();
    let byline = announcement.byline().to_string();
    let date = format_created_at(&announcement.created_at);
    let content_text = announcement.content.display_text();
    let attachment = announcement.url_name.clone();

    let handle_delete = move |ev: MouseEvent| {
        ev.stop_propagation();
        let confirmed = web_sys::window()
            .map(|window| {
                window
                    .confirm_with_message("Are you sure you want to delete this announcement?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if confirmed {
            on_delete.run(());
        }
    };

    view! {
        <div class="bg-white rounded-xl shadow-sm transition-all duration-200 hover:shadow-md mb-4">
            <div
                class="flex items-center justify-between px-6 py-4 cursor-pointer"
                on:click=move |_| on_toggle.run(())
            >
                <div class="flex-1 min-w-0">
                    <h3 class="text-base font-semibold text-gray-900 mb-0.5">{title}</h3>
                    <div class="flex items-center text-sm text-gray-500">
                        <span class="font-medium">{byline}</span>
                        <span class="mx-2">"•"</span>
                        <span>{date}</span>
                    </div>
                </div>
                <div class="flex items-center space-x-2">
                    <button
                        class="p-2 text-red-500 hover:bg-red-50 rounded-full transition-colors disabled:opacity-50"
                        disabled=move || is_deleting.get()
                        on:click=handle_delete
                    >
                        "Delete"
                    </button>
                    <span class=move || {
                        if is_expanded.get() {
                            "inline-block transform transition-transform rotate-180 text-blue-500"
                        } else {
                            "inline-block transform transition-transform text-gray-400"
                        }
                    }>"⌄"</span>
                </div>
            </div>
            <div class=move || {
                if is_expanded.get() {
                    "transition-all duration-300 ease-in-out max-h-[2000px] opacity-100"
                } else {
                    "transition-all duration-300 ease-in-out max-h-0 opacity-0 overflow-hidden"
                }
            }>
                <div class="px-6 pb-5 pt-2">
                    <div class="p-4 bg-gray-50 rounded-lg border border-gray-100">
                        <p class="whitespace-pre-wrap text-gray-600 leading-relaxed text-sm">
                            {content_text}
                        </p>
                        {attachment
                            .map(|href| {
                                view! {
                                    <div class="mt-4">
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-blue-600 hover:text-blue-800 underline"
                                        >
                                            "View Attachment"
                                        </a>
                                    </div>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}
