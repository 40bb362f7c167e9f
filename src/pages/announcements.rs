pub mod logic;

use leptos::prelude::*;

use crate::api::{ApiClient, DEFAULT_API_BASE};
use crate::components::{AnnouncementCard, CreateAnnouncementForm};
use crate::types::Announcement;
pub use logic::AnnouncementsLogic;

/// 公告页入口：加载中 / 出错 / 列表三种互斥状态，
/// 数据操作都在 `logic` 模块。
#[component]
pub fn AnnouncementsPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(|| ApiClient::new(DEFAULT_API_BASE));
    let logic = AnnouncementsLogic::new(api);
    logic.fetch();

    let loading = logic.loading;
    let error = logic.error;
    let panel_expanded = logic.panel_expanded;
    let show_create_form = logic.show_create_form;

    let refetch = {
        let logic = logic.clone();
        Callback::new(move |_: ()| logic.fetch())
    };
    let close_form = Callback::new(move |_: ()| show_create_form.set(false));

    enum RenderState {
        Loading,
        Error(String),
        Ready,
    }

    let panel_logic = logic.clone();

    view! {
        <div class="min-h-screen bg-gray-50 px-6 py-4">
            {move || {
                let state = if loading.get() {
                    RenderState::Loading
                } else if let Some(message) = error.get() {
                    RenderState::Error(message)
                } else {
                    RenderState::Ready
                };

                let rendered: AnyView = match state {
                    RenderState::Loading => view! {
                        <div class="min-h-screen flex items-center justify-center">
                            <div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600"></div>
                        </div>
                    }
                    .into_any(),
                    RenderState::Error(message) => view! {
                        <div class="min-h-screen flex items-center justify-center">
                            <div class="text-red-600 bg-red-50 px-4 py-3 rounded-lg">{message}</div>
                        </div>
                    }
                    .into_any(),
                    RenderState::Ready => {
                        let logic = panel_logic.clone();
                        view! { <AnnouncementsPanel logic=logic/> }.into_any()
                    }
                };

                rendered
            }}
            <Show when=move || show_create_form.get()>
                <CreateAnnouncementForm on_close=close_form on_success=refetch/>
            </Show>
        </div>
    }
}

/// 列表面板：标题栏（新建按钮 + 整体折叠开关）加可折叠的卡片区。
#[component]
fn AnnouncementsPanel(logic: AnnouncementsLogic) -> impl IntoView {
    let announcements = logic.announcements;
    let expanded = logic.expanded;
    let deleting = logic.deleting;
    let panel_expanded = logic.panel_expanded;
    let show_create_form = logic.show_create_form;

    let toggle_panel = {
        let logic = logic.clone();
        move |_| logic.toggle_panel()
    };

    let card_logic = logic.clone();

    view! {
        <div class="max-w-[90%] w-[1200px] mx-auto">
            <div class="bg-white rounded-2xl shadow-lg overflow-hidden">
                <div class="bg-gradient-to-r from-blue-600 to-blue-700 text-white px-8 py-6 flex items-center justify-between">
                    <div>
                        <h1 class="text-xl font-semibold">"Announcements"</h1>
                        <p class="text-sm text-blue-100 mt-1">
                            "Stay updated with the latest information"
                        </p>
                    </div>
                    <div class="flex items-center space-x-4">
                        <button
                            class="bg-white/10 hover:bg-white/20 text-white px-4 py-2 rounded-lg transition-colors"
                            on:click=move |_| show_create_form.set(true)
                        >
                            "Create Announcement"
                        </button>
                        <button
                            class="p-3 hover:bg-white/10 rounded-xl transition-colors"
                            on:click=toggle_panel
                        >
                            <span class=move || {
                                if panel_expanded.get() {
                                    "inline-block transform transition-transform rotate-180"
                                } else {
                                    "inline-block transform transition-transform"
                                }
                            }>"⌄"</span>
                        </button>
                    </div>
                </div>
                <div class=move || {
                    if panel_expanded.get() {
                        "transition-all duration-300 ease-in-out max-h-[2000px] opacity-100"
                    } else {
                        "transition-all duration-300 ease-in-out max-h-0 opacity-0 overflow-hidden"
                    }
                }>
                    <div class="p-6 space-y-4">
                        <Show
                            when=move || announcements.with(|list| !list.is_empty())
                            fallback=|| {
                                view! {
                                    <div class="text-center py-8 text-gray-500">
                                        "No announcements available"
                                    </div>
                                }
                            }
                        >
                            <For
                                each=move || announcements.get()
                                key=|announcement| announcement.id
                                children={
                                    let logic = card_logic.clone();
                                    move |announcement: Announcement| {
                                        let id = announcement.id;
                                        let is_expanded =
                                            Memo::new(move |_| expanded.with(|set| set.contains(&id)));
                                        let is_deleting =
                                            Memo::new(move |_| deleting.with(|set| set.contains(&id)));
                                        let toggle = {
                                            let logic = logic.clone();
                                            Callback::new(move |_: ()| logic.toggle_item(id))
                                        };
                                        let delete = {
                                            let logic = logic.clone();
                                            Callback::new(move |_: ()| logic.delete(id))
                                        };
                                        view! {
                                            <AnnouncementCard
                                                announcement=announcement
                                                is_expanded=is_expanded
                                                is_deleting=is_deleting
                                                on_toggle=toggle
                                                on_delete=delete
                                            />
                                        }
                                    }
                                }
                            />
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
