use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::api::ApiClient;
use crate::types::Announcement;

/// 封装公告页所需的全部信号与操作。
///
/// 每条记录的展开/删除中状态按 id 记在集合里，
/// 不在每个卡片里各自藏一份。
#[derive(Clone)]
pub struct AnnouncementsLogic {
    pub api: ApiClient,
    pub announcements: RwSignal<Vec<Announcement>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub panel_expanded: RwSignal<bool>,
    pub show_create_form: RwSignal<bool>,
    pub expanded: RwSignal<HashSet<i64>>,
    pub deleting: RwSignal<HashSet<i64>>,
}

impl AnnouncementsLogic {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            announcements: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            panel_expanded: RwSignal::new(true),
            show_create_form: RwSignal::new(false),
            expanded: RwSignal::new(HashSet::new()),
            deleting: RwSignal::new(HashSet::new()),
        }
    }

    /// 全量重拉列表。失败时整个列表区域换成错误提示，细节进控制台。
    pub fn fetch(&self) {
        let api = self.api.clone();
        let announcements = self.announcements;
        let loading = self.loading;
        let error = self.error;
        spawn_local(async move {
            loading.set(true);
            match api.list_announcements().await {
                Ok(list) => {
                    announcements.set(list);
                    error.set(None);
                }
                Err(e) => {
                    console::error_2(&"[Announcements] 拉取失败:".into(), &JsValue::from_str(&e));
                    error.set(Some("Failed to fetch announcements".to_string()));
                }
            }
            loading.set(false);
        });
    }

    /// 发出删除请求。成功后重拉一次列表；失败弹 alert，列表保持原样。
    pub fn delete(&self, id: i64) {
        let api = self.api.clone();
        let deleting = self.deleting;
        let this = self.clone();
        deleting.update(|set| {
            set.insert(id);
        });
        spawn_local(async move {
            match api.delete_announcement(id).await {
                Ok(()) => this.fetch(),
                Err(e) => {
                    console::error_2(&"[Announcements] 删除失败:".into(), &JsValue::from_str(&e));
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message("Failed to delete announcement");
                    }
                }
            }
            deleting.update(|set| {
                set.remove(&id);
            });
        });
    }

    pub fn toggle_panel(&self) {
        self.panel_expanded.update(|expanded| *expanded = !*expanded);
    }

    pub fn toggle_item(&self, id: i64) {
        self.expanded.update(|set| {
            toggle_membership(set, id);
        });
    }
}

/// 集合里有 id 就移除，没有就插入；返回切换后是否在集合中。
pub fn toggle_membership(set: &mut HashSet<i64>, id: i64) -> bool {
    if set.insert(id) {
        true
    } else {
        set.remove(&id);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut set = HashSet::new();
        assert!(toggle_membership(&mut set, 5));
        assert!(set.contains(&5));
        assert!(!toggle_membership(&mut set, 5));
        assert!(set.is_empty());
    }

    #[test]
    fn double_toggle_is_idempotent() {
        // 展开、展开、收起 与 收起一次 等价
        let mut doubled = HashSet::new();
        toggle_membership(&mut doubled, 7);
        toggle_membership(&mut doubled, 7);
        toggle_membership(&mut doubled, 7);

        let mut once = HashSet::new();
        toggle_membership(&mut once, 7);

        assert_eq!(doubled, once);
    }

    #[test]
    fn toggle_is_scoped_per_id() {
        let mut set = HashSet::new();
        toggle_membership(&mut set, 1);
        toggle_membership(&mut set, 2);
        toggle_membership(&mut set, 1);
        assert!(!set.contains(&1));
        assert!(set.contains(&2));
    }
}
