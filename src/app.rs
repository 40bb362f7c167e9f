use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::{ApiClient, DEFAULT_API_BASE};
use crate::pages::announcements::AnnouncementsPage;

#[component]
pub fn App() -> impl IntoView {
    // API 主机在这里注入一次，组件树内部不再碰全局配置
    provide_context(ApiClient::new(
        option_env!("API_BASE_URL").unwrap_or(DEFAULT_API_BASE),
    ));
    view! {
        <Router>
            <Routes fallback=|| "not found">
                <Route path=path!("/") view=AnnouncementsPage/>
            </Routes>
        </Router>
    }
}
