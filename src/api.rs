use gloo_net::http::Request;
use serde_json::Value;
use web_sys::FormData;

use crate::types::Announcement;

/// 未另行配置时指向本地开发后端。
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// 公告后端客户端。base URL 经 context 注入，不用全局默认值。
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 拉取全量公告列表，保持服务端返回的顺序。
    pub async fn list_announcements(&self) -> Result<Vec<Announcement>, String> {
        match Request::get(&self.url("/announcements")).send().await {
            Ok(resp) if resp.ok() => match resp.json::<Vec<Announcement>>().await {
                Ok(list) => Ok(list),
                Err(e) => Err(format!("解析错误: {e}")),
            },
            Ok(resp) => Err(format!("意外状态码: {}", resp.status())),
            Err(e) => Err(format!("请求失败: {e}")),
        }
    }

    /// 提交 multipart 表单创建公告。
    ///
    /// 失败时返回面向用户的消息：优先取响应体里的 `detail`，
    /// 取不到时退回通用文案。
    pub async fn create_announcement(&self, form: FormData) -> Result<Announcement, String> {
        let request = Request::post(&self.url("/announcements"))
            .body(form)
            .map_err(|e| format!("构造请求失败: {e}"))?;

        match request.send().await {
            Ok(resp) if resp.ok() => resp
                .json::<Announcement>()
                .await
                .map_err(|e| format!("解析错误: {e}")),
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                Err(detail_message(&body)
                    .unwrap_or_else(|| "Failed to create announcement".to_string()))
            }
            Err(e) => Err(format!("请求失败: {e}")),
        }
    }

    /// 删除单条公告，2xx 即视为成功，不读响应体。
    pub async fn delete_announcement(&self, id: i64) -> Result<(), String> {
        match Request::delete(&self.url(&format!("/announcements/{id}")))
            .send()
            .await
        {
            Ok(resp) if resp.ok() => Ok(()),
            Ok(resp) => Err(format!("意外状态码: {}", resp.status())),
            Err(e) => Err(format!("请求失败: {e}")),
        }
    }
}

/// 从错误响应体提取 `detail` 字段。
///
/// 后端的 `detail` 可能是字符串（HTTPException），也可能是结构化值
/// （FastAPI 校验错误数组）；字符串原样返回，其余序列化返回。
pub fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) => Some(text.clone()),
        other => serde_json::to_string(other).ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_path_and_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/announcements"), "http://localhost:8000/announcements");
        assert_eq!(client.url("/announcements/5"), "http://localhost:8000/announcements/5");
    }

    #[test]
    fn string_detail_is_returned_verbatim() {
        assert_eq!(
            detail_message(r#"{"detail": "Only professors can create announcements"}"#),
            Some("Only professors can create announcements".to_string())
        );
    }

    #[test]
    fn structured_detail_is_serialized() {
        let body = r#"{"detail": [{"loc": ["body", "title"], "msg": "field required"}]}"#;
        assert_eq!(
            detail_message(body),
            Some(r#"[{"loc":["body","title"],"msg":"field required"}]"#.to_string())
        );
    }

    #[test]
    fn missing_detail_or_bad_json_yields_none() {
        assert_eq!(detail_message(r#"{"error": "nope"}"#), None);
        assert_eq!(detail_message("<html>502</html>"), None);
        assert_eq!(detail_message(""), None);
    }
}
