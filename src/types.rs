use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 公告记录。`id` 与 `created_at` 由服务端分配，客户端只读。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub created_at: String,
    pub content: Content,
    pub creator_id: i64,
    #[serde(default)]
    pub url_name: Option<String>,
    #[serde(default)]
    pub creator_name: Option<String>,
}

impl Announcement {
    /// 署名：优先显示服务端解析出的创建者名，否则退回 "Admin"。
    pub fn byline(&self) -> &str {
        self.creator_name.as_deref().unwrap_or("Admin")
    }
}

/// 公告正文：服务端可能返回纯文本，也可能返回任意结构化 JSON。
///
/// `untagged`：JSON 字符串落入 `Text`，其他一律落入 `Structured`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Structured(Value),
}

impl Content {
    /// 文本原样返回（保留换行），结构化值缩进序列化后展示。
    pub fn display_text(&self) -> String {
        match self {
            Content::Text(text) => text.clone(),
            Content::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

/// 把服务端的 ISO 时间串转成短日期，解析失败时原样显示。
pub fn format_created_at(raw: &str) -> String {
    if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%b %-d, %Y").to_string();
    }
    // 后端偶尔存不带时区的 isoformat
    if let Ok(parsed) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_string_content() {
        let announcement: Announcement = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Welcome",
                "created_at": "2026-03-05T10:30:00+00:00",
                "content": "Hello everyone",
                "creator_id": 7
            }"#,
        )
        .unwrap();
        assert_eq!(announcement.content, Content::Text("Hello everyone".into()));
        assert_eq!(announcement.url_name, None);
        assert_eq!(announcement.byline(), "Admin");
    }

    #[test]
    fn deserializes_structured_content_and_creator_name() {
        let announcement: Announcement = serde_json::from_str(
            r#"{
                "id": 2,
                "title": "Schedule",
                "created_at": "2026-03-05T10:30:00+00:00",
                "content": {"week": 3, "topic": "ownership"},
                "creator_id": 7,
                "url_name": "a1b2.pdf",
                "creator_name": "Prof. Liu"
            }"#,
        )
        .unwrap();
        assert!(matches!(announcement.content, Content::Structured(_)));
        assert_eq!(announcement.url_name.as_deref(), Some("a1b2.pdf"));
        assert_eq!(announcement.byline(), "Prof. Liu");
    }

    #[test]
    fn text_content_displays_verbatim_with_newlines() {
        let content = Content::Text("line one\n\n  indented line".into());
        assert_eq!(content.display_text(), "line one\n\n  indented line");
    }

    #[test]
    fn structured_content_displays_pretty_printed() {
        let content = Content::Structured(json!({"week": 3}));
        assert_eq!(content.display_text(), "{\n  \"week\": 3\n}");
    }

    #[test]
    fn formats_rfc3339_created_at() {
        assert_eq!(format_created_at("2026-03-05T10:30:00+00:00"), "Mar 5, 2026");
    }

    #[test]
    fn formats_naive_created_at() {
        assert_eq!(
            format_created_at("2026-11-21T08:00:00.123456"),
            "Nov 21, 2026"
        );
    }

    #[test]
    fn unparseable_created_at_passes_through() {
        assert_eq!(format_created_at("yesterday"), "yesterday");
    }
}
