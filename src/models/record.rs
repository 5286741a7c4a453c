use serde::Serialize;
use std::path::PathBuf;

/// Example input copied by the hint record shown for an empty query.
pub const HINT_EXAMPLE: &str = "99,197,34;(39,0,152)";

/// What the host should do when a result is activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum RecordAction {
    CopyToClipboard(String),
}

/// One row in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub title: String,
    pub subtitle: String,
    pub icon_path: PathBuf,
    pub action: Option<RecordAction>,
}

impl ResultRecord {
    /// A record whose activation copies its own title.
    pub fn copyable(title: String, subtitle: impl Into<String>, icon_path: PathBuf) -> Self {
        Self {
            action: Some(RecordAction::CopyToClipboard(title.clone())),
            title,
            subtitle: subtitle.into(),
            icon_path,
        }
    }

    /// Text the host should place on the clipboard, if any.
    pub fn clipboard_text(&self) -> Option<&str> {
        match &self.action {
            Some(RecordAction::CopyToClipboard(text)) => Some(text),
            None => None,
        }
    }
}
