use serde::Serialize;
use std::fmt;

/// Feedback shown after an indexing action
pub const INDEXING_STARTED: &str = "Индексация запущена";
pub const INDEXING_STOPPED: &str = "Индексация остановлена";
pub const PAGE_QUEUED: &str = "Страница добавлена в очередь";

/// Generic message for requests that never produced an envelope
pub const TRANSPORT_FAILURE: &str = "Не удалось выполнить запрос к серверу";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Failure,
}

/// A user-visible notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// A failure carrying the backend's message verbatim
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Failure,
            message: message.into(),
        }
    }

    pub fn transport_failure() -> Self {
        Self::failure(TRANSPORT_FAILURE)
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
