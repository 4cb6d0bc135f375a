use std::fmt;

use chrono::{DateTime, Utc};

/// Which language the user searches by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LangMode {
    #[default]
    Ja,
    En,
}

impl LangMode {
    pub fn code(self) -> &'static str {
        match self {
            LangMode::Ja => "ja",
            LangMode::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            LangMode::Ja => LangMode::En,
            LangMode::En => LangMode::Ja,
        }
    }

    /// Radio button caption.
    pub fn caption(self) -> &'static str {
        match self {
            LangMode::Ja => "日本語➡英語",
            LangMode::En => "英語➡日本語",
        }
    }
}

impl fmt::Display for LangMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One row of the selection widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub type OptionList = Vec<SelectOption>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub issued_at: DateTime<Utc>,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
            issued_at: Utc::now(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
            issued_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>, ttl_secs: i64) -> bool {
        (now - self.issued_at).num_seconds() >= ttl_secs
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub lang_mode: LangMode,
    pub options: OptionList,
    pub query: String,        // typeahead input
    pub highlighted: usize,   // index into the filtered options
    pub selected: Option<SelectOption>,
    pub ja_result: String,
    pub en_result: String,
    pub notice: Option<Notice>,
}
