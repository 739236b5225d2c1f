use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum NoticeKind {
    Info,
    Error,
}

// Notice is a message surfaced to the user after an action
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: &str) -> Self {
        Notice { kind: NoticeKind::Info, message: message.to_string() }
    }

    pub fn error(message: &str) -> Self {
        Notice { kind: NoticeKind::Error, message: message.to_string() }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl From<CommandError> for Notice {
    fn from(err: CommandError) -> Self {
        Notice::error(err.message())
    }
}

// Listing is the heading and one line per book shown in the list display
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

impl Listing {
    pub fn new(heading: &str, lines: Vec<String>) -> Self {
        Listing { heading: Some(heading.to_string()), lines }
    }

    pub fn empty() -> Self {
        Listing::default()
    }
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ControllerResponse {
    pub notice: Option<Notice>,
    pub listing: Listing,
}

impl ControllerResponse {
    pub fn new(notice: Option<Notice>, listing: Listing) -> Self {
        ControllerResponse { notice, listing }
    }
}
