use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub id: EmailId,
    pub from: String,
    pub subject: String,
    pub preview: String,
    #[serde(default)]
    pub content: Option<String>,
    /// Display time as received, e.g. `10:30 AM` or `Yesterday`.
    pub time: String,
    pub unread: bool,
    pub is_reply: bool,
}

impl EmailMessage {
    /// Case-insensitive match on subject, sender and preview.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&self.subject, &self.from, &self.preview]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailDraft {
    pub from: String,
    pub subject: String,
    pub preview: String,
    pub content: Option<String>,
    pub time: String,
    pub unread: bool,
    pub is_reply: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInMessage {
    pub id: MessageId,
    pub sender_name: String,
    pub sender_avatar: String,
    pub content: String,
    pub time: String,
    pub unread: bool,
    pub is_reply: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email() -> EmailMessage {
        EmailMessage {
            id: EmailId("e1".into()),
            from: "John Doe".into(),
            subject: "Re: Meeting next week".into(),
            preview: "Hi Jane, that time works for me...".into(),
            content: None,
            time: "10:30 AM".into(),
            unread: true,
            is_reply: true,
        }
    }

    #[test]
    fn search_covers_subject_sender_and_preview() {
        let email = email();
        assert!(email.matches("meeting"));
        assert!(email.matches("JOHN"));
        assert!(email.matches("works for me"));
        assert!(email.matches("  "));
        assert!(!email.matches("proposal"));
    }
}
