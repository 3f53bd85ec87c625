use serde::{Deserialize, Serialize};

/// Tag of a log entry: a START opens a shift, an END closes it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryKind {
    Start,
    End,
}

impl EntryKind {
    /// Parse user input (case-insensitive).
    pub fn ek_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            _ => None,
        }
    }

    pub fn ek_as_str(&self) -> &'static str {
        match self {
            EntryKind::Start => "start",
            EntryKind::End => "end",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryKind::Start => "START",
            EntryKind::End => "END",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "START" => Some(EntryKind::Start),
            "END" => Some(EntryKind::End),
            _ => None,
        }
    }

    pub fn is_start(&self) -> bool {
        matches!(self, EntryKind::Start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_strings_are_uppercase_tags() {
        assert_eq!(EntryKind::Start.to_db_str(), "START");
        assert_eq!(EntryKind::from_db_str("END"), Some(EntryKind::End));
        assert_eq!(EntryKind::from_db_str("end"), None);
        assert_eq!(EntryKind::ek_from_str("End"), Some(EntryKind::End));
    }
}
