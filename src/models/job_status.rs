use serde::Serialize;

/// Application status of a posting, the only field the user edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    #[default]
    NotApplied,
    Applied,
    Rejected,
    Accepted,
}

impl JobStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            JobStatus::NotApplied => "not-applied",
            JobStatus::Applied => "applied",
            JobStatus::Rejected => "rejected",
            JobStatus::Accepted => "accepted",
        }
    }

    /// Convert DB string → enum.
    /// Labels written by the first releases (French UI) are still accepted.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "not-applied" => Some(JobStatus::NotApplied),
            "applied" => Some(JobStatus::Applied),
            "rejected" => Some(JobStatus::Rejected),
            "accepted" => Some(JobStatus::Accepted),
            _ => Self::from_legacy_label(s),
        }
    }

    /// Map the legacy labels to the enum.
    pub fn from_legacy_label(s: &str) -> Option<Self> {
        match s {
            "non candidaté" => Some(JobStatus::NotApplied),
            "candidature envoyée" => Some(JobStatus::Applied),
            "refusé" => Some(JobStatus::Rejected),
            "accepté" => Some(JobStatus::Accepted),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (any case, `-`/`_`/space separated)
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized: String = code
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c })
            .collect();

        match normalized.as_str() {
            "notapplied" | "new" => Some(JobStatus::NotApplied),
            other => Self::from_db_str(other),
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            JobStatus::NotApplied => "Not applied",
            JobStatus::Applied => "Applied",
            JobStatus::Rejected => "Rejected",
            JobStatus::Accepted => "Accepted",
        }
    }
}
