use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit stamp carried by every record.
///
/// `approved_by`/`approved_at` are only set by workflow transitions that
/// reach an approval step; plain edits never touch them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditInfo {
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
}

impl AuditInfo {
    /// Stamp for a freshly created record: creator and updater are the same
    /// actor at the same instant.
    pub fn created(actor: &str) -> Self {
        let now = Utc::now();
        Self {
            created_by: actor.to_string(),
            created_at: now,
            updated_by: actor.to_string(),
            updated_at: now,
            approved_by: None,
            approved_at: None,
        }
    }

    /// Refresh the updated stamp. Called on every edit and every transition.
    pub fn touch(&mut self, actor: &str) {
        self.updated_by = actor.to_string();
        self.updated_at = Utc::now();
    }

    /// Record approval alongside the updated stamp.
    pub fn approve(&mut self, actor: &str) {
        self.touch(actor);
        self.approved_by = Some(actor.to_string());
        self.approved_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_leaves_created_fields_alone() {
        let mut audit = AuditInfo::created("alice");
        audit.touch("bob");
        assert_eq!(audit.created_by, "alice");
        assert_eq!(audit.updated_by, "bob");
        assert!(audit.updated_at >= audit.created_at);
        assert!(audit.approved_by.is_none());
    }

    #[test]
    fn approve_sets_both_approval_fields() {
        let mut audit = AuditInfo::created("alice");
        audit.approve("carol");
        assert_eq!(audit.approved_by.as_deref(), Some("carol"));
        assert!(audit.approved_at.is_some());
        assert_eq!(audit.updated_by, "carol");
    }
}
