use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use stocklens_auth::{Capabilities, Permission};
use stocklens_core::{ActivityEntryId, DateRange, DomainError, DomainResult, Entity, UserId};

/// What a logged action did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    ProductCreated,
    ProductUpdated,
    ProductDeleted,
    StockIn,
    StockOut,
}

/// One audit-trail entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: ActivityEntryId,
    pub occurred_at: DateTime<Utc>,
    pub actor: UserId,
    /// Display name of the actor at the time of the action.
    pub actor_name: String,
    pub action: ActivityAction,
    /// What the action touched (e.g. the product name).
    pub subject: String,
}

impl Entity for ActivityEntry {
    type Id = ActivityEntryId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Immutable filter criteria for the activity view.
///
/// Criteria compose conjunctively; the default (empty) filter matches every
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Case-insensitive substring match over actor name and subject.
    pub search: Option<String>,
    pub action: Option<ActivityAction>,
    pub range: Option<DateRange>,
}

impl ActivityFilter {
    pub fn matches(&self, entry: &ActivityEntry) -> bool {
        if let Some(action) = self.action {
            if entry.action != action {
                return false;
            }
        }
        if let Some(range) = &self.range {
            if !range.contains(entry.occurred_at) {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let needle = term.to_lowercase();
            let hit = entry.actor_name.to_lowercase().contains(&needle)
                || entry.subject.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        true
    }
}

/// Entries matching the filter, in their input order (stable).
pub fn filter_entries<'a>(
    entries: &'a [ActivityEntry],
    filter: &ActivityFilter,
) -> Vec<&'a ActivityEntry> {
    let matched: Vec<&ActivityEntry> = entries
        .iter()
        .filter(|entry| filter.matches(entry))
        .collect();
    debug!(
        total = entries.len(),
        matched = matched.len(),
        "filtered activity entries"
    );
    matched
}

/// Permission tag gating the activity view.
pub fn view_permission() -> Permission {
    Permission::new("activity.view")
}

/// Gate the activity view behind the embedding application's capability
/// check. No policy lives here; the check is consumed as an opaque boolean.
pub fn authorize_view(caps: &impl Capabilities) -> DomainResult<()> {
    if caps.has_permission(&view_permission()) {
        Ok(())
    } else {
        Err(DomainError::Unauthorized)
    }
}
