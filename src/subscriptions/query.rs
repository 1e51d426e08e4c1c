use serde::Deserialize;
use uuid::Uuid;

use crate::auth::{AuthError, Identity};

/// Raw list-request query parameters (camelCase wire names).
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub status: Option<String>,
    pub category: Option<String>,
    pub billing_cycle: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Hard allow-list of sortable fields. The raw `sortBy` string never reaches
/// the SQL layer; it is mapped to one of these fixed column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    UpdatedAt,
    Name,
    Amount,
    NextBillingDate,
}

impl SortKey {
    fn from_param(raw: &str) -> Option<SortKey> {
        match raw {
            "createdAt" => Some(SortKey::CreatedAt),
            "updatedAt" => Some(SortKey::UpdatedAt),
            "name" => Some(SortKey::Name),
            "amount" => Some(SortKey::Amount),
            "nextBillingDate" => Some(SortKey::NextBillingDate),
            _ => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "created_at",
            SortKey::UpdatedAt => "updated_at",
            SortKey::Name => "name",
            SortKey::Amount => "amount",
            SortKey::NextBillingDate => "next_billing_date",
        }
    }
}

/// Ephemeral query descriptor for the record store: the mandatory owner
/// filter, optional equality filters, and the resolved sort. Built per
/// request and consumed once.
#[derive(Debug, Clone)]
pub struct SubscriptionQuery {
    pub user_id: Uuid,
    pub status: Option<String>,
    pub category: Option<String>,
    pub billing_cycle: Option<String>,
    pub sort: SortKey,
    pub direction: SortDirection,
}

impl SubscriptionQuery {
    /// Build the descriptor for an authenticated identity. Unknown filter
    /// values pass through and simply match nothing; unknown sort keys fall
    /// back to createdAt; anything but the literal "asc" sorts descending.
    pub fn from_params(identity: &Identity, params: ListParams) -> Result<Self, AuthError> {
        if identity.id.is_nil() {
            return Err(AuthError::MissingIdentity);
        }

        let sort = params
            .sort_by
            .as_deref()
            .and_then(SortKey::from_param)
            .unwrap_or(SortKey::CreatedAt);

        let direction = match params.order.as_deref() {
            Some("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        };

        Ok(Self {
            user_id: identity.id,
            status: params.status,
            category: params.category,
            billing_cycle: params.billing_cycle.map(|c| c.to_lowercase()),
            sort,
            direction,
        })
    }
}
