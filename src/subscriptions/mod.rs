pub mod error;
pub mod query;
pub mod types;
pub mod validate;

pub use error::{CreateError, ValidationError};
pub use query::{ListParams, SortDirection, SortKey, SubscriptionQuery};
pub use validate::{normalize_create, CreateSubscriptionRequest, NewSubscription};
