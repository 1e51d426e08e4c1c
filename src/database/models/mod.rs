pub mod subscription;
pub mod user;

pub use subscription::Subscription;
pub use user::UserRecord;
