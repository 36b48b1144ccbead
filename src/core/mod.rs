pub mod identity;
pub mod matcher;
pub mod paginator;
pub mod provider;
pub mod reconciler;
pub mod record;
