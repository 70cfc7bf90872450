//! Resource wrappers.
//!
//! Each wrapper maps its methods 1:1 onto API endpoints through the shared
//! [`HttpClient`](crate::HttpClient). Wrappers keep no state of their own.

mod checkout_sessions;
mod customers;
mod payouts;
mod products;
mod subscriptions;

pub use checkout_sessions::CheckoutSessions;
pub use customers::Customers;
pub use payouts::Payouts;
pub use products::Products;
pub use subscriptions::Subscriptions;

use std::borrow::Cow;

/// Percent-encode an identifier so it stays a single path segment.
fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
