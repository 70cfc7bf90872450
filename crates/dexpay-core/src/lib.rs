//! Core types for the DexPay API.
//!
//! This crate holds the data model shared by the DexPay client:
//!
//! - **Enums**: `Currency`, `TransactionStatus`, `ProductType`, ... (each with an
//!   `Other(String)` escape hatch for values added server-side)
//! - **Resources**: `CheckoutSession`, `Product`, `Customer`, `Subscription`, `Payout`
//! - **Parameters**: create/update bodies and list filters
//! - **Envelopes**: `ApiResponse`, `PaginatedResponse`
//!
//! Resource types are pass-through shapes: apart from the identifier every
//! field is optional, and fields the SDK does not model are kept in an
//! `extra` map, so serializing a decoded resource gives back the server's
//! body. Nothing here validates business rules; the API is authoritative.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod checkout;
pub mod customer;
pub mod enums;
pub mod payout;
pub mod product;
pub mod query;
pub mod response;
pub mod subscription;

pub use checkout::{
    CheckoutSession, CreateCheckoutSessionParams, CreatePaymentAttemptParams, PaymentAttempt,
    PaymentCustomer,
};
pub use customer::{CreateCustomerParams, Customer, ListCustomersParams, UpdateCustomerParams};
pub use enums::{
    BillingPeriod, Currency, PaymentMethod, ProductType, SubscriptionStatus, TransactionStatus,
};
pub use payout::{
    CancelPayoutParams, CreatePayoutParams, ListPayoutsParams, Payout, PayoutDestinationDetails,
};
pub use product::{CreateProductParams, ListProductsParams, Product, UpdateProductParams};
pub use query::ListParams;
pub use response::{ApiResponse, DeletedResource, PaginatedResponse, Pagination};
pub use subscription::{CreateSubscriptionParams, ListSubscriptionsParams, Subscription};

/// Free-form merchant metadata. Never inspected by the SDK.
pub type Metadata = serde_json::Map<String, serde_json::Value>;
