//! String-valued enums used across the DexPay API.
//!
//! The API transmits every enum as a bare upper-case string and may add new
//! values at any time. Each enum therefore carries an `Other` variant that
//! keeps the raw string, so unknown values survive a decode/encode cycle.
//!
//! # Macro-based enum types
//!
//! The `string_enum!` macro generates, for each type:
//! - `Clone`, `PartialEq`, `Eq`, `Hash`, `Debug`
//! - `Serialize`, `Deserialize` (as string)
//! - `From<String>`, `From<&str>`, `FromStr`, `Display`, `Into<String>`

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this version of the SDK does not know about.
            Other(String),
        }

        impl $name {
            /// Wire representation of the value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            /// Whether the value is one of the named variants.
            #[must_use]
            pub const fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $value => Self::$variant, )+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Settlement currency.
    Currency {
        /// West African CFA franc.
        Xof => "XOF",
        /// Central African CFA franc.
        Xaf => "XAF",
        /// Guinean franc.
        Gnf => "GNF",
    }
}

string_enum! {
    /// Payment method used for a payment attempt.
    PaymentMethod {
        /// Mobile money wallet (Wave, Orange Money, MTN, Moov).
        MobileMoney => "MOBILE_MONEY",
    }
}

string_enum! {
    /// Lifecycle status of a payment or payout.
    TransactionStatus {
        /// Created, no payment started yet.
        Initiated => "INITIATED",
        /// Waiting on the customer or operator.
        Pending => "PENDING",
        /// Being processed by the operator.
        Processing => "PROCESSING",
        /// Funds moved.
        Completed => "COMPLETED",
        /// Rejected by the operator.
        Failed => "FAILED",
        /// Cancelled before completion.
        Cancelled => "CANCELLED",
        /// Refunded after completion.
        Refunded => "REFUNDED",
    }
}

string_enum! {
    /// Billing model of a product.
    ProductType {
        /// Paid once.
        OneTime => "ONE_TIME",
        /// Billed every `BillingPeriod`.
        Recurring => "RECURRING",
    }
}

string_enum! {
    /// Billing cadence for recurring products.
    BillingPeriod {
        /// Every day.
        Daily => "DAILY",
        /// Every week.
        Weekly => "WEEKLY",
        /// Every month.
        Monthly => "MONTHLY",
        /// Every year.
        Yearly => "YEARLY",
    }
}

string_enum! {
    /// Lifecycle status of a subscription.
    SubscriptionStatus {
        /// Awaiting the first payment.
        Pending => "PENDING",
        /// Billing normally.
        Active => "ACTIVE",
        /// Temporarily suspended.
        Paused => "PAUSED",
        /// Cancelled by the merchant or customer.
        Cancelled => "CANCELLED",
        /// Ran past its end date.
        Expired => "EXPIRED",
    }
}
