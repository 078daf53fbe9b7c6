//! Blocking client for the Paystack REST API.
//!
//! # Overview
//! Every operation is one authenticated JSON request and one JSON reply.
//! Replies come back as an [`Envelope`], an ordered map of whatever Paystack
//! sent, so new response fields never need a client release.
//!
//! ```no_run
//! use paystack_core::{CreateCustomer, PaystackClient};
//!
//! let client = PaystackClient::new("sk_test_xxx");
//! let envelope = client.create_customer(&CreateCustomer {
//!     email: "ada@example.com".to_string(),
//!     ..Default::default()
//! })?;
//! if envelope.status() == Some(false) {
//!     eprintln!("rejected: {:?}", envelope.message());
//! }
//! # Ok::<(), paystack_core::PaystackError>(())
//! ```
//!
//! # Design
//! - `PaystackClient` is immutable and cheap to clone; share one per process.
//! - Request paths and verbs live in a single table ([`endpoint`]); the
//!   resource methods are generated from it.
//! - Only client-side failures are errors. A Paystack rejection is an
//!   envelope with `"status": false`.
//! - The network sits behind the [`Transport`] trait, with a pooled `ureq`
//!   agent as the default.

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod resources;
pub mod response;
pub mod transport;

pub use client::PaystackClient;
pub use config::ClientConfig;
pub use endpoint::Endpoint;
pub use error::{ConfigError, PaystackError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use resources::customers::{
    CreateCustomer, DeactivateAuthorization, RiskAction, SetRiskAction, UpdateCustomer,
    ValidateCustomer,
};
pub use resources::plans::{Interval, Plan};
pub use resources::splits::{
    CreateSplit, RemoveSplitSubaccount, SplitBearer, SplitSubaccount, SplitType, UpdateSplit,
};
pub use resources::subscriptions::{CreateSubscription, SubscriptionToken};
pub use resources::transactions::{
    Bearer, ChargeAuthorization, CheckAuthorization, InitializeTransaction, PartialDebit,
};
pub use response::{DecodePolicy, Envelope};
pub use transport::{Transport, UreqTransport};
