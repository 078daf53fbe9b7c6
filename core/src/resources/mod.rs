//! Per-resource request bodies and the `PaystackClient` methods that send them.
//!
//! Every method is a one-liner over [`PaystackClient::call`]: pick an entry
//! from [`crate::endpoint`], substitute the identifier if the path has one,
//! and attach the body if the operation takes one. `operations!` writes those
//! one-liners from a compact table in each submodule.

/// Expands `fn name(id?) with Body => ENDPOINT;` rows into client methods.
macro_rules! operations {
    (@id) => { None };
    (@id $id:ident) => { Some($id) };
    (@body) => { $crate::client::NO_BODY };
    (@body $body:ident: $ty:ty) => { Some($body) };
    ($(
        $(#[$meta:meta])*
        fn $name:ident($($id:ident)?) $(with $body:ty)? => $endpoint:path;
    )*) => {
        $(
            $(#[$meta])*
            pub fn $name(
                &self
                $(, $id: &str)?
                $(, body: &$body)?
            ) -> Result<$crate::Envelope, $crate::PaystackError> {
                self.call(
                    &$endpoint,
                    operations!(@id $($id)?),
                    operations!(@body $(body: $body)?),
                )
            }
        )*
    };
}

pub mod customers;
pub mod plans;
pub mod splits;
pub mod subscriptions;
pub mod transactions;
