//! End-to-end scenario tests for the dynoexpr workspace.
//!
//! Each module drives the public builder surface through a realistic call
//! chain and asserts over the serialized request JSON, the same payload a
//! network client would put on the wire.
#![allow(missing_docs)]

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

mod test_condition;
mod test_query;
mod test_update;
