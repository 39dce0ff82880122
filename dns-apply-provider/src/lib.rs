//! # dns-apply-provider
//!
//! Record-set writer library for converging declared DNS records against the
//! [deSEC](https://desec.io/) rrsets API.
//!
//! The library exposes a small capability interface, [`RrsetWriter`], with
//! exactly the two operations the apply procedure needs:
//!
//! - [`RrsetWriter::replace`] — idempotent "set this exact rrset" (`PUT`)
//! - [`RrsetWriter::create`] — collection create, used as fallback (`POST`)
//!
//! ## TLS Backend
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dns_apply_provider::{DesecProvider, RecordType, Rrset, RrsetWriter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let writer = DesecProvider::new("your-token".to_string(), "is-dev.me");
//!
//!     // "alice" CNAME example.com -> normalized to "example.com." with TTL 3600
//!     let rrset = Rrset::new("alice", RecordType::Cname, "example.com");
//!
//!     if let Err(e) = writer.replace(&rrset).await {
//!         // Non-success statuses surface as WriterError::ApiFailure; the
//!         // caller decides whether the create fallback applies.
//!         eprintln!("replace failed: {e}");
//!         writer.create(&[rrset]).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All writer operations return [`Result<T, WriterError>`](WriterError):
//!
//! - [`WriterError::ApiFailure`] — completed exchange, non-success status
//!   (carries the status code and the response body text)
//! - [`WriterError::NetworkError`] / [`WriterError::Timeout`] — transport
//!   failure, no exchange completed
//! - [`WriterError::UnsupportedRecordType`] — record-type validation failure,
//!   raised before any network call

mod error;
mod http_client;
mod providers;
mod traits;
mod types;

// Re-export error types
pub use error::{Result, WriterError};

// Re-export core trait
pub use traits::RrsetWriter;

// Re-export types
pub use types::{normalize_record_value, RecordType, Rrset, DEFAULT_TTL};

// Re-export the concrete writer
pub use providers::DesecProvider;
