//! # orderwire
//!
//! Binary wire codec for order-service records:
//! - Varint and tag/wire-type framing
//! - Omit-default encoding with exact size precomputation
//! - Recursive nested records and repeated fields
//! - Forward-compatible preservation of unknown fields
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Collaborators (handlers, transports)            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  typed records / byte buffers
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Message Codec                             │
//! │      encode · encoded_len · decode (static schema tables)    │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Scalar    │          │   Unknown   │
//!   │   Fields    │          │   Skipper   │
//!   └──────┬──────┘          └──────┬──────┘
//!          └────────────┬───────────┘
//!                       ▼
//!               ┌───────────────┐
//!               │ Tag · Varint  │
//!               └───────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use orderwire::order::Order;
//! use orderwire::Message;
//!
//! let order = Order::new("o1", "b1");
//! let bytes = order.encode_to_vec();
//! assert_eq!(bytes.len(), order.encoded_len());
//! assert_eq!(Order::decode(&bytes).unwrap(), order);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod wire;
pub mod message;
pub mod order;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DecodeError, EncodeError, OrderWireError, Result};
pub use config::{Config, DecodeOptions, UnknownFieldPolicy};
pub use message::{decode, decode_with, encode, encoded_len, Message, UnknownFields};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of orderwire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
