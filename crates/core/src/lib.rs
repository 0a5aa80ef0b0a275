//! Core library for numclass
//!
//! This crate implements the **Functional Core** of the numclass application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The numclass project uses a two-crate architecture to enforce separation of
//! concerns:
//!
//! - **`numclass_core`** (this crate): Pure classification functions with zero I/O
//! - **`numclass`**: I/O operations and orchestration (the Imperative Shell)
//!
//! All functions in this crate are pure: same input, same output, no side
//! effects, no network, no clock. The HTTP server and the CLI both call into
//! [`classify`] after doing their own I/O (query extraction, fact lookup), so
//! the engine can be tested exhaustively with fixture values and no mocking.
//!
//! # Example Usage
//!
//! ```rust
//! use numclass_core::classify::{classify, parse_number};
//!
//! let n = parse_number("153").unwrap();
//! let result = classify(n, "153 is a narcissistic number.".to_string());
//!
//! assert!(!result.is_prime);
//! assert_eq!(result.properties, vec!["odd", "armstrong"]);
//! assert_eq!(result.digit_sum, 9);
//! ```

pub mod classify;
