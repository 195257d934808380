//! Platform-agnostic GPS stream assembly and sentence reading.
//!
//! This crate provides the transport-facing half of a GPS/NMEA reader
//! without any platform-specific dependencies. It can be used both in
//! embedded `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! The crate is organized into several modules:
//!
//! - [`source`]: Byte source trait ([`ByteSource`]) and transport errors
//! - [`assembler`]: Stream assembly ([`assemble`], [`AssemblyReport`])
//! - [`reader`]: Orchestrates assembly and extraction ([`SentenceReader`])
//!
//! # Data flow
//!
//! Raw bytes arrive from a [`ByteSource`] in arbitrarily-sized chunks; one
//! assembly pass collects them into a bounded accumulation buffer; field
//! extraction (from [`nmea_proto`], re-exported here) then pulls raw
//! sentence fields out of the assembled snapshot. Producer and consumer run
//! strictly sequentially in a single control flow; the only timing mechanism
//! is the assembler's empty-read budget.
//!
//! # Example
//!
//! ```ignore
//! use gps_core::{gga, SentenceKind, SentenceReader};
//!
//! let mut reader: SentenceReader<_, 512> = SentenceReader::new(uart_source, 8);
//! reader.poll().await;
//! if let Ok(lat) = reader.extract(SentenceKind::Gga, gga::LATITUDE) {
//!     // `lat` is the raw field text, e.g. b"4807.038"
//! }
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod assembler;
pub mod reader;
pub mod source;

#[cfg(test)]
mod test_util;

// Re-export main types at crate root
pub use assembler::{assemble, AssemblyReport, NUL_SUBSTITUTE, READ_CHUNK};
pub use reader::SentenceReader;
pub use source::{ByteSource, SourceError};

// Re-export the sentence registry and extractor for consumers that only
// depend on this crate
pub use nmea_proto::{
    extract_field, extract_field_into, gga, gll, ExtractError, SentenceKind, MAX_SENTENCE_LENGTH,
};
