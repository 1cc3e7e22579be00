// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lapse-core: timestamp resolution and duration computation.
//!
//! This crate provides the format parsers, field resolution, interval
//! calculation and the duration filter used by the lapse CLI. It performs no
//! I/O; events and configuration are supplied by the caller.

pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod format;
pub mod interval;
mod iso8601;
mod pattern;
pub mod resolve;

pub use config::{FilterConfig, DEFAULT_FIELD_NAME};
pub use error::{Error, Result};
pub use event::{Event, RawValue};
pub use filter::{DurationFilter, FilterOutcome};
pub use format::{parse_time_zone, FormatToken, TimestampParser, TAI64N_LEAP_OFFSET_MS};
pub use interval::{DurationResult, DurationValue, TimeUnit};
pub use resolve::{FieldBinding, ParseOutcome};
