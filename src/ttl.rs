//! Time-to-live (TTL) index support.
//!
//! A TTL index makes the store delete documents autonomously once their
//! creation timestamp exceeds a configured age. This module holds the
//! duration arithmetic and the descriptor-matching logic used to keep TTL
//! configuration idempotent; the index itself is created through
//! [`ObjectRepository::configure_auto_expiry`](crate::repository::ObjectRepository::configure_auto_expiry).

use std::time::Duration;

use mongodb::IndexModel;

use crate::errors::{ErrorKind, MangroveError, MangroveResult};

/// Tolerance when comparing an existing index's expiry against the
/// requested one. Differences under a second count as equivalent.
pub const EXPIRY_TOLERANCE: Duration = Duration::from_secs(1);

/// Units for expressing a TTL duration.
///
/// Month and year are calendar-naive by design: a month is fixed at 30
/// days and a year at 365, keeping the duration computation pure and
/// store-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Day,
    Week,
    /// Fixed at 30 days.
    Month,
    /// Fixed at 365 days.
    Year,
}

impl TimeUnit {
    /// Returns the number of seconds in one unit.
    pub fn seconds(&self) -> u64 {
        match self {
            TimeUnit::Second => 1,
            TimeUnit::Minute => 60,
            TimeUnit::Day => 86_400,
            TimeUnit::Week => 7 * 86_400,
            TimeUnit::Month => 30 * 86_400,
            TimeUnit::Year => 365 * 86_400,
        }
    }
}

/// Computes the expiry duration for a TTL configuration.
///
/// # Arguments
///
/// * `amount` - Magnitude of the duration; must be positive
/// * `unit` - Unit of the duration
///
/// # Errors
///
/// Returns `InvalidArgument` if `amount` is zero or negative.
pub fn expire_after(amount: i64, unit: TimeUnit) -> MangroveResult<Duration> {
    if amount <= 0 {
        return Err(MangroveError::new(
            &format!("TTL amount must be positive, got {}", amount),
            ErrorKind::InvalidArgument,
        ));
    }
    Ok(Duration::from_secs(amount as u64 * unit.seconds()))
}

/// Returns the well-known name of the TTL index on the given field.
///
/// At most one index with this name should exist per collection.
pub fn ttl_index_name(field: &str) -> String {
    format!("TTL_{}", field)
}

/// Checks whether an existing index is an equivalent TTL configuration.
///
/// An index matches when it is keyed on exactly the given field, carries
/// the well-known TTL index name, and its expiry differs from the
/// requested one by less than [`EXPIRY_TOLERANCE`].
pub fn matches_ttl_index(model: &IndexModel, field: &str, expire_after: Duration) -> bool {
    let Some(options) = model.options.as_ref() else {
        return false;
    };

    let expected_name = ttl_index_name(field);
    if options.name.as_deref() != Some(expected_name.as_str()) {
        return false;
    }

    if model.keys.len() != 1 || !model.keys.contains_key(field) {
        return false;
    }

    match options.expire_after {
        Some(existing) => {
            let diff = (existing.as_secs_f64() - expire_after.as_secs_f64()).abs();
            diff < EXPIRY_TOLERANCE.as_secs_f64()
        }
        None => false,
    }
}
