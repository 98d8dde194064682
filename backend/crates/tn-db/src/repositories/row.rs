//! Column decoding shared by the repositories.

use crate::{DbError, Result as DbErrorResult};

use tn_core::ErrorLocation;

use std::fmt::Display;
use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &str) -> DbErrorResult<Uuid> {
    let caller = Location::caller();
    Uuid::parse_str(value).map_err(|e| decode_error(column, e, caller))
}

#[track_caller]
pub(crate) fn parse_timestamp(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    let caller = Location::caller();
    DateTime::from_timestamp(value, 0)
        .ok_or_else(|| decode_error(column, format!("{} is out of range", value), caller))
}

/// Parse a stored enum spelling (role, plan)
#[track_caller]
pub(crate) fn parse_enum<T>(value: &str, column: &str) -> DbErrorResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let caller = Location::caller();
    T::from_str(value).map_err(|e| decode_error(column, e, caller))
}

fn decode_error(
    column: &str,
    reason: impl Display,
    caller: &'static Location<'static>,
) -> DbError {
    DbError::Decode {
        column: column.to_string(),
        message: reason.to_string(),
        location: ErrorLocation::from(caller),
    }
}
