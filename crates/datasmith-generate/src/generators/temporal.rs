use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use rand::{Rng, RngCore};

use datasmith_core::Bound;

use crate::errors::GenerateError;
use crate::generators::{Constraints, Generator, GeneratorRegistry};
use crate::kind::FieldKind;
use crate::value::CellValue;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(super) fn register(registry: &mut GeneratorRegistry) {
    registry.register(Box::new(DateGenerator));
    registry.register(Box::new(TimeGenerator));
    registry.register(Box::new(TimestampGenerator));
}

/// Uniform calendar date between the bounds, defaulting to the epoch
/// through today.
struct DateGenerator;

impl Generator for DateGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Date
    }

    fn generate(
        &self,
        constraints: &Constraints<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError> {
        let start = date_bound("min_value", constraints.min_value)?
            .unwrap_or(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default());
        let end = date_bound("max_value", constraints.max_value)?
            .unwrap_or_else(|| Utc::now().date_naive());
        if start > end {
            return Err(GenerateError::InvalidConstraint(format!(
                "min_value {start} is after max_value {end}"
            )));
        }
        let span = (end - start).num_days();
        let offset = rng.random_range(0..=span);
        Ok(CellValue::Date(start + Duration::days(offset)))
    }
}

/// Unconstrained time of day.
struct TimeGenerator;

impl Generator for TimeGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Time
    }

    fn generate(
        &self,
        _constraints: &Constraints<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError> {
        let seconds = rng.random_range(0..86400_u32);
        let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0).unwrap_or_default();
        Ok(CellValue::Time(time))
    }
}

/// Uniform datetime at second granularity, defaulting to roughly thirty
/// years back through now.
struct TimestampGenerator;

impl Generator for TimestampGenerator {
    fn kind(&self) -> FieldKind {
        FieldKind::Timestamp
    }

    fn generate(
        &self,
        constraints: &Constraints<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<CellValue, GenerateError> {
        let now = Utc::now()
            .naive_utc()
            .with_nanosecond(0)
            .unwrap_or_default();
        let start = timestamp_bound("min_value", constraints.min_value)?
            .unwrap_or(now - Duration::days(30 * 365));
        let end = timestamp_bound("max_value", constraints.max_value)?.unwrap_or(now);
        if start > end {
            return Err(GenerateError::InvalidConstraint(format!(
                "min_value {start} is after max_value {end}"
            )));
        }
        let span = (end - start).num_seconds();
        let offset = rng.random_range(0..=span);
        Ok(CellValue::Timestamp(start + Duration::seconds(offset)))
    }
}

fn date_bound(key: &str, bound: Option<&Bound>) -> Result<Option<NaiveDate>, GenerateError> {
    match bound {
        None => Ok(None),
        Some(Bound::Text(text)) => NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Some)
            .map_err(|err| {
                GenerateError::InvalidConstraint(format!(
                    "{key} '{text}' is not a '{DATE_FORMAT}' date: {err}"
                ))
            }),
        Some(Bound::Int(value)) => Err(GenerateError::InvalidConstraint(format!(
            "{key} must be a '{DATE_FORMAT}' string, got {value}"
        ))),
    }
}

fn timestamp_bound(
    key: &str,
    bound: Option<&Bound>,
) -> Result<Option<NaiveDateTime>, GenerateError> {
    match bound {
        None => Ok(None),
        Some(Bound::Text(text)) => NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
            .map(Some)
            .map_err(|err| {
                GenerateError::InvalidConstraint(format!(
                    "{key} '{text}' is not a '{TIMESTAMP_FORMAT}' timestamp: {err}"
                ))
            }),
        Some(Bound::Int(value)) => Err(GenerateError::InvalidConstraint(format!(
            "{key} must be a '{TIMESTAMP_FORMAT}' string, got {value}"
        ))),
    }
}
