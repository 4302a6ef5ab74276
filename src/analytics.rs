//! Statistics over the telemetry stream of a decoded document.
//!
//! Every operation reads a named field across the records of kind `record`,
//! in document order. Text, label and array values are treated as absent.

use alloc::{string::String, vec, vec::Vec};

use thiserror::Error;

use crate::{avec::ParseResult, record::Record};

/// Kind of the continuous telemetry stream.
const TELEMETRY: &str = "record";

/// An error computing a statistic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// No telemetry record carries a numeric value for the field.
    #[error("No record carries the field `{0}`.")]
    UnknownField(String),
    /// Partitions require a positive threshold.
    #[error("Partition threshold must be positive ({0}).")]
    InvalidThreshold(f64),
    /// Series require at least one bucket.
    #[error("Sampling requires at least one bucket.")]
    InvalidBucketCount,
}

/// A half-open interval `[low, high)` of field values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub low: f64,
    pub high: f64,
}

impl Zone {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.low <= value && value < self.high
    }
}

impl From<(f64, f64)> for Zone {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

impl ParseResult {
    fn telemetry(&self) -> Vec<&Record> {
        self.records_of(TELEMETRY).collect()
    }

    /// Mean of a field across the telemetry stream, with its units.
    pub fn avg_for(&self, field: &str) -> Result<(f64, &str), Error> {
        let records = self.telemetry();
        let units = units(&records, field)?;

        Ok((mean(&records, field).unwrap_or(0.0), units))
    }

    /// Range between the highest and lowest values of a field, with its units.
    ///
    /// For an altitude field this is the peak elevation range of the activity,
    /// not the sum of climbs.
    pub fn elevation_gain(&self, field: &str) -> Result<(f64, &str), Error> {
        let records = self.telemetry();
        let units = units(&records, field)?;

        let (min, max) = records
            .iter()
            .filter_map(|r| r.number(field))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), x| {
                (min.min(x), max.max(x))
            });

        Ok((max - min, units))
    }

    /// Indices of the telemetry records at which a cumulative field passes
    /// each multiple of `threshold`.
    ///
    /// The result begins with the first index and ends with the last, so `n`
    /// partitions are delimited by `n + 1` indices.
    pub fn calculate_partition_indices(
        &self,
        threshold: f64,
        field: &str,
    ) -> Result<Vec<usize>, Error> {
        let records = self.telemetry();
        partition_indices(&records, threshold, field)
    }

    /// Means of `fields` within each partition of the telemetry stream.
    ///
    /// Partitions are delimited as by
    /// [`calculate_partition_indices`](Self::calculate_partition_indices),
    /// each spanning from its first index up to, but excluding, the next. A
    /// field with no values within a partition reports a mean of zero.
    pub fn partition_stats_for_fields<'a>(
        &'a self,
        field: &str,
        threshold: f64,
        fields: &[&'a str],
    ) -> Result<Vec<Vec<(&'a str, (f64, &'a str))>>, Error> {
        let records = self.telemetry();
        let indices = partition_indices(&records, threshold, field)?;

        let units = fields
            .iter()
            .map(|f| units(&records, f))
            .collect::<Result<Vec<_>, _>>()?;

        let stats = indices
            .windows(2)
            .map(|w| {
                let partition = &records[w[0]..w[1]];
                fields
                    .iter()
                    .zip(&units)
                    .map(|(f, u)| (*f, (mean(partition, f).unwrap_or(0.0), *u)))
                    .collect()
            })
            .collect();

        Ok(stats)
    }

    /// Seconds spent in each zone of a field.
    ///
    /// Each interval between consecutive telemetry records counts toward the
    /// first zone containing the value at its start. Intervals whose start
    /// lacks the field, or whose time runs backward, are not counted.
    pub fn zone_time_for(&self, zones: &[Zone], field: &str) -> Result<Vec<(Zone, f64)>, Error> {
        let records = self.telemetry();
        units(&records, field)?;

        let mut totals = vec![0.0; zones.len()];

        for pair in records.windows(2) {
            let (Some(start), Some(end), Some(value)) =
                (pair[0].timestamp, pair[1].timestamp, pair[0].number(field))
            else {
                continue;
            };

            if end < start {
                continue;
            }

            if let Some(i) = zones.iter().position(|z| z.contains(value)) {
                totals[i] += (end - start) as f64;
            }
        }

        Ok(zones.iter().copied().zip(totals).collect())
    }

    /// Resample a field into `bucket_count` runs of consecutive telemetry
    /// records.
    ///
    /// Each point pairs the timestamp of the first record in a bucket with the
    /// mean of the field over the bucket (zero if no record in the bucket
    /// carries it). Buckets hold `len / bucket_count` records; any remainder
    /// forms one additional, shorter bucket at the end. A stream shorter than
    /// `bucket_count` yields one point per record.
    pub fn sample_series_for_records(
        &self,
        field: &str,
        bucket_count: usize,
    ) -> Result<Vec<(Option<i64>, f64)>, Error> {
        if bucket_count == 0 {
            Err(Error::InvalidBucketCount)?;
        }

        let records = self.telemetry();

        let width = (records.len() / bucket_count).max(1);
        let full = bucket_count.saturating_mul(width).min(records.len());

        let point = |bucket: &[&Record]| {
            (
                bucket[0].timestamp,
                mean(bucket, field).unwrap_or(0.0),
            )
        };

        let mut series: Vec<_> = records[..full].chunks(width).map(point).collect();
        if full < records.len() {
            series.push(point(&records[full..]));
        }

        Ok(series)
    }
}

/// Units of a field, from the first record carrying it.
fn units<'a>(records: &[&'a Record], field: &str) -> Result<&'a str, Error> {
    records
        .iter()
        .filter_map(|r| r.field(field))
        .find(|f| f.value.as_f64().is_some())
        .map(|f| f.units())
        .ok_or_else(|| Error::UnknownField(field.into()))
}

fn mean(records: &[&Record], field: &str) -> Option<f64> {
    let (sum, count) = records
        .iter()
        .filter_map(|r| r.number(field))
        .fold((0.0, 0usize), |(sum, count), x| (sum + x, count + 1));

    (count != 0).then(|| sum / count as f64)
}

fn partition_indices(records: &[&Record], threshold: f64, field: &str) -> Result<Vec<usize>, Error> {
    if threshold.is_nan() || threshold <= 0.0 {
        Err(Error::InvalidThreshold(threshold))?;
    }

    units(records, field)?;

    let mut indices = vec![0];
    let mut next = 1.0; // Multiple of the threshold to be passed next.

    for (i, value) in records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| Some((i, r.number(field)?)))
        .filter(|(_, value)| value.is_finite())
    {
        if value < next * threshold {
            continue;
        }

        if i != 0 {
            indices.push(i);
        }

        let passed = value / threshold;
        next = f64::max(next + 1.0, passed - passed % 1.0 + 1.0);
    }

    let last = records.len() - 1;
    if indices.last() != Some(&last) {
        indices.push(last);
    }

    Ok(indices)
}
