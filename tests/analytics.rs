mod builder;

use builder::*;
use chainring::{ParseResult, Zone, analytics::Error, avec::decode_slice};

fn ride() -> (Vec<Sample>, ParseResult) {
    let samples = read_samples(RIDE);
    let result = decode_slice(&ride_document(&samples)).unwrap();
    (samples, result)
}

fn mean_heart_rate(samples: &[Sample]) -> f64 {
    let sum: f64 = samples.iter().map(|s| f64::from(s.heart_rate)).sum();
    sum / samples.len() as f64
}

#[test]
fn average() {
    let (samples, result) = ride();

    let (avg, units) = result.avg_for("heart_rate").unwrap();
    assert_close(avg, mean_heart_rate(&samples));
    assert_eq!(units, "bpm");

    let (avg, units) = result.avg_for("power").unwrap();
    let expected = samples.iter().map(|s| f64::from(s.power)).sum::<f64>() / 25.0;
    assert_close(avg, expected);
    assert_eq!(units, "watts");

    assert_eq!(
        result.avg_for("cadence"),
        Err(Error::UnknownField("cadence".into()))
    );
}

#[test]
fn elevation() {
    let (_, result) = ride();

    let (gain, units) = result.elevation_gain("altitude").unwrap();
    assert!((gain - 9.8).abs() < 1e-6, "gain {gain}");
    assert_eq!(units, "m");

    let (enhanced, _) = result.elevation_gain("enhanced_altitude").unwrap();
    assert_close(enhanced, gain);
}

#[test]
fn partition_indices() {
    let (_, result) = ride();

    let cases: [(f64, &[usize]); 4] = [
        (50.0, &[0, 6, 10, 14, 20, 24]),
        (100.0, &[0, 10, 20, 24]),
        (30.0, &[0, 4, 7, 9, 12, 14, 18, 21, 24]),
        (1000.0, &[0, 24]),
    ];

    for (threshold, expected) in cases {
        assert_eq!(
            result.calculate_partition_indices(threshold, "distance").unwrap(),
            expected,
            "threshold {threshold}"
        );
    }

    // Every record passes a multiple.
    assert_eq!(
        result.calculate_partition_indices(5.0, "distance").unwrap(),
        (0..25).collect::<Vec<_>>()
    );
}

#[test]
fn partition_indices_increase() {
    let (_, result) = ride();

    for threshold in [0.5, 7.0, 12.5, 33.3, 245.0] {
        let indices = result.calculate_partition_indices(threshold, "distance").unwrap();
        assert_eq!(indices.first(), Some(&0));
        assert_eq!(indices.last(), Some(&24));
        assert!(indices.windows(2).all(|w| w[0] < w[1]), "threshold {threshold}");
    }
}

#[test]
fn tiny_threshold() {
    let (_, result) = ride();

    assert_eq!(
        result.calculate_partition_indices(1e-18, "distance").unwrap(),
        (0..25).collect::<Vec<_>>()
    );
}

#[test]
fn partition_skips_non_finite_values() {
    let distances = [0.0f32, f32::NAN, 10000.0, 25000.0];
    let mut document = Document::new().definition(0, 20, &[(253, 4, UINT32), (5, 4, FLOAT32)]);
    for (i, distance) in (0u32..).zip(distances) {
        let timestamp = RIDE_START + i;
        document = document.data(
            0,
            &[&timestamp.to_le_bytes()[..], &distance.to_le_bytes()].concat(),
        );
    }
    let result = decode_slice(&document.finish()).unwrap();

    assert!(result.records()[1].number("distance").unwrap().is_nan());
    assert_eq!(
        result.calculate_partition_indices(50.0, "distance").unwrap(),
        [0, 2, 3]
    );
}

#[test]
fn invalid_threshold() {
    let (_, result) = ride();

    for threshold in [0.0, -10.0] {
        assert_eq!(
            result.calculate_partition_indices(threshold, "distance"),
            Err(Error::InvalidThreshold(threshold))
        );
    }
    assert!(matches!(
        result.calculate_partition_indices(f64::NAN, "distance"),
        Err(Error::InvalidThreshold(t)) if t.is_nan()
    ));
    assert!(matches!(
        result.partition_stats_for_fields("distance", 0.0, &["heart_rate"]),
        Err(Error::InvalidThreshold(_))
    ));
}

#[test]
fn partition_stats() {
    let (samples, result) = ride();

    let indices = result.calculate_partition_indices(50.0, "distance").unwrap();
    let stats = result
        .partition_stats_for_fields("distance", 50.0, &["heart_rate", "power"])
        .unwrap();

    assert_eq!(stats.len(), indices.len() - 1);

    for (partition, w) in stats.iter().zip(indices.windows(2)) {
        let [(hr_name, (hr, hr_units)), (power_name, (_, power_units))] = partition.as_slice()
        else {
            panic!("expected two fields");
        };

        assert_eq!(*hr_name, "heart_rate");
        assert_eq!(*hr_units, "bpm");
        assert_eq!(*power_name, "power");
        assert_eq!(*power_units, "watts");
        assert_close(*hr, mean_heart_rate(&samples[w[0]..w[1]]));
    }

    assert_close(stats[0][0].1.0, 661.0 / 6.0);
    assert_close(stats[1][0].1.0, 133.0);

    assert_eq!(
        result.partition_stats_for_fields("distance", 50.0, &["heart_rate", "cadence"]),
        Err(Error::UnknownField("cadence".into()))
    );
}

#[test]
fn zone_time() {
    let (samples, result) = ride();

    let zones = [(0.0, 120.0), (120.0, 140.0), (140.0, 160.0), (160.0, 200.0)].map(Zone::from);
    let times = result.zone_time_for(&zones, "heart_rate").unwrap();

    assert_eq!(
        times,
        [
            (zones[0], 10.0),
            (zones[1], 12.0),
            (zones[2], 28.0),
            (zones[3], 6.0),
        ]
    );

    let total: f64 = times.iter().map(|(_, t)| t).sum();
    let elapsed = samples.last().unwrap().elapsed - samples[0].elapsed;
    assert_eq!(total, f64::from(elapsed));
}

#[test]
fn overlapping_zones() {
    let (_, result) = ride();

    let zones = [Zone::new(100.0, 150.0), Zone::new(0.0, 200.0)];
    let times = result.zone_time_for(&zones, "heart_rate").unwrap();
    assert_eq!(times, [(zones[0], 38.0), (zones[1], 18.0)]);

    // Values outside every zone are not counted.
    let times = result.zone_time_for(&[Zone::new(200.0, 220.0)], "heart_rate").unwrap();
    assert_eq!(times[0].1, 0.0);

    assert!(result.zone_time_for(&[], "heart_rate").unwrap().is_empty());
    assert_eq!(
        result.zone_time_for(&zones, "cadence"),
        Err(Error::UnknownField("cadence".into()))
    );
}

#[test]
fn zone_contains() {
    let zone = Zone::new(120.0, 140.0);
    assert!(zone.contains(120.0));
    assert!(zone.contains(139.9));
    assert!(!zone.contains(140.0));
    assert!(!zone.contains(f64::NAN));
}

#[test]
fn sample_series() {
    let (samples, result) = ride();

    let series = result.sample_series_for_records("heart_rate", 4).unwrap();
    assert_eq!(series.len(), 5);

    let starts = [0, 6, 12, 18, 24];
    for ((timestamp, value), (i, &start)) in series.iter().zip(starts.iter().enumerate()) {
        let end = starts.get(i + 1).copied().unwrap_or(samples.len());
        assert_eq!(*timestamp, Some(samples[start].timestamp()));
        assert_close(*value, mean_heart_rate(&samples[start..end]));
    }

    assert_eq!(result.sample_series_for_records("heart_rate", 5).unwrap().len(), 5);

    let single = result.sample_series_for_records("heart_rate", 1).unwrap();
    assert_eq!(single.len(), 1);
    assert_close(single[0].1, mean_heart_rate(&samples));
}

#[test]
fn sample_series_of_short_stream() {
    let (samples, result) = ride();

    let series = result.sample_series_for_records("heart_rate", 30).unwrap();
    assert_eq!(series.len(), samples.len());
    assert!(
        series
            .iter()
            .zip(&samples)
            .all(|(p, s)| *p == (Some(s.timestamp()), f64::from(s.heart_rate)))
    );
}

#[test]
fn invalid_bucket_count() {
    let (_, result) = ride();

    assert_eq!(
        result.sample_series_for_records("heart_rate", 0),
        Err(Error::InvalidBucketCount)
    );
}

#[test]
fn empty_stream() {
    let document = Document::new()
        .definition(0, 0, &[(0, 1, ENUM)])
        .data(0, &[4])
        .finish();
    let result = decode_slice(&document).unwrap();

    assert_eq!(
        result.avg_for("heart_rate"),
        Err(Error::UnknownField("heart_rate".into()))
    );
    assert_eq!(
        result.calculate_partition_indices(10.0, "distance"),
        Err(Error::UnknownField("distance".into()))
    );
    assert!(result.sample_series_for_records("heart_rate", 4).unwrap().is_empty());
}
