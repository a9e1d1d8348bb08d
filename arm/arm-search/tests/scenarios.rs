//! End-to-end scenarios for the default 72 in / 3 segment / 12 in search.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]

use approx::assert_relative_eq;
use arm_search::partition::find_partitions;
use arm_search::permute::permutations;
use arm_search::ArmSearch;
use arm_types::{Arm, Massive, SearchConfig};

fn default_report() -> arm_search::SearchReport {
    ArmSearch::new(
        SearchConfig::default()
            .with_segments(3)
            .with_total_length(72)
            .with_min_length(12),
    )
    .run()
}

#[test]
fn orderings_of_one_partition_share_mass_and_length() {
    let config = SearchConfig::default();
    let arms: Vec<Arm> = permutations(&[12.0, 24.0, 36.0])
        .map(|lengths| Arm::from_config(&lengths, &config))
        .collect();

    assert_eq!(arms.len(), 6);
    for arm in &arms {
        assert_relative_eq!(arm.mass(), arms[0].mass(), epsilon = 1e-9);
        assert_relative_eq!(arm.length(), 80.0, epsilon = 1e-12);
    }

    // Order moves the center of mass. Segment mass is linear in length, so
    // with evenly spaced lengths some orderings coincide; the two reversed
    // orderings bound the rest.
    let centers: Vec<f64> = arms.iter().map(Massive::center_of_mass).collect();
    let low = centers[0];
    let high = centers[5];
    assert!(low < high);
    for center in &centers {
        assert!(*center >= low - 1e-9 && *center <= high + 1e-9);
    }
}

#[test]
fn equal_split_is_never_generated() {
    let domain: Vec<u32> = SearchConfig::default().domain().collect();
    let partitions = find_partitions(&domain, 72, 3);
    assert!(!partitions.contains(&vec![24, 24, 24]));

    assert!(default_report().symmetric().is_none());
}

#[test]
fn best_and_worst_bound_every_arm() {
    let report = default_report();
    let best = report.best().unwrap().torque_at_base();
    let worst = report.worst().unwrap().torque_at_base();

    for arm in report.arms() {
        assert!(best <= arm.torque_at_base());
        assert!(arm.torque_at_base() <= worst);
    }
}

#[test]
fn every_arm_is_a_valid_configuration() {
    let report = default_report();

    for arm in report.arms() {
        let lengths = arm.segment_lengths();
        assert_eq!(lengths.len(), 3);
        assert_relative_eq!(lengths.iter().sum::<f64>(), 72.0);
        assert!(lengths.iter().all(|&l| (12.0..=48.0).contains(&l)));
        assert_eq!(arm.components().last().unwrap().kind(), "end effector");
        assert!(arm.center_of_mass() > 0.0 && arm.center_of_mass() < arm.length());
    }
}

#[test]
fn symmetric_lookup_depends_on_segment_count() {
    // With two segments 24 + 24 cannot appear either; a single segment can.
    let report = ArmSearch::new(
        SearchConfig::default()
            .with_segments(2)
            .with_total_length(48),
    )
    .run();
    assert!(!report.is_empty());
    assert!(report.symmetric().is_none());

    let report = ArmSearch::new(SearchConfig::default().with_segments(1)).run();
    let symmetric = report.symmetric().unwrap();
    assert_eq!(symmetric.segment_lengths(), vec![72.0]);
}

#[test]
fn percent_difference_matches_extremes() {
    let report = default_report();
    let best = report.best().unwrap().torque_at_base();
    let worst = report.worst().unwrap().torque_at_base();

    let expected = (worst - best) / ((worst + best) / 2.0) * 100.0;
    assert_relative_eq!(report.percent_difference().unwrap(), expected);
}
