use chrono::{DateTime, TimeZone, Utc};

use cadence_analytics::burndown::{BurndownCalculator, BurndownMetric};
use cadence_core::models::{Cycle, CycleStatus, Ticket, TicketStatus};

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()
}

/// 10-day cycle: 2024-03-01 through 2024-03-11.
fn ten_day_cycle() -> Cycle {
    Cycle {
        id: "c1".to_string(),
        name: "Sprint 1".to_string(),
        start_date: day(1),
        end_date: day(11),
        status: CycleStatus::Active,
        capacity: Some(20),
        velocity: None,
    }
}

fn ticket(id: &str, points: u32) -> Ticket {
    Ticket {
        id: id.to_string(),
        status: TicketStatus::Todo,
        story_points: Some(points),
        assigned_to: None,
        cycle: Some("c1".to_string()),
        completed_at: None,
        created_at: day(1),
    }
}

fn done_ticket(id: &str, points: u32, completed: DateTime<Utc>) -> Ticket {
    Ticket {
        status: TicketStatus::Done,
        completed_at: Some(completed),
        ..ticket(id, points)
    }
}

/// 20 points total, 8 completed by day 5.
fn twenty_point_fixture() -> Vec<Ticket> {
    vec![
        done_ticket("t1", 5, day(3)),
        done_ticket("t2", 3, day(5)),
        ticket("t3", 4),
        ticket("t4", 8),
    ]
}

fn refs(tickets: &[Ticket]) -> Vec<&Ticket> {
    tickets.iter().collect()
}

#[test]
fn ideal_and_actual_at_day_five() {
    let tickets = twenty_point_fixture();
    let report = BurndownCalculator::new()
        .calculate(&ten_day_cycle(), &refs(&tickets), BurndownMetric::Points, day(6))
        .unwrap();

    // as_of is 5 days in: ideal has burned half, actuals lag at 12.
    let day5 = &report.points[5];
    assert_eq!(day5.day_index, 5);
    assert_eq!(day5.ideal_remaining, 10.0);
    assert_eq!(day5.actual_remaining, Some(12.0));
}

#[test]
fn series_covers_every_day_in_order() {
    let tickets = twenty_point_fixture();
    let report = BurndownCalculator::new()
        .calculate(&ten_day_cycle(), &refs(&tickets), BurndownMetric::Points, day(6))
        .unwrap();

    assert_eq!(report.points.len(), 11);
    for (i, point) in report.points.iter().enumerate() {
        assert_eq!(point.day_index, i as i64);
        assert_eq!(point.date, day(1) + chrono::Duration::days(i as i64));
    }
}

#[test]
fn future_days_have_no_actuals() {
    let tickets = twenty_point_fixture();
    let report = BurndownCalculator::new()
        .calculate(&ten_day_cycle(), &refs(&tickets), BurndownMetric::Points, day(6))
        .unwrap();

    for point in &report.points {
        if point.date > day(6) {
            assert_eq!(point.actual_remaining, None);
        } else {
            assert!(point.actual_remaining.is_some());
        }
    }
}

#[test]
fn ideal_series_is_monotonically_non_increasing_and_ends_at_zero() {
    let tickets = twenty_point_fixture();
    let report = BurndownCalculator::new()
        .calculate(&ten_day_cycle(), &refs(&tickets), BurndownMetric::Points, day(6))
        .unwrap();

    let ideals: Vec<f64> = report.points.iter().map(|p| p.ideal_remaining).collect();
    for pair in ideals.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
    assert_eq!(*ideals.last().unwrap(), 0.0);
}

#[test]
fn summary_mid_cycle() {
    let tickets = twenty_point_fixture();
    let report = BurndownCalculator::new()
        .calculate(&ten_day_cycle(), &refs(&tickets), BurndownMetric::Points, day(6))
        .unwrap();

    let s = &report.summary;
    assert_eq!(s.total_work, 20.0);
    assert_eq!(s.completed_work, 8.0);
    assert_eq!(s.remaining_work, 12.0);
    assert_eq!(s.percent_complete, 40);
    assert_eq!(s.days_elapsed, 5);
    assert_eq!(s.velocity_per_day, 1.6);
    assert_eq!(s.days_remaining, 5);
    assert_eq!(s.projected_completion, 16.0);
    assert!(!s.on_track);
}

#[test]
fn finished_cycle_reports_ninety_percent() {
    // Cycle ended with 18 of 20 points completed.
    let tickets = vec![
        done_ticket("t1", 5, day(3)),
        done_ticket("t2", 3, day(5)),
        done_ticket("t3", 4, day(8)),
        done_ticket("t4", 6, day(10)),
        ticket("t5", 2),
    ];
    let report = BurndownCalculator::new()
        .calculate(&ten_day_cycle(), &refs(&tickets), BurndownMetric::Points, day(12))
        .unwrap();

    let s = &report.summary;
    assert_eq!(s.percent_complete, 90);
    assert_eq!(s.completed_work, 18.0);
    assert_eq!(s.days_elapsed, 10);
    assert_eq!(s.days_remaining, 0);
    assert_eq!(s.projected_completion, 18.0);
    assert!(!s.on_track);
}

#[test]
fn count_metric_ignores_story_points() {
    let tickets = twenty_point_fixture();
    let report = BurndownCalculator::new()
        .calculate(&ten_day_cycle(), &refs(&tickets), BurndownMetric::Count, day(6))
        .unwrap();

    assert_eq!(report.summary.total_work, 4.0);
    assert_eq!(report.summary.completed_work, 2.0);
    assert_eq!(report.summary.percent_complete, 50);
    // 4 tickets over 10 days: 0.4/day ideal burn.
    assert_eq!(report.points[1].ideal_remaining, 3.6);
}

#[test]
fn no_work_means_zero_percent_and_on_track() {
    let report = BurndownCalculator::new()
        .calculate(&ten_day_cycle(), &[], BurndownMetric::Points, day(6))
        .unwrap();

    let s = &report.summary;
    assert_eq!(s.total_work, 0.0);
    assert_eq!(s.percent_complete, 0);
    assert_eq!(s.velocity_per_day, 0.0);
    assert_eq!(s.projected_completion, 0.0);
    assert!(s.on_track);
    // Series still spans the cycle, flat at zero.
    assert_eq!(report.points.len(), 11);
    assert!(report.points.iter().all(|p| p.ideal_remaining == 0.0));
}

#[test]
fn inverted_dates_are_rejected_before_computation() {
    let cycle = Cycle {
        start_date: day(11),
        end_date: day(1),
        ..ten_day_cycle()
    };
    let err = BurndownCalculator::new()
        .calculate(&cycle, &[], BurndownMetric::Points, day(6))
        .unwrap_err();
    assert!(err.to_string().contains("end_date"));
}

#[test]
fn sub_day_cycles_clamp_to_one_day() {
    let cycle = Cycle {
        start_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2024, 3, 1, 17, 0, 0).unwrap(),
        ..ten_day_cycle()
    };
    let tickets = vec![ticket("t1", 4)];
    let report = BurndownCalculator::new()
        .calculate(&cycle, &refs(&tickets), BurndownMetric::Points, day(2))
        .unwrap();

    // One-day grid: start and start+1d.
    assert_eq!(report.points.len(), 2);
    assert_eq!(report.points[0].ideal_remaining, 4.0);
    assert_eq!(report.points[1].ideal_remaining, 0.0);
    assert_eq!(report.summary.days_elapsed, 1);
}

#[test]
fn done_ticket_without_timestamp_is_not_counted_as_burned() {
    let mut orphan = ticket("t1", 5);
    orphan.status = TicketStatus::Done;
    let tickets = vec![orphan, ticket("t2", 5)];
    let report = BurndownCalculator::new()
        .calculate(&ten_day_cycle(), &refs(&tickets), BurndownMetric::Points, day(6))
        .unwrap();

    assert_eq!(report.summary.completed_work, 0.0);
    assert_eq!(report.points[0].actual_remaining, Some(10.0));
}

#[test]
fn metric_selector_parses_known_values_only() {
    assert_eq!("points".parse::<BurndownMetric>().unwrap(), BurndownMetric::Points);
    assert_eq!("count".parse::<BurndownMetric>().unwrap(), BurndownMetric::Count);
    let err = "hours".parse::<BurndownMetric>().unwrap_err();
    assert!(err.to_string().contains("hours"));
}
