use jiff::civil::{date, time};

use super::*;

fn task(id: i64, d: jiff::civil::Date, start: Time, cost: &str) -> Task {
    Task {
        id: Some(id),
        title: format!("Task {id}"),
        date: d,
        start_time: start,
        end_time: time(23, 59, 0, 0),
        duration: "0h 0m".to_string(),
        cost: cost.to_string(),
    }
}

fn paris_plan() -> Plan {
    Plan {
        id: Some(1),
        title: "Paris".to_string(),
        start_date: date(2024, 6, 1),
        end_date: date(2024, 6, 3),
        image_url: None,
        tasks: Vec::new(),
    }
}

#[test]
fn test_sort_tasks_orders_by_date_then_start_time() {
    let tasks = vec![
        task(1, date(2024, 6, 2), time(9, 0, 0, 0), ""),
        task(2, date(2024, 6, 1), time(15, 30, 0, 0), ""),
        task(3, date(2024, 6, 1), time(8, 45, 0, 0), ""),
    ];

    let sorted = sort_tasks(tasks);
    let ids: Vec<_> = sorted.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![Some(3), Some(2), Some(1)]);
}

#[test]
fn test_sort_tasks_is_idempotent() {
    let tasks = vec![
        task(1, date(2024, 6, 3), time(12, 0, 0, 0), ""),
        task(2, date(2024, 6, 1), time(9, 0, 0, 0), ""),
        task(3, date(2024, 6, 2), time(18, 15, 0, 0), ""),
    ];

    let once = sort_tasks(tasks);
    let twice = sort_tasks(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_sort_tasks_preserves_insertion_order_on_ties() {
    let first = task(10, date(2024, 6, 1), time(9, 0, 0, 0), "");
    let second = task(20, date(2024, 6, 1), time(9, 0, 0, 0), "");

    let sorted = sort_tasks(vec![first.clone(), second.clone()]);
    assert_eq!(sorted, vec![first, second]);
}

#[test]
fn test_derive_duration_ninety_minutes() {
    assert_eq!(derive_duration(time(9, 0, 0, 0), time(10, 30, 0, 0)), "1h 30m");
}

#[test]
fn test_derive_duration_whole_hours() {
    assert_eq!(derive_duration(time(8, 0, 0, 0), time(11, 0, 0, 0)), "3h 0m");
}

#[test]
fn test_derive_duration_under_an_hour() {
    assert_eq!(derive_duration(time(14, 10, 0, 0), time(14, 55, 0, 0)), "0h 45m");
}

#[test]
fn test_normalize_cost_blank_becomes_zero() {
    assert_eq!(normalize_cost(""), "0");
    assert_eq!(normalize_cost("   "), "0");
}

#[test]
fn test_normalize_cost_passes_through_other_input() {
    assert_eq!(normalize_cost("12.50"), "12.50");
    // Malformed input is not rejected here; it parses as zero later.
    assert_eq!(normalize_cost("abc"), "abc");
}

#[test]
fn test_compute_budget_treats_empty_cost_as_zero() {
    let tasks = vec![
        task(1, date(2024, 6, 1), time(9, 0, 0, 0), "10.50"),
        task(2, date(2024, 6, 1), time(10, 0, 0, 0), ""),
        task(3, date(2024, 6, 2), time(9, 0, 0, 0), "5"),
    ];

    let budget = compute_budget(&tasks);
    assert!((budget - 15.50).abs() < f64::EPSILON);
}

#[test]
fn test_compute_budget_ignores_unparsable_costs() {
    let tasks = vec![
        task(1, date(2024, 6, 1), time(9, 0, 0, 0), "not a number"),
        task(2, date(2024, 6, 1), time(10, 0, 0, 0), "7"),
    ];

    assert!((compute_budget(&tasks) - 7.0).abs() < f64::EPSILON);
}

#[test]
fn test_validate_rejects_empty_title() {
    let plan = paris_plan();
    let params = TaskCreate {
        plan_id: 1,
        title: "  ".to_string(),
        date: date(2024, 6, 2),
        start_time: time(9, 0, 0, 0),
        end_time: time(10, 0, 0, 0),
        cost: String::new(),
    };

    let err = validate_new_task(&plan, &params).unwrap_err();
    assert!(matches!(err, PlannerError::Validation { ref field, .. } if field == "title"));
}

#[test]
fn test_validate_rejects_date_after_trip_end() {
    let plan = paris_plan();
    let params = TaskCreate {
        plan_id: 1,
        title: "Late dinner".to_string(),
        date: date(2024, 6, 4),
        start_time: time(19, 0, 0, 0),
        end_time: time(21, 0, 0, 0),
        cost: String::new(),
    };

    let err = validate_new_task(&plan, &params).unwrap_err();
    assert!(matches!(err, PlannerError::Validation { ref field, .. } if field == "date"));
}

#[test]
fn test_validate_accepts_last_day_late_evening() {
    // The whole last day is inside the window, even at 23:59.
    let plan = paris_plan();
    let params = TaskCreate {
        plan_id: 1,
        title: "Midnight stroll".to_string(),
        date: date(2024, 6, 3),
        start_time: time(23, 0, 0, 0),
        end_time: time(23, 59, 0, 0),
        cost: String::new(),
    };

    assert!(validate_new_task(&plan, &params).is_ok());
}

#[test]
fn test_validate_rejects_end_time_not_after_start() {
    let plan = paris_plan();
    let mut params = TaskCreate {
        plan_id: 1,
        title: "Museum".to_string(),
        date: date(2024, 6, 2),
        start_time: time(10, 0, 0, 0),
        end_time: time(10, 0, 0, 0),
        cost: String::new(),
    };

    let err = validate_new_task(&plan, &params).unwrap_err();
    assert!(matches!(err, PlannerError::Validation { ref field, .. } if field == "end_time"));

    params.end_time = time(9, 0, 0, 0);
    assert!(validate_new_task(&plan, &params).is_err());
}

#[test]
fn test_group_by_date_emits_boundary_per_date_change() {
    let tasks = sort_tasks(vec![
        task(1, date(2024, 6, 1), time(9, 0, 0, 0), ""),
        task(2, date(2024, 6, 1), time(14, 0, 0, 0), ""),
        task(3, date(2024, 6, 3), time(10, 0, 0, 0), ""),
    ]);

    let groups = group_by_date(&tasks);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, date(2024, 6, 1));
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].0, date(2024, 6, 3));
    assert_eq!(groups[1].1.len(), 1);
}

#[test]
fn test_group_by_date_empty_input() {
    assert!(group_by_date(&[]).is_empty());
}
