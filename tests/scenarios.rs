//! Integration tests for the concrete scheduling scenarios (S1-S6) that
//! exercise the public `TimetableBuilder` facade end-to-end.

use timetable_engine::{ConsecutivenessMode, SolveStrategy, SolverConfig, TimetableBuilder};

#[test]
fn s1_trivial_feasible_instance_is_fully_assigned() {
    let mut b = TimetableBuilder::new();
    b.add_time_slot(1, 1, 8, 0, 9, 0).unwrap();
    b.add_professor(1, "P1", &[1], &["MATH".to_string()]).unwrap();
    b.add_course(1, "Calculus", "MATH", 15, 1, true).unwrap();
    b.add_group(1, 1, &[1]).unwrap();

    let report = b.solve(5.0).unwrap();
    assert!(report.any_assigned());
    assert!(report.is_complete());

    let solution = b.get_solution();
    assert_eq!(solution.len(), 1);
    assert_eq!(solution[0].group_id.get(), 1);
    assert_eq!(solution[0].course_id.get(), 1);
    assert_eq!(solution[0].professor_id.map(|p| p.get()), Some(1));
    assert_eq!(solution[0].slot_id.get(), 1);
}

#[test]
fn s2_professor_with_no_availability_leaves_everything_unassigned() {
    let mut b = TimetableBuilder::new();
    b.add_time_slot(1, 1, 8, 0, 9, 0).unwrap();
    b.add_professor(1, "P1", &[], &["MATH".to_string()]).unwrap();
    b.add_course(1, "Calculus", "MATH", 15, 1, true).unwrap();
    b.add_group(1, 1, &[1]).unwrap();

    let report = b.solve(5.0).unwrap();
    assert!(!report.any_assigned());
    assert_eq!(report.assigned_sessions, 0);
    assert!(b.get_solution().is_empty());
}

#[test]
fn s3_diversity_forbids_a_second_course_same_day_in_strict_mode() {
    let mut b = TimetableBuilder::new();
    b.add_time_slot(1, 1, 8, 0, 9, 0).unwrap();
    b.add_time_slot(2, 1, 9, 0, 10, 0).unwrap();
    b.add_professor(1, "P1", &[1, 2], &["MATH".to_string(), "PHYS".to_string()])
        .unwrap();
    b.add_course(1, "Calculus", "MATH", 15, 1, true).unwrap();
    b.add_course(2, "Mechanics", "PHYS", 15, 1, true).unwrap();
    b.add_group(1, 1, &[1, 2]).unwrap();

    // Emergency tiers disabled: tier 3 drops diversity enforcement, so
    // leaving them on would let the sole professor pick up both courses
    // (see the next test) and mask the behavior this one isolates.
    let config = SolverConfig {
        allow_emergency_tiers: false,
        ..SolverConfig::default()
    };
    let mut b = b.with_config(config);
    let report = b.solve(5.0).unwrap();
    // Diversity (I5) blocks a second distinct course for the same
    // (professor, group) pair in strict/relaxed tiers, so exactly one of
    // the two single-session courses gets placed, never both.
    assert_eq!(report.assigned_sessions, 1);
    assert_eq!(b.get_solution().len(), 1);
}

#[test]
fn s3_diversity_trap_resolves_both_courses_once_emergency_tiers_drop_it() {
    let mut b = TimetableBuilder::new();
    b.add_time_slot(1, 1, 8, 0, 9, 0).unwrap();
    b.add_time_slot(2, 1, 9, 0, 10, 0).unwrap();
    b.add_professor(1, "P1", &[1, 2], &["MATH".to_string(), "PHYS".to_string()])
        .unwrap();
    b.add_course(1, "Calculus", "MATH", 15, 1, true).unwrap();
    b.add_course(2, "Mechanics", "PHYS", 15, 1, true).unwrap();
    b.add_group(1, 1, &[1, 2]).unwrap();

    let mut config = SolverConfig::default();
    config.allow_emergency_tiers = true;
    let mut b = b.with_config(config);
    let report = b.solve(5.0).unwrap();
    assert!(report.any_assigned());
    assert!(report.is_complete());
    assert_eq!(b.get_solution().len(), 2);
}

#[test]
fn s4_per_day_quota_caps_strict_tier_at_two_then_tier_two_rescues_the_third() {
    let mut b = TimetableBuilder::new();
    b.add_time_slot(1, 1, 8, 0, 9, 0).unwrap();
    b.add_time_slot(2, 1, 9, 0, 10, 0).unwrap();
    b.add_time_slot(3, 1, 10, 0, 11, 0).unwrap();
    b.add_professor(1, "P1", &[1, 2, 3], &["MATH".to_string()]).unwrap();
    // 45 credits -> 3 weekly sessions.
    b.add_course(1, "Calculus", "MATH", 45, 1, true).unwrap();
    b.add_group(1, 1, &[1]).unwrap();

    let report = b.solve(5.0).unwrap();
    assert_eq!(report.total_sessions, 3);
    // The §4.7 tier table enforces the per-day quota (I6) in tier 1 only
    // for the third same-day session; tier 2 ("relaxed") explicitly does
    // not enforce it and is gated solely by session_number > 1, not by
    // `allow_emergency_tiers` (tier 2 isn't an emergency tier). So with
    // default config, sessions 1-2 land in the strict tier and the quota
    // blocks the third there, but tier 2 rescues it onto the day's third
    // slot.
    assert_eq!(report.assigned_sessions, 3);
    assert_eq!(report.tiers.strict, 2);
    assert_eq!(report.tiers.relaxed_quota, 1);
}

#[test]
fn s5_cohesion_keeps_both_sessions_of_a_course_with_the_same_professor() {
    let mut b = TimetableBuilder::new();
    b.add_time_slot(1, 1, 8, 0, 9, 0).unwrap();
    b.add_time_slot(2, 2, 8, 0, 9, 0).unwrap();
    b.add_professor(1, "P1", &[1, 2], &["MATH".to_string()]).unwrap();
    b.add_professor(2, "P2", &[1, 2], &["MATH".to_string()]).unwrap();
    // 30 credits -> 2 weekly sessions.
    b.add_course(1, "Calculus", "MATH", 30, 1, true).unwrap();
    b.add_group(1, 1, &[1]).unwrap();

    let report = b.solve(5.0).unwrap();
    assert!(report.any_assigned());
    assert!(report.is_complete());
    let solution = b.get_solution();
    assert_eq!(solution.len(), 2);
    let professors: Vec<_> = solution.iter().map(|a| a.professor_id).collect();
    assert_eq!(professors[0], professors[1]);
    assert_eq!(professors[0].map(|p| p.get()), Some(1));
}

#[test]
fn s6_a_near_zero_deadline_returns_promptly_with_no_error() {
    let mut b = TimetableBuilder::new();
    for slot in 1..=20u32 {
        let day = ((slot - 1) % 5 + 1) as u8;
        b.add_time_slot(slot, day, 8, 0, 9, 0).unwrap();
    }
    for p in 1..=10u32 {
        let slots: Vec<u32> = (1..=20).collect();
        b.add_professor(p, format!("P{p}"), &slots, &["MATH".to_string()])
            .unwrap();
    }
    b.add_course(1, "Calculus", "MATH", 15, 1, true).unwrap();
    for g in 1..=30u32 {
        b.add_group(g, 1, &[1]).unwrap();
    }

    let mut config = SolverConfig::default();
    config.strategy = SolveStrategy::Backtracking;
    let mut b = b.with_config(config);

    // A deadline so small that the backtracking search cannot possibly
    // complete; solve() must still return cleanly.
    let report = b.solve(0.001).unwrap();
    assert!(report.assigned_sessions <= report.total_sessions);
}

#[test]
fn strict_adjacent_mode_is_selectable_via_config() {
    let mut b = TimetableBuilder::new();
    b.add_time_slot(1, 1, 8, 0, 9, 0).unwrap();
    b.add_time_slot(2, 1, 9, 0, 10, 0).unwrap();
    b.add_professor(1, "P1", &[1, 2], &["MATH".to_string()]).unwrap();
    b.add_course(1, "Calculus", "MATH", 30, 1, true).unwrap();
    b.add_group(1, 1, &[1]).unwrap();

    let mut config = SolverConfig::default();
    config.consecutiveness = ConsecutivenessMode::StrictAdjacent;
    let mut b = b.with_config(config);
    let report = b.solve(5.0).unwrap();
    assert!(report.any_assigned());
    assert!(report.is_complete());
}
