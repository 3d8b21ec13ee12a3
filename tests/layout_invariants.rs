//! Randomized invariants of the layout pipeline.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use u_timetable::layout::{compute_time_layout, LaidOutLesson, TimetableLayout};
use u_timetable::models::{format_minutes, time_to_minutes, LessonItem, PeriodSchedule};

fn random_lessons(rng: &mut StdRng, count: usize) -> Vec<LessonItem> {
    (0..count)
        .map(|i| {
            let id = format!("L{i}");
            let day = rng.random_range(0..=8);
            match rng.random_range(0..10) {
                // explicit times, sometimes zero-length
                0..=5 => {
                    let start = rng.random_range(7 * 60..21 * 60);
                    let length = rng.random_range(0..=120);
                    LessonItem::new(id, day)
                        .with_times(format_minutes(start), format_minutes(start + length))
                }
                // period based, sometimes referencing unknown periods
                6..=8 => {
                    let first = rng.random_range(1..=11);
                    let last = first + rng.random_range(0..=2);
                    LessonItem::new(id, day).with_periods(first, last)
                }
                _ => LessonItem::new(id, day),
            }
        })
        .collect()
}

fn minutes(l: &LaidOutLesson) -> (u32, u32) {
    let start = l.lesson.start_time.as_deref().and_then(time_to_minutes).unwrap();
    let end = l.lesson.end_time.as_deref().and_then(time_to_minutes).unwrap();
    (start, end)
}

#[test]
fn lanes_never_collide() {
    let schedule = PeriodSchedule::k12_default();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let lessons = random_lessons(&mut rng, 40);
        let out = compute_time_layout(&lessons, Some(schedule.slots()));

        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                if a.lesson.day_of_week != b.lesson.day_of_week || a.lane != b.lane {
                    continue;
                }
                let (a_start, a_end) = minutes(a);
                let (b_start, b_end) = minutes(b);
                let overlap = a_start < b_end && b_start < a_end;
                assert!(!overlap, "{} and {} share lane {}", a.id(), b.id(), a.lane);
            }
        }
    }
}

#[test]
fn cluster_size_is_widest_lane() {
    let schedule = PeriodSchedule::k12_default();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..50 {
        let lessons = random_lessons(&mut rng, 30);
        let out = compute_time_layout(&lessons, Some(schedule.slots()));

        let mut widest: HashMap<(i32, usize), usize> = HashMap::new();
        for l in &out {
            let w = widest.entry((l.lesson.day_of_week, l.cluster)).or_default();
            *w = (*w).max(l.lane + 1);
        }
        for l in &out {
            assert!(l.lane < l.cluster_size);
            assert_eq!(l.cluster_size, widest[&(l.lesson.day_of_week, l.cluster)]);
        }
    }
}

#[test]
fn only_valid_days_and_resolvable_lessons_are_placed() {
    let schedule = PeriodSchedule::k12_default();
    let mut rng = StdRng::seed_from_u64(23);
    let lessons = random_lessons(&mut rng, 200);

    let report = TimetableLayout::new().layout_with_report(&lessons, Some(schedule.slots()));

    assert_eq!(report.lessons.len() + report.dropped.len(), lessons.len());
    assert!(report
        .lessons
        .iter()
        .all(|l| (1..=7).contains(&l.lesson.day_of_week)));
    assert!(report.lessons.iter().all(|l| l.height >= 2.0));
}

#[test]
fn layout_is_idempotent_and_leaves_input_alone() {
    let schedule = PeriodSchedule::k12_default();
    let mut rng = StdRng::seed_from_u64(42);
    let lessons = random_lessons(&mut rng, 60);
    let snapshot = lessons.clone();

    let first = compute_time_layout(&lessons, Some(schedule.slots()));
    let second = compute_time_layout(&lessons, Some(schedule.slots()));

    assert_eq!(first, second);
    assert_eq!(lessons, snapshot);
}

#[test]
fn output_is_sorted_by_day_then_start() {
    let schedule = PeriodSchedule::k12_default();
    let mut rng = StdRng::seed_from_u64(5);
    let lessons = random_lessons(&mut rng, 80);

    let out = compute_time_layout(&lessons, Some(schedule.slots()));
    for pair in out.windows(2) {
        let key = |l: &LaidOutLesson| (l.lesson.day_of_week, minutes(l).0);
        assert!(key(&pair[0]) <= key(&pair[1]));
    }
}
