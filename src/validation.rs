//! Input validation for timetable data.
//!
//! Layout tolerates bad records by leaving them out. Callers that want to
//! surface those records (an import screen, a data audit) can run these
//! checks first. Detects:
//! - Duplicate lesson IDs
//! - `dayOfWeek` outside 1..=7
//! - Malformed explicit times and inverted ranges
//! - Period numbers missing from the schedule
//! - Lessons with no resolvable time
//! - Malformed or overlapping period slots

use std::collections::HashSet;

use crate::layout::resolve_effective_times;
use crate::models::{find_slot, ClockRange, LessonItem, PeriodSlot, TimeParsing};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two lessons share the same ID.
    DuplicateId,
    /// `dayOfWeek` is not 1..=7.
    InvalidDay,
    /// An explicit time or slot time is not `H:MM`/`HH:MM`.
    MalformedTime,
    /// A lesson references a period the schedule does not have.
    UnknownPeriod,
    /// A lesson has no usable time at all.
    UnresolvableTimes,
    /// A range ends before it starts.
    InvertedRange,
    /// Two teaching slots overlap.
    OverlappingSlots,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates lessons against a period schedule.
///
/// Checks:
/// 1. No duplicate lesson IDs
/// 2. `dayOfWeek` within 1..=7
/// 3. Explicit times are well-formed
/// 4. Referenced periods exist in `slots`
/// 5. Every lesson resolves to a time range, and that range is not inverted
/// 6. Slot times are well-formed and teaching slots do not overlap
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    lessons: &[LessonItem],
    slots: Option<&[PeriodSlot]>,
    parsing: TimeParsing,
) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(slots) = slots {
        validate_slots(slots, parsing, &mut errors);
    }

    let mut lesson_ids = HashSet::new();
    for lesson in lessons {
        if !lesson_ids.insert(lesson.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate lesson ID: {}", lesson.id),
            ));
        }

        if lesson.weekday().is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDay,
                format!(
                    "Lesson '{}' has dayOfWeek {} (expected 1-7)",
                    lesson.id, lesson.day_of_week
                ),
            ));
        }

        for (field, value) in [("startTime", &lesson.start_time), ("endTime", &lesson.end_time)] {
            if let Some(value) = value {
                if parsing.parse(value).is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::MalformedTime,
                        format!("Lesson '{}' has malformed {field} '{value}'", lesson.id),
                    ));
                }
            }
        }

        if let Some(slots) = slots {
            for period in [lesson.start_period, lesson.end_period].into_iter().flatten() {
                if find_slot(slots, period).is_none() {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::UnknownPeriod,
                        format!("Lesson '{}' references unknown period {period}", lesson.id),
                    ));
                }
            }
        }

        match resolve_effective_times(lesson, slots, parsing) {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnresolvableTimes,
                format!("Lesson '{}' has no resolvable start/end time", lesson.id),
            )),
            Some(eff) if eff.range.is_inverted() => errors.push(ValidationError::new(
                ValidationErrorKind::InvertedRange,
                format!("Lesson '{}' ends ({}) before it starts ({})", lesson.id, eff.end, eff.start),
            )),
            Some(_) => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks slot times and pairwise overlap of teaching slots.
fn validate_slots(slots: &[PeriodSlot], parsing: TimeParsing, errors: &mut Vec<ValidationError>) {
    let mut teaching: Vec<(&PeriodSlot, ClockRange)> = Vec::new();

    for slot in slots {
        let Some(range) = slot.range(parsing) else {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedTime,
                format!(
                    "Slot {} '{}' has malformed times {}-{}",
                    slot.no, slot.label, slot.start_time, slot.end_time
                ),
            ));
            continue;
        };

        if range.is_inverted() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedRange,
                format!("Slot {} '{}' ends before it starts", slot.no, slot.label),
            ));
            continue;
        }

        if !slot.is_break {
            teaching.push((slot, range));
        }
    }

    for (i, (a, ra)) in teaching.iter().enumerate() {
        for (b, rb) in &teaching[i + 1..] {
            if ra.overlaps(rb) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::OverlappingSlots,
                    format!("Slot {} '{}' overlaps slot {} '{}'", a.no, a.label, b.no, b.label),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PeriodSchedule;

    fn sample_lessons() -> Vec<LessonItem> {
        vec![
            LessonItem::new("L1", 1).with_times("08:00", "08:45").with_course("Math"),
            LessonItem::new("L2", 2).with_periods(1, 2).with_course("Physics"),
            LessonItem::new("L3", 5).with_period(10).with_course("Self-study"),
        ]
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_valid_input() {
        let slots = PeriodSchedule::k12_default();
        assert!(validate_input(&sample_lessons(), Some(slots.slots()), TimeParsing::Lenient).is_ok());
    }

    #[test]
    fn test_duplicate_lesson_id() {
        let lessons = vec![
            LessonItem::new("L1", 1).with_times("08:00", "08:45"),
            LessonItem::new("L1", 2).with_times("08:00", "08:45"),
        ];
        let errors = validate_input(&lessons, None, TimeParsing::Lenient).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("L1")));
    }

    #[test]
    fn test_invalid_day() {
        let lessons = vec![LessonItem::new("L1", 8).with_times("08:00", "08:45")];
        assert_eq!(
            kinds(validate_input(&lessons, None, TimeParsing::Lenient)),
            vec![ValidationErrorKind::InvalidDay]
        );
    }

    #[test]
    fn test_malformed_time_and_unresolvable() {
        let lessons = vec![LessonItem::new("L1", 1).with_times("8am", "08:45")];
        let found = kinds(validate_input(&lessons, None, TimeParsing::Lenient));
        assert!(found.contains(&ValidationErrorKind::MalformedTime));
        assert!(found.contains(&ValidationErrorKind::UnresolvableTimes));
    }

    #[test]
    fn test_strict_mode_flags_out_of_range() {
        let lessons = vec![LessonItem::new("L1", 1).with_times("25:00", "25:30")];
        assert!(validate_input(&lessons, None, TimeParsing::Lenient).is_ok());
        assert!(kinds(validate_input(&lessons, None, TimeParsing::Strict))
            .contains(&ValidationErrorKind::MalformedTime));
    }

    #[test]
    fn test_unknown_period() {
        let slots = PeriodSchedule::k12_default();
        let lessons = vec![LessonItem::new("L1", 1).with_periods(1, 12)];
        // end falls back to period 1, so the lesson still resolves
        assert_eq!(
            kinds(validate_input(&lessons, Some(slots.slots()), TimeParsing::Lenient)),
            vec![ValidationErrorKind::UnknownPeriod]
        );
    }

    #[test]
    fn test_inverted_range() {
        let lessons = vec![LessonItem::new("L1", 1).with_times("10:00", "09:00")];
        assert_eq!(
            kinds(validate_input(&lessons, None, TimeParsing::Lenient)),
            vec![ValidationErrorKind::InvertedRange]
        );
    }

    #[test]
    fn test_overlapping_slots() {
        let slots = vec![
            PeriodSlot::new(1, "P1", "08:00", "08:50"),
            PeriodSlot::new(2, "P2", "08:40", "09:30"),
            PeriodSlot::break_slot(0, "Recess", "08:45", "09:00"),
        ];
        let errors = validate_input(&[], Some(slots.as_slice()), TimeParsing::Lenient).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::OverlappingSlots);
        assert!(errors[0].to_string().contains("P1"));
    }

    #[test]
    fn test_malformed_slot() {
        let slots = vec![PeriodSlot::new(1, "P1", "eight", "08:50")];
        assert_eq!(
            kinds(validate_input(&[], Some(slots.as_slice()), TimeParsing::Lenient)),
            vec![ValidationErrorKind::MalformedTime]
        );
    }

    #[test]
    fn test_multiple_errors() {
        let lessons = vec![
            LessonItem::new("bare", 0),
            LessonItem::new("bare", 1).with_times("09:00", "10:00"),
        ];
        let errors = validate_input(&lessons, None, TimeParsing::Lenient).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
