//! Lesson model.
//!
//! A lesson is one scheduled occurrence of a course for a class on one
//! weekday within one term. Its time is given either explicitly
//! (`startTime`/`endTime`) or by period numbers resolved against a
//! [`PeriodSchedule`](super::PeriodSchedule).
//!
//! Descriptive fields (course, teacher, class, room, color) are carried
//! through layout unmodified.

use serde::{Deserialize, Serialize};

use super::weeks::{WeekSpec, WeekType};

/// Day of the week, Monday = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Every day a lesson can be laid out on, in column order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Maps a `dayOfWeek` number to a weekday. `None` outside 1..=7.
    pub fn from_number(n: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.number() == n)
    }

    /// The `dayOfWeek` number (1..=7).
    #[inline]
    pub fn number(self) -> i32 {
        self as i32
    }

    /// Zero-based column index (Monday = 0).
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

/// One scheduled lesson.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonItem {
    /// Unique within the lesson set being laid out.
    pub id: String,
    /// Opaque term identifier.
    #[serde(default)]
    pub term: String,
    /// 1..=7, Monday = 1. Other values are carried but never laid out.
    pub day_of_week: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(default)]
    pub course_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    /// Weeks of the term this lesson runs in. `None` = every week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks: Option<WeekSpec>,
    #[serde(default)]
    pub week_type: WeekType,
    /// Display color override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

impl LessonItem {
    /// Creates a lesson with no time information.
    pub fn new(id: impl Into<String>, day_of_week: i32) -> Self {
        Self {
            id: id.into(),
            term: String::new(),
            day_of_week,
            start_time: None,
            end_time: None,
            start_period: None,
            end_period: None,
            course_id: None,
            course_name: String::new(),
            teacher_id: None,
            teacher_name: None,
            class_id: None,
            class_name: None,
            room_id: None,
            room_name: None,
            weeks: None,
            week_type: WeekType::All,
            color: None,
            remark: None,
        }
    }

    /// Sets the term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Sets explicit start/end times (`HH:MM`).
    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    /// Sets the first and last period.
    pub fn with_periods(mut self, start_period: u32, end_period: u32) -> Self {
        self.start_period = Some(start_period);
        self.end_period = Some(end_period);
        self
    }

    /// Sets a single period (no end period).
    pub fn with_period(mut self, period: u32) -> Self {
        self.start_period = Some(period);
        self
    }

    /// Sets the course name.
    pub fn with_course(mut self, name: impl Into<String>) -> Self {
        self.course_name = name.into();
        self
    }

    /// Sets the teacher name.
    pub fn with_teacher(mut self, name: impl Into<String>) -> Self {
        self.teacher_name = Some(name.into());
        self
    }

    /// Sets the class name.
    pub fn with_class(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    /// Sets the room name.
    pub fn with_room(mut self, name: impl Into<String>) -> Self {
        self.room_name = Some(name.into());
        self
    }

    /// Sets the weeks this lesson runs in.
    pub fn with_weeks(mut self, weeks: WeekSpec) -> Self {
        self.weeks = Some(weeks);
        self
    }

    /// Restricts to odd or even weeks.
    pub fn with_week_type(mut self, week_type: WeekType) -> Self {
        self.week_type = week_type;
        self
    }

    /// The weekday, if `day_of_week` is in range.
    pub fn weekday(&self) -> Option<Weekday> {
        Weekday::from_number(self.day_of_week)
    }

    /// Whether this lesson runs in teaching week `week`.
    pub fn occurs_in_week(&self, week: u32) -> bool {
        let listed = self.weeks.as_ref().map_or(true, |w| w.contains(week));
        listed && self.week_type.matches(week)
    }
}

/// Keeps the lessons that run in `week`, in input order.
pub fn filter_for_week(lessons: &[LessonItem], week: u32) -> Vec<LessonItem> {
    lessons
        .iter()
        .filter(|l| l.occurs_in_week(week))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_builder() {
        let lesson = LessonItem::new("L1", 3)
            .with_term("2024-1")
            .with_times("08:00", "08:45")
            .with_course("Math")
            .with_teacher("Ms. Li")
            .with_class("7A")
            .with_room("R101");

        assert_eq!(lesson.id, "L1");
        assert_eq!(lesson.weekday(), Some(Weekday::Wednesday));
        assert_eq!(lesson.start_time.as_deref(), Some("08:00"));
        assert_eq!(lesson.room_name.as_deref(), Some("R101"));
        assert_eq!(lesson.week_type, WeekType::All);
    }

    #[test]
    fn test_weekday_numbers() {
        assert_eq!(Weekday::from_number(1), Some(Weekday::Monday));
        assert_eq!(Weekday::from_number(7), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_number(0), None);
        assert_eq!(Weekday::from_number(8), None);
        assert_eq!(Weekday::Friday.number(), 5);
        assert_eq!(Weekday::Monday.index(), 0);
        assert_eq!(Weekday::Sunday.index(), 6);
    }

    #[test]
    fn test_occurs_in_week() {
        let always = LessonItem::new("L1", 1);
        assert!(always.occurs_in_week(1));

        let ranged = LessonItem::new("L2", 1)
            .with_weeks(WeekSpec::Text("1-8".into()))
            .with_week_type(WeekType::Even);
        assert!(ranged.occurs_in_week(4));
        assert!(!ranged.occurs_in_week(5));
        assert!(!ranged.occurs_in_week(10));
    }

    #[test]
    fn test_filter_for_week() {
        let lessons = vec![
            LessonItem::new("odd", 1).with_week_type(WeekType::Odd),
            LessonItem::new("all", 2),
            LessonItem::new("w2", 3).with_weeks(WeekSpec::List(vec![2])),
        ];
        let ids: Vec<String> = filter_for_week(&lessons, 2).into_iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["all", "w2"]);
    }

    #[test]
    fn test_lesson_wire_shape() {
        let json = r#"{
            "id": "L9",
            "term": "2024-1",
            "dayOfWeek": 2,
            "startPeriod": 1,
            "endPeriod": 2,
            "courseName": "Physics",
            "weeks": "1,3,5",
            "weekType": "odd"
        }"#;
        let lesson: LessonItem = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.day_of_week, 2);
        assert_eq!(lesson.start_period, Some(1));
        assert!(lesson.start_time.is_none());
        assert_eq!(lesson.week_type, WeekType::Odd);
        assert!(lesson.occurs_in_week(3));

        let back = serde_json::to_value(&lesson).unwrap();
        assert_eq!(back["dayOfWeek"], 2);
        assert!(back.get("startTime").is_none());
    }
}
