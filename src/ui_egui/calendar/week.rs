// Week-window controller
// Owns the anchor date and derives the visible day set. Weeks start on
// Sunday; the number of visible days is driven by the viewport class.

use chrono::{Datelike, Duration, Local, NaiveDate};

#[derive(Debug, Clone, Copy)]
pub struct WeekWindow {
    anchor: NaiveDate,
}

impl WeekWindow {
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    pub fn starting_today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// The Sunday on or before the anchor.
    pub fn week_start(&self) -> NaiveDate {
        let offset = self.anchor.weekday().num_days_from_sunday() as i64;
        self.anchor - Duration::days(offset)
    }

    /// `count` consecutive dates starting from the week start.
    pub fn visible_days(&self, count: usize) -> Vec<NaiveDate> {
        let start = self.week_start();
        (0..count as i64).map(|i| start + Duration::days(i)).collect()
    }

    pub fn previous_week(&mut self) {
        self.anchor -= Duration::weeks(1);
    }

    pub fn next_week(&mut self) {
        self.anchor += Duration::weeks(1);
    }

    pub fn today(&mut self) {
        self.anchor = Local::now().date_naive();
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.anchor = date;
    }

    /// Header title, e.g. "March 2025".
    pub fn title(&self) -> String {
        self.anchor.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_starts_on_sunday_on_or_before_anchor() {
        // 2025-03-04 is a Tuesday; the preceding Sunday is 2025-03-02.
        let week = WeekWindow::new(date(2025, 3, 4));
        assert_eq!(week.week_start(), date(2025, 3, 2));
        // A Sunday anchor is its own week start.
        assert_eq!(WeekWindow::new(date(2025, 3, 2)).week_start(), date(2025, 3, 2));
    }

    #[test]
    fn visible_days_are_consecutive_from_week_start() {
        let week = WeekWindow::new(date(2025, 3, 4));
        let days = week.visible_days(7);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2025, 3, 2));
        assert_eq!(days[6], date(2025, 3, 8));

        let narrow = week.visible_days(1);
        assert_eq!(narrow, vec![date(2025, 3, 2)]);
        let medium = week.visible_days(3);
        assert_eq!(medium, vec![date(2025, 3, 2), date(2025, 3, 3), date(2025, 3, 4)]);
    }

    #[test]
    fn navigation_shifts_by_whole_weeks() {
        let mut week = WeekWindow::new(date(2025, 3, 4));
        week.next_week();
        assert_eq!(week.anchor(), date(2025, 3, 11));
        week.previous_week();
        week.previous_week();
        assert_eq!(week.anchor(), date(2025, 2, 25));
        // Month boundary handled by plain date arithmetic.
        assert_eq!(week.week_start(), date(2025, 2, 23));
    }

    #[test]
    fn select_date_moves_anchor() {
        let mut week = WeekWindow::new(date(2025, 3, 4));
        week.select_date(date(2025, 6, 15));
        assert_eq!(week.anchor(), date(2025, 6, 15));
        assert_eq!(week.title(), "June 2025");
    }
}
