// Appointment overlay placement
// Pure mapping from appointments to grid coordinates, plus the occupancy
// check used to block drags and render inline labels.

use chrono::{NaiveDate, Timelike};

use crate::models::appointment::Appointment;

use super::time_grid::{TimeGrid, TimeSlot, SLOT_MINUTES};

/// Grid coordinates of one rendered appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row_start: usize,
    pub row_span: usize,
    pub column: usize,
}

/// Placement for an appointment within the visible window, or `None` when
/// its day is outside the window (the appointment stays in the list).
pub fn placement(
    appointment: &Appointment,
    visible_days: &[NaiveDate],
    grid: &TimeGrid,
) -> Option<Placement> {
    let column = visible_days.iter().position(|day| *day == appointment.day)?;
    let row_start = grid.time_to_row(appointment.start.hour(), appointment.start.minute());
    let row_span = (appointment.duration_minutes() / SLOT_MINUTES).max(1) as usize;
    Some(Placement {
        row_start,
        row_span,
        column,
    })
}

/// Whether the appointment occupies the slot cell: same day, and the slot's
/// minute offset lies in `[start, end)`.
pub fn occupies(appointment: &Appointment, day: NaiveDate, slot: TimeSlot) -> bool {
    if appointment.day != day {
        return false;
    }
    let minutes = slot.minutes();
    minutes >= appointment.start_minutes() && minutes < appointment.end_minutes()
}

/// First appointment occupying the cell, if any. With overlapping bookings
/// this returns the earliest in list order; no collision layout is done.
pub fn occupant_at<'a>(
    appointments: &'a [Appointment],
    day: NaiveDate,
    slot: TimeSlot,
) -> Option<&'a Appointment> {
    appointments
        .iter()
        .find(|appointment| occupies(appointment, day, slot))
}

/// Whether a press on this cell may start a drag gesture: a counsellor must
/// be selected and the cell must be free.
pub fn can_begin_drag(
    appointments: &[Appointment],
    selected_counselor: Option<i64>,
    day: NaiveDate,
    slot: TimeSlot,
) -> bool {
    selected_counselor.is_some() && occupant_at(appointments, day, slot).is_none()
}

/// Label painted on a booked block, truncated so long student names stay
/// inside their column.
pub fn block_title(title: &str) -> String {
    const MAX_CHARS: usize = 20;
    if title.chars().count() <= MAX_CHARS {
        return title.to_string();
    }
    let cut: String = title.chars().take(MAX_CHARS).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortalConfig;
    use crate::models::appointment::SessionType;
    use chrono::{Duration, NaiveTime};
    use pretty_assertions::assert_eq;

    fn grid() -> TimeGrid {
        TimeGrid::new(&PortalConfig::default())
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn appointment(day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Appointment {
        Appointment {
            id: 1,
            title: "ZHU YANCUN".to_string(),
            day,
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            counselor_id: 4,
            counselor_name: "Dr. Priya Nair".to_string(),
            session_type: SessionType::Personal,
            notes: None,
        }
    }

    fn week_of_march_second() -> Vec<NaiveDate> {
        (0..7).map(|i| date(2) + Duration::days(i)).collect()
    }

    #[test]
    fn placement_maps_time_and_day_to_grid() {
        let days = week_of_march_second();
        let appt = appointment(date(4), (9, 0), (10, 0));
        let placed = placement(&appt, &days, &grid()).unwrap();
        assert_eq!(
            placed,
            Placement {
                row_start: 3, // 7:30, 8:00, 8:30, then 9:00
                row_span: 2,
                column: 2, // Sunday, Monday, Tuesday
            }
        );
    }

    #[test]
    fn early_slot_places_at_row_zero() {
        let days = week_of_march_second();
        let appt = appointment(date(4), (7, 30), (8, 30));
        let placed = placement(&appt, &days, &grid()).unwrap();
        assert_eq!(placed.row_start, 0);
        assert_eq!(placed.row_span, 2);
    }

    #[test]
    fn appointment_outside_window_is_omitted_not_lost() {
        let days = week_of_march_second();
        let appt = appointment(date(4) + Duration::weeks(1), (9, 0), (10, 0));
        assert!(placement(&appt, &days, &grid()).is_none());

        // Switching the window a week later brings it back.
        let next_week: Vec<NaiveDate> = days.iter().map(|d| *d + Duration::weeks(1)).collect();
        assert!(placement(&appt, &next_week, &grid()).is_some());
    }

    #[test]
    fn occupancy_is_half_open() {
        let appt = appointment(date(4), (9, 0), (10, 0));
        assert!(occupies(&appt, date(4), TimeSlot { hour: 9, minute: 0 }));
        assert!(occupies(&appt, date(4), TimeSlot { hour: 9, minute: 30 }));
        assert!(!occupies(&appt, date(4), TimeSlot { hour: 10, minute: 0 }));
        assert!(!occupies(&appt, date(4), TimeSlot { hour: 8, minute: 30 }));
        assert!(!occupies(&appt, date(5), TimeSlot { hour: 9, minute: 0 }));
    }

    #[test]
    fn occupied_cells_refuse_drag_initiation() {
        // Tuesday 9:00-10:00 is booked; pressing at 9:30 that day must not
        // start a gesture, while the 10:00 cell and other days may.
        let booked = vec![appointment(date(4), (9, 0), (10, 0))];
        let counselor = Some(4);

        assert!(!can_begin_drag(&booked, counselor, date(4), TimeSlot { hour: 9, minute: 30 }));
        assert!(!can_begin_drag(&booked, counselor, date(4), TimeSlot { hour: 9, minute: 0 }));
        assert!(can_begin_drag(&booked, counselor, date(4), TimeSlot { hour: 10, minute: 0 }));
        assert!(can_begin_drag(&booked, counselor, date(5), TimeSlot { hour: 9, minute: 30 }));
    }

    #[test]
    fn no_selected_counsellor_refuses_drag_everywhere() {
        let booked = vec![appointment(date(4), (9, 0), (10, 0))];
        assert!(!can_begin_drag(&booked, None, date(4), TimeSlot { hour: 14, minute: 0 }));
        assert!(!can_begin_drag(&[], None, date(5), TimeSlot { hour: 9, minute: 0 }));
    }

    #[test]
    fn block_title_truncates_long_names() {
        assert_eq!(block_title("ZHU YANCUN"), "ZHU YANCUN");
        // Exactly twenty characters passes through untouched.
        assert_eq!(block_title("ABCDEFGHIJKLMNOPQRST"), "ABCDEFGHIJKLMNOPQRST");
        assert_eq!(
            block_title("CHRISTOPHER ANDREW WEST"),
            "CHRISTOPHER ANDREW W..."
        );
        assert_eq!(block_title("RUHAN TASNEEM SHAFA"), "RUHAN TASNEEM SHAFA");
    }

    #[test]
    fn occupant_at_finds_first_in_list_order() {
        let first = appointment(date(4), (9, 0), (10, 0));
        let mut second = appointment(date(4), (9, 30), (10, 30));
        second.id = 2;
        let list = vec![first.clone(), second];

        let hit = occupant_at(&list, date(4), TimeSlot { hour: 9, minute: 30 }).unwrap();
        assert_eq!(hit.id, first.id);
        assert!(occupant_at(&list, date(4), TimeSlot { hour: 10, minute: 30 }).is_none());
    }
}
