// Appointment store
// Owns the canonical appointment list. The calendar only ever reads a
// filtered slice of it and requests mutations through save/remove.

use chrono::{NaiveDate, NaiveTime};

use crate::models::appointment::{Appointment, SessionType};
use crate::models::counselor::Counselor;

/// Next id for a freshly booked appointment: one greater than the current
/// maximum, or 1 when the list is empty.
pub fn next_appointment_id(appointments: &[Appointment]) -> i64 {
    appointments
        .iter()
        .map(|appointment| appointment.id)
        .max()
        .map_or(1, |max| max + 1)
}

#[derive(Debug, Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the demo agenda so the calendar is not empty on
    /// first launch.
    pub fn seeded(counselors: &[Counselor]) -> Self {
        let mut store = Self::new();
        let monday = NaiveDate::from_ymd_opt(2025, 3, 3).expect("valid seed date");
        let seed: [(i64, &str, i64, u32, u32, u32, u32); 8] = [
            (1, "CHRISTOPHER ANDREW WEST", 1, 0, 450, 510, 1),
            (2, "LOOK SIZE HING", 2, 1, 480, 510, 1),
            (3, "LOOK SIZE HING", 2, 1, 510, 540, 1),
            (4, "ELINA KAUR DEV", 3, 0, 540, 600, 0),
            (5, "ZHU YANCUN", 4, 1, 540, 600, 2),
            (6, "SHARMA SAATVIK", 5, 2, 540, 600, 2),
            (7, "HU ZIKANG", 2, 1, 600, 660, 0),
            (8, "RUHAN TASNEEM SHAFA", 1, 4, 510, 540, 1),
        ];
        for (id, title, counselor_id, day_offset, start_min, end_min, kind) in seed {
            let name = counselors
                .iter()
                .find(|counselor| counselor.id == counselor_id)
                .map(|counselor| counselor.name.clone())
                .unwrap_or_default();
            let session_type = match kind {
                0 => SessionType::Academic,
                1 => SessionType::Career,
                _ => SessionType::Personal,
            };
            let appointment = Appointment {
                id,
                title: title.to_string(),
                day: monday + chrono::Duration::days(day_offset.into()),
                start: minutes_to_time(start_min),
                end: minutes_to_time(end_min),
                counselor_id,
                counselor_name: name,
                session_type,
                notes: None,
            };
            store.appointments.push(appointment);
        }
        store
    }

    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Agenda slice for a single counsellor, in list order.
    pub fn for_counselor(&self, counselor_id: i64) -> Vec<Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| appointment.counselor_id == counselor_id)
            .cloned()
            .collect()
    }

    pub fn get(&self, id: i64) -> Option<&Appointment> {
        self.appointments
            .iter()
            .find(|appointment| appointment.id == id)
    }

    /// Append a booked appointment. The caller (the creation dialog) has
    /// already assigned the id and resolved the counsellor name.
    pub fn save(&mut self, appointment: Appointment) {
        log::info!(
            "Booked appointment {} with {} on {}",
            appointment.id,
            appointment.counselor_name,
            appointment.day
        );
        self.appointments.push(appointment);
    }

    /// Remove exactly the appointment with the given id. Returns whether an
    /// appointment was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.appointments.len();
        self.appointments.retain(|appointment| appointment.id != id);
        let removed = self.appointments.len() < before;
        if removed {
            log::info!("Cancelled appointment {}", id);
        } else {
            log::warn!("Attempted to cancel unknown appointment {}", id);
        }
        removed
    }

    pub fn upcoming_count(&self, today: NaiveDate) -> usize {
        self.appointments
            .iter()
            .filter(|appointment| appointment.day >= today)
            .count()
    }

    /// Advisory only: double-booking is deliberately not blocked anywhere in
    /// the booking flow.
    pub fn overlapping(
        &self,
        counselor_id: i64,
        day: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|appointment| {
                appointment.counselor_id == counselor_id
                    && appointment.day == day
                    && appointment.start < end
                    && start < appointment.end
            })
            .collect()
    }
}

fn minutes_to_time(minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).expect("minutes within a day")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appointment::SessionType;
    use pretty_assertions::assert_eq;

    fn appointment(id: i64, counselor_id: i64, start_hour: u32, end_hour: u32) -> Appointment {
        Appointment {
            id,
            title: format!("Student {}", id),
            day: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            start: NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(end_hour, 0, 0).unwrap(),
            counselor_id,
            counselor_name: "Dr. Sarah Chen".to_string(),
            session_type: SessionType::Academic,
            notes: None,
        }
    }

    #[test]
    fn next_id_is_max_plus_one() {
        let appointments = vec![
            appointment(1, 1, 9, 10),
            appointment(2, 1, 10, 11),
            appointment(4, 2, 9, 10),
        ];
        assert_eq!(next_appointment_id(&appointments), 5);
    }

    #[test]
    fn next_id_for_empty_list_is_one() {
        assert_eq!(next_appointment_id(&[]), 1);
    }

    #[test]
    fn remove_deletes_exactly_one_id() {
        let mut store = AppointmentStore::new();
        store.save(appointment(1, 1, 9, 10));
        store.save(appointment(2, 1, 10, 11));
        store.save(appointment(3, 2, 11, 12));

        assert!(store.remove(2));
        let remaining: Vec<i64> = store.all().iter().map(|a| a.id).collect();
        assert_eq!(remaining, vec![1, 3]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut store = AppointmentStore::new();
        store.save(appointment(1, 1, 9, 10));
        assert!(!store.remove(99));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn filter_by_counselor() {
        let mut store = AppointmentStore::new();
        store.save(appointment(1, 1, 9, 10));
        store.save(appointment(2, 2, 10, 11));
        store.save(appointment(3, 1, 11, 12));

        let agenda = store.for_counselor(1);
        assert_eq!(agenda.len(), 2);
        assert!(agenda.iter().all(|a| a.counselor_id == 1));
    }

    #[test]
    fn overlap_query_is_half_open() {
        let mut store = AppointmentStore::new();
        store.save(appointment(1, 1, 9, 10));

        let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();

        // Back-to-back bookings do not overlap.
        assert!(store.overlapping(1, day, at(10, 0), at(11, 0)).is_empty());
        assert!(store.overlapping(1, day, at(8, 0), at(9, 0)).is_empty());
        // Straddling intervals do.
        assert_eq!(store.overlapping(1, day, at(9, 30), at(10, 30)).len(), 1);
        // Other counsellors are unaffected.
        assert!(store.overlapping(2, day, at(9, 0), at(10, 0)).is_empty());
    }

    #[test]
    fn seeded_store_resolves_names() {
        let counselors = vec![
            Counselor::new(1, "Dr. Sarah Chen"),
            Counselor::new(2, "Mr. David Tan"),
            Counselor::new(3, "Ms. Rachel Wong"),
            Counselor::new(4, "Dr. Priya Nair"),
            Counselor::new(5, "Mr. Marcus Lee"),
        ];
        let store = AppointmentStore::seeded(&counselors);
        assert!(!store.is_empty());
        assert!(store
            .all()
            .iter()
            .all(|appointment| !appointment.counselor_name.is_empty()));
        assert_eq!(next_appointment_id(store.all()), 9);
    }
}
