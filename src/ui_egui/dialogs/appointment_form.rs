// Booking dialog
// Opened when a drag gesture resolves. The slot range and counsellor are
// fixed at open time; the student fills in the remaining fields.

use chrono::Timelike;
use egui::{Color32, RichText};

use crate::models::appointment::{Appointment, AppointmentDraft, SessionType};
use crate::ui_egui::calendar::time_grid::format_time;

/// State for the appointment booking dialog.
pub struct AppointmentFormState {
    pub draft: AppointmentDraft,
    pub counselor_name: String,
    pub title: String,
    pub session_type: SessionType,
    pub notes: String,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    None,
    Save(Appointment),
    Cancel,
}

impl AppointmentFormState {
    pub fn new(draft: AppointmentDraft, counselor_name: String) -> Self {
        Self {
            draft,
            counselor_name,
            title: String::new(),
            session_type: SessionType::Academic,
            notes: String::new(),
            error_message: None,
        }
    }

    /// Slot range summary, e.g. "9:00 am - 10:30 am".
    pub fn time_summary(&self) -> String {
        format!(
            "{} - {}",
            format_time(self.draft.start.hour(), self.draft.start.minute()),
            format_time(self.draft.end.hour(), self.draft.end.minute())
        )
    }

    fn to_appointment(&self, id: i64) -> Result<Appointment, String> {
        let notes = match self.notes.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        self.draft.clone().into_appointment(
            id,
            self.counselor_name.clone(),
            self.title.trim().to_string(),
            self.session_type,
            notes,
        )
    }
}

/// Render the booking dialog. `next_id` is the id the appointment will take
/// if saved this frame.
pub fn render_appointment_form(
    ctx: &egui::Context,
    state: &mut AppointmentFormState,
    next_id: i64,
) -> FormAction {
    let mut action = FormAction::None;

    egui::Window::new("Book Appointment")
        .collapsible(false)
        .resizable(false)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if let Some(ref error) = state.error_message {
                ui.colored_label(Color32::RED, RichText::new(error).strong());
                ui.add_space(8.0);
            }

            ui.horizontal(|ui| {
                ui.label("Counsellor:");
                ui.label(RichText::new(&state.counselor_name).strong());
            });
            ui.horizontal(|ui| {
                ui.label("Date:");
                ui.label(
                    RichText::new(state.draft.day.format("%A, %B %e, %Y").to_string()).strong(),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Time:");
                ui.label(RichText::new(state.time_summary()).strong());
            });

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Student name:");
                ui.text_edit_singleline(&mut state.title);
            });

            ui.horizontal(|ui| {
                ui.label("Session type:");
                egui::ComboBox::from_id_source("appointment_session_type")
                    .selected_text(state.session_type.label())
                    .show_ui(ui, |ui| {
                        for session_type in SessionType::ALL {
                            ui.selectable_value(
                                &mut state.session_type,
                                session_type,
                                session_type.label(),
                            );
                        }
                    });
            });

            ui.label("Notes (optional):");
            ui.text_edit_multiline(&mut state.notes);

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let can_save = !state.title.trim().is_empty();
                if ui
                    .add_enabled(can_save, egui::Button::new("Book Session"))
                    .clicked()
                {
                    match state.to_appointment(next_id) {
                        Ok(appointment) => action = FormAction::Save(appointment),
                        Err(error) => state.error_message = Some(error),
                    }
                }
                if ui.button("Cancel").clicked() {
                    action = FormAction::Cancel;
                }
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    fn draft() -> AppointmentDraft {
        AppointmentDraft {
            day: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            counselor_id: 2,
        }
    }

    #[test]
    fn time_summary_uses_portal_clock_style() {
        let state = AppointmentFormState::new(draft(), "Mr. David Tan".to_string());
        assert_eq!(state.time_summary(), "9:00 am - 10:30 am");
    }

    #[test]
    fn saving_trims_fields_and_drops_empty_notes() {
        let mut state = AppointmentFormState::new(draft(), "Mr. David Tan".to_string());
        state.title = "  LOOK SIZE HING  ".to_string();
        state.notes = "   ".to_string();
        let appointment = state.to_appointment(9).unwrap();
        assert_eq!(appointment.id, 9);
        assert_eq!(appointment.title, "LOOK SIZE HING");
        assert_eq!(appointment.counselor_id, 2);
        assert!(appointment.notes.is_none());
    }

    #[test]
    fn empty_title_is_rejected_with_message() {
        let state = AppointmentFormState::new(draft(), "Mr. David Tan".to_string());
        let error = state.to_appointment(9).unwrap_err();
        assert!(error.contains("title"));
    }
}
