// Appointment detail dialog
// Opened by clicking a booked block. Read-only view with a guarded cancel.

use chrono::Timelike;
use egui::{Color32, RichText};

use crate::models::appointment::Appointment;
use crate::ui_egui::calendar::time_grid::format_time;

pub struct AppointmentDetailState {
    pub appointment: Appointment,
    confirm_delete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    None,
    Close,
    Delete(i64),
}

impl AppointmentDetailState {
    pub fn new(appointment: Appointment) -> Self {
        Self {
            appointment,
            confirm_delete: false,
        }
    }
}

pub fn render_appointment_detail(
    ctx: &egui::Context,
    state: &mut AppointmentDetailState,
) -> DetailAction {
    let mut action = DetailAction::None;
    let appointment = &state.appointment;

    egui::Window::new("Appointment Details")
        .collapsible(false)
        .resizable(false)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(RichText::new(&appointment.title).heading());
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Counsellor:");
                ui.label(RichText::new(&appointment.counselor_name).strong());
            });
            ui.horizontal(|ui| {
                ui.label("Session:");
                ui.label(appointment.session_type.label());
            });
            ui.horizontal(|ui| {
                ui.label("Date:");
                ui.label(appointment.day.format("%A, %B %e, %Y").to_string());
            });
            ui.horizontal(|ui| {
                ui.label("Time:");
                ui.label(format!(
                    "{} - {}",
                    format_time(appointment.start.hour(), appointment.start.minute()),
                    format_time(appointment.end.hour(), appointment.end.minute())
                ));
            });
            if let Some(ref notes) = appointment.notes {
                ui.add_space(4.0);
                ui.label("Notes:");
                ui.label(notes);
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            if state.confirm_delete {
                ui.colored_label(Color32::RED, "Cancel this appointment?");
                ui.horizontal(|ui| {
                    if ui.button("Yes, cancel it").clicked() {
                        action = DetailAction::Delete(state.appointment.id);
                    }
                    if ui.button("Keep it").clicked() {
                        state.confirm_delete = false;
                    }
                });
            } else {
                ui.horizontal(|ui| {
                    if ui.button("Cancel Appointment").clicked() {
                        state.confirm_delete = true;
                    }
                    if ui.button("Close").clicked() {
                        action = DetailAction::Close;
                    }
                });
            }
        });

    action
}
