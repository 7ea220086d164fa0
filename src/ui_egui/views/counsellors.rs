// Counsellor directory view
// Cards for each counsellor with a per-counsellor upcoming-session count.
// Selecting a counsellor arms the calendar's drag-to-book gesture.

use chrono::Local;
use egui::RichText;

use crate::services::appointment_store::AppointmentStore;
use crate::services::directory::CounselorDirectory;

/// Render the directory. Returns true when the user picked a counsellor and
/// wants to jump to the calendar.
pub fn show(
    ui: &mut egui::Ui,
    directory: &CounselorDirectory,
    appointments: &AppointmentStore,
    selected_counselor: &mut Option<i64>,
) -> bool {
    let mut book_now = false;
    let today = Local::now().date_naive();

    ui.heading("Our Counsellors");
    ui.label(RichText::new("Pick a counsellor, then drag on the calendar to book.").weak());
    ui.add_space(12.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for counselor in directory.all() {
                let upcoming = appointments
                    .for_counselor(counselor.id)
                    .iter()
                    .filter(|appointment| appointment.day >= today)
                    .count();
                let is_selected = *selected_counselor == Some(counselor.id);

                egui::Frame::none()
                    .inner_margin(egui::Margin::same(14.0))
                    .rounding(6.0)
                    .stroke(ui.style().visuals.widgets.noninteractive.bg_stroke)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&counselor.name).strong().size(16.0));
                                ui.label(&counselor.role);
                                ui.label(
                                    RichText::new(format!(
                                        "Specialises in: {}",
                                        counselor.specialization
                                    ))
                                    .weak(),
                                );
                                ui.label(
                                    RichText::new(format!("Available: {}", counselor.availability))
                                        .weak(),
                                );
                                ui.horizontal(|ui| {
                                    ui.label(RichText::new(&counselor.email).weak());
                                    ui.label(RichText::new(&counselor.phone).weak());
                                });
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.vertical(|ui| {
                                        ui.label(format!("{} upcoming", upcoming));
                                        if is_selected {
                                            if ui.button("Book a session").clicked() {
                                                book_now = true;
                                            }
                                            if ui.button("Deselect").clicked() {
                                                *selected_counselor = None;
                                            }
                                        } else if ui.button("Select").clicked() {
                                            *selected_counselor = Some(counselor.id);
                                        }
                                    });
                                },
                            );
                        });
                    });
                ui.add_space(8.0);
            }
        });

    book_now
}
