// Dashboard view
// Greeting, quick stats, and shortcuts into the other pages.

use chrono::Local;
use egui::RichText;

use crate::models::session::Session;
use crate::services::appointment_store::AppointmentStore;
use crate::services::directory::CounselorDirectory;
use crate::services::forum_store::ForumStore;
use crate::services::resources::ResourceLibrary;
use crate::ui_egui::app::Page;

pub struct DashboardData<'a> {
    pub session: &'a Session,
    pub appointments: &'a AppointmentStore,
    pub directory: &'a CounselorDirectory,
    pub forum: &'a ForumStore,
    pub resources: &'a ResourceLibrary,
}

/// Render the dashboard. Returns a page when the user follows a shortcut.
pub fn show(ui: &mut egui::Ui, data: &DashboardData<'_>) -> Option<Page> {
    let mut navigate = None;

    ui.heading(format!("Welcome back, {}", data.session.display_name()));
    ui.label(RichText::new("Here's what's happening in your portal today.").weak());
    ui.add_space(16.0);

    let today = Local::now().date_naive();
    let cards = [
        (
            "Upcoming Sessions",
            data.appointments.upcoming_count(today).to_string(),
            Page::Calendar,
        ),
        (
            "Counsellors",
            data.directory.len().to_string(),
            Page::Counsellors,
        ),
        (
            "Discussions",
            data.forum.all().len().to_string(),
            Page::Forum,
        ),
        (
            "Resources",
            data.resources.len().to_string(),
            Page::Resources,
        ),
    ];

    ui.horizontal_wrapped(|ui| {
        for (label, value, page) in cards {
            egui::Frame::none()
                .inner_margin(egui::Margin::same(14.0))
                .rounding(6.0)
                .stroke(ui.style().visuals.widgets.noninteractive.bg_stroke)
                .show(ui, |ui| {
                    ui.set_min_width(140.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(value).heading());
                        ui.label(RichText::new(label).weak());
                        if ui.button("View").clicked() {
                            navigate = Some(page);
                        }
                    });
                });
        }
    });

    ui.add_space(20.0);
    ui.heading("Recent discussions");
    ui.add_space(4.0);
    for discussion in data.forum.all().iter().take(3) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&discussion.title).strong());
            ui.label(RichText::new(format!("by {}", discussion.author)).weak());
            ui.label(
                RichText::new(format!("{} replies", discussion.replies.len())).weak(),
            );
        });
    }
    if ui.link("Go to forum").clicked() {
        navigate = Some(Page::Forum);
    }

    navigate
}
