// Resource library view
// Guides and workshop recordings; links open in the system browser.

use egui::RichText;

use crate::models::resource::ResourceKind;
use crate::services::resources::ResourceLibrary;

pub fn show(ui: &mut egui::Ui, library: &ResourceLibrary) {
    ui.heading("Resources");
    ui.label(RichText::new("Guides and recorded workshops from the counselling team.").weak());
    ui.add_space(12.0);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (kind, action) in [
                (ResourceKind::Guide, "Open"),
                (ResourceKind::Video, "Watch"),
            ] {
                ui.label(RichText::new(kind.label()).strong().size(16.0));
                ui.add_space(4.0);
                for resource in library.of_kind(kind) {
                    egui::Frame::none()
                        .inner_margin(egui::Margin::same(12.0))
                        .rounding(6.0)
                        .stroke(ui.style().visuals.widgets.noninteractive.bg_stroke)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(&resource.title).strong());
                                    ui.label(RichText::new(&resource.description).weak());
                                    ui.label(
                                        RichText::new(format!(
                                            "{} · {}",
                                            resource.detail, resource.updated
                                        ))
                                        .weak()
                                        .small(),
                                    );
                                });
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui.button(action).clicked() {
                                            if let Err(error) = webbrowser::open(&resource.url) {
                                                log::error!(
                                                    "Failed to open {}: {}",
                                                    resource.url,
                                                    error
                                                );
                                            }
                                        }
                                    },
                                );
                            });
                        });
                    ui.add_space(8.0);
                }
                ui.add_space(12.0);
            }
        });
}
