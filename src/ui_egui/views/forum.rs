// Forum view
// Discussion list with an inline composer, plus a detail view with replies.
// Everything is in-memory via the forum store.

use chrono::{DateTime, Local};
use egui::{Color32, RichText};

use crate::models::forum::ForumCategory;
use crate::models::session::Session;
use crate::services::forum_store::ForumStore;

pub struct ForumView {
    open_slug: Option<String>,
    composing: bool,
    new_title: String,
    new_content: String,
    new_category: ForumCategory,
    reply_text: String,
    error_message: Option<String>,
}

impl Default for ForumView {
    fn default() -> Self {
        Self {
            open_slug: None,
            composing: false,
            new_title: String::new(),
            new_content: String::new(),
            new_category: ForumCategory::Academic,
            reply_text: String::new(),
            error_message: None,
        }
    }
}

impl ForumView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, ui: &mut egui::Ui, store: &mut ForumStore, session: &Session) {
        match self.open_slug.clone() {
            Some(slug) => self.show_discussion(ui, store, session, &slug),
            None => self.show_list(ui, store, session),
        }
    }

    fn show_list(&mut self, ui: &mut egui::Ui, store: &mut ForumStore, session: &Session) {
        ui.horizontal(|ui| {
            ui.heading("Community Forum");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("New Discussion").clicked() {
                    self.composing = true;
                }
            });
        });
        ui.add_space(8.0);

        if self.composing {
            self.show_composer(ui, store, session);
            ui.add_space(12.0);
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for discussion in store.all() {
                    let open = egui::Frame::none()
                        .inner_margin(egui::Margin::same(12.0))
                        .rounding(6.0)
                        .stroke(ui.style().visuals.widgets.noninteractive.bg_stroke)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&discussion.title).strong().size(15.0));
                                ui.label(
                                    RichText::new(discussion.category.label())
                                        .weak()
                                        .small(),
                                );
                            });
                            ui.label(RichText::new(discussion.preview()).weak());
                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(format!(
                                        "{} · {}",
                                        discussion.author,
                                        time_ago(discussion.posted_at)
                                    ))
                                    .weak()
                                    .small(),
                                );
                                ui.label(
                                    RichText::new(format!(
                                        "{} likes · {} replies",
                                        discussion.likes,
                                        discussion.replies.len()
                                    ))
                                    .weak()
                                    .small(),
                                );
                                ui.link("Read").clicked()
                            })
                            .inner
                        })
                        .inner;
                    if open {
                        self.open_slug = Some(discussion.slug.clone());
                    }
                    ui.add_space(8.0);
                }
            });
    }

    fn show_composer(&mut self, ui: &mut egui::Ui, store: &mut ForumStore, session: &Session) {
        egui::Frame::none()
            .inner_margin(egui::Margin::same(12.0))
            .rounding(6.0)
            .stroke(ui.style().visuals.widgets.noninteractive.bg_stroke)
            .show(ui, |ui| {
                ui.label(RichText::new("Start a discussion").strong());
                if let Some(ref error) = self.error_message {
                    ui.colored_label(Color32::RED, error);
                }
                ui.horizontal(|ui| {
                    ui.label("Title:");
                    ui.text_edit_singleline(&mut self.new_title);
                });
                ui.horizontal(|ui| {
                    ui.label("Category:");
                    egui::ComboBox::from_id_source("forum_new_category")
                        .selected_text(self.new_category.label())
                        .show_ui(ui, |ui| {
                            for category in ForumCategory::ALL {
                                ui.selectable_value(
                                    &mut self.new_category,
                                    category,
                                    category.label(),
                                );
                            }
                        });
                });
                ui.text_edit_multiline(&mut self.new_content);
                ui.horizontal(|ui| {
                    if ui.button("Post").clicked() {
                        if self.new_title.trim().is_empty() || self.new_content.trim().is_empty()
                        {
                            self.error_message =
                                Some("Title and content are required".to_string());
                        } else {
                            store.create(
                                self.new_title.trim(),
                                self.new_content.trim(),
                                self.new_category,
                                session.display_name(),
                            );
                            self.new_title.clear();
                            self.new_content.clear();
                            self.error_message = None;
                            self.composing = false;
                        }
                    }
                    if ui.button("Cancel").clicked() {
                        self.composing = false;
                        self.error_message = None;
                    }
                });
            });
    }

    fn show_discussion(
        &mut self,
        ui: &mut egui::Ui,
        store: &mut ForumStore,
        session: &Session,
        slug: &str,
    ) {
        if ui.link("< Back to forum").clicked() {
            self.open_slug = None;
            self.reply_text.clear();
            return;
        }
        ui.add_space(8.0);

        let Some(discussion) = store.by_slug(slug).cloned() else {
            self.open_slug = None;
            return;
        };

        ui.heading(&discussion.title);
        ui.label(
            RichText::new(format!(
                "{} · {} · {}",
                discussion.author,
                discussion.category.label(),
                time_ago(discussion.posted_at)
            ))
            .weak(),
        );
        ui.add_space(8.0);
        ui.label(&discussion.content);
        ui.add_space(12.0);
        ui.separator();

        ui.label(RichText::new(format!("{} replies", discussion.replies.len())).strong());
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for reply in &discussion.replies {
                    egui::Frame::none()
                        .inner_margin(egui::Margin::same(10.0))
                        .rounding(4.0)
                        .stroke(ui.style().visuals.widgets.noninteractive.bg_stroke)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new(format!(
                                    "{} · {}",
                                    reply.author,
                                    time_ago(reply.posted_at)
                                ))
                                .weak()
                                .small(),
                            );
                            ui.label(&reply.content);
                        });
                    ui.add_space(6.0);
                }

                ui.add_space(8.0);
                ui.text_edit_multiline(&mut self.reply_text);
                if ui.button("Reply").clicked() && !self.reply_text.trim().is_empty() {
                    store.add_reply(slug, session.display_name(), self.reply_text.trim());
                    self.reply_text.clear();
                }
            });
    }
}

/// Coarse relative timestamp, e.g. "2 hours ago".
pub fn time_ago(posted_at: DateTime<Local>) -> String {
    let elapsed = Local::now().signed_duration_since(posted_at);
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    plural(elapsed.num_days(), "day")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn time_ago_buckets() {
        let now = Local::now();
        assert_eq!(time_ago(now), "just now");
        assert_eq!(time_ago(now - Duration::minutes(5)), "5 minutes ago");
        assert_eq!(time_ago(now - Duration::hours(1)), "1 hour ago");
        assert_eq!(time_ago(now - Duration::hours(20)), "20 hours ago");
        assert_eq!(time_ago(now - Duration::days(3)), "3 days ago");
    }
}
