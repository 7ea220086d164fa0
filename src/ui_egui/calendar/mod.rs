//! Weekly booking calendar.
//!
//! Owns the week window, the time grid, and the drag gesture, and renders
//! the slot grid with booked appointments overlaid. Mutations are returned
//! to the caller as actions; the calendar never touches the store directly.

pub mod drag;
pub mod overlay;
pub mod time_grid;
pub mod week;

use chrono::{Datelike, Local, NaiveDate};
use egui::{Align2, CursorIcon, FontId, Rect, RichText, Sense, Stroke, Vec2};
use egui_extras::DatePickerButton;

use crate::config::PortalConfig;
use crate::models::appointment::Appointment;
use crate::models::counselor::Counselor;
use crate::services::appointment_store::next_appointment_id;
use crate::ui_egui::dialogs::{
    render_appointment_detail, render_appointment_form, AppointmentDetailState,
    AppointmentFormState, DetailAction, FormAction,
};
use crate::ui_egui::theme::CalendarPalette;
use crate::ui_egui::viewport::ViewportClass;

use drag::DragController;
use overlay::{block_title, can_begin_drag, occupant_at};
use time_grid::{format_time, TimeGrid};
use week::WeekWindow;

const SLOT_HEIGHT: f32 = 28.0;
const TIME_LABEL_WIDTH: f32 = 64.0;

/// Mutation requested by the calendar this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarAction {
    Save(Appointment),
    Delete(i64),
}

pub struct WeeklyCalendar {
    week: WeekWindow,
    grid: TimeGrid,
    drag: DragController,
    picked_date: NaiveDate,
    form: Option<AppointmentFormState>,
    detail: Option<AppointmentDetailState>,
}

impl WeeklyCalendar {
    pub fn new(config: &PortalConfig) -> Self {
        let week = WeekWindow::starting_today();
        Self {
            picked_date: week.anchor(),
            week,
            grid: TimeGrid::new(config),
            drag: DragController::new(),
            form: None,
            detail: None,
        }
    }

    /// Render the calendar and return any mutations the user requested.
    /// `appointments` is the full booked list; `selected_counselor` gates
    /// drag-to-create but not rendering.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        appointments: &[Appointment],
        selected_counselor: Option<&Counselor>,
    ) -> Vec<CalendarAction> {
        let mut actions = Vec::new();
        let palette = CalendarPalette::from_ui(ui);
        let today = Local::now().date_naive();

        self.show_header(ui, selected_counselor);

        let class = ViewportClass::classify(ui.available_width());
        let days = self.week.visible_days(class.visible_day_count());
        let col_width = (ui.available_width() - TIME_LABEL_WIDTH) / days.len() as f32;

        self.show_day_strip(ui, &days, today, col_width, &palette);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let grid_top = ui.cursor().top();
                ui.spacing_mut().item_spacing.y = 0.0;

                for slot in self.grid.slots().to_vec() {
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;

                        ui.allocate_ui_with_layout(
                            Vec2::new(TIME_LABEL_WIDTH, SLOT_HEIGHT),
                            egui::Layout::right_to_left(egui::Align::Min),
                            |ui| {
                                ui.add_space(6.0);
                                ui.label(
                                    RichText::new(format_time(slot.hour, slot.minute))
                                        .size(11.0)
                                        .color(palette.gutter_text),
                                );
                            },
                        );

                        for day in &days {
                            let (rect, response) = ui.allocate_exact_size(
                                Vec2::new(col_width, SLOT_HEIGHT),
                                Sense::click_and_drag(),
                            );
                            self.show_cell(
                                ui,
                                rect,
                                &response,
                                *day,
                                slot,
                                today,
                                appointments,
                                selected_counselor,
                                &palette,
                            );
                        }
                    });
                }

                self.drive_drag(ui, grid_top, selected_counselor);
            });

        self.show_dialogs(ui.ctx(), appointments, &mut actions);
        actions
    }

    fn show_header(&mut self, ui: &mut egui::Ui, selected_counselor: Option<&Counselor>) {
        ui.horizontal(|ui| {
            ui.heading(self.week.title());
            ui.add_space(12.0);
            if ui.button("<").clicked() {
                self.week.previous_week();
                self.picked_date = self.week.anchor();
            }
            if ui.button("Today").clicked() {
                self.week.today();
                self.picked_date = self.week.anchor();
            }
            if ui.button(">").clicked() {
                self.week.next_week();
                self.picked_date = self.week.anchor();
            }
            ui.add_space(12.0);
            if ui
                .add(DatePickerButton::new(&mut self.picked_date).id_source("calendar_week_picker"))
                .changed()
            {
                self.week.select_date(self.picked_date);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match selected_counselor {
                    Some(counselor) => {
                        ui.label(
                            RichText::new(format!("Booking with {}", counselor.name)).italics(),
                        );
                    }
                    None => {
                        ui.label(
                            RichText::new("Select a counsellor to book a session")
                                .italics()
                                .weak(),
                        );
                    }
                }
            });
        });
        ui.add_space(4.0);
    }

    fn show_day_strip(
        &self,
        ui: &mut egui::Ui,
        days: &[NaiveDate],
        today: NaiveDate,
        col_width: f32,
        palette: &CalendarPalette,
    ) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.add_space(TIME_LABEL_WIDTH);
            for day in days {
                let (rect, _) =
                    ui.allocate_exact_size(Vec2::new(col_width, 24.0), Sense::hover());
                let color = if *day == today {
                    palette.today_text
                } else {
                    palette.header_text
                };
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    format!("{} {}", day.format("%a"), day.day()),
                    FontId::proportional(13.0),
                    color,
                );
            }
        });
    }

    #[allow(clippy::too_many_arguments)]
    fn show_cell(
        &mut self,
        ui: &mut egui::Ui,
        rect: Rect,
        response: &egui::Response,
        day: NaiveDate,
        slot: time_grid::TimeSlot,
        today: NaiveDate,
        appointments: &[Appointment],
        selected_counselor: Option<&Counselor>,
        palette: &CalendarPalette,
    ) {
        let painter = ui.painter();
        let background = if day == today {
            palette.today_cell_bg
        } else {
            palette.cell_bg
        };
        painter.rect_filled(rect, 0.0, background);

        // Grid lines: a stronger stroke on hour boundaries.
        let line = if slot.minute == 0 {
            palette.hour_line
        } else {
            palette.slot_line
        };
        painter.line_segment(
            [rect.left_top(), rect.right_top()],
            Stroke::new(1.0, line),
        );
        painter.line_segment(
            [rect.left_top(), rect.left_bottom()],
            Stroke::new(1.0, palette.divider),
        );

        let occupant = occupant_at(appointments, day, slot);
        if let Some(appointment) = occupant {
            let block = rect.shrink2(Vec2::new(2.0, 0.0));
            painter.rect_filled(block, 0.0, palette.booked);
            if response.hovered() {
                // Lift the hovered block above its neighbours.
                painter.rect_stroke(block, 0.0, Stroke::new(1.5, palette.booked_text));
            }
            if slot.minutes() == appointment.start_minutes() {
                painter.text(
                    block.left_top() + Vec2::new(6.0, 3.0),
                    Align2::LEFT_TOP,
                    block_title(&appointment.title),
                    FontId::proportional(12.0),
                    palette.booked_text,
                );
                painter.text(
                    block.left_top() + Vec2::new(6.0, 16.0),
                    Align2::LEFT_TOP,
                    format_time(slot.hour, slot.minute),
                    FontId::proportional(10.0),
                    palette.booked_text,
                );
            }
        } else if self.drag.covers(day, slot) {
            painter.rect_filled(rect, 0.0, palette.selection_fill);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, palette.selection_stroke));
        } else if response.hovered() && selected_counselor.is_some() {
            painter.rect_filled(rect, 0.0, palette.hover_overlay);
        }

        // One dialog at a time; the grid is inert while one is open.
        if self.form.is_some() || self.detail.is_some() {
            return;
        }

        match occupant {
            Some(appointment) => {
                if response.clicked() {
                    self.detail = Some(AppointmentDetailState::new(appointment.clone()));
                }
                response.clone().on_hover_cursor(CursorIcon::PointingHand);
            }
            None => {
                let Some(counselor) = selected_counselor else {
                    return;
                };
                if !can_begin_drag(appointments, Some(counselor.id), day, slot) {
                    return;
                }
                if response.drag_started() {
                    self.drag.begin(day, slot);
                } else if response.clicked() {
                    // A plain click books a single slot.
                    self.drag.begin(day, slot);
                    self.open_form(counselor);
                }
                response.clone().on_hover_cursor(CursorIcon::Crosshair);
            }
        }
    }

    /// Follow the pointer while a drag is active. Only the vertical position
    /// matters; the day was fixed when the gesture began.
    fn drive_drag(
        &mut self,
        ui: &mut egui::Ui,
        grid_top: f32,
        selected_counselor: Option<&Counselor>,
    ) {
        if !self.drag.is_dragging() {
            return;
        }

        if let Some(pos) = ui.ctx().pointer_latest_pos() {
            let slot = self.grid.slot_at_y(grid_top, pos.y, SLOT_HEIGHT);
            self.drag.update(slot);
        }

        if ui.ctx().input(|input| input.pointer.any_released()) {
            match selected_counselor {
                Some(counselor) => self.open_form(counselor),
                None => self.drag.cancel(),
            }
        }
    }

    fn open_form(&mut self, counselor: &Counselor) {
        if let Some(range) = self.drag.finish() {
            let draft = crate::models::appointment::AppointmentDraft {
                day: range.day,
                start: range.start,
                end: range.end,
                counselor_id: counselor.id,
            };
            self.form = Some(AppointmentFormState::new(draft, counselor.name.clone()));
        }
    }

    fn show_dialogs(
        &mut self,
        ctx: &egui::Context,
        appointments: &[Appointment],
        actions: &mut Vec<CalendarAction>,
    ) {
        if let Some(state) = self.form.as_mut() {
            match render_appointment_form(ctx, state, next_appointment_id(appointments)) {
                FormAction::Save(appointment) => {
                    actions.push(CalendarAction::Save(appointment));
                    self.form = None;
                }
                FormAction::Cancel => self.form = None,
                FormAction::None => {}
            }
        }

        if let Some(state) = self.detail.as_mut() {
            match render_appointment_detail(ctx, state) {
                DetailAction::Delete(id) => {
                    actions.push(CalendarAction::Delete(id));
                    self.detail = None;
                }
                DetailAction::Close => self.detail = None,
                DetailAction::None => {}
            }
        }
    }
}
