// Application shell
// Top-level eframe app: mock-auth gate, navigation bar, and page dispatch.

use egui::RichText;

use crate::config::PortalConfig;
use crate::models::session::Session;
use crate::services::appointment_store::AppointmentStore;
use crate::services::directory::CounselorDirectory;
use crate::services::forum_store::ForumStore;
use crate::services::resources::ResourceLibrary;
use crate::services::session::SessionService;
use crate::ui_egui::calendar::{CalendarAction, WeeklyCalendar};
use crate::ui_egui::theme;
use crate::ui_egui::views::{counsellors, dashboard, forum::ForumView, login::LoginView, resources};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Calendar,
    Counsellors,
    Forum,
    Resources,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Calendar,
        Page::Counsellors,
        Page::Forum,
        Page::Resources,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Calendar => "Calendar",
            Self::Counsellors => "Counsellors",
            Self::Forum => "Forum",
            Self::Resources => "Resources",
        }
    }
}

pub struct PortalApp {
    session: Option<Session>,
    session_service: Option<SessionService>,
    login: LoginView,
    page: Page,
    store: AppointmentStore,
    directory: CounselorDirectory,
    forum_store: ForumStore,
    resources: ResourceLibrary,
    calendar: WeeklyCalendar,
    forum_view: ForumView,
    selected_counselor: Option<i64>,
}

impl PortalApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: PortalConfig) -> Self {
        theme::apply_theme(&cc.egui_ctx, theme::detect_mode());

        let session_service = match SessionService::new() {
            Ok(service) => Some(service),
            Err(error) => {
                log::warn!("Session persistence unavailable: {}", error);
                None
            }
        };
        let session = session_service.as_ref().and_then(|service| service.load());

        let directory = CounselorDirectory::seeded();
        let store = AppointmentStore::seeded(directory.all());

        Self {
            session,
            session_service,
            login: LoginView::new(),
            page: Page::Dashboard,
            store,
            directory,
            forum_store: ForumStore::seeded(),
            resources: ResourceLibrary::seeded(),
            calendar: WeeklyCalendar::new(&config),
            forum_view: ForumView::new(),
            selected_counselor: None,
        }
    }

    fn sign_in(&mut self, session: Session) {
        if let Some(service) = &self.session_service {
            if let Err(error) = service.save(&session) {
                log::warn!("Failed to persist session: {}", error);
            }
        }
        log::info!("Signed in as {}", session.email);
        self.session = Some(session);
        self.page = Page::Dashboard;
    }

    fn sign_out(&mut self) {
        if let Some(service) = &self.session_service {
            if let Err(error) = service.clear() {
                log::warn!("Failed to clear persisted session: {}", error);
            }
        }
        self.session = None;
        self.page = Page::Dashboard;
        self.selected_counselor = None;
    }

    fn apply_calendar_actions(&mut self, actions: Vec<CalendarAction>) {
        for action in actions {
            match action {
                CalendarAction::Save(appointment) => {
                    let conflicts = self.store.overlapping(
                        appointment.counselor_id,
                        appointment.day,
                        appointment.start,
                        appointment.end,
                    );
                    if !conflicts.is_empty() {
                        log::warn!(
                            "Appointment {} double-books {} existing session(s)",
                            appointment.id,
                            conflicts.len()
                        );
                    }
                    self.store.save(appointment);
                }
                CalendarAction::Delete(id) => {
                    self.store.remove(id);
                }
            }
        }
    }

    fn show_nav(&mut self, ctx: &egui::Context, session: &Session) {
        egui::TopBottomPanel::top("portal_nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Counselpoint").strong().size(16.0));
                ui.separator();
                for page in Page::ALL {
                    ui.selectable_value(&mut self.page, page, page.label());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Sign Out").clicked() {
                        self.sign_out();
                    }
                    ui.label(RichText::new(session.display_name()).weak());
                });
            });
        });
    }
}

impl eframe::App for PortalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Some(session) = self.session.clone() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                if let Some(session) = self.login.show(ui) {
                    self.sign_in(session);
                }
            });
            return;
        };

        self.show_nav(ctx, &session);

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Dashboard => {
                let data = dashboard::DashboardData {
                    session: &session,
                    appointments: &self.store,
                    directory: &self.directory,
                    forum: &self.forum_store,
                    resources: &self.resources,
                };
                if let Some(page) = dashboard::show(ui, &data) {
                    self.page = page;
                }
            }
            Page::Calendar => {
                let selected = self
                    .selected_counselor
                    .and_then(|id| self.directory.get(id));
                let actions = self.calendar.show(ui, self.store.all(), selected);
                self.apply_calendar_actions(actions);
            }
            Page::Counsellors => {
                if counsellors::show(
                    ui,
                    &self.directory,
                    &self.store,
                    &mut self.selected_counselor,
                ) {
                    self.page = Page::Calendar;
                }
            }
            Page::Forum => self.forum_view.show(ui, &mut self.forum_store, &session),
            Page::Resources => resources::show(ui, &self.resources),
        });
    }
}
