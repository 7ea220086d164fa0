// Login view
// Mock authentication: any credentials are accepted, nothing is verified.
// The resulting session is persisted so the portal reopens signed in.

use egui::{Color32, RichText};

use crate::models::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoginMode {
    SignIn,
    Register,
}

pub struct LoginView {
    mode: LoginMode,
    name: String,
    email: String,
    password: String,
    error_message: Option<String>,
}

impl Default for LoginView {
    fn default() -> Self {
        Self {
            mode: LoginMode::SignIn,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            error_message: None,
        }
    }
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    fn submit(&mut self) -> Option<Session> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error_message = Some("Email and password are required".to_string());
            return None;
        }
        match self.mode {
            LoginMode::SignIn => Some(Session::sign_in(self.email.trim())),
            LoginMode::Register => {
                if self.name.trim().is_empty() {
                    self.error_message = Some("Name is required to register".to_string());
                    return None;
                }
                Some(Session::register(self.name.trim(), self.email.trim()))
            }
        }
    }

    /// Render the login form. Returns a session once the user submits.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<Session> {
        let mut session = None;

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading("Counselpoint");
            ui.label(RichText::new("School Counselling Portal").weak());
            ui.add_space(24.0);

            egui::Frame::none()
                .inner_margin(egui::Margin::same(20.0))
                .rounding(6.0)
                .stroke(ui.style().visuals.widgets.noninteractive.bg_stroke)
                .show(ui, |ui| {
                    ui.set_max_width(320.0);

                    ui.horizontal(|ui| {
                        ui.selectable_value(&mut self.mode, LoginMode::SignIn, "Sign In");
                        ui.selectable_value(&mut self.mode, LoginMode::Register, "Register");
                    });
                    ui.add_space(12.0);

                    if let Some(ref error) = self.error_message {
                        ui.colored_label(Color32::RED, error);
                        ui.add_space(8.0);
                    }

                    if self.mode == LoginMode::Register {
                        ui.label("Name");
                        ui.text_edit_singleline(&mut self.name);
                        ui.add_space(8.0);
                    }

                    ui.label("Email");
                    ui.text_edit_singleline(&mut self.email);
                    ui.add_space(8.0);

                    ui.label("Password");
                    ui.add(egui::TextEdit::singleline(&mut self.password).password(true));
                    ui.add_space(16.0);

                    let button_label = match self.mode {
                        LoginMode::SignIn => "Sign In",
                        LoginMode::Register => "Create Account",
                    };
                    if ui.button(button_label).clicked() {
                        session = self.submit();
                    }
                });
        });

        session
    }
}
