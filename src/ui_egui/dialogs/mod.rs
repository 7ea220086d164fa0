pub mod appointment_detail;
pub mod appointment_form;

pub use appointment_detail::{render_appointment_detail, AppointmentDetailState, DetailAction};
pub use appointment_form::{render_appointment_form, AppointmentFormState, FormAction};
