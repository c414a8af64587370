//! Registration form.

use crate::dto::RegisterRequest;
use crate::{Effect, Emitter, FormController, FormLogic, Renderer};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterState {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub is_password_visible: bool,
    pub is_confirm_password_visible: bool,
}

impl RegisterState {
    /// The request shape a future auth backend would receive.
    ///
    /// `confirm_password` stays on the client; it is not compared here.
    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterEvent {
    FullNameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ConfirmPasswordChanged(String),
    TogglePasswordVisibility,
    ToggleConfirmPasswordVisibility,
    Register,
    /// Navigate back to the login screen.
    Login,
    GoogleLogin,
}

pub struct RegisterProps {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub is_password_visible: bool,
    pub is_confirm_password_visible: bool,
    pub on_full_name_change: Box<dyn Fn(String) + Send>,
    pub on_email_change: Box<dyn Fn(String) + Send>,
    pub on_password_change: Box<dyn Fn(String) + Send>,
    pub on_confirm_password_change: Box<dyn Fn(String) + Send>,
    pub on_password_visibility_toggle: Box<dyn Fn() + Send>,
    pub on_confirm_password_visibility_toggle: Box<dyn Fn() + Send>,
    pub on_register_click: Box<dyn Fn() + Send>,
    pub on_login_click: Box<dyn Fn() + Send>,
    pub on_google_login_click: Box<dyn Fn() + Send>,
}

pub struct RegisterLogic;

pub type RegisterController<R> =
    FormController<RegisterEvent, RegisterState, RegisterProps, RegisterLogic, R>;

impl FormLogic<RegisterEvent, RegisterState, RegisterProps> for RegisterLogic {
    fn init(&self, state: RegisterState) -> (RegisterState, Effect<RegisterEvent>) {
        (state, Effect::none())
    }

    fn update(
        &self,
        event: RegisterEvent,
        state: &RegisterState,
    ) -> (RegisterState, Effect<RegisterEvent>) {
        let next = match event {
            RegisterEvent::FullNameChanged(full_name) => RegisterState {
                full_name,
                ..state.clone()
            },
            RegisterEvent::EmailChanged(email) => RegisterState {
                email,
                ..state.clone()
            },
            RegisterEvent::PasswordChanged(password) => RegisterState {
                password,
                ..state.clone()
            },
            RegisterEvent::ConfirmPasswordChanged(confirm_password) => RegisterState {
                confirm_password,
                ..state.clone()
            },
            RegisterEvent::TogglePasswordVisibility => RegisterState {
                is_password_visible: !state.is_password_visible,
                ..state.clone()
            },
            RegisterEvent::ToggleConfirmPasswordVisibility => RegisterState {
                is_confirm_password_visible: !state.is_confirm_password_visible,
                ..state.clone()
            },
            RegisterEvent::Register | RegisterEvent::Login | RegisterEvent::GoogleLogin => {
                state.clone()
            }
        };
        (next, Effect::none())
    }

    fn view(&self, state: &RegisterState, emitter: &Emitter<RegisterEvent>) -> RegisterProps {
        RegisterProps {
            full_name: state.full_name.clone(),
            email: state.email.clone(),
            password: state.password.clone(),
            confirm_password: state.confirm_password.clone(),
            is_password_visible: state.is_password_visible,
            is_confirm_password_visible: state.is_confirm_password_visible,
            on_full_name_change: emit_on_text(emitter, RegisterEvent::FullNameChanged),
            on_email_change: emit_on_text(emitter, RegisterEvent::EmailChanged),
            on_password_change: emit_on_text(emitter, RegisterEvent::PasswordChanged),
            on_confirm_password_change: emit_on_text(emitter, RegisterEvent::ConfirmPasswordChanged),
            on_password_visibility_toggle: emit_on_click(emitter, RegisterEvent::TogglePasswordVisibility),
            on_confirm_password_visibility_toggle: emit_on_click(
                emitter,
                RegisterEvent::ToggleConfirmPasswordVisibility,
            ),
            on_register_click: emit_on_click(emitter, RegisterEvent::Register),
            on_login_click: emit_on_click(emitter, RegisterEvent::Login),
            on_google_login_click: emit_on_click(emitter, RegisterEvent::GoogleLogin),
        }
    }
}

fn emit_on_text(
    emitter: &Emitter<RegisterEvent>,
    event: fn(String) -> RegisterEvent,
) -> Box<dyn Fn(String) + Send> {
    let emitter = emitter.clone();
    Box::new(move |text| emitter.emit(event(text)))
}

fn emit_on_click(emitter: &Emitter<RegisterEvent>, event: RegisterEvent) -> Box<dyn Fn() + Send> {
    let emitter = emitter.clone();
    Box::new(move || emitter.emit(event.clone()))
}

impl<R: Renderer<RegisterProps>> RegisterController<R> {
    /// A started registration controller with empty fields.
    pub fn open(renderer: R) -> Self {
        let mut controller = FormController::new(RegisterState::default(), RegisterLogic, renderer);
        controller.start();
        controller
    }
}
