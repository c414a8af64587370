//! Login form: email, password and a password visibility flag.

use crate::dto::LoginRequest;
use crate::{Effect, Emitter, FormController, FormLogic, Renderer};

/// Snapshot of the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub is_password_visible: bool,
}

impl LoginState {
    /// The request shape a future auth backend would receive.
    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Every user intent the login screen can raise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEvent {
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,
    Login,
    ForgotPassword,
    SignUp,
    GoogleLogin,
}

/// What the login screen renders, with one callback per intent.
pub struct LoginProps {
    pub email: String,
    pub password: String,
    pub is_password_visible: bool,
    pub on_email_change: Box<dyn Fn(String) + Send>,
    pub on_password_change: Box<dyn Fn(String) + Send>,
    pub on_password_visibility_toggle: Box<dyn Fn() + Send>,
    pub on_login_click: Box<dyn Fn() + Send>,
    pub on_forgot_password_click: Box<dyn Fn() + Send>,
    pub on_sign_up_click: Box<dyn Fn() + Send>,
    pub on_google_login_click: Box<dyn Fn() + Send>,
}

pub struct LoginLogic;

/// A login controller bound to the given view layer.
pub type LoginController<R> = FormController<LoginEvent, LoginState, LoginProps, LoginLogic, R>;

impl FormLogic<LoginEvent, LoginState, LoginProps> for LoginLogic {
    fn init(&self, state: LoginState) -> (LoginState, Effect<LoginEvent>) {
        (state, Effect::none())
    }

    fn update(&self, event: LoginEvent, state: &LoginState) -> (LoginState, Effect<LoginEvent>) {
        let next = match event {
            LoginEvent::EmailChanged(email) => LoginState {
                email,
                ..state.clone()
            },
            LoginEvent::PasswordChanged(password) => LoginState {
                password,
                ..state.clone()
            },
            LoginEvent::TogglePasswordVisibility => LoginState {
                is_password_visible: !state.is_password_visible,
                ..state.clone()
            },
            // Submit, recovery, sign-up navigation and social login have no
            // transition yet.
            LoginEvent::Login
            | LoginEvent::ForgotPassword
            | LoginEvent::SignUp
            | LoginEvent::GoogleLogin => state.clone(),
        };
        (next, Effect::none())
    }

    fn view(&self, state: &LoginState, emitter: &Emitter<LoginEvent>) -> LoginProps {
        LoginProps {
            email: state.email.clone(),
            password: state.password.clone(),
            is_password_visible: state.is_password_visible,
            on_email_change: {
                let emitter = emitter.clone();
                Box::new(move |email| emitter.emit(LoginEvent::EmailChanged(email)))
            },
            on_password_change: {
                let emitter = emitter.clone();
                Box::new(move |password| emitter.emit(LoginEvent::PasswordChanged(password)))
            },
            on_password_visibility_toggle: emit_on_click(emitter, LoginEvent::TogglePasswordVisibility),
            on_login_click: emit_on_click(emitter, LoginEvent::Login),
            on_forgot_password_click: emit_on_click(emitter, LoginEvent::ForgotPassword),
            on_sign_up_click: emit_on_click(emitter, LoginEvent::SignUp),
            on_google_login_click: emit_on_click(emitter, LoginEvent::GoogleLogin),
        }
    }
}

fn emit_on_click(emitter: &Emitter<LoginEvent>, event: LoginEvent) -> Box<dyn Fn() + Send> {
    let emitter = emitter.clone();
    Box::new(move || emitter.emit(event.clone()))
}

impl<R: Renderer<LoginProps>> LoginController<R> {
    /// A started login controller with empty fields.
    pub fn open(renderer: R) -> Self {
        let mut controller = FormController::new(LoginState::default(), LoginLogic, renderer);
        controller.start();
        controller
    }
}
