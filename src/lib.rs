//! Form state controllers and an injectable theme flag for the KivoDesign toolkit.
//!
//! Each screen owns a [`FormController`]: the view emits events, the
//! controller reduces them through a pure [`FormLogic`] into a new state, and
//! the single [`Renderer`] observing it receives fresh Props. Nothing but the
//! controller touches the state.
//!
//! The login and registration screens live in [`features`]; the dark theme
//! flag lives in [`theme`] and is owned by an [`AppContext`].
//!
//! ## Example
//!
//! ```rust
//! use kivo_forms::features::login::{LoginEvent, LoginProps};
//! use kivo_forms::{AppContext, Renderer};
//!
//! struct LoginView {
//!     last_email: String,
//! }
//!
//! impl Renderer<LoginProps> for &mut LoginView {
//!     fn render(&mut self, props: LoginProps) {
//!         self.last_email = props.email;
//!     }
//! }
//!
//! let mut app = AppContext::default();
//! let mut view = LoginView { last_email: String::new() };
//!
//! {
//!     let mut login = app.login_controller(&mut view);
//!     login.submit(LoginEvent::EmailChanged("a@b.com".to_string()));
//!     login.submit(LoginEvent::TogglePasswordVisibility);
//!     assert!(login.state().is_password_visible);
//! }
//! assert_eq!(view.last_email, "a@b.com");
//!
//! let theme = app.theme();
//! app.theme_mut().toggle_theme();
//! assert!(theme.is_dark());
//! ```

mod app;
pub mod config;
mod controller;
pub mod dto;
mod effect;
mod emitter;
mod error;
pub mod features;
mod logic;
mod renderer;
pub mod theme;

pub use app::AppContext;
pub use config::AppConfig;
pub use controller::FormController;
pub use effect::Effect;
pub use emitter::Emitter;
pub use error::{Error, Result};
pub use logic::FormLogic;
pub use renderer::Renderer;
pub use theme::{ThemeMode, ThemeReader, ThemeState, ThemeSubscription};

#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
