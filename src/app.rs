//! The top-level application context.

use tracing::info;

use crate::config::AppConfig;
use crate::features::login::{LoginController, LoginProps};
use crate::features::register::{RegisterController, RegisterProps};
use crate::theme::{ThemeReader, ThemeState};
use crate::Renderer;

/// Owns the process-wide pieces of the application and builds screens.
///
/// The theme flag lives here and is passed down explicitly: views get a
/// [`ThemeReader`] from [`theme`](Self::theme), and the single toggle path goes
/// through [`theme_mut`](Self::theme_mut).
pub struct AppContext {
    config: AppConfig,
    theme: ThemeState,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let mode = config.theme.resolve();
        info!(preference = ?config.theme, ?mode, "starting application context");
        Self {
            theme: ThemeState::new(mode),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn theme(&self) -> ThemeReader {
        self.theme.reader()
    }

    pub fn theme_mut(&mut self) -> &mut ThemeState {
        &mut self.theme
    }

    /// A fresh login screen controller. Each call is independent of the others.
    pub fn login_controller<R: Renderer<LoginProps>>(&self, renderer: R) -> LoginController<R> {
        LoginController::open(renderer)
    }

    /// A fresh registration screen controller.
    pub fn register_controller<R: Renderer<RegisterProps>>(
        &self,
        renderer: R,
    ) -> RegisterController<R> {
        RegisterController::open(renderer)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
