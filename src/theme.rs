//! The dark theme flag, owned by the application context and observed by views.
//!
//! [`ThemeState`] is the single writer. It hands out any number of
//! [`ThemeReader`]s, and each reader can [`subscribe`](ThemeReader::subscribe)
//! to be told about every later change. Only real changes are published:
//! setting the flag to the value it already holds notifies nobody.

use core::sync::atomic::Ordering;

use flume::{Receiver, Sender};
use portable_atomic::AtomicBool;
use portable_atomic_util::Arc;
use serde::{Deserialize, Serialize};
use spin::Mutex;
use tracing::debug;

/// Light or dark visual mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        Self::from_dark(!self.is_dark())
    }
}

struct Shared {
    dark: AtomicBool,
    subscribers: Mutex<Vec<Sender<ThemeMode>>>,
}

impl Shared {
    fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.dark.load(Ordering::Acquire))
    }
}

/// The writable side of the theme flag.
///
/// Not `Clone`: whoever owns this value is the one place allowed to change the
/// theme. Hand views a [`ThemeReader`] instead.
pub struct ThemeState {
    shared: Arc<Shared>,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            shared: Arc::new(Shared {
                dark: AtomicBool::new(mode.is_dark()),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    pub fn set_theme(&mut self, dark: bool) {
        let previous = self.shared.dark.swap(dark, Ordering::AcqRel);
        if previous != dark {
            self.publish(ThemeMode::from_dark(dark));
        }
    }

    pub fn toggle_theme(&mut self) {
        let dark = !self.is_dark();
        self.set_theme(dark);
    }

    /// Return to the platform's preferred mode.
    ///
    /// Platform preference is not queried yet; this always selects
    /// [`ThemeMode::Light`].
    pub fn reset_to_system_theme(&mut self) {
        self.set_theme(system_theme().is_dark());
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn mode(&self) -> ThemeMode {
        self.shared.mode()
    }

    /// A read-only handle for views.
    pub fn reader(&self) -> ThemeReader {
        ThemeReader {
            shared: self.shared.clone(),
        }
    }

    fn publish(&self, mode: ThemeMode) {
        let mut subscribers = self.shared.subscribers.lock();
        subscribers.retain(|subscriber| subscriber.send(mode).is_ok());
        debug!(?mode, subscribers = subscribers.len(), "theme changed");
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(system_theme())
    }
}

/// The mode `reset_to_system_theme` falls back to.
pub(crate) fn system_theme() -> ThemeMode {
    ThemeMode::Light
}

/// Read access to the theme flag, cheap to clone and share between views.
#[derive(Clone)]
pub struct ThemeReader {
    shared: Arc<Shared>,
}

impl ThemeReader {
    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    pub fn mode(&self) -> ThemeMode {
        self.shared.mode()
    }

    /// Observe every change made after this call.
    ///
    /// The current value is not replayed; read it with [`mode`](Self::mode).
    pub fn subscribe(&self) -> ThemeSubscription {
        let (sender, receiver) = flume::unbounded();
        self.shared.subscribers.lock().push(sender);
        ThemeSubscription { receiver }
    }
}

/// A stream of theme changes. Dropping it unsubscribes.
pub struct ThemeSubscription {
    receiver: Receiver<ThemeMode>,
}

impl ThemeSubscription {
    /// The oldest change not yet seen, if any.
    pub fn try_next(&self) -> Option<ThemeMode> {
        self.receiver.try_recv().ok()
    }

    /// All pending changes, oldest first.
    pub fn drain(&self) -> Vec<ThemeMode> {
        self.receiver.try_iter().collect()
    }
}
