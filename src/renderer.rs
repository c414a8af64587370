//! The observer a controller publishes Props to.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// The single observer of a [`FormController`](crate::FormController).
///
/// Implement this trait to bind a form to a view layer (a widget tree, a
/// terminal screen, a test harness). [`render`](Self::render) is called once
/// when the controller starts and again for every transition that actually
/// changes the state, receiving Props freshly derived via
/// [`FormLogic::view`](crate::FormLogic::view).
///
/// # Example
///
/// ```rust
/// use kivo_forms::Renderer;
/// use kivo_forms::features::login::LoginProps;
///
/// struct ConsoleRenderer;
///
/// impl Renderer<LoginProps> for ConsoleRenderer {
///     fn render(&mut self, props: LoginProps) {
///         println!("email={} visible={}", props.email, props.is_password_visible);
///     }
/// }
/// ```
pub trait Renderer<Props> {
    /// Render the given props.
    fn render(&mut self, props: Props);
}

impl<Props, R> Renderer<Props> for Box<R>
where
    R: Renderer<Props> + ?Sized,
{
    fn render(&mut self, props: Props) {
        (**self).render(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Renderer that captures every published Props for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so keep one clone for assertions and
/// hand the other (or [`boxed`](Self::boxed)) to the controller.
///
/// # Example
///
/// ```rust
/// use kivo_forms::features::login::{LoginLogic, LoginProps, LoginState};
/// use kivo_forms::{FormController, TestRenderer};
///
/// let renderer = TestRenderer::<LoginProps>::new();
/// let mut controller = FormController::new(LoginState::default(), LoginLogic, renderer.clone());
/// controller.start();
///
/// renderer.with_renders(|renders| {
///     (renders[0].on_email_change)("a@b.com".to_string());
/// });
/// controller.process_events();
///
/// assert_eq!(renderer.count(), 2);
/// renderer.with_renders(|renders| assert_eq!(renders[1].email, "a@b.com"));
/// ```
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A boxed renderer sharing this renderer's capture storage.
    pub fn boxed(&self) -> Box<dyn Renderer<Props> + Send> {
        Box::new(self.clone())
    }

    /// Number of renders so far.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// Invoking Props callbacks from inside the closure is fine: they only
    /// queue events and never re-enter the renderer.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[Props]) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}
