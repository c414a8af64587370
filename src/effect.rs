//! Declarative follow-up events produced by a transition.

use crate::Emitter;

/// Declarative description of events to be queued after a transition.
///
/// Effects are returned from [`FormLogic::init`](crate::FormLogic::init) and
/// [`FormLogic::update`](crate::FormLogic::update) alongside the next state.
/// The controller executes them right after publishing that state, so any
/// events they emit are reduced in the same [`submit`](crate::FormController::submit)
/// call, after every event that was already queued.
///
/// # Example
///
/// ```rust
/// use kivo_forms::Effect;
///
/// #[derive(Clone)]
/// enum Event {
///     Clear,
///     QueryChanged(String),
/// }
///
/// let effect = Effect::just(Event::Clear);
///
/// let effect = Effect::batch(vec![
///     Effect::just(Event::Clear),
///     Effect::just(Event::QueryChanged("kivo".to_string())),
/// ]);
///
/// let effect: Effect<Event> = Effect::none();
/// ```
#[allow(clippy::type_complexity)]
pub struct Effect<Event>(Box<dyn Fn(&Emitter<Event>) + Send + 'static>);

impl<Event: Send + 'static> Effect<Event> {
    /// Run the effect against an emitter.
    pub fn execute(&self, emitter: &Emitter<Event>) {
        (self.0)(emitter);
    }

    /// An effect that emits a single event.
    pub fn just(event: Event) -> Self
    where
        Event: Clone,
    {
        Self(Box::new(move |emitter: &Emitter<Event>| {
            emitter.emit(event.clone());
        }))
    }

    /// An effect that does nothing.
    ///
    /// Every transition of the login and register forms returns this.
    pub fn none() -> Self {
        Self(Box::new(|_| {}))
    }

    /// Combine effects; their events are queued in the given order.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        Self(Box::new(move |emitter: &Emitter<Event>| {
            for effect in &effects {
                effect.execute(emitter);
            }
        }))
    }
}

impl<Event: Send + 'static> Default for Effect<Event> {
    fn default() -> Self {
        Self::none()
    }
}
