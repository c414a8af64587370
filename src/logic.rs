//! Form logic trait defining the reduction contract.

use crate::{Effect, Emitter};

/// Form logic trait defining the reduction contract.
///
/// Implementations must provide three pure functions:
/// - [`init`](Self::init): Prepare the initial state and any bootstrap effect
/// - [`update`](Self::update): Transform (Event, State) → (State, Effect)
/// - [`view`](Self::view): Derive Props from State with event emitter capability
///
/// `update` is total. An event without a defined transition must return a
/// state equal to the one it was given, which the controller treats as
/// "nothing to publish".
///
/// See the [crate-level documentation](crate) for a complete example.
pub trait FormLogic<Event: Send, State, Props> {
    /// Initialize the form from its starting state.
    ///
    /// Called once by [`FormController::start`](crate::FormController::start).
    fn init(&self, state: State) -> (State, Effect<Event>);

    /// Reduce an event to the next state and follow-up effects.
    ///
    /// All state changes must happen through this function.
    ///
    /// # Arguments
    ///
    /// * `event` - The event to process
    /// * `state` - The current state
    ///
    /// # Returns
    ///
    /// A tuple of `(State, Effect<Event>)` containing the next state and any
    /// effects to process.
    fn update(&self, event: Event, state: &State) -> (State, Effect<Event>);

    /// Reduce the current state to Props.
    ///
    /// The provided [`Emitter`] lets Props carry callbacks that queue events.
    fn view(&self, state: &State, emitter: &Emitter<Event>) -> Props;
}
