//! The form controller that owns one form's state and drives its event loop.

use core::marker::PhantomData;

use flume::Receiver;
use tracing::{debug, trace};

use crate::{Emitter, FormLogic, Renderer};

/// Owns exactly one live form state and reduces events into it.
///
/// The controller:
/// 1. Prepares the starting state and initial effect via [`FormLogic::init`]
/// 2. Processes events through [`FormLogic::update`]
/// 3. Reduces the state to Props via [`FormLogic::view`]
/// 4. Publishes Props to its single [`Renderer`]
///
/// Events reach the controller either directly through [`submit`](Self::submit)
/// or through the [`Emitter`] captured in Props callbacks. Both paths share one
/// FIFO queue, so events are reduced strictly in the order they were emitted.
/// A transition that leaves the state unchanged publishes nothing.
///
/// Nothing else mutates the state: it is replaced wholesale by the value
/// `update` returns.
///
/// # Type Parameters
///
/// * `Event` - The form's closed set of user intents
/// * `State` - The immutable snapshot of field values and flags
/// * `Props` - What the view layer renders
/// * `Logic` - The reduction (implements [`FormLogic`])
/// * `Render` - The observer (implements [`Renderer`])
pub struct FormController<Event, State, Props, Logic, Render>
where
    Event: Send,
    State: Clone + PartialEq,
    Logic: FormLogic<Event, State, Props>,
    Render: Renderer<Props>,
{
    logic: Logic,
    renderer: Render,
    event_receiver: Receiver<Event>,
    state: State,
    emitter: Emitter<Event>,
    started: bool,
    _props: PhantomData<Props>,
}

impl<Event, State, Props, Logic, Render> FormController<Event, State, Props, Logic, Render>
where
    Event: Send + core::fmt::Debug + 'static,
    State: Clone + PartialEq,
    Logic: FormLogic<Event, State, Props>,
    Render: Renderer<Props>,
{
    /// Create a new controller.
    ///
    /// Nothing is rendered until [`start`](Self::start) is called.
    ///
    /// # Arguments
    ///
    /// * `initial_state` - The state the form opens with
    /// * `logic` - The form's reduction
    /// * `renderer` - The view layer observing this form
    pub fn new(initial_state: State, logic: Logic, renderer: Render) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        FormController {
            logic,
            renderer,
            event_receiver,
            state: initial_state,
            emitter: Emitter::new(event_sender),
            started: false,
            _props: PhantomData,
        }
    }

    /// Initialize the form and publish its first Props.
    ///
    /// - Runs [`FormLogic::init`] on the state given at construction.
    /// - Renders the initialized state unconditionally.
    /// - Executes the initial effect and reduces any events it queued.
    ///
    /// Calling `start` again is a no-op.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        let (state, effect) = self.logic.init(self.state.clone());
        self.state = state;

        let props = self.logic.view(&self.state, &self.emitter);
        self.renderer.render(props);

        effect.execute(&self.emitter);
        self.process_events();
    }

    /// Accept one event and reduce everything queued up to and including it.
    ///
    /// Never fails. Events without a defined transition leave the state as it
    /// was and publish nothing.
    pub fn submit(&mut self, event: Event) {
        self.emitter.emit(event);
        self.process_events();
    }

    /// Reduce every queued event, oldest first.
    ///
    /// Use this after invoking Props callbacks, which only queue events.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.step(event);
        }
    }

    /// The latest state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// A handle for queueing events from outside the Props callbacks.
    pub fn emitter(&self) -> Emitter<Event> {
        self.emitter.clone()
    }

    fn step(&mut self, event: Event) {
        debug!(?event, "reducing form event");

        let (next_state, effect) = self.logic.update(event, &self.state);

        if next_state == self.state {
            trace!("transition left state unchanged, nothing to publish");
        } else {
            self.state = next_state;
            if self.started {
                let props = self.logic.view(&self.state, &self.emitter);
                self.renderer.render(props);
            }
        }

        effect.execute(&self.emitter);
    }
}
