//! Event emitter for embedding callbacks in Props.

use flume::Sender;

/// Event emitter that can be embedded in Props.
///
/// Clone this handle to build the callbacks a screen wires to its widgets
/// (text changes, button clicks, visibility toggles). Invoking a callback only
/// queues the event; the owning [`FormController`](crate::FormController)
/// reduces it on its next [`submit`](crate::FormController::submit) or
/// [`process_events`](crate::FormController::process_events) call.
///
/// # Example
///
/// ```rust
/// use kivo_forms::{Effect, Emitter, FormLogic};
///
/// #[derive(Clone, PartialEq)]
/// struct SearchState { query: String }
///
/// enum SearchEvent { QueryChanged(String) }
///
/// struct SearchProps {
///     query: String,
///     on_query_change: Box<dyn Fn(String) + Send>,
/// }
///
/// struct SearchLogic;
///
/// impl FormLogic<SearchEvent, SearchState, SearchProps> for SearchLogic {
///     fn init(&self, state: SearchState) -> (SearchState, Effect<SearchEvent>) {
///         (state, Effect::none())
///     }
///
///     fn update(&self, event: SearchEvent, _state: &SearchState) -> (SearchState, Effect<SearchEvent>) {
///         match event {
///             SearchEvent::QueryChanged(query) => (SearchState { query }, Effect::none()),
///         }
///     }
///
///     fn view(&self, state: &SearchState, emitter: &Emitter<SearchEvent>) -> SearchProps {
///         let emitter = emitter.clone();
///         SearchProps {
///             query: state.query.clone(),
///             on_query_change: Box::new(move |query| emitter.emit(SearchEvent::QueryChanged(query))),
///         }
///     }
/// }
/// ```
pub struct Emitter<Event>(pub(crate) Sender<Event>);

impl<Event> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Emit an event.
    ///
    /// The event is dropped if its controller no longer exists.
    pub fn emit(&self, event: Event) {
        self.0.send(event).ok();
    }
}
