//! Table-driven finite state machine
//!
//! The machine owns the current state and a transition table; behavior lives
//! behind the `StateHooks` trait (entry/exit/do callbacks plus in-state
//! event handling). An event either matches a table row and switches states,
//! or is handed to the hooks, which may request a programmatic jump. A
//! programmatic jump carries no causing event.

/// Typed callbacks invoked by the machine
pub trait StateHooks {
    type State: Copy + PartialEq;
    type Event: Copy + PartialEq;

    /// Called after the machine has switched into `state`
    fn state_entered(&mut self, state: Self::State, cause: Option<Self::Event>);

    /// Called before the machine leaves `state`
    fn state_left(&mut self, state: Self::State, cause: Option<Self::Event>);

    /// Periodic in-state work; defaults to nothing
    fn state_do(&mut self, _state: Self::State) {}

    /// Handle an event that matched no table row. Returning a state requests
    /// a programmatic switch, delivered with `cause = None`.
    fn handle_event(&mut self, state: Self::State, event: Self::Event) -> Option<Self::State>;
}

struct Transition<S, E> {
    from: S,
    events: Vec<E>,
    to: S,
}

/// A finite state machine over states `S` and events `E`
pub struct StateMachine<S, E> {
    current: S,
    running: bool,
    transitions: Vec<Transition<S, E>>,
}

impl<S: Copy + PartialEq, E: Copy + PartialEq> StateMachine<S, E> {
    /// Machine positioned at `initial`; call `start` to fire its entry hook
    pub fn new(initial: S) -> Self {
        Self {
            current: initial,
            running: false,
            transitions: Vec::new(),
        }
    }

    /// Register `from --(any of events)--> to`
    pub fn add_transition(&mut self, from: S, events: &[E], to: S) {
        self.transitions.push(Transition {
            from,
            events: events.to_vec(),
            to,
        });
    }

    pub fn current(&self) -> S {
        self.current
    }

    /// Enter the initial state
    pub fn start<H>(&mut self, hooks: &mut H)
    where
        H: StateHooks<State = S, Event = E>,
    {
        if self.running {
            return;
        }
        self.running = true;
        hooks.state_entered(self.current, None);
    }

    /// Feed one event through the table, falling back to in-state handling
    pub fn dispatch<H>(&mut self, event: E, hooks: &mut H)
    where
        H: StateHooks<State = S, Event = E>,
    {
        if !self.running {
            return;
        }
        if let Some(to) = self.lookup(event) {
            self.switch(to, Some(event), hooks);
        } else if let Some(to) = hooks.handle_event(self.current, event) {
            self.switch(to, None, hooks);
        }
    }

    /// Programmatic jump with no causing event
    pub fn goto<H>(&mut self, to: S, hooks: &mut H)
    where
        H: StateHooks<State = S, Event = E>,
    {
        if self.running {
            self.switch(to, None, hooks);
        }
    }

    /// Run the current state's periodic hook
    pub fn tick<H>(&mut self, hooks: &mut H)
    where
        H: StateHooks<State = S, Event = E>,
    {
        if self.running {
            hooks.state_do(self.current);
        }
    }

    fn lookup(&self, event: E) -> Option<S> {
        self.transitions
            .iter()
            .find(|t| t.from == self.current && t.events.contains(&event))
            .map(|t| t.to)
    }

    fn switch<H>(&mut self, to: S, cause: Option<E>, hooks: &mut H)
    where
        H: StateHooks<State = S, Event = E>,
    {
        hooks.state_left(self.current, cause);
        self.current = to;
        hooks.state_entered(to, cause);
    }
}
