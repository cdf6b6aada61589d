/// Popup presentation loop: what is on screen and what each user action does

use crate::config::{CLOSE_KEY, KEEP_KEY};
use crate::messages::{Request, Response};
use crate::tab_data::{Tab, TabId, WindowId};
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum LoopState {
    AwaitingSelection,
    Presenting(Tab),
    Empty,
}

impl LoopState {
    pub fn from_selection(tab: Option<Tab>) -> Self {
        match tab {
            Some(tab) => LoopState::Presenting(tab),
            None => LoopState::Empty,
        }
    }

    pub fn current(&self) -> Option<&Tab> {
        match self {
            LoopState::Presenting(tab) => Some(tab),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Keep,
    Close,
    Navigate,
    CloseInterface,
}

/// Host work requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Send(Request),
    Focus { tab_id: TabId, window_id: WindowId },
    CloseInterface,
}

/// Result of an action. `next` takes effect once `command` has succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub next: LoopState,
    pub command: Option<Command>,
}

impl Step {
    fn stay(state: &LoopState) -> Self {
        Step {
            next: state.clone(),
            command: None,
        }
    }
}

pub fn step(state: &LoopState, action: UserAction) -> Step {
    match (state, action) {
        (LoopState::Presenting(tab), UserAction::Keep) => Step {
            next: LoopState::AwaitingSelection,
            command: Some(Command::Send(Request::Keep { tab_id: tab.id })),
        },
        (LoopState::Presenting(tab), UserAction::Close) => Step {
            next: LoopState::AwaitingSelection,
            command: Some(Command::Send(Request::Remove { tab_id: tab.id })),
        },
        (LoopState::Presenting(tab), UserAction::Navigate) => Step {
            next: state.clone(),
            command: Some(Command::Focus {
                tab_id: tab.id,
                window_id: tab.window_id,
            }),
        },
        (LoopState::Empty, UserAction::CloseInterface) => Step {
            next: LoopState::Empty,
            command: Some(Command::CloseInterface),
        },
        _ => Step::stay(state),
    }
}

/// Allows one background request at a time
#[derive(Debug, Default)]
pub struct RequestGate {
    in_flight: bool,
}

impl RequestGate {
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn release(&mut self) {
        self.in_flight = false;
    }
}

/// `step`, except every action is dropped while a request is outstanding.
/// A `Send` command takes the gate until `release`.
pub fn dispatch(gate: &mut RequestGate, state: &LoopState, action: UserAction) -> Step {
    if gate.in_flight {
        debug!("Ignoring {:?} while a request is outstanding", action);
        return Step::stay(state);
    }

    let step = step(state, action);
    if let Some(Command::Send(_)) = step.command {
        gate.in_flight = true;
    }
    step
}

/// State to show once a command finished: `next` on success, `prior` otherwise
pub fn settle(prior: LoopState, next: LoopState, succeeded: bool) -> LoopState {
    if succeeded { next } else { prior }
}

/// Where the processed set comes from after a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reload {
    /// The reply already carries it
    Use(Vec<TabId>),
    /// Ask the background with `getProcessed`
    Fetch,
}

pub fn after_reply(request: Request, response: Response) -> Reload {
    match (request, response.processed) {
        (Request::Keep { .. }, Some(ids)) => Reload::Use(ids),
        _ => Reload::Fetch,
    }
}

/// Map a `KeyboardEvent.key` to an action; only meaningful while presenting
pub fn action_for_key(state: &LoopState, key: &str) -> Option<UserAction> {
    state.current()?;

    let key = key.to_lowercase();
    if key == CLOSE_KEY {
        Some(UserAction::Close)
    } else if key == KEEP_KEY {
        Some(UserAction::Keep)
    } else {
        None
    }
}
