/// Popup UI for Close or Keep extension

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::{APP_NAME, VERSION};
use crate::error::HostError;
use crate::host;
use crate::messages::Request;
use crate::operations::{count_remaining, select_next};
use crate::presenter::{action_for_key, after_reply, dispatch, settle, Command, LoopState, Reload, RequestGate, UserAction};
use crate::storage::StorageData;
use crate::tab_data::{Tab, TabId};
use crate::ui::components::{ActionButtons, AllDone, ShortcutHint, TabCard};
use log::{error, info};
use patternfly_yew::prelude::{Alert, AlertType, Spinner};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;

struct Selection {
    tab: Option<Tab>,
    remaining: usize,
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| LoopState::AwaitingSelection);
    let remaining = use_state(|| 0usize);
    let failure = use_state(|| None::<String>);
    // Gate for the single outstanding request; `pending` mirrors it for rendering
    let gate: Rc<RefCell<RequestGate>> = use_mut_ref(RequestGate::default);
    let pending = use_state(|| false);

    // Fresh open vs auto-reopen, then first selection
    {
        let state = state.clone();
        let remaining = remaining.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let processed = start_session().await;
                let selection = fetch_next(&processed).await;
                remaining.set(selection.remaining);
                state.set(LoopState::from_selection(selection.tab));
            });
            || ()
        });
    }

    let on_action = {
        let state = state.clone();
        let remaining = remaining.clone();
        let failure = failure.clone();
        let gate = gate.clone();
        let pending = pending.clone();

        Callback::from(move |action: UserAction| {
            let step = dispatch(&mut gate.borrow_mut(), &state, action);
            let Some(command) = step.command else {
                return;
            };

            match command {
                Command::CloseInterface => {
                    if let Err(e) = host::close_interface() {
                        error!("Error closing popup: {}", e);
                    }
                }
                Command::Focus { tab_id, window_id } => {
                    spawn_local(async move {
                        if let Err(e) = host::focus_tab(tab_id, window_id).await {
                            error!("Error switching to tab {}: {}", tab_id, e);
                        }
                    });
                }
                Command::Send(request) => {
                    pending.set(gate.borrow().is_busy());

                    let state = state.clone();
                    let remaining = remaining.clone();
                    let failure = failure.clone();
                    let gate = gate.clone();
                    let pending = pending.clone();
                    let prior = (*state).clone();
                    let next = step.next;

                    spawn_local(async move {
                        let reply = host::send(request).await;
                        state.set(settle(prior, next, reply.is_ok()));

                        match reply {
                            Ok(response) => {
                                failure.set(None);

                                let processed = match after_reply(request, response) {
                                    Reload::Use(ids) => ids,
                                    Reload::Fetch => load_processed().await,
                                };
                                let selection = fetch_next(&processed).await;
                                remaining.set(selection.remaining);
                                state.set(LoopState::from_selection(selection.tab));
                            }
                            Err(e) => {
                                error!("Error sending {:?}: {}", request, e);
                                failure.set(Some(e.to_string()));
                            }
                        }

                        gate.borrow_mut().release();
                        pending.set(false);
                    });
                }
            }
        })
    };

    // Keyboard shortcuts, rebound whenever the presented tab changes
    {
        let on_action = on_action.clone();
        use_effect_with((*state).clone(), move |current| {
            let current = current.clone();
            let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                if let Some(action) = action_for_key(&current, &event.key()) {
                    event.prevent_default();
                    on_action.emit(action);
                }
            });

            let document = web_sys::window().and_then(|window| window.document());
            match &document {
                Some(document) => {
                    if let Err(e) = document.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()) {
                        error!("Failed to attach keyboard shortcuts: {}", HostError::from(e));
                    }
                }
                None => error!("{}", HostError::DomMissing("document")),
            }

            move || {
                if let Some(document) = document {
                    if let Err(e) = document.remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()) {
                        error!("Failed to detach keyboard shortcuts: {}", HostError::from(e));
                    }
                }
                drop(listener);
            }
        });
    }

    let on_keep = on_action.reform(|_: MouseEvent| UserAction::Keep);
    let on_close = on_action.reform(|_: MouseEvent| UserAction::Close);
    let on_navigate = on_action.reform(|_: MouseEvent| UserAction::Navigate);
    let on_close_interface = on_action.reform(|_: MouseEvent| UserAction::CloseInterface);

    html! {
        <div class="padding-20">
            <div class="popup-header">
                <h1 class="popup-title">{APP_NAME}</h1>
                {match &*state {
                    LoopState::Presenting(_) => html! {
                        <span class="remaining-count">{format!("{} left", *remaining)}</span>
                    },
                    _ => html! {},
                }}
            </div>

            {match (*failure).clone() {
                Some(message) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {message}
                    </Alert>
                },
                None => html! {},
            }}

            {match &*state {
                LoopState::AwaitingSelection => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                LoopState::Presenting(tab) => html! {
                    <>
                        <TabCard tab={tab.clone()} onnavigate={on_navigate} />
                        <ActionButtons onkeep={on_keep} onclose={on_close} disabled={*pending} />
                        <ShortcutHint />
                    </>
                },
                LoopState::Empty => html! {
                    <AllDone onclose={on_close_interface} />
                },
            }}

            <p class="footer-popup">
                {format!("{} v{}", APP_NAME, VERSION)}
            </p>
        </div>
    }
}

// Helper functions

/// Reset the processed set unless this open was triggered by closing a tab,
/// then return the set to continue from
async fn start_session() -> Vec<TabId> {
    let stored = host::read_storage().await.unwrap_or_else(|e| {
        error!("Error reading auto-reopen flag: {}", e);
        StorageData::new()
    });

    let start = stored.session_start();
    info!("Popup opened: {:?}", start);

    let plan = start.plan();
    if let Some(data) = plan.write {
        if let Err(e) = host::write_storage(&data).await {
            error!("Error clearing auto-reopen flag: {}", e);
        }
    }
    if let Some(request) = plan.reset {
        if let Err(e) = host::send(request).await {
            error!("Error resetting processed tabs: {}", e);
        }
    }

    load_processed().await
}

async fn load_processed() -> Vec<TabId> {
    match host::send(Request::GetProcessed).await {
        Ok(response) => response.into_processed(),
        Err(e) => {
            error!("Error loading processed tabs: {}", e);
            Vec::new()
        }
    }
}

async fn fetch_next(processed: &[TabId]) -> Selection {
    let tabs = host::current_window_tabs().await.unwrap_or_else(|e| {
        error!("Error fetching tabs: {}", e);
        Vec::new()
    });

    Selection {
        tab: select_next(&tabs, processed, processed.is_empty()).cloned(),
        remaining: count_remaining(&tabs, processed),
    }
}
