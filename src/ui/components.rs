/// Reusable UI components

use crate::config::{CLOSE_ICON, EMPTY_MESSAGE, KEEP_ICON, KEYBOARD_ICON};
use crate::domain::display_host;
use crate::favicon::{candidates, next_index};
use crate::tab_data::Tab;
use patternfly_yew::prelude::{Button, ButtonVariant};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaviconImageProps {
    pub sources: Vec<String>,
}

/// Image that walks down `sources` each time one fails to load
#[function_component(FaviconImage)]
pub fn favicon_image(props: &FaviconImageProps) -> Html {
    let index = use_state(|| 0usize);

    let onerror = {
        let index = index.clone();
        let total = props.sources.len();
        Callback::from(move |_: Event| {
            if let Some(next) = next_index(*index, total) {
                index.set(next);
            }
        })
    };

    let src = props.sources.get(*index).cloned().unwrap_or_default();

    html! {
        <img class="tab-favicon" src={src} alt="" {onerror} />
    }
}

#[derive(Properties, PartialEq)]
pub struct TabCardProps {
    pub tab: Tab,
    pub onnavigate: Callback<MouseEvent>,
}

#[function_component(TabCard)]
pub fn tab_card(props: &TabCardProps) -> Html {
    let tab = &props.tab;
    let host = display_host(&tab.url).unwrap_or_default();

    html! {
        <div class="tab-card" style="cursor: pointer;" onclick={props.onnavigate.clone()}>
            <div class="tab-image">
                // keyed so the fallback chain restarts for every tab
                <FaviconImage key={tab.id.to_string()} sources={candidates(tab)} />
            </div>
            <div class="tab-title">{tab.display_title()}</div>
            <div class="tab-url">{host}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActionButtonsProps {
    pub onkeep: Callback<MouseEvent>,
    pub onclose: Callback<MouseEvent>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(ActionButtons)]
pub fn action_buttons(props: &ActionButtonsProps) -> Html {
    html! {
        <div class="actions">
            <Button onclick={props.onclose.clone()} disabled={props.disabled} variant={ButtonVariant::Danger}>
                <img src={CLOSE_ICON} alt="Close" />
            </Button>
            <Button onclick={props.onkeep.clone()} disabled={props.disabled} variant={ButtonVariant::Primary}>
                <img src={KEEP_ICON} alt="Keep" />
            </Button>
        </div>
    }
}

#[function_component(ShortcutHint)]
pub fn shortcut_hint() -> Html {
    html! {
        <div class="keyboard-shortcuts">
            <div class="keyboard-icon">
                <img src={KEYBOARD_ICON} alt="Keyboard" />
            </div>
            <span>{"R = Remove\u{a0}\u{a0}\u{a0}K = Keep"}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AllDoneProps {
    pub onclose: Callback<MouseEvent>,
}

/// Shown once every eligible tab has been judged
#[function_component(AllDone)]
pub fn all_done(props: &AllDoneProps) -> Html {
    html! {
        <>
            <div class="tab-card empty">
                <p>{EMPTY_MESSAGE}</p>
            </div>
            <div class="actions">
                <Button onclick={props.onclose.clone()} variant={ButtonVariant::Secondary} block={true}>
                    {"Close Extension"}
                </Button>
            </div>
        </>
    }
}
