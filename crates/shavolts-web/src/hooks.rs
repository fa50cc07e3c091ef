//! Browser-side glue for the state machines in `shavolts-app`
//!
//! Timers and scroll listeners registered here are removed when the owning
//! component is disposed.

use std::time::Duration;

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use shavolts_app::config::SiteSettings;
use shavolts_app::motion::ScrollRange;
use shavolts_app::{dispatch, Component, UpdateAction};
use tracing::{debug, warn};

/// Apply `msg` to a component held in a signal, returning the follow-up actions
pub fn send<C>(state: RwSignal<C>, msg: C::Message) -> Vec<UpdateAction>
where
    C: Component + Send + Sync + 'static,
{
    state
        .try_update(|component| dispatch(component, msg))
        .unwrap_or_default()
}

/// Perform the actions that need no router access
pub fn perform(actions: Vec<UpdateAction>, search_input: Option<NodeRef<html::Input>>) {
    for action in actions {
        match action {
            UpdateAction::FocusSearchInput => {
                if let Some(input) = search_input {
                    // the overlay mounts on this tick; focus on the next frame
                    request_animation_frame(move || {
                        if let Some(el) = input.get_untracked() {
                            if let Err(e) = el.focus() {
                                warn!("search focus failed: {:?}", e);
                            }
                        }
                    });
                }
            }
            UpdateAction::ScrollToAnchor { id } => scroll_to_anchor(id),
            UpdateAction::Navigate { href } => {
                debug!("navigation to {} left to the link element", href)
            }
        }
    }
}

fn scroll_to_anchor(id: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match target {
        Some(el) => el.scroll_into_view(),
        None => warn!("no element #{} to scroll to", id),
    }
}

/// Site settings provided at the root, or defaults outside the app tree
pub fn use_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_default()
}

/// Run `tick` every `ms` milliseconds while the calling component is alive
pub fn use_interval(ms: u32, tick: impl Fn() + 'static) {
    match set_interval_with_handle(tick, Duration::from_millis(u64::from(ms))) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => warn!("interval setup failed, timer disabled: {:?}", e),
    }
}

/// Whether motion effects should be suppressed, read once at mount
pub fn use_reduced_motion() -> bool {
    let motion = use_settings().motion;
    let prefers = web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches());
    if prefers.is_none() {
        warn!("matchMedia unavailable, assuming motion is fine");
    }
    motion.reduced(prefers.unwrap_or(false))
}

/// Scroll progress of `node` through `range`, updated on every window scroll
/// and resize.
///
/// `node` must not carry the transform driven by the result, or the measured
/// rect feeds back into its own progress.
pub fn use_scroll_progress(node: NodeRef<html::Div>, range: ScrollRange) -> ReadSignal<f64> {
    let (progress, set_progress) = signal(0.0);

    let measure = move || {
        let Some(el) = node.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let viewport = web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        set_progress.set(range.progress(rect.top(), rect.height(), viewport));
    };

    Effect::new(move || measure());
    let on_scroll = window_event_listener(ev::scroll, move |_| measure());
    let on_resize = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    progress
}
