use crate::direction::Direction;
use leptos::prelude::*;

/// The feature view served at `#/`.
///
/// Its content is owned elsewhere; the shell only guarantees the `dir` it is given is
/// applied to the whole subtree.
#[component]
pub fn CommonFeatures(direction: Direction) -> impl IntoView {
    log::debug!("rendering <CommonFeatures/> ({direction})");

    view! {
        <section class="common-features" dir=direction.as_str()>
            <h1>"Common Features"</h1>
        </section>
    }
}
