#![forbid(unsafe_code)]

//! Browser shell for the Common Features view.
//!
//! Startup resolves the mount element from the host page, compiles the route table
//! (twice, under strict mode, to catch impure compositions) and mounts
//! `<Root/>` behind a hash-fragment router.

pub mod direction;
pub mod error;
pub mod features;
pub mod mount;
pub mod root;
pub mod strict;

use crate::{
    error::StartupError,
    mount::{resolve_mount_target, Shell},
    root::{root_routes, Root},
    strict::{strict_compose, StrictMode},
};
use leptos::{leptos_dom::helpers::document, prelude::*};
use shell_config::{errors::ShellConfigError, get_config_from_str, ShellOptions};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Options from this crate's `[package.metadata.shell]` table, embedded at build time.
pub fn embedded_options() -> Result<ShellOptions, ShellConfigError> {
    get_config_from_str(include_str!("../Cargo.toml"))
}

/// Mounts the app into the element named by `options.mount_id`.
///
/// Any content already in that element is replaced, so starting twice against the
/// same page leaves a single rendered tree.
pub fn start(options: &ShellOptions) -> Result<Shell, StartupError> {
    options.validate()?;

    let id = options.mount_id.as_ref();
    let target = resolve_mount_target(&document(), id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| StartupError::MountTargetNotHtml { id: id.to_string() })?;

    let mode = StrictMode::from(options);
    let routes = strict_compose(mode, root_routes)??;
    log::debug!(
        "mounting into #{id} with {} route(s), strict mode {mode:?}",
        routes.len()
    );

    let mut shell = Shell::new(target);
    shell.mount(move || view! { <Root routes=routes/> });
    Ok(shell)
}
