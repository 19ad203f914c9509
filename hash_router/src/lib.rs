#![forbid(unsafe_code)]

//! Hash-fragment routing for client-side rendered Leptos apps.
//!
//! The router reads its virtual path from `window.location.hash`, so an app can be
//! hosted as static files. Routes are declared as an ordered [`RouteTable`], compiled
//! and validated once, and resolved first-match on every `hashchange`.

pub mod components;
mod error;
pub mod hooks;
pub mod location;
mod matching;
pub mod params;

pub use error::*;
pub use location::href;
pub use matching::*;
pub use params::ParamsMap;
