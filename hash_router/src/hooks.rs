use crate::{
    components::{RouteParams, RouterContext},
    location::{HashUrl, Location, LocationProvider},
    ParamsMap,
};
use leptos::prelude::*;

pub fn use_router() -> RouterContext {
    use_context::<RouterContext>()
        .expect("use_router() must be called within a <HashRouter/>")
}

pub fn use_location() -> Location {
    use_router().location()
}

/// Params captured by the matched route, e.g. `id` for `/tasks/:id`.
pub fn use_params_map() -> ParamsMap {
    use_context::<RouteParams>().map(|p| p.0).unwrap_or_default()
}

pub fn use_query_map() -> Memo<ParamsMap> {
    use_location().query
}

/// Returns a function that moves the app to another path by rewriting the fragment.
pub fn use_navigate() -> impl Fn(&str) + Clone {
    move |path: &str| {
        if let Err(e) = HashUrl::navigate(path) {
            #[cfg(feature = "tracing")]
            tracing::error!("failed to navigate to {path}: {e:?}");
            #[cfg(not(feature = "tracing"))]
            leptos::logging::error!("failed to navigate to {path}: {e:?}");
        }
    }
}
