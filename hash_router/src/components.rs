use crate::{
    hooks::use_location,
    location::{self, HashUrl, Location, LocationProvider},
    ParamsMap, RouteMatch, RouteTable,
};
use leptos::prelude::*;

/// Shared router state, available to every component beneath [`HashRouter`].
#[derive(Clone, Debug)]
pub struct RouterContext {
    pub(crate) location: Location,
}

impl RouterContext {
    pub fn location(&self) -> Location {
        self.location.clone()
    }
}

/// Params of the route currently rendered by [`Routes`].
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RouteParams(pub ParamsMap);

/// Installs hash-fragment routing for its children.
///
/// Reads the current `window.location.hash`, listens for `hashchange` and provides a
/// [`RouterContext`] to descendants. The listener is removed when the router unmounts.
#[component]
pub fn HashRouter(children: Children) -> impl IntoView {
    let provider =
        HashUrl::new().expect("could not access `window.location`");
    provider.init();

    let location = Location::new(provider.as_url().clone());
    provide_context(RouterContext { location });

    children()
}

/// Renders the view for the first route in `table` that matches the current path.
///
/// When nothing matches, nothing is rendered.
#[component]
pub fn Routes<T, F>(table: RouteTable<T>, view: F) -> impl IntoView
where
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(RouteMatch<T>) -> AnyView + Send + Sync + 'static,
{
    let location = use_location();
    let matched = Memo::new(move |_| {
        location.pathname.with(|path| table.first_match(path))
    });

    move || {
        matched.get().map(|route| {
            provide_context(RouteParams(route.params.clone()));
            view(route)
        })
    }
}

/// An in-app link. `href` is a router path such as `/` and is written as `#/`.
#[component]
pub fn A(#[prop(into)] href: String, children: Children) -> impl IntoView {
    let target = location::href(&href);
    view! { <a href=target>{children()}</a> }
}
