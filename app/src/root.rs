use crate::{direction::Direction, features::CommonFeatures};
use hash_router::{
    components::{HashRouter, Routes},
    RouteError, RouteMatch, RouteTable,
};
use leptos::prelude::*;

pub const ROOT_PATH: &str = "/";

/// The views the route table can bind to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    CommonFeatures { direction: Direction },
}

impl Screen {
    pub fn render(self) -> AnyView {
        match self {
            Screen::CommonFeatures { direction } => {
                view! { <CommonFeatures direction=direction/> }.into_any()
            }
        }
    }
}

/// Declares the app's routes.
///
/// Takes no input and touches no state, so every call yields an identical table.
pub fn root_routes() -> Result<RouteTable<Screen>, RouteError> {
    RouteTable::compile([(
        ROOT_PATH,
        Screen::CommonFeatures {
            direction: Direction::Ltr,
        },
    )])
}

fn render_route(route: RouteMatch<Screen>) -> AnyView {
    route.value.render()
}

#[component]
pub fn Root(routes: RouteTable<Screen>) -> impl IntoView {
    view! {
        <HashRouter>
            <main>
                <Routes table=routes view=render_route/>
            </main>
        </HashRouter>
    }
}
