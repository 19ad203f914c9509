#![cfg(target_arch = "wasm32")]

use common_features_app::{
    error::StartupError,
    root::{root_routes, Screen},
    start,
};
use hash_router::{
    components::{HashRouter, Routes, A},
    hooks::{use_navigate, use_params_map, use_query_map},
    location::{HashUrl, LocationProvider},
    RouteMatch, RouteTable,
};
use leptos::{
    leptos_dom::helpers::{document, window},
    mount::mount_to,
    prelude::*,
};
use shell_config::ShellOptions;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn host_page(id: &str) -> HtmlElement {
    let document = document();
    if let Some(stale) = document.get_element_by_id(id) {
        stale.remove();
    }
    let wrapper = document.create_element("div").unwrap();
    wrapper.set_id(id);
    document.body().unwrap().append_child(&wrapper).unwrap();
    wrapper.unchecked_into()
}

fn options(id: &str) -> ShellOptions {
    ShellOptions::builder().mount_id(id).strict_mode(true).build()
}

fn features(target: &Element) -> u32 {
    target
        .query_selector_all("main > section.common-features")
        .unwrap()
        .length()
}

fn feature_dir(target: &Element) -> Option<String> {
    target
        .query_selector("main > section.common-features")
        .unwrap()
        .and_then(|section| section.get_attribute("dir"))
}

fn text_of(target: &Element, selector: &str) -> String {
    target
        .query_selector(selector)
        .unwrap()
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

fn click(target: &Element, selector: &str) {
    target
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .unchecked_into::<HtmlElement>()
        .click();
}

async fn next_tick() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 10)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn mounts_features_into_root() {
    window().location().set_hash("#/").unwrap();
    let target = host_page("root");

    let shell = start(&options("root")).unwrap();
    assert!(shell.is_mounted());

    assert_eq!(features(&target), 1);
    let section = target
        .query_selector("section.common-features")
        .unwrap()
        .unwrap();
    assert_eq!(section.get_attribute("dir").as_deref(), Some("ltr"));
}

#[wasm_bindgen_test]
fn missing_mount_target_fails_without_rendering() {
    let before = document().body().unwrap().inner_html();

    let err = start(&options("no-such-element")).err();
    assert_eq!(
        err,
        Some(StartupError::MissingMountTarget {
            id: "no-such-element".into()
        })
    );
    assert_eq!(document().body().unwrap().inner_html(), before);
}

#[wasm_bindgen_test]
fn starting_twice_replaces_content() {
    window().location().set_hash("#/").unwrap();
    let target = host_page("twice");
    target.set_inner_html("<p>loading…</p>");

    let first = start(&options("twice")).unwrap();
    let second = start(&options("twice")).unwrap();

    assert_eq!(features(&target), 1);
    assert!(target.query_selector("p").unwrap().is_none());
    first.forget();
    second.forget();
}

#[wasm_bindgen_test]
async fn unknown_hash_renders_nothing() {
    window().location().set_hash("#/").unwrap();
    next_tick().await;
    let target = host_page("routing");
    let shell = start(&options("routing")).unwrap();
    assert_eq!(features(&target), 1);

    window().location().set_hash("#/unknown").unwrap();
    next_tick().await;
    assert_eq!(features(&target), 0);
    assert!(target.query_selector("main").unwrap().is_some());

    window().location().set_hash("#/").unwrap();
    next_tick().await;
    assert_eq!(features(&target), 1);
    assert_eq!(feature_dir(&target).as_deref(), Some("ltr"));
    shell.forget();
}

#[wasm_bindgen_test]
fn svg_mount_target_is_rejected() {
    const SVG_NS: &str = "http://www.w3.org/2000/svg";
    let document = document();
    if let Some(stale) = document.get_element_by_id("svg-root") {
        stale.remove();
    }
    let svg = document.create_element_ns(Some(SVG_NS), "svg").unwrap();
    let group = document.create_element_ns(Some(SVG_NS), "g").unwrap();
    group.set_id("svg-root");
    svg.append_child(&group).unwrap();
    document.body().unwrap().append_child(&svg).unwrap();

    let err = start(&options("svg-root")).err();
    assert_eq!(
        err,
        Some(StartupError::MountTargetNotHtml {
            id: "svg-root".into()
        })
    );
    assert_eq!(group.child_element_count(), 0);
    svg.remove();
}

#[component]
fn NavButton(to: &'static str) -> impl IntoView {
    let navigate = use_navigate();
    view! { <button data-to=to on:click=move |_| navigate(to)>{to}</button> }
}

#[wasm_bindgen_test]
async fn navigating_from_inside_the_tree() {
    window().location().set_hash("#/").unwrap();
    next_tick().await;
    let target = host_page("navigation");
    let routes = root_routes().unwrap();
    let handle = mount_to(target.clone(), move || {
        view! {
            <HashRouter>
                <nav>
                    <NavButton to="/unknown"/>
                    <NavButton to="/"/>
                </nav>
                <main>
                    <Routes
                        table=routes
                        view=|route: RouteMatch<Screen>| route.value.render()
                    />
                </main>
            </HashRouter>
        }
    });
    assert_eq!(features(&target), 1);

    click(&target, "button[data-to='/unknown']");
    next_tick().await;
    assert_eq!(window().location().hash().unwrap(), "#/unknown");
    assert_eq!(features(&target), 0);

    click(&target, "button[data-to='/']");
    next_tick().await;
    assert_eq!(window().location().hash().unwrap(), "#/");
    assert_eq!(features(&target), 1);
    assert_eq!(feature_dir(&target).as_deref(), Some("ltr"));
    drop(handle);
}

#[wasm_bindgen_test]
async fn hash_listener_is_removed_with_its_owner() {
    window().location().set_hash("#/").unwrap();
    next_tick().await;
    let owner = Owner::new();
    let provider = owner.with(|| {
        let provider = HashUrl::new().unwrap();
        provider.init();
        provider
    });
    let url = provider.as_url().clone();

    window().location().set_hash("#/first").unwrap();
    next_tick().await;
    assert_eq!(url.get_untracked().path(), "/first");

    owner.cleanup();
    window().location().set_hash("#/second").unwrap();
    next_tick().await;
    assert_eq!(url.get_untracked().path(), "/first");

    window().location().set_hash("#/").unwrap();
    next_tick().await;
}

#[wasm_bindgen_test]
fn links_point_into_the_fragment() {
    let target = host_page("links");
    let handle = mount_to(target.clone(), || {
        view! {
            <A href="/">"home"</A>
            <A href="/a?b">"odd"</A>
        }
    });

    let links = target.query_selector_all("a").unwrap();
    let hrefs = (0..links.length())
        .filter_map(|i| links.item(i))
        .map(|node| node.unchecked_into::<Element>().get_attribute("href"))
        .collect::<Vec<_>>();
    assert_eq!(hrefs, [Some("#/".to_string()), Some("#/a%3Fb".to_string())]);
    drop(handle);
}

#[component]
fn UserCard() -> impl IntoView {
    let name = use_params_map().get("name").unwrap_or_default();
    let query = use_query_map();
    view! {
        <p class="name">{name}</p>
        <p class="tab">{move || query.with(|q| q.get("tab").unwrap_or_default())}</p>
    }
}

#[wasm_bindgen_test]
async fn route_params_and_query_reach_the_view() {
    window()
        .location()
        .set_hash("#/users/a%2Fb?tab=posts")
        .unwrap();
    next_tick().await;
    let target = host_page("params");
    let handle = mount_to(target.clone(), || {
        let table = RouteTable::compile([("/users/:name", ())]).unwrap();
        view! {
            <HashRouter>
                <Routes
                    table=table
                    view=|_: RouteMatch<()>| view! { <UserCard/> }.into_any()
                />
            </HashRouter>
        }
    });

    assert_eq!(text_of(&target, "p.name"), "a/b");
    assert_eq!(text_of(&target, "p.tab"), "posts");

    window()
        .location()
        .set_hash("#/users/a%2Fb?tab=likes")
        .unwrap();
    next_tick().await;
    assert_eq!(text_of(&target, "p.tab"), "likes");
    drop(handle);

    window().location().set_hash("#/").unwrap();
    next_tick().await;
}
