use crate::params::ParamsMap;
use core::fmt::Debug;
use leptos::prelude::*;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

mod hash;
pub use hash::*;

/// Characters that are escaped when a path is written into the fragment.
const FRAGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// The routable part of the address: the path and query carried by the hash fragment.
///
/// Everything in front of the `#` is ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Url {
    path: String,
    search: String,
    search_params: ParamsMap,
}

impl Url {
    /// Derives the virtual location from a fragment, with or without its leading `#`.
    ///
    /// An empty fragment is the root path `/`; a path without a leading slash gets one.
    /// The path keeps its percent-encoding so that `%2F` and `%3F` survive until the
    /// matcher has split it into segments.
    pub fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let (path, search) = match fragment.split_once('?') {
            Some((path, search)) => (path, search),
            None => (fragment, ""),
        };

        let mut path = path.to_string();
        if !path.starts_with('/') {
            path.insert(0, '/');
        }

        Url {
            path,
            search: search.to_string(),
            search_params: ParamsMap::from_query(search),
        }
    }

    /// The virtual path, still percent-encoded.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_params(&self) -> &ParamsMap {
        &self.search_params
    }

    /// The fragment that addresses this location, including the leading `#`.
    pub fn to_fragment(&self) -> String {
        let mut fragment = format!("#{}", self.path);
        if !self.search.is_empty() {
            fragment.push('?');
            fragment.push_str(&self.search);
        }
        fragment
    }
}

/// Builds the `href` for an in-app link to the decoded `path`, e.g. `"/"` becomes `"#/"`.
pub fn href(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 2);
    out.push('#');
    if !path.starts_with('/') {
        out.push('/');
    }
    out.extend(utf8_percent_encode(path, FRAGMENT));
    out
}

pub(crate) fn unescape(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// A reactive view of the current hash location, provided to every component under
/// [`HashRouter`](crate::components::HashRouter).
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// The virtual path, always starting with `/` and still percent-encoded.
    pub pathname: Memo<String>,
    /// The raw query string carried in the fragment.
    pub search: Memo<String>,
    /// The query string parsed into its key-value pairs.
    pub query: Memo<ParamsMap>,
}

impl Location {
    pub(crate) fn new(url: ArcRwSignal<Url>) -> Self {
        let pathname = Memo::new({
            let url = url.clone();
            move |_| url.with(|url| url.path.clone())
        });
        let search = Memo::new({
            let url = url.clone();
            move |_| url.with(|url| url.search.clone())
        });
        let query = Memo::new(move |_| url.with(|url| url.search_params.clone()));
        Location {
            pathname,
            search,
            query,
        }
    }
}

/// A source of the current location that can notify the router when it changes.
pub trait LocationProvider: Clone + 'static {
    type Error: Debug;

    fn new() -> Result<Self, Self::Error>;

    fn as_url(&self) -> &ArcRwSignal<Url>;

    fn current() -> Result<Url, Self::Error>;

    /// Sets up any global event listeners needed to keep [`as_url`](Self::as_url) current.
    ///
    /// The listeners belong to the current reactive owner and are removed with it.
    fn init(&self);

    /// Moves the browser to `path` within the app.
    fn navigate(path: &str) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::{href, Url};

    #[test]
    fn empty_fragment_is_root() {
        assert_eq!(Url::from_fragment("").path(), "/");
        assert_eq!(Url::from_fragment("#").path(), "/");
        assert_eq!(Url::from_fragment("#/").path(), "/");
    }

    #[test]
    fn fragment_without_slash_gets_one() {
        assert_eq!(Url::from_fragment("#settings").path(), "/settings");
    }

    #[test]
    fn query_is_split_from_path() {
        let url = Url::from_fragment("#/tasks?page=2&sort=asc");
        assert_eq!(url.path(), "/tasks");
        assert_eq!(url.search(), "page=2&sort=asc");
        assert_eq!(url.search_params().get_str("page"), Some("2"));
        assert_eq!(url.search_params().get_str("sort"), Some("asc"));
    }

    #[test]
    fn path_keeps_its_encoding() {
        assert_eq!(Url::from_fragment("#/a%20b").path(), "/a%20b");
        assert_eq!(Url::from_fragment("#/users/a%2Fb").path(), "/users/a%2Fb");
    }

    #[test]
    fn href_prefixes_hash_and_slash() {
        assert_eq!(href("/"), "#/");
        assert_eq!(href("about"), "#/about");
        assert_eq!(href("/a b"), "#/a%20b");
        assert_eq!(href("/a?b"), "#/a%3Fb");
        assert_eq!(href("/100%"), "#/100%25");
    }

    #[test]
    fn fragment_survives_a_round_trip() {
        for fragment in ["#/a%20b?x=1", "#/a%3Fb", "#/%2541", "#/users/a%2Fb"] {
            let url = Url::from_fragment(fragment);
            assert_eq!(url.to_fragment(), fragment);
            assert_eq!(Url::from_fragment(&url.to_fragment()), url);
        }
    }

    #[test]
    fn href_lands_on_the_path_it_was_given() {
        for path in ["/a?b", "/%41", "/a b"] {
            let url = Url::from_fragment(&href(path));
            assert_eq!(super::unescape(url.path()), path);
            assert_eq!(url.search(), "");
        }
    }
}
