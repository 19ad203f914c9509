mod matcher;

use crate::{ParamsMap, RouteError};
pub use matcher::*;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Static(Cow<'static, str>),
    Param(Cow<'static, str>),
    Splat(Cow<'static, str>),
}

/// A single `(pattern, value)` binding in a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef<T> {
    matcher: Matcher,
    value: T,
}

impl<T> RouteDef<T> {
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}

/// The result of resolving a location against a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<T> {
    pub pattern: String,
    pub path: String,
    pub params: ParamsMap,
    pub value: T,
}

/// An ordered, validated list of route bindings.
///
/// Routes are tested in declaration order and the first match wins. The table is
/// compiled once and is immutable afterwards; a location that matches nothing resolves
/// to `None`, there is no implicit fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable<T> {
    routes: Vec<RouteDef<T>>,
}

impl<T> RouteTable<T> {
    /// Compiles every pattern, rejecting malformed or duplicated ones.
    pub fn compile<P>(
        routes: impl IntoIterator<Item = (P, T)>,
    ) -> Result<Self, RouteError>
    where
        P: AsRef<str>,
    {
        let mut compiled: Vec<RouteDef<T>> = Vec::new();
        for (pattern, value) in routes {
            let matcher = Matcher::compile(pattern.as_ref())?;
            if compiled
                .iter()
                .any(|def| def.matcher.pattern() == matcher.pattern())
            {
                return Err(RouteError::DuplicatePath(
                    pattern.as_ref().to_string(),
                ));
            }
            compiled.push(RouteDef { matcher, value });
        }
        Ok(Self { routes: compiled })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDef<T>> {
        self.routes.iter()
    }

    /// Finds the first route, in declaration order, that matches `path`.
    pub fn first_match(&self, path: &str) -> Option<RouteMatch<T>>
    where
        T: Clone,
    {
        self.routes.iter().find_map(|def| {
            def.matcher.test(path).map(|PathMatch { path, params }| {
                RouteMatch {
                    pattern: def.matcher.pattern(),
                    path,
                    params,
                    value: def.value.clone(),
                }
            })
        })
    }
}
