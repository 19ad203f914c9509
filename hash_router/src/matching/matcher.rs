use super::PathSegment;
use crate::{location::unescape, ParamsMap, RouteError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatch {
    /// The part of the location consumed by the pattern's own segments, still encoded.
    pub path: String,
    pub params: ParamsMap,
}

/// A compiled route pattern such as `/`, `/tasks/:id` or `/files/*rest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    segments: Vec<PathSegment>,
}

impl Matcher {
    pub fn compile(pattern: &str) -> Result<Self, RouteError> {
        if !pattern.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash(pattern.to_string()));
        }

        let raw = get_segments(pattern);
        let last = raw.len().saturating_sub(1);
        let mut segments = Vec::with_capacity(raw.len());
        for (idx, segment) in raw.into_iter().enumerate() {
            let segment = if let Some(name) = segment.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouteError::EmptyParamName(pattern.to_string()));
                }
                PathSegment::Param(name.to_string().into())
            } else if let Some(name) = segment.strip_prefix('*') {
                if idx != last {
                    return Err(RouteError::SplatNotLast(pattern.to_string()));
                }
                PathSegment::Splat(name.to_string().into())
            } else {
                PathSegment::Static(segment.to_string().into())
            };
            segments.push(segment);
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The normalized pattern text, used to detect duplicate declarations.
    pub fn pattern(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                PathSegment::Static(s) => out.push_str(s),
                PathSegment::Param(s) => {
                    out.push(':');
                    out.push_str(s);
                }
                PathSegment::Splat(s) => {
                    out.push('*');
                    out.push_str(s);
                }
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        out
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Splat(_)))
    }

    /// Tests a percent-encoded location path against the pattern.
    ///
    /// The path is split on `/` first and each segment is decoded afterwards, so an
    /// encoded `%2F` stays inside its param.
    pub fn test(&self, location: &str) -> Option<PathMatch> {
        let loc_segments = get_segments(location);

        let fixed = if self.is_wildcard() {
            self.segments.len() - 1
        } else {
            self.segments.len()
        };

        // not a match if the pattern needs more segments than the location has,
        // or the location has extra segments and nothing captures them
        if loc_segments.len() < fixed
            || (loc_segments.len() > fixed && !self.is_wildcard())
        {
            return None;
        }

        let mut path = String::new();
        let mut params = ParamsMap::new();

        for (segment, loc_segment) in self.segments.iter().zip(loc_segments.iter())
        {
            match segment {
                PathSegment::Static(s) if *s == unescape(loc_segment) => {}
                PathSegment::Static(_) => return None,
                PathSegment::Param(name) => {
                    params.insert(name.clone(), unescape(loc_segment));
                }
                PathSegment::Splat(_) => break,
            }
            path.push('/');
            path.push_str(loc_segment);
        }

        if let Some(PathSegment::Splat(name)) = self.segments.last() {
            if !name.is_empty() {
                let rest = loc_segments[fixed..].join("/");
                params.insert(name.clone(), unescape(&rest));
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Some(PathMatch { path, params })
    }
}

// "/" and "" are both the zero-segment root; trailing slashes are not significant
fn get_segments(pattern: &str) -> Vec<&str> {
    pattern.split('/').filter(|p| !p.is_empty()).collect()
}
