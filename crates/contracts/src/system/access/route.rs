//! Route patterns of the application (`/customers`, `/billing/:id/fill`)
//! and matching of browser paths against them.

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("route '{0}' must start with '/'")]
    MissingLeadingSlash(String),
    #[error("route '{0}' contains an empty segment")]
    EmptySegment(String),
    #[error("route '{0}' has a parameter without a name")]
    UnnamedParam(String),
    #[error("route '{path}' declares parameter ':{name}' twice")]
    DuplicateParam { path: String, name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// Parsed route pattern. `:name` segments match any single non-empty segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

/// Values captured by `:name` segments of a matched pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash(raw.to_string()))?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                if part.is_empty() {
                    return Err(PatternError::EmptySegment(raw.to_string()));
                }
                match part.strip_prefix(':') {
                    Some("") => return Err(PatternError::UnnamedParam(raw.to_string())),
                    Some(name) => {
                        if segments
                            .iter()
                            .any(|s| matches!(s, Segment::Param(n) if n == name))
                        {
                            return Err(PatternError::DuplicateParam {
                                path: raw.to_string(),
                                name: name.to_string(),
                            });
                        }
                        segments.push(Segment::Param(name.to_string()));
                    }
                    None => segments.push(Segment::Static(part.to_string())),
                }
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn has_params(&self) -> bool {
        self.segments.iter().any(|s| matches!(s, Segment::Param(_)))
    }

    /// Match an already normalized path (see [`normalize_path`]).
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let rest = path.strip_prefix('/')?;
        let parts: Vec<&str> = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').collect()
        };
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(RouteParams(params))
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Strip query string, fragment and trailing slashes from a browser path.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_pattern() {
        let p = RoutePattern::parse("/job-cards").unwrap();
        assert!(p.matches("/job-cards").is_some());
        assert!(p.matches("/job-cards/1").is_none());
        assert!(p.matches("/jobcards").is_none());
    }

    #[test]
    fn test_param_pattern_captures_value() {
        let p = RoutePattern::parse("/billing/:id/fill").unwrap();
        let params = p.matches("/billing/INV-007/fill").unwrap();
        assert_eq!(params.get("id"), Some("INV-007"));
        assert!(p.matches("/billing//fill").is_none());
        assert!(p.matches("/billing/INV-007").is_none());
    }

    #[test]
    fn test_invalid_patterns() {
        assert_eq!(
            RoutePattern::parse("customers"),
            Err(PatternError::MissingLeadingSlash("customers".into()))
        );
        assert_eq!(
            RoutePattern::parse("/a//b"),
            Err(PatternError::EmptySegment("/a//b".into()))
        );
        assert_eq!(
            RoutePattern::parse("/a/:"),
            Err(PatternError::UnnamedParam("/a/:".into()))
        );
        assert!(matches!(
            RoutePattern::parse("/a/:id/:id"),
            Err(PatternError::DuplicateParam { .. })
        ));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/reports/"), "/reports");
        assert_eq!(normalize_path("/reports?tab=1#top"), "/reports");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/?next=/billing"), "/");
    }
}
