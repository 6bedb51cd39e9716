use std::fmt;

use url::form_urlencoded;

pub const RESULT_TAG_PARAM: &str = "arg";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Upload,
    Result,
    ErrorNoFile,
    ErrorFile,
}

impl Route {
    pub fn from_path(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        match normalized {
            "" | "/" | "/index.html" => Ok(Route::Upload),
            "/result" | "/result.html" => Ok(Route::Result),
            "/ErrorNoFile" => Ok(Route::ErrorNoFile),
            "/ErrorFile" | "/error" => Ok(Route::ErrorFile),
            other => Err(RouteError::UnknownPath(other.to_string())),
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Upload => "/",
            Route::Result => "/result",
            Route::ErrorNoFile => "/ErrorNoFile",
            Route::ErrorFile => "/ErrorFile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Upload => "upload",
            Route::Result => "result",
            Route::ErrorNoFile => "error-no-file",
            Route::ErrorFile => "error-file",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownPath(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnknownPath(path) => write!(f, "unknown page path '{path}'"),
        }
    }
}

impl std::error::Error for RouteError {}

/// Reads the classification tag from a location search string. Only the
/// first `arg` counts; an empty value is the same as no value.
pub fn tag_from_query(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    if query.is_empty() {
        return None;
    }
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == RESULT_TAG_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

pub fn result_href(tag: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(RESULT_TAG_PARAM, tag)
        .finish();
    format!("{}?{}", Route::Result.path(), query)
}
