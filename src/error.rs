use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures at the boundaries of the view: settings, canvas and host calls.
///
/// The easing math itself is total and never produces one of these.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("settings parse error: {0}")]
    Settings(#[from] serde_yaml::Error),

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },

    #[error("unknown measure mode '{0}'")]
    UnknownMeasureMode(String),

    #[error("canvas 2d context is not available")]
    ContextUnavailable,

    #[error("no window available for frame scheduling")]
    NoWindow,

    #[error("{context} failed: {message}")]
    Js { context: &'static str, message: String },
}

impl ViewError {
    /// Wrap an exception thrown by a browser API
    pub fn js(context: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        Self::Js { context, message }
    }
}

impl From<ViewError> for JsValue {
    fn from(err: ViewError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_setting_message() {
        let err = ViewError::InvalidSetting {
            field: "factor",
            reason: "must be in (0, 1]".to_string(),
        };
        assert_eq!(err.to_string(), "invalid setting `factor`: must be in (0, 1]");
    }

    #[test]
    fn test_unknown_measure_mode_message() {
        let err = ViewError::UnknownMeasureMode("wrap".to_string());
        assert_eq!(err.to_string(), "unknown measure mode 'wrap'");
    }

    #[test]
    fn test_yaml_error_converts() {
        let parse: Result<u32, _> = serde_yaml::from_str("[not, a, number]");
        let err: ViewError = parse.unwrap_err().into();
        assert!(err.to_string().starts_with("settings parse error"));
    }
}
