use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::Result;
use crate::SwapMode;

/// Builder for structured `HX-Location` header bodies.
///
/// HX-Location lets you instruct htmx to perform a navigation without a full
/// page reload while still providing extra context (target selector, swap mode,
/// request headers, etc.). Pass the result to
/// [`HtmxResponse::location_json`](crate::HtmxResponse::location_json).
///
/// See <https://htmx.org/headers/hx-location/>.
#[derive(Clone, Debug, Serialize)]
pub struct HxLocation {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    handler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(skip_serializing_if = "SwapMode::is_unknown")]
    swap: SwapMode,
    #[serde(skip_serializing_if = "Map::is_empty")]
    value: Map<String, Value>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,
}

impl HxLocation {
    /// Create a new HX-Location builder pointing to the provided path.
    pub fn new(path: impl Into<String>) -> Self {
        HxLocation {
            path: path.into(),
            source: None,
            event: None,
            handler: None,
            target: None,
            swap: SwapMode::Unknown,
            value: Map::new(),
            headers: BTreeMap::new(),
        }
    }

    /// Set the selector for the element that should be treated as the source.
    pub fn source(mut self, selector: impl Into<String>) -> Self {
        self.source = Some(selector.into());
        self
    }

    /// Event that triggers the follow-up request.
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Provide a custom client-side response handler.
    pub fn handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = Some(handler.into());
        self
    }

    /// Override which element receives the swap.
    pub fn target(mut self, selector: impl Into<String>) -> Self {
        self.target = Some(selector.into());
        self
    }

    /// Change the swap behaviour for the follow-up request.
    pub fn swap(mut self, swap: SwapMode) -> Self {
        self.swap = swap;
        self
    }

    /// Add a value submitted with the follow-up request.
    pub fn value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.value.insert(name.into(), value.into());
        self
    }

    /// Add a custom header to the follow-up request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Extend the custom headers with any iterator of key/value pairs.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// The JSON text sent as the header value.
    pub fn to_header_value(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_only_omits_everything_else() {
        let value = HxLocation::new("/test").to_header_value().unwrap();
        assert_eq!(value, r#"{"path":"/test"}"#);
    }

    #[test]
    fn optional_fields_are_written_when_set() {
        let value = HxLocation::new("/items")
            .source("#button")
            .event("click")
            .handler("customHandler")
            .target("#list")
            .swap(SwapMode::OuterHtml)
            .value("page", 2)
            .header("X-Custom", "yes")
            .to_header_value()
            .unwrap();

        let parsed: Value = serde_json::from_str(&value).unwrap();
        assert_eq!(
            parsed,
            json!({
                "path": "/items",
                "source": "#button",
                "event": "click",
                "handler": "customHandler",
                "target": "#list",
                "swap": "outerHTML",
                "value": { "page": 2 },
                "headers": { "X-Custom": "yes" },
            })
        );
    }

    #[test]
    fn headers_can_be_extended() {
        let value = HxLocation::new("/")
            .headers([("a", "1"), ("b", "2")])
            .to_header_value()
            .unwrap();
        assert_eq!(value, r#"{"path":"/","headers":{"a":"1","b":"2"}}"#);
    }
}
