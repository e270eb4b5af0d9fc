use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{to_value, Map, Value};

use crate::error::Result;

/// When htmx should fire triggered events.
///
/// See <https://htmx.org/headers/hx-trigger/>.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerType {
    /// As soon as the response is received (`HX-Trigger`).
    Standard,
    /// After the settling step (`HX-Trigger-After-Settle`).
    AfterSettle,
    /// After the swap step (`HX-Trigger-After-Swap`).
    AfterSwap,
}

/// A strongly typed payload for HX-Trigger* headers.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerPayload {
    inner: Value,
}

impl TriggerPayload {
    /// Create a payload from any serializable value.
    pub fn json<T>(value: T) -> serde_json::Result<Self>
    where
        T: Serialize,
    {
        to_value(value).map(Self::from_value)
    }

    /// Create a payload directly from a `serde_json::Value`.
    pub fn from_value(value: Value) -> Self {
        TriggerPayload { inner: value }
    }

    pub fn text(value: impl Into<String>) -> Self {
        TriggerPayload::from_value(Value::String(value.into()))
    }

    pub fn boolean(value: bool) -> Self {
        TriggerPayload::from_value(Value::Bool(value))
    }
}

/// An ordered set of client-side events to fire.
///
/// Rendered as a plain comma separated list of names when no event carries a
/// payload, and as a JSON object keyed by event name otherwise.
#[derive(Clone, Debug, Default)]
pub struct Triggers {
    events: IndexMap<String, Option<TriggerPayload>>,
}

impl Triggers {
    pub fn new() -> Self {
        Triggers::default()
    }

    /// Add an event. Adding a name twice keeps its position and replaces the payload.
    pub fn event(mut self, name: impl Into<String>, payload: Option<TriggerPayload>) -> Self {
        self.events.insert(name.into(), payload);
        self
    }

    pub fn to_header_value(&self) -> Result<String> {
        if self.events.values().all(Option::is_none) {
            return Ok(self.events.keys().cloned().collect::<Vec<_>>().join(","));
        }

        let mut object = Map::new();
        for (name, payload) in &self.events {
            let value = match payload {
                Some(payload) => payload.inner.clone(),
                None => Value::Null,
            };
            object.insert(name.clone(), value);
        }
        Ok(serde_json::to_string(&Value::Object(object))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_only_render_as_list() {
        let triggers = Triggers::new().event("first", None).event("second", None);
        assert_eq!(triggers.to_header_value().unwrap(), "first,second");
    }

    #[test]
    fn payloads_render_as_json() {
        let triggers = Triggers::new()
            .event("showMessage", Some(TriggerPayload::text("saved")))
            .event("refresh", None);

        let value: Value = serde_json::from_str(&triggers.to_header_value().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "showMessage": "saved", "refresh": null })
        );
    }

    #[test]
    fn structured_payloads() {
        #[derive(Serialize)]
        struct Message {
            level: &'static str,
            message: &'static str,
        }

        let payload = TriggerPayload::json(Message {
            level: "info",
            message: "done",
        })
        .unwrap();
        let triggers = Triggers::new().event("showMessage", Some(payload));

        assert_eq!(
            triggers.to_header_value().unwrap(),
            r#"{"showMessage":{"level":"info","message":"done"}}"#
        );
    }
}
