use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How htmx inserts returned content relative to the target element.
///
/// See <https://htmx.org/attributes/hx-swap/>.
///
/// [`SwapMode::Unknown`] is the "not set" value: an [`HtmxResponse`](crate::HtmxResponse)
/// never writes it. Parsing a token that is not one of the canonical ones yields
/// [`SwapMode::InnerHtml`], because that is what htmx itself falls back to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SwapMode {
    #[default]
    Unknown,
    /// Replace the inner html of the target element. htmx's default.
    InnerHtml,
    /// Replace the entire target element with the response.
    OuterHtml,
    /// Insert the response before the target element.
    BeforeBegin,
    /// Insert the response before the first child of the target element.
    AfterBegin,
    /// Insert the response after the last child of the target element.
    BeforeEnd,
    /// Insert the response after the target element.
    AfterEnd,
    /// Delete the target element regardless of the response.
    Delete,
    /// Do not swap content. Out of band items are still processed.
    None,
}

const TOKENS: [(SwapMode, &str); 8] = [
    (SwapMode::InnerHtml, "innerHTML"),
    (SwapMode::OuterHtml, "outerHTML"),
    (SwapMode::BeforeBegin, "beforebegin"),
    (SwapMode::AfterBegin, "afterbegin"),
    (SwapMode::BeforeEnd, "beforeend"),
    (SwapMode::AfterEnd, "afterend"),
    (SwapMode::Delete, "delete"),
    (SwapMode::None, "none"),
];

impl SwapMode {
    /// Parse a swap token. Matching is exact and case-sensitive.
    pub fn parse(token: &str) -> SwapMode {
        match TOKENS.iter().find(|(_, t)| *t == token) {
            Some((mode, _)) => *mode,
            // Unrecognised tokens (including "") mean htmx's default.
            None => SwapMode::InnerHtml,
        }
    }

    /// The canonical token. `Unknown` renders as `innerHTML`.
    pub fn as_str(&self) -> &'static str {
        TOKENS
            .iter()
            .find(|(mode, _)| mode == self)
            .map(|(_, token)| *token)
            .unwrap_or("innerHTML")
    }

    pub fn is_unknown(&self) -> bool {
        *self == SwapMode::Unknown
    }
}

impl fmt::Display for SwapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SwapMode {
    fn from(token: &str) -> Self {
        SwapMode::parse(token)
    }
}

impl FromStr for SwapMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SwapMode::parse(s))
    }
}

impl Serialize for SwapMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_tokens_round_trip() {
        for token in [
            "innerHTML",
            "outerHTML",
            "beforebegin",
            "afterbegin",
            "beforeend",
            "afterend",
            "delete",
            "none",
        ] {
            assert_eq!(SwapMode::parse(token).as_str(), token);
        }
    }

    #[test]
    fn before_end_is_parseable() {
        assert_eq!(SwapMode::parse("beforeend"), SwapMode::BeforeEnd);
    }

    #[test]
    fn unrecognised_tokens_fall_back_to_inner_html() {
        for token in ["", "InnerHTML", "outerhtml", " none", "swap", "unknown"] {
            assert_eq!(SwapMode::parse(token), SwapMode::InnerHtml, "{token:?}");
        }
    }

    #[test]
    fn unknown_is_the_default_and_renders_as_inner_html() {
        assert_eq!(SwapMode::default(), SwapMode::Unknown);
        assert!(SwapMode::default().is_unknown());
        assert_eq!(SwapMode::Unknown.to_string(), "innerHTML");
    }

    #[test]
    fn from_str_never_fails() {
        let mode: SwapMode = "delete".parse().unwrap();
        assert_eq!(mode, SwapMode::Delete);
        assert_eq!(SwapMode::from("garbage"), SwapMode::InnerHtml);
    }
}
