use actix_web::http::header::{HeaderMap, HeaderValue};
use actix_web::HttpResponse;
use indexmap::IndexMap;
use log::warn;

use crate::error::{HtmxError, Result};
use crate::headers::{ProtocolHeader, ResponseHeader};
use crate::location::HxLocation;
use crate::trigger::{TriggerType, Triggers};
use crate::SwapMode;

/// The htmx headers of an outgoing response.
///
/// Build one in a handler and write it with [`HtmxResponse::apply_to`]. Fields
/// left blank, `false` or [`SwapMode::Unknown`] are not written at all.
///
/// ```
/// use actix_htmxtools::{HtmxResponse, SwapMode};
/// use actix_web::HttpResponse;
///
/// let mut res = HttpResponse::Ok().finish();
/// HtmxResponse::new()
///     .push_url("/items/7")
///     .reswap(SwapMode::OuterHtml)
///     .apply_to_response(&mut res)
///     .unwrap();
///
/// assert_eq!(res.headers().get("hx-reswap").unwrap(), "outerHTML");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmxResponse {
    /// See <https://htmx.org/headers/hx-location/>.
    pub location: String,
    /// See <https://htmx.org/headers/hx-push-url/>.
    pub push_url: String,
    pub redirect: String,
    pub refresh: bool,
    /// See <https://htmx.org/headers/hx-replace-url/>.
    pub replace_url: String,
    /// See <https://htmx.org/attributes/hx-swap/>.
    pub reswap: SwapMode,
    pub retarget: String,
    pub reselect: String,
    /// See <https://htmx.org/headers/hx-trigger/>.
    pub trigger: String,
    pub trigger_after_settle: String,
    pub trigger_after_swap: String,
}

impl HtmxResponse {
    pub fn new() -> Self {
        HtmxResponse::default()
    }

    /// Navigate to `path` without a full page reload.
    pub fn location(mut self, path: impl Into<String>) -> Self {
        self.location = path.into();
        self
    }

    /// Navigate with a structured `HX-Location` payload.
    pub fn location_json(mut self, location: &HxLocation) -> Result<Self> {
        self.location = location.to_header_value()?;
        Ok(self)
    }

    pub fn push_url(mut self, url: impl Into<String>) -> Self {
        self.push_url = url.into();
        self
    }

    /// Client-side redirect with a full page load.
    pub fn redirect(mut self, url: impl Into<String>) -> Self {
        self.redirect = url.into();
        self
    }

    pub fn refresh(mut self) -> Self {
        self.refresh = true;
        self
    }

    pub fn replace_url(mut self, url: impl Into<String>) -> Self {
        self.replace_url = url.into();
        self
    }

    pub fn reswap(mut self, swap: SwapMode) -> Self {
        self.reswap = swap;
        self
    }

    pub fn retarget(mut self, selector: impl Into<String>) -> Self {
        self.retarget = selector.into();
        self
    }

    pub fn reselect(mut self, selector: impl Into<String>) -> Self {
        self.reselect = selector.into();
        self
    }

    pub fn trigger(mut self, events: impl Into<String>) -> Self {
        self.trigger = events.into();
        self
    }

    pub fn trigger_after_settle(mut self, events: impl Into<String>) -> Self {
        self.trigger_after_settle = events.into();
        self
    }

    pub fn trigger_after_swap(mut self, events: impl Into<String>) -> Self {
        self.trigger_after_swap = events.into();
        self
    }

    /// Fire `triggers` at the stage picked by `trigger_type`, replacing any
    /// events already set for that stage.
    pub fn trigger_events(mut self, trigger_type: TriggerType, triggers: &Triggers) -> Result<Self> {
        let value = triggers.to_header_value()?;
        match trigger_type {
            TriggerType::Standard => self.trigger = value,
            TriggerType::AfterSettle => self.trigger_after_settle = value,
            TriggerType::AfterSwap => self.trigger_after_swap = value,
        }
        Ok(self)
    }

    /// Write every field that is set into `headers`, replacing existing values.
    pub fn apply_to(&self, headers: &mut HeaderMap) -> Result<()> {
        let strings = [
            (ResponseHeader::LOCATION, &self.location),
            (ResponseHeader::PUSH_URL, &self.push_url),
            (ResponseHeader::REDIRECT, &self.redirect),
            (ResponseHeader::REPLACE_URL, &self.replace_url),
            (ResponseHeader::RETARGET, &self.retarget),
            (ResponseHeader::RESELECT, &self.reselect),
            (ResponseHeader::TRIGGER, &self.trigger),
            (ResponseHeader::TRIGGER_AFTER_SETTLE, &self.trigger_after_settle),
            (ResponseHeader::TRIGGER_AFTER_SWAP, &self.trigger_after_swap),
        ];

        for (header, value) in strings {
            if !value.trim().is_empty() {
                set_header(headers, header, value)?;
            }
        }

        if self.refresh {
            set_header(headers, ResponseHeader::REFRESH, "true")?;
        }

        if !self.reswap.is_unknown() {
            set_header(headers, ResponseHeader::RESWAP, self.reswap.as_str())?;
        }

        Ok(())
    }

    pub fn apply_to_response<B>(&self, res: &mut HttpResponse<B>) -> Result<()> {
        self.apply_to(res.headers_mut())
    }
}

fn set_header(headers: &mut HeaderMap, header: ResponseHeader, value: &str) -> Result<()> {
    match HeaderValue::from_str(value) {
        Ok(header_value) => {
            headers.insert(header.header_name(), header_value);
            Ok(())
        }
        Err(_) => {
            warn!("Failed to parse {} header value: {}", header, value);
            Err(HtmxError::InvalidHeaderValue {
                name: header.as_str(),
                value: value.to_string(),
            })
        }
    }
}

/// Merge caller supplied htmx headers into `headers` without overwriting.
///
/// Fails with [`HtmxError::HeaderAlreadySet`] as soon as a header already holds
/// a non-blank value; that value is left untouched. Headers merged before the
/// conflict stay merged.
pub fn add_headers<K, I>(headers: &mut HeaderMap, maps: I) -> Result<()>
where
    K: ProtocolHeader,
    I: IntoIterator<Item = IndexMap<K, String>>,
{
    for map in maps {
        for (header, value) in map {
            let name = header.header_name();
            let taken = headers
                .get(&name)
                .map(|existing| existing.to_str().map_or(true, |s| !s.trim().is_empty()))
                .unwrap_or(false);

            if taken {
                return Err(HtmxError::HeaderAlreadySet {
                    name: header.as_str(),
                    value,
                });
            }

            let header_value =
                HeaderValue::from_str(&value).map_err(|_| HtmxError::InvalidHeaderValue {
                    name: header.as_str(),
                    value: value.clone(),
                })?;
            headers.insert(name, header_value);
        }
    }

    Ok(())
}
