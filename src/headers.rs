use actix_web::http::header::HeaderName;
use std::fmt;

/// Prefix shared by every htmx header name.
pub const HX_HEADER_PREFIX: &str = "HX-";

/// Common behaviour of the request and response header catalogs.
pub trait ProtocolHeader: Copy {
    /// The header name as htmx documents it, e.g. `HX-Request`.
    fn as_str(&self) -> &'static str;

    /// The header name in the form actix stores it.
    fn header_name(&self) -> HeaderName;
}

macro_rules! header_catalog {
    (
        $(#[$meta:meta])*
        $ty:ident {
            $($(#[$cmeta:meta])* $name:ident => ($wire:literal, $key:literal),)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $ty {
            wire: &'static str,
            key: &'static str,
        }

        impl $ty {
            $(
                $(#[$cmeta])*
                pub const $name: $ty = $ty { wire: $wire, key: $key };
            )*

            /// Every header in this catalog.
            pub const ALL: &'static [$ty] = &[$($ty::$name),*];

            /// The header name as htmx documents it, e.g. `HX-Request`.
            pub const fn as_str(&self) -> &'static str {
                self.wire
            }

            /// The lowercase [`HeaderName`] used to read and write an actix `HeaderMap`.
            pub fn header_name(&self) -> HeaderName {
                HeaderName::from_static(self.key)
            }
        }

        impl ProtocolHeader for $ty {
            fn as_str(&self) -> &'static str {
                $ty::as_str(self)
            }

            fn header_name(&self) -> HeaderName {
                $ty::header_name(self)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.wire)
            }
        }
    };
}

header_catalog! {
    /// Headers htmx sends with its requests.
    ///
    /// See <https://htmx.org/reference/#request_headers>.
    RequestHeader {
        /// Always `true` when the request was issued by htmx.
        REQUEST => ("HX-Request", "hx-request"),
        /// The request comes from an element using `hx-boost`.
        BOOSTED => ("HX-Boosted", "hx-boosted"),
        /// The current URL of the browser.
        CURRENT_URL => ("HX-Current-URL", "hx-current-url"),
        /// `true` when the request restores history after a local cache miss.
        HISTORY_RESTORE_REQUEST => ("HX-History-Restore-Request", "hx-history-restore-request"),
        /// The user response to an `hx-prompt`.
        PROMPT => ("HX-Prompt", "hx-prompt"),
        /// The id of the triggered element, if it has one.
        TRIGGER => ("HX-Trigger", "hx-trigger"),
        /// The name of the triggered element, if it has one.
        TRIGGER_NAME => ("HX-Trigger-Name", "hx-trigger-name"),
        /// The id of the target element, if it has one.
        TARGET => ("HX-Target", "hx-target"),
    }
}

header_catalog! {
    /// Headers a server can send back to steer htmx.
    ///
    /// See <https://htmx.org/reference/#response_headers>.
    ResponseHeader {
        /// Client-side redirect without a full page reload.
        LOCATION => ("HX-Location", "hx-location"),
        /// Pushes a new URL onto the history stack.
        PUSH_URL => ("HX-Push-Url", "hx-push-url"),
        /// Client-side redirect with a full page load.
        REDIRECT => ("HX-Redirect", "hx-redirect"),
        /// `true` makes the client do a full refresh of the page.
        REFRESH => ("HX-Refresh", "hx-refresh"),
        /// Replaces the current URL in the location bar.
        REPLACE_URL => ("HX-Replace-Url", "hx-replace-url"),
        /// Overrides how the response is swapped in.
        RESWAP => ("HX-Reswap", "hx-reswap"),
        /// CSS selector replacing the target of the content update.
        RETARGET => ("HX-Retarget", "hx-retarget"),
        /// CSS selector choosing which part of the response is swapped in.
        RESELECT => ("HX-Reselect", "hx-reselect"),
        TRIGGER => ("HX-Trigger", "hx-trigger"),
        TRIGGER_AFTER_SETTLE => ("HX-Trigger-After-Settle", "hx-trigger-after-settle"),
        TRIGGER_AFTER_SWAP => ("HX-Trigger-After-Swap", "hx-trigger-after-swap"),
    }
}
