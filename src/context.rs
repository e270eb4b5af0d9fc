//! Carries a parsed [`HtmxRequest`] through a request's [`Extensions`].
//!
//! The request is stored under a private slot type, so nothing outside this
//! module can overwrite it or read it under a different type. The slot also
//! records requests that were checked and found not to come from htmx.

use actix_web::dev::Extensions;
use std::rc::Rc;

use crate::HtmxRequest;

struct HtmxRequestSlot(Option<Rc<HtmxRequest>>);

/// Attach `htmx` to `extensions`, returning the shared handle now stored there.
pub fn attach(extensions: &mut Extensions, htmx: HtmxRequest) -> Rc<HtmxRequest> {
    let htmx = Rc::new(htmx);
    extensions.insert(HtmxRequestSlot(Some(Rc::clone(&htmx))));
    htmx
}

/// The request attached to `extensions`, or `None` if nothing was attached.
pub fn retrieve(extensions: &Extensions) -> Option<Rc<HtmxRequest>> {
    lookup(extensions).flatten()
}

/// Record that the headers were read and the request is not an htmx one.
pub(crate) fn mark_not_htmx(extensions: &mut Extensions) {
    extensions.insert(HtmxRequestSlot(None));
}

/// `None` when the headers were never read, `Some(None)` for a recorded
/// non-htmx request.
pub(crate) fn lookup(extensions: &Extensions) -> Option<Option<Rc<HtmxRequest>>> {
    extensions
        .get::<HtmxRequestSlot>()
        .map(|slot| slot.0.clone())
}
