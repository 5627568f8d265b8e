//! The cookie bridge: thin pass-through calls into the OS cookie store.
//!
//! Every operation delegates to the injected [`InternetFacility`]; the only
//! local work is the bounded buffer-resize retry on reads and the
//! semicolon-to-comma translation the jar parser requires. The bridge keeps
//! no state of its own beyond configuration: the OS store is the sole
//! source of truth.

use crate::error::Error;
use crate::facility::{flags, options, suppress, InternetFacility, OptionPayload, ReadOutcome};
use crate::jar::CookieJar;
use cookie::Cookie;
use url::Url;

/// First-try read capacity in UTF-16 units, generous so the common case
/// completes in one facility call.
const DEFAULT_FIRST_TRY_CAPACITY: u32 = 8192 * 16;

/// Mediates between callers that want structured cookie data and the OS
/// facility that only understands flat strings and per-process flags.
pub struct CookieBridge<F> {
    facility: F,
    first_try_capacity: u32,
}

impl<F: InternetFacility> CookieBridge<F> {
    pub fn new(facility: F) -> Self {
        Self {
            facility,
            first_try_capacity: DEFAULT_FIRST_TRY_CAPACITY,
        }
    }

    /// Override the first-try read capacity (UTF-16 units). The two-call
    /// bound on reads is unaffected.
    pub fn with_first_try_capacity(mut self, capacity: u32) -> Self {
        self.first_try_capacity = capacity;
        self
    }

    /// Fetch all cookies the OS holds for `target` into a jar scoped to the
    /// target's origin (path, query, and fragment dropped).
    ///
    /// Returns `None` when the OS call fails or when it succeeds with empty
    /// cookie text: absence of cookie text is treated identically to
    /// retrieval failure, and an empty jar is never returned. At most two
    /// facility reads are issued (one resize retry when the OS reports the
    /// required capacity).
    pub fn fetch_cookies(&self, target: &Url) -> Option<CookieJar> {
        let text = self.read_cookie_text(target.as_str(), None)?;
        Some(CookieJar::parse(target, &text))
    }

    /// Fetch one named cookie for `target`. Same retry and no-cookie policy
    /// as [`fetch_cookies`](Self::fetch_cookies), with the facility's
    /// cookie-name filter set.
    pub fn fetch_cookie(&self, target: &Url, name: &str) -> Option<Cookie<'static>> {
        let text = self.read_cookie_text(target.as_str(), Some(name))?;
        text.split(',')
            .filter_map(|segment| Cookie::parse(segment.trim().to_owned()).ok())
            .next()
    }

    /// Parse `url` and fetch its cookies, failing fast with
    /// [`Error::InvalidUrl`] before any OS call when the URL is malformed.
    pub fn fetch_cookies_for(&self, url: &str) -> Result<Option<CookieJar>, Error> {
        let target = Url::parse(url)?;
        Ok(self.fetch_cookies(&target))
    }

    /// Store one cookie for `url` with the HttpOnly flag set.
    ///
    /// The URL is passed through as a string, unparsed; validation of the
    /// name and value is delegated entirely to the OS. Returns the OS
    /// call's success unchanged.
    pub fn store_cookie(&self, url: &str, name: &str, value: &str) -> bool {
        tracing::trace!(url = %url, name = %name, "storing cookie");
        self.facility
            .set_cookie(url, name, value, flags::INTERNET_COOKIE_HTTPONLY)
    }

    /// Stop persisting cookies for the rest of the process lifetime.
    /// Process-global: not scoped to any URL or request.
    pub fn suppress_cookie_persistence(&self) -> bool {
        self.set_global_option(options::SUPPRESS_BEHAVIOR, Some(suppress::COOKIE_PERSIST))
    }

    /// Signal the OS store to discard session-scoped (non-persistent)
    /// cookies immediately.
    pub fn end_browser_session(&self) -> bool {
        self.set_global_option(options::END_BROWSER_SESSION, None)
    }

    /// Two-phase buffer negotiation: one read at the configured capacity,
    /// then exactly one retry at the capacity the OS reported. Returns the
    /// translated cookie text, or `None` on failure or empty text.
    fn read_cookie_text(&self, url: &str, cookie_name: Option<&str>) -> Option<String> {
        tracing::trace!(url = %url, "reading cookie text");
        let first = self.facility.get_cookie(
            url,
            cookie_name,
            self.first_try_capacity,
            flags::INTERNET_COOKIE_HTTPONLY,
        );
        let outcome = match first {
            ReadOutcome::BufferTooSmall(required) => self.facility.get_cookie(
                url,
                cookie_name,
                required,
                flags::INTERNET_COOKIE_HTTPONLY,
            ),
            other => other,
        };
        match outcome {
            // Empty text is reported the same as a failed read: the caller
            // sees "no cookies" either way, never an empty jar.
            ReadOutcome::Data(text) if text.is_empty() => None,
            ReadOutcome::Data(text) => Some(translate_separators(&text)),
            ReadOutcome::BufferTooSmall(_) | ReadOutcome::Failed => {
                tracing::debug!(url = %url, "cookie read failed");
                None
            }
        }
    }

    /// Issue one global option call. An integer value travels in a scoped
    /// payload buffer released on every exit path; `None` passes no buffer
    /// and zero length.
    fn set_global_option(&self, option: u32, value: Option<i32>) -> bool {
        match value {
            Some(v) => {
                let payload = OptionPayload::new(v);
                self.facility.set_option(option, Some(&payload))
            }
            None => self.facility.set_option(option, None),
        }
    }
}

/// The OS delimits cookie pairs with `;` but the jar parser expects `,`.
/// Every `;` is replaced; no other characters are altered.
fn translate_separators(raw: &str) -> String {
    raw.replace(';', ",")
}
