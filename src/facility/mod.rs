//! The OS internet facility seam.
//!
//! The cookie store, and the two session options, are process-global state
//! owned by the operating system. The bridge never binds them statically:
//! everything goes through [`InternetFacility`], so tests substitute a
//! scripted fake and the bridge itself holds no hidden global state.
//!
//! The constants in this module match `wininet.h` in the Windows SDK.

use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(windows)]
pub mod wininet;

/// Flags passed to the cookie get/set primitives.
pub mod flags {
    /// `INTERNET_COOKIE_HTTPONLY`: include cookies marked HttpOnly.
    ///
    /// Retrieval always passes this flag; restricting script access is the
    /// caller's concern, not filtered at this layer.
    pub const INTERNET_COOKIE_HTTPONLY: u32 = 0x2000;
}

/// Option codes for the global option primitive.
pub mod options {
    /// `INTERNET_OPTION_SUPPRESS_BEHAVIOR`
    pub const SUPPRESS_BEHAVIOR: u32 = 81;
    /// `INTERNET_OPTION_END_BROWSER_SESSION`
    pub const END_BROWSER_SESSION: u32 = 42;
}

/// Values for the `SUPPRESS_BEHAVIOR` option.
pub mod suppress {
    /// `INTERNET_SUPPRESS_COOKIE_PERSIST`: stop persisting cookies for the
    /// rest of the process lifetime.
    pub const COOKIE_PERSIST: i32 = 3;
}

/// Cookie-state values returned by `InternetSetCookieExW`.
pub mod cookie_state {
    pub const UNKNOWN: u32 = 0x0;
    pub const ACCEPT: u32 = 0x1;
    pub const PROMPT: u32 = 0x2;
    pub const LEASH: u32 = 0x3;
    pub const DOWNGRADE: u32 = 0x4;
    pub const REJECT: u32 = 0x5;
}

/// Outcome of one cookie-retrieval call against the facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The call succeeded; carries the buffer contents.
    Data(String),
    /// The call failed because the supplied buffer was too small; carries
    /// the required capacity reported by the OS.
    BufferTooSmall(u32),
    /// The call failed with no usable size hint.
    Failed,
}

/// The injected OS capability: the three WinINet primitives the bridge uses.
///
/// All calls are synchronous and blocking; any locking of the shared cookie
/// store happens inside the OS, and implementations add none of their own.
pub trait InternetFacility {
    /// Read the cookie string for `url` into a buffer of `capacity` UTF-16
    /// units. `cookie_name` filters to a single named cookie; `None` reads
    /// all cookies for the URL.
    fn get_cookie(
        &self,
        url: &str,
        cookie_name: Option<&str>,
        capacity: u32,
        flags: u32,
    ) -> ReadOutcome;

    /// Set one cookie on `url`. Returns the OS call's success.
    fn set_cookie(&self, url: &str, cookie_name: &str, cookie_data: &str, flags: u32) -> bool;

    /// Set a process-global option on the null handle. `payload` carries the
    /// option value, or `None` for flag-only options with no payload.
    fn set_option(&self, option: u32, payload: Option<&OptionPayload>) -> bool;
}

impl<F: InternetFacility + ?Sized> InternetFacility for &F {
    fn get_cookie(
        &self,
        url: &str,
        cookie_name: Option<&str>,
        capacity: u32,
        flags: u32,
    ) -> ReadOutcome {
        (**self).get_cookie(url, cookie_name, capacity, flags)
    }

    fn set_cookie(&self, url: &str, cookie_name: &str, cookie_data: &str, flags: u32) -> bool {
        (**self).set_cookie(url, cookie_name, cookie_data, flags)
    }

    fn set_option(&self, option: u32, payload: Option<&OptionPayload>) -> bool {
        (**self).set_option(option, payload)
    }
}

static LIVE_PAYLOADS: AtomicUsize = AtomicUsize::new(0);

/// Scoped native buffer holding one integer option value.
///
/// Owns a heap allocation the size of one `i32`, handed to the OS by raw
/// pointer for the duration of a single option call and released exactly
/// once on drop, on every exit path including OS-call failure.
/// [`OptionPayload::live_count`] exposes the number of live allocations so
/// tests can verify the release.
#[derive(Debug)]
pub struct OptionPayload {
    ptr: *mut i32,
}

impl OptionPayload {
    pub fn new(value: i32) -> Self {
        LIVE_PAYLOADS.fetch_add(1, Ordering::SeqCst);
        Self {
            ptr: Box::into_raw(Box::new(value)),
        }
    }

    /// Raw pointer handed to the OS option primitive.
    pub fn as_ptr(&self) -> *const i32 {
        self.ptr
    }

    /// Buffer length in bytes, as the OS option primitive expects.
    pub fn byte_len(&self) -> u32 {
        std::mem::size_of::<i32>() as u32
    }

    pub fn value(&self) -> i32 {
        unsafe { *self.ptr }
    }

    /// Number of payload buffers currently allocated and not yet released.
    pub fn live_count() -> usize {
        LIVE_PAYLOADS.load(Ordering::SeqCst)
    }
}

impl Drop for OptionPayload {
    fn drop(&mut self) {
        unsafe { drop(Box::from_raw(self.ptr)) };
        LIVE_PAYLOADS.fetch_sub(1, Ordering::SeqCst);
    }
}
