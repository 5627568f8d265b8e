//! WinINet-backed facility.
//!
//! Binds `wininet.dll` directly: `InternetGetCookieExW` for retrieval,
//! `InternetSetCookieExW` for writes, and `InternetSetOptionW` on the null
//! (process-global) handle for the session options. All strings cross the
//! boundary as NUL-terminated UTF-16.
//!
//! ## Reference
//! - `wininet.h` (Windows SDK)

use super::{cookie_state, InternetFacility, OptionPayload, ReadOutcome};
use windows::core::PCWSTR;
use windows::Win32::Foundation::{GetLastError, BOOL, ERROR_INSUFFICIENT_BUFFER};

// Only foundation types are needed from the `windows` crate; the WinINet
// entry points themselves are linked directly.
#[link(name = "wininet")]
extern "system" {
    fn InternetGetCookieExW(
        lpszurl: PCWSTR,
        lpszcookiename: PCWSTR,
        lpszcookiedata: *mut u16,
        lpdwsize: *mut u32,
        dwflags: u32,
        lpreserved: *mut core::ffi::c_void,
    ) -> BOOL;

    fn InternetSetCookieExW(
        lpszurl: PCWSTR,
        lpszcookiename: PCWSTR,
        lpszcookiedata: PCWSTR,
        dwflags: u32,
        dwreserved: usize,
    ) -> u32;

    fn InternetSetOptionW(
        hinternet: *mut core::ffi::c_void,
        dwoption: u32,
        lpbuffer: *const core::ffi::c_void,
        dwbufferlength: u32,
    ) -> BOOL;
}

/// The production facility backed by `wininet.dll`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WinInet;

fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

impl InternetFacility for WinInet {
    fn get_cookie(
        &self,
        url: &str,
        cookie_name: Option<&str>,
        capacity: u32,
        flags: u32,
    ) -> ReadOutcome {
        let url_w = to_wide(url);
        let name_w = cookie_name.map(to_wide);
        let name_ptr = name_w
            .as_ref()
            .map_or(PCWSTR::null(), |w| PCWSTR(w.as_ptr()));

        let mut buf = vec![0u16; capacity as usize];
        let mut size = capacity;
        let ok = unsafe {
            InternetGetCookieExW(
                PCWSTR(url_w.as_ptr()),
                name_ptr,
                buf.as_mut_ptr(),
                &mut size,
                flags,
                std::ptr::null_mut(),
            )
        };

        if ok.as_bool() {
            // The buffer is NUL-terminated; the size-out convention varies
            // between call shapes, so scan rather than trust it.
            let len = buf.iter().position(|&c| c == 0).unwrap_or(buf.len());
            ReadOutcome::Data(String::from_utf16_lossy(&buf[..len]))
        } else {
            let err = unsafe { GetLastError() };
            if err == ERROR_INSUFFICIENT_BUFFER && size > capacity {
                ReadOutcome::BufferTooSmall(size)
            } else {
                tracing::debug!(url = %url, code = err.0, "InternetGetCookieExW failed");
                ReadOutcome::Failed
            }
        }
    }

    fn set_cookie(&self, url: &str, cookie_name: &str, cookie_data: &str, flags: u32) -> bool {
        let url_w = to_wide(url);
        let name_w = to_wide(cookie_name);
        let data_w = to_wide(cookie_data);
        let state = unsafe {
            InternetSetCookieExW(
                PCWSTR(url_w.as_ptr()),
                PCWSTR(name_w.as_ptr()),
                PCWSTR(data_w.as_ptr()),
                flags,
                0,
            )
        };
        // InternetSetCookieExW returns a cookie-state DWORD, not a BOOL.
        if matches!(state, cookie_state::UNKNOWN | cookie_state::REJECT) {
            tracing::debug!(url = %url, state, "InternetSetCookieExW rejected cookie");
            return false;
        }
        true
    }

    fn set_option(&self, option: u32, payload: Option<&OptionPayload>) -> bool {
        let (ptr, len) = match payload {
            Some(p) => (p.as_ptr() as *const core::ffi::c_void, p.byte_len()),
            None => (std::ptr::null(), 0),
        };
        let ok = unsafe { InternetSetOptionW(std::ptr::null_mut(), option, ptr, len) };
        if !ok.as_bool() {
            let err = unsafe { GetLastError() };
            tracing::debug!(option, code = err.0, "InternetSetOptionW failed");
        }
        ok.as_bool()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_wide_appends_nul() {
        let w = to_wide("ab");
        assert_eq!(w, vec![b'a' as u16, b'b' as u16, 0]);
    }
}
