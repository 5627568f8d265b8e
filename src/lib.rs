//! # inetjar
//!
//! A thin bridge to the operating system's WinINet cookie store.
//!
//! `inetjar` reads the cookies the OS holds for a URL into an origin-scoped
//! jar, writes single cookies back, and toggles the two process-global
//! session options (suppress cookie persistence, end browser session). Every
//! operation is a direct pass-through to the OS cookie jar; the only local
//! work is buffer-size negotiation and separator translation.
//!
//! ## Features
//!
//! - **Cookie Retrieval**: HttpOnly-inclusive reads with bounded buffer-resize retry
//! - **Origin-Scoped Jars**: cookies keyed by name, scoped to scheme+host+port
//! - **Cookie Writes**: single-cookie set with the HttpOnly flag
//! - **Session Control**: suppress cookie persistence, end browser session
//! - **Injectable Facility**: the OS calls sit behind a trait, so the bridge
//!   is fully testable off-Windows with a scripted fake
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use inetjar::{CookieBridge, WinInet};
//! use url::Url;
//!
//! fn main() {
//!     let bridge = CookieBridge::new(WinInet);
//!     let target = Url::parse("https://example.com/").unwrap();
//!     if let Some(jar) = bridge.fetch_cookies(&target) {
//!         for cookie in jar.iter() {
//!             println!("{} = {}", cookie.name(), cookie.value());
//!         }
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`bridge`] - The [`CookieBridge`] mediating between callers and the OS store
//! - [`jar`] - Origin-scoped [`CookieJar`] handed to callers
//! - [`facility`] - The injected OS capability trait and WinINet constants
//! - [`error`] - Error type for pre-OS-call input validation
//!
//! ## Platform Notes
//!
//! The real facility ([`WinInet`]) binds `wininet.dll` and is only compiled
//! on Windows. The rest of the crate, including the bridge and jar, builds
//! everywhere; supply your own [`InternetFacility`] on other platforms.
//! Cookie state and the two session options are process-global mutable state
//! owned by the OS, not by this crate.

pub mod bridge;
pub mod error;
pub mod facility;
pub mod jar;

pub use bridge::CookieBridge;
pub use error::Error;
pub use facility::{InternetFacility, OptionPayload, ReadOutcome};
pub use jar::CookieJar;

#[cfg(windows)]
pub use facility::wininet::WinInet;
