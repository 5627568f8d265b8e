//! Dump the WinINet cookies visible for a URL.
//!
//! Usage: `cargo run --example dump_cookies -- https://example.com/`
//!
//! Set `RUST_LOG=inetjar=debug` to see the bridge's tracing output.

#[cfg(windows)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use inetjar::{CookieBridge, WinInet};

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com/".to_owned());

    let bridge = CookieBridge::new(WinInet);
    match bridge.fetch_cookies_for(&url)? {
        Some(jar) => {
            println!("Cookies for {:?}:", jar.origin());
            for cookie in jar.iter() {
                println!("  {} = {}", cookie.name(), cookie.value());
            }
            println!("Cookie header: {}", jar.to_cookie_header());
        }
        None => println!("No cookies for {}", url),
    }

    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("dump_cookies requires Windows (WinINet)");
}
