//! Exercise the session-control side of the bridge: store a cookie, stop
//! cookie persistence for this process, then end the browser session so
//! session cookies are discarded.
//!
//! Usage: `cargo run --example session_control`

#[cfg(windows)]
fn main() {
    use inetjar::{CookieBridge, WinInet};
    use url::Url;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let bridge = CookieBridge::new(WinInet);
    let url = "https://example.com/";

    println!("--- Step 1: Storing session cookie ---");
    let stored = bridge.store_cookie(url, "demo_session", "hello_inetjar");
    println!("store_cookie: {}", stored);

    println!("\n--- Step 2: Reading it back ---");
    let target = Url::parse(url).unwrap();
    match bridge.fetch_cookie(&target, "demo_session") {
        Some(cookie) => println!("fetched: {} = {}", cookie.name(), cookie.value()),
        None => println!("cookie not found"),
    }

    println!("\n--- Step 3: Suppressing cookie persistence ---");
    println!(
        "suppress_cookie_persistence: {}",
        bridge.suppress_cookie_persistence()
    );

    println!("\n--- Step 4: Ending browser session ---");
    println!("end_browser_session: {}", bridge.end_browser_session());

    println!("\n--- Step 5: Session cookie after end ---");
    match bridge.fetch_cookie(&target, "demo_session") {
        Some(cookie) => println!("still present: {} = {}", cookie.name(), cookie.value()),
        None => println!("discarded"),
    }
}

#[cfg(not(windows))]
fn main() {
    eprintln!("session_control requires Windows (WinINet)");
}
