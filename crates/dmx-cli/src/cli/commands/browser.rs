//! `dmx browser <user-agent>` – parsed version and flavour.

use dmx_core::browser::{is_edge, version_at_least, BrowserVersion};

pub fn run_browser(user_agent: &str, min_major: Option<u32>) {
    match BrowserVersion::from_user_agent(user_agent) {
        Some(v) => println!("version: {v}"),
        None => println!("version: -"),
    }
    println!("edge:    {}", is_edge(user_agent));
    if let Some(n) = min_major {
        println!(">= {n}:   {}", version_at_least(user_agent, n));
    }
}
