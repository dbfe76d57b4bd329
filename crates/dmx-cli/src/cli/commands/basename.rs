//! `dmx basename <path>` – print the derived display name.

use dmx_core::record::derive_basename;

pub fn run_basename(path: &str) {
    println!("{}", derive_basename(path));
}
