//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ledgerdesk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("ledgerdesk_core ping={}", ledgerdesk_core::ping());
    println!("ledgerdesk_core version={}", ledgerdesk_core::core_version());
}
