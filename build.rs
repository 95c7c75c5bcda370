use std::env;

// Record the target triple so `loglet --version` can print it.
fn main() {
    let triple = env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=LOGLET_BUILD_TARGET_TRIPLE={}", triple);
}
