use std::process::Command;

// Stamp the binary with the closest git tag, so `relstats --version` reports
// the released version rather than the placeholder in Cargo.toml.
fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");

    let described = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|tag| tag.trim().trim_start_matches('v').to_string())
        .filter(|tag| !tag.is_empty());

    let version = described.unwrap_or_else(|| {
        format!("{}+unknown", std::env::var("CARGO_PKG_VERSION").unwrap_or_default())
    });

    println!("cargo:rustc-env=RELSTATS_VERSION={}", version);
}
