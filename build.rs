//! Stamps `sn --version` with where and when the binary came from.
//!
//! - `SN_GIT_DESCRIBE`: `git describe --tags --always --dirty`, or "unknown"
//! - `SN_BUILD_DATE`: UTC build date (`YYYY-MM-DD`), honoring `SOURCE_DATE_EPOCH`

use chrono::{DateTime, Utc};
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/tags");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let describe = git_describe().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=SN_GIT_DESCRIBE={}", describe);

    println!("cargo:rustc-env=SN_BUILD_DATE={}", build_time().format("%Y-%m-%d"));
}

/// Reproducible builds pin the clock through `SOURCE_DATE_EPOCH`.
fn build_time() -> DateTime<Utc> {
    std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|secs| secs.parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now)
}

fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }
    let describe = String::from_utf8(output.stdout).ok()?;
    let describe = describe.trim();
    (!describe.is_empty()).then(|| describe.to_string())
}
