//! Build script stamping `aturi --version` with the commit it was built from.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");

    let pkg = env!("CARGO_PKG_VERSION");
    let version = match commit() {
        Some(commit) => format!("{pkg}+{commit}"),
        None => pkg.to_string(),
    };

    println!("cargo:rustc-env=ATURI_VERSION={version}");
}

/// Short hash of HEAD, suffixed with `.dirty` when the tree has local edits.
fn commit() -> Option<String> {
    let hash = git(&["rev-parse", "--short=10", "HEAD"])?;
    let dirty = git(&["status", "--porcelain", "--untracked-files=no"])
        .is_some_and(|status| !status.is_empty());

    Some(if dirty { format!("{hash}.dirty") } else { hash })
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string())
}
