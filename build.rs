//! Build script for embedding frontend assets.
//!
//! Release builds run Trunk so the dist/ directory is populated before
//! rust-embed includes it in the binary. Debug builds skip this step; the
//! server reads dist/ at runtime and falls back to the server-rendered
//! landing page when it is empty.

fn main() {
    #[cfg(not(debug_assertions))]
    {
        use std::process::Command;

        println!("cargo:rerun-if-changed=src/frontend");
        println!("cargo:rerun-if-changed=src/page");
        println!("cargo:rerun-if-changed=src/todo");
        println!("cargo:rerun-if-changed=index.html");
        println!("cargo:rerun-if-changed=Trunk.toml");

        if std::env::var_os("TODO_WEB_SKIP_TRUNK").is_some() {
            println!("cargo:warning=TODO_WEB_SKIP_TRUNK set: skipping frontend build");
            return;
        }

        println!("cargo:warning=Building frontend with Trunk...");

        let status = Command::new("trunk")
            .args(["build", "--release", "--dist", "dist"])
            .env("CARGO_TARGET_DIR", "target/trunk")
            .status()
            .expect("Failed to execute trunk command. Is trunk installed?");

        if !status.success() {
            panic!(
                "Trunk build failed with exit code: {:?}. \
                 Ensure trunk is installed and the frontend builds successfully.",
                status.code()
            );
        }
    }

    #[cfg(debug_assertions)]
    {
        println!("cargo:rerun-if-changed=build.rs");
    }
}
