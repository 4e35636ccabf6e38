use std::env;

fn main() {
    let version = env::var("KEEP_DELETE_VERSION")
        .unwrap_or_else(|_| env::var("CARGO_PKG_VERSION").unwrap());
    println!("cargo:rustc-env=KEEP_DELETE_VERSION={version}");
}
