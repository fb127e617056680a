//! Binary entrypoint for the browser-hosted pagination catalog.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    ui_catalog::mount();
}

#[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `ui_catalog_app` for wasm32 with the `csr` feature."
    );
}
