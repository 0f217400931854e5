//! Binding-generation entry point for the foreign-language packages.

fn main() {
    uniffi::uniffi_bindgen_main();
}
