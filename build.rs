fn main() {
    // tauri-build needs the `tauri` dependency's build metadata, which only
    // exists when the optional `app` feature is enabled.
    if std::env::var_os("CARGO_FEATURE_APP").is_some() {
        tauri_build::build()
    }
}
