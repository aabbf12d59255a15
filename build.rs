fn main() {
    // Rerun when script fixtures change so #[files] test cases stay in sync
    println!("cargo:rerun-if-changed=tests/scripts");

    let script_dir = std::path::Path::new("tests/scripts");
    if let Ok(entries) = std::fs::read_dir(script_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("ibp") {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}
