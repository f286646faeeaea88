fn main() {
    println!("cargo:rerun-if-changed=src/query/default_catalog.toml");
    tauri_build::build();
}
