// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

fn rust_files_under(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let Ok(entries) = std::fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries {
            let path = entry.expect("entry").path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

fn declared_dependencies(manifest: &str) -> Vec<String> {
    let mut deps = Vec::new();
    let mut in_dependencies = false;
    for line in manifest.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if !in_dependencies || line.is_empty() {
            continue;
        }
        if let Some((name, _)) = line.split_once('=') {
            deps.push(name.trim().to_string());
        }
    }
    deps
}

#[test]
fn every_declared_dependency_is_referenced_in_sources() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let manifest =
        std::fs::read_to_string(root.join("Cargo.toml")).expect("read Cargo.toml");

    let mut sources = String::new();
    for dir in ["src", "tests"] {
        for path in rust_files_under(&root.join(dir)) {
            sources.push_str(&std::fs::read_to_string(&path).expect("read source file"));
        }
    }

    let deps = declared_dependencies(&manifest);
    assert!(!deps.is_empty(), "manifest declares no dependencies");

    for dep in deps {
        let token = dep.replace('-', "_");
        assert!(
            sources.contains(&token),
            "dependency {} is declared in Cargo.toml but never referenced",
            dep
        );
    }
}
