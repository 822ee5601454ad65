#![allow(dead_code)]

use routesynth::model::{Controller, MethodDescriptor};

pub const ROOT_NAMESPACE: &str = "App\\Http\\Controllers";

/// Build a controller in the root namespace with the given method names.
pub fn controller(class: &str, methods: &[&str]) -> Controller {
    methods.iter().fold(
        Controller::new(format!("{ROOT_NAMESPACE}\\{class}")),
        |c, m| c.with_method(*m, MethodDescriptor::default()),
    )
}

pub fn api_controller(class: &str, methods: &[&str]) -> Controller {
    controller(class, methods).api_resource(true)
}

pub mod temp_files {
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Write `content` to `name` inside a fresh temporary directory.
    pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }
}
