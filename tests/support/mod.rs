#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use chrono::{Datelike, Local};
use tempfile::TempDir;
use todos::TodoData;

/// Scratch directory holding seed and config files for one test.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create tempdir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn write_seed(&self, items: &[TodoData]) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let body = serde_json::to_string_pretty(items)?;
        Ok(self.write_file("todos.json", &body)?)
    }
}

/// `todos` binary running inside `dir` with no inherited seed.
pub fn todos_cmd(dir: &TestDir) -> Command {
    let mut cmd = Command::cargo_bin("todos").expect("binary");
    cmd.current_dir(dir.path());
    cmd.env_remove("TODOS_SEED");
    cmd.env_remove("RUST_LOG");
    cmd
}

pub fn current_month() -> String {
    Local::now().month().to_string()
}

pub fn current_year() -> String {
    Local::now().year().to_string()
}

pub fn buy_milk() -> TodoData {
    TodoData::new("Buy Milk")
        .month("1")
        .year("2017")
        .description("Milk for baby")
}

pub fn buy_apples() -> TodoData {
    TodoData::new("Buy Apples")
        .month("")
        .year("2017")
        .description("An apple a day keeps the doctor away")
}
