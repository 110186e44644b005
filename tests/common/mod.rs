//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: a recording invoker that never
//! spawns processes, and an on-disk workspace with a fake `git` script.

#![allow(dead_code)]

use async_trait::async_trait;
use gitslave::common::result::GitslaveResult;
use gitslave::infrastructure::process::{CapturedOutput, GitInvocation, ProcessInvoker};
use gitslave::infrastructure::REGISTRY_FILE_NAME;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

type Responder = Box<dyn Fn(&GitInvocation) -> String + Send + Sync>;

/// Invoker that records every invocation and answers with a canned response
pub struct RecordingInvoker {
    responder: Responder,
    invocations: Mutex<Vec<GitInvocation>>,
}

impl RecordingInvoker {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&GitInvocation) -> String + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            invocations: Mutex::new(Vec::new()),
        }
    }

    /// Answer every invocation with the same text
    pub fn constant(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_| text.clone())
    }

    pub fn invocations(&self) -> Vec<GitInvocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessInvoker for RecordingInvoker {
    async fn run(&self, invocation: &GitInvocation) -> GitslaveResult<CapturedOutput> {
        self.invocations.lock().unwrap().push(invocation.clone());
        Ok(CapturedOutput::new((self.responder)(invocation), Some(0)))
    }
}

/// Fake git: understands `-C <dir>`, `status`, `clone <url> <dest>` and `help`
const FAKE_GIT_SCRIPT: &str = r#"#!/bin/sh
dir="."
if [ "$1" = "-C" ]; then
  dir="$2"
  shift 2
fi
case "$1" in
  status)
    echo "On branch main"
    if [ -f "$dir/DIRTY" ]; then
      echo "Changes not staged for commit"
    else
      echo "nothing to commit, working tree clean"
    fi
    ;;
  clone)
    mkdir -p "$3"
    echo "Cloning into '$3'..."
    ;;
  help)
    echo "usage: git [-C <path>] <command> [<args>]"
    ;;
  *)
    echo "git: '$1' is not a git command." >&2
    exit 1
    ;;
esac
"#;

/// A project root with a registry file and a fake git executable next to it
pub struct TestWorkspace {
    temp_dir: TempDir,
    root: PathBuf,
    git: PathBuf,
}

impl TestWorkspace {
    /// Create a root whose registry lists `remotes`
    pub fn new(remotes: &[&str]) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("project");
        std::fs::create_dir_all(&root).expect("Failed to create root");
        let root = root.canonicalize().expect("Failed to canonicalize root");

        let mut registry = remotes.join("\n");
        registry.push('\n');
        std::fs::write(root.join(REGISTRY_FILE_NAME), registry).expect("Failed to write registry");

        let git = temp_dir.path().join("fake-git");
        std::fs::write(&git, FAKE_GIT_SCRIPT).expect("Failed to write fake git");
        make_executable(&git);

        Self {
            temp_dir,
            root,
            git,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn git(&self) -> &Path {
        &self.git
    }

    /// Create the checkout directory of a slave
    pub fn checkout(&self, name: &str) -> PathBuf {
        let dir = self.root.join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create checkout");
        dir
    }

    /// Make `status` report local changes for the repository at `dir`
    pub fn mark_dirty(&self, dir: &Path) {
        std::fs::write(dir.join("DIRTY"), "").expect("Failed to mark dirty");
    }

    /// Label the aggregator uses for the master repository
    pub fn root_label(&self) -> String {
        "project".to_string()
    }

    /// A directory outside any project
    pub fn outside(&self) -> PathBuf {
        let dir = self.temp_dir.path().join("elsewhere");
        std::fs::create_dir_all(&dir).expect("Failed to create outside dir");
        dir
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut permissions = std::fs::metadata(path).unwrap().permissions();
    permissions.set_mode(0o755);
    std::fs::set_permissions(path, permissions).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
