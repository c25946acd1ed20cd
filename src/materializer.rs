//! Template materialization.
//! Walks a `Template`'s tree depth-first and realizes it under a
//! destination directory, resolving tokens into names and file contents,
//! failing fast on collisions, and rolling the project root back on any
//! failure so a reported error never leaves a half-built tree behind.

use log::debug;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::model::{FolderItem, ItemKind, Template};
use crate::token::{format_creation_date, resolve_tokens, TokenContext};

/// Hook for applying cosmetic metadata (color, icon) to a created folder.
///
/// Decoration is owned by the platform layer; the materializer only calls
/// it best-effort. A decoration failure is logged and swallowed, it never
/// fails the overall materialization.
pub trait Decorator {
    fn decorate(&self, path: &Path, color: Option<&str>, icon: Option<&str>) -> Result<()>;
}

/// Realizes `Template` trees on disk.
///
/// The walk is sequential, single-threaded and depth-first, children in
/// declared order, which makes two runs of the same template into distinct
/// destinations produce identical trees. Conflict detection relies on the
/// filesystem's atomic create-if-absent semantics; no locking is provided
/// against concurrent materializations into overlapping destinations.
#[derive(Default)]
pub struct Materializer<'a> {
    decorator: Option<&'a dyn Decorator>,
    cancel_flag: Option<&'a AtomicBool>,
}

impl<'a> Materializer<'a> {
    pub fn new() -> Self {
        Self { decorator: None, cancel_flag: None }
    }

    /// Attaches a decorate hook invoked for every created folder that
    /// carries color or icon metadata.
    pub fn with_decorator(mut self, decorator: &'a dyn Decorator) -> Self {
        self.decorator = Some(decorator);
        self
    }

    /// Attaches a cancellation flag checked between sibling creations.
    /// Cancellation takes the same rollback path as a failure.
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    /// Materializes `template` as `destination/project_name`.
    ///
    /// The template's root item is a container: only its children are
    /// realized, directly under the created project root. One creation
    /// date string is captured up front and reused for every token in
    /// every node of the run.
    ///
    /// # Errors
    /// * `Error::InvalidPath` if `destination` is not an existing,
    ///   accessible directory
    /// * `Error::AlreadyExists` if `destination/project_name` is taken
    ///   (nothing was created, nothing is rolled back)
    /// * `Error::CreationFailed` for any failure after root creation
    ///   began, surfaced only after the root has been deleted again
    /// * `Error::Cancelled` when the cancellation flag was raised,
    ///   likewise after rollback
    pub fn materialize(
        &self,
        template: &Template,
        project_name: &str,
        destination: &Path,
    ) -> Result<PathBuf> {
        match fs::metadata(destination) {
            Ok(metadata) if metadata.is_dir() => {}
            _ => return Err(Error::InvalidPath { path: destination.to_path_buf() }),
        }

        let project_root = destination.join(project_name);
        if project_root.symlink_metadata().is_ok() {
            return Err(Error::AlreadyExists { path: project_root });
        }

        let creation_date = format_creation_date(chrono::Local::now());

        debug!("Creating project root: {}", project_root.display());
        // Non-recursive on purpose: missing ancestors of the destination
        // must fail rather than be silently created.
        fs::create_dir(&project_root)
            .map_err(|e| Error::CreationFailed { message: e.to_string() })?;
        self.try_decorate(&project_root, &template.root);

        let walk = self.create_children(
            template.root.children(),
            &project_root,
            project_name,
            "",
            project_name,
            &creation_date,
        );

        if let Err(err) = walk {
            debug!("Materialization failed, rolling back {}", project_root.display());
            // Best-effort compensating rollback; a secondary failure here
            // is swallowed so the original error is the one reported.
            let _ = fs::remove_dir_all(&project_root);
            return Err(match err {
                Error::Cancelled => Error::Cancelled,
                other => Error::CreationFailed { message: other.to_string() },
            });
        }

        Ok(project_root)
    }

    fn create_children(
        &self,
        items: &[FolderItem],
        dir: &Path,
        parent_name: &str,
        relative_path: &str,
        project_name: &str,
        creation_date: &str,
    ) -> Result<()> {
        for item in items {
            self.check_cancelled()?;
            self.create_item(item, dir, parent_name, relative_path, project_name, creation_date)?;
        }
        Ok(())
    }

    fn create_item(
        &self,
        item: &FolderItem,
        dir: &Path,
        parent_name: &str,
        relative_path: &str,
        project_name: &str,
        creation_date: &str,
    ) -> Result<()> {
        let name_context = TokenContext {
            project_name,
            parent_name,
            current_name: &item.name,
            relative_path,
            creation_date,
        };
        let resolved_name = resolve_tokens(&item.name, &name_context);
        let target = dir.join(&resolved_name);

        // Fail fast: never merge into or overwrite a pre-existing path.
        if target.symlink_metadata().is_ok() {
            return Err(Error::AlreadyExists { path: target });
        }

        match item.kind {
            ItemKind::Folder => {
                debug!("Creating directory: {}", target.display());
                fs::create_dir(&target)?;
                self.try_decorate(&target, item);

                let child_relative = if relative_path.is_empty() {
                    resolved_name.clone()
                } else {
                    format!("{}/{}", relative_path, resolved_name)
                };
                self.create_children(
                    item.children(),
                    &target,
                    &resolved_name,
                    &child_relative,
                    project_name,
                    creation_date,
                )?;
            }
            ItemKind::File => {
                debug!("Writing file: {}", target.display());
                // Content resolves against the node's final name.
                let content_context = TokenContext {
                    project_name,
                    parent_name,
                    current_name: &resolved_name,
                    relative_path,
                    creation_date,
                };
                let content =
                    resolve_tokens(item.content.as_deref().unwrap_or(""), &content_context);
                write_atomic(dir, &target, &content)?;
            }
        }
        Ok(())
    }

    fn try_decorate(&self, path: &Path, item: &FolderItem) {
        let Some(decorator) = self.decorator else { return };
        if item.color.is_none() && item.icon.is_none() {
            return;
        }
        if let Err(err) = decorator.decorate(path, item.color.as_deref(), item.icon.as_deref()) {
            debug!("Decoration of {} failed: {}", path.display(), err);
        }
    }

    fn check_cancelled(&self) -> Result<()> {
        match self.cancel_flag {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(Error::Cancelled),
            _ => Ok(()),
        }
    }
}

/// Writes `content` to `target` without ever exposing a partially written
/// file under the target name: the bytes go to a temporary file in the
/// same directory and are published with an atomic no-clobber rename.
fn write_atomic(dir: &Path, target: &Path, content: &str) -> Result<()> {
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged
        .persist_noclobber(target)
        .map_err(|e| Error::IoError(e.error))?;
    Ok(())
}
