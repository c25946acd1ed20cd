//! The blueprint tree model.
//! A `Template` wraps one `FolderItem` tree; items are plain values owned by
//! their parent's `children` vector, so the tree is acyclic by construction
//! and edits are expressed as subtree replacement rather than graph surgery.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether an item materializes as a directory or a regular file.
///
/// Serializes as the literal strings `"folder"` / `"file"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Folder,
    File,
}

/// One node of a blueprint tree.
///
/// `children` is `Some` (possibly empty) for folders and `None` for files;
/// the constructors are the only way this crate builds items, so a file
/// never carries children. `content` is meaningful only for files. `color`
/// and `icon` are opaque cosmetic metadata preserved for lossless
/// round-tripping; the engine only ever passes them to a decorate hook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderItem {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FolderItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl FolderItem {
    /// Creates a folder item with no children.
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: ItemKind::Folder,
            children: Some(Vec::new()),
            content: None,
            color: None,
            icon: None,
        }
    }

    /// Creates a file item with no content.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind: ItemKind::File,
            children: None,
            content: None,
            color: None,
            icon: None,
        }
    }

    /// Creates a file item with the given content.
    pub fn file_with_content(name: impl Into<String>, content: impl Into<String>) -> Self {
        let mut item = Self::file(name);
        item.content = Some(content.into());
        item
    }

    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }

    pub fn is_file(&self) -> bool {
        self.kind == ItemKind::File
    }

    /// Appends a child to a folder. Has no effect on files, which cannot
    /// own children.
    pub fn add_child(&mut self, child: FolderItem) {
        if let Some(children) = &mut self.children {
            children.push(child);
        }
    }

    /// The item's children, empty for files and childless folders.
    pub fn children(&self) -> &[FolderItem] {
        self.children.as_deref().unwrap_or_default()
    }

    /// Returns a lazy pre-order traversal over this item and all of its
    /// descendants, children in declared order. The iterator borrows the
    /// tree, so it is restartable by calling `iter` again.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Total number of items in this subtree, self included.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Finds the item with the given id anywhere in this subtree.
    pub fn find(&self, id: Uuid) -> Option<&FolderItem> {
        self.iter().find(|item| item.id == id)
    }

    /// Replaces the subtree rooted at `id` with `replacement` and reports
    /// whether a matching node was found. This is the only edit primitive:
    /// renames, inserts and deletes are all expressed as building a new
    /// subtree and swapping it in.
    pub fn replace_subtree(&mut self, id: Uuid, replacement: FolderItem) -> bool {
        if self.id == id {
            *self = replacement;
            return true;
        }
        if let Some(children) = &mut self.children {
            for child in children.iter_mut() {
                if child.replace_subtree(id, replacement.clone()) {
                    return true;
                }
            }
        }
        false
    }
}

/// Pre-order iterator over a `FolderItem` subtree.
pub struct Iter<'a> {
    stack: Vec<&'a FolderItem>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a FolderItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stack.pop()?;
        if let Some(children) = &item.children {
            self.stack.extend(children.iter().rev());
        }
        Some(item)
    }
}

/// A named, timestamped wrapper around one folder-tree blueprint.
///
/// The root item is a container only: the materializer realizes its
/// children directly under the destination and never creates the root
/// itself, so the root's own name and metadata are conventionally ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "rootItem")]
    pub root: FolderItem,
    #[serde(rename = "createdDate")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "modifiedDate")]
    pub modified_at: DateTime<Utc>,
}

impl Template {
    /// Creates a template around an existing container root.
    pub fn new(name: impl Into<String>, root: FolderItem) -> Self {
        let now = Utc::now();
        Self { id: Uuid::new_v4(), name: name.into(), root, created_at: now, modified_at: now }
    }

    /// Creates a template whose top-level items are wrapped under a
    /// synthetic anonymous container root. This is the canonical way to
    /// hold several top-level siblings in one blueprint.
    pub fn from_items(name: impl Into<String>, items: Vec<FolderItem>) -> Self {
        let mut root = FolderItem::folder("");
        root.children = Some(items);
        Self::new(name, root)
    }

    /// Refreshes the modification timestamp. Call after every
    /// content-changing update; `created_at` never changes.
    pub fn touch(&mut self) {
        self.modified_at = Utc::now();
    }

    /// Number of items in the blueprint, excluding the container root.
    pub fn item_count(&self) -> usize {
        self.root.count().saturating_sub(1)
    }
}
