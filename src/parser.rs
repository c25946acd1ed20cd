//! Structural parser for indented blueprint text.
//! Turns a plain-text description into a `FolderItem` tree, inferring
//! file-vs-folder per line from the raw name.

use crate::error::{Error, Result};
use crate::model::{FolderItem, ItemKind};
use log::debug;

/// Maximum length of a filename extension segment; a longer segment after
/// the last dot makes the line a folder.
const MAX_EXTENSION_LEN: usize = 5;

/// Parses multi-line indented text into a single `FolderItem` tree.
///
/// Blank lines carry no structural meaning and are discarded. Indentation
/// level is the count of leading space/tab characters, each counting as
/// one unit. The first surviving line establishes the baseline depth and
/// becomes the returned root; every later line attaches to the nearest
/// preceding unfinished shallower line, so a depth jump of more than one
/// level is absorbed by the logical parent instead of erroring. Lines
/// indented under a file and extra baseline-depth lines are skipped;
/// files never own children.
///
/// # Errors
/// * `Error::EmptyInput` if no non-blank lines exist
/// * `Error::InvalidFormat` if the tree cannot be assembled (defensive;
///   the skip tolerance should make this unreachable)
pub fn parse(input: &str) -> Result<FolderItem> {
    let mut lines = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| (indentation_level(line), line.trim()));

    let (base_depth, first_name) = lines.next().ok_or(Error::EmptyInput)?;
    let mut stack: Vec<(usize, FolderItem)> = vec![(base_depth, item_for(first_name))];

    for (depth, name) in lines {
        // Fold finished subtrees back into their parents before attaching.
        while stack.len() > 1 && stack.last().is_some_and(|(d, _)| *d >= depth) {
            fold_top(&mut stack)?;
        }
        let (top_depth, top_item) =
            stack.last().ok_or_else(|| invalid_format("no open parent"))?;
        if *top_depth < depth && top_item.is_folder() {
            stack.push((depth, item_for(name)));
        } else {
            // The nearest shallower line is a file, or nothing shallower
            // precedes; the line is absorbed without becoming a node.
            debug!("Skipping unattachable line {:?} at depth {}", name, depth);
        }
    }

    while stack.len() > 1 {
        fold_top(&mut stack)?;
    }
    stack
        .pop()
        .map(|(_, item)| item)
        .ok_or_else(|| invalid_format("no root line"))
}

/// Classifies a raw line name as a file or a folder.
///
/// A leading dot marks a file (`.gitignore`); otherwise a name is a file
/// when the segment after its last dot is 1 to 5 alphanumeric characters.
/// Everything else is a folder.
pub fn classify(name: &str) -> ItemKind {
    if name.starts_with('.') {
        return ItemKind::File;
    }
    if let Some(dot) = name.rfind('.') {
        let extension = &name[dot + 1..];
        if !extension.is_empty()
            && extension.chars().count() <= MAX_EXTENSION_LEN
            && extension.chars().all(char::is_alphanumeric)
        {
            return ItemKind::File;
        }
    }
    ItemKind::Folder
}

/// Number of leading space/tab characters; tabs and spaces both count as
/// one unit each, so mixed indentation parses literally rather than by
/// tab stops.
fn indentation_level(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

fn item_for(name: &str) -> FolderItem {
    match classify(name) {
        ItemKind::Folder => FolderItem::folder(name),
        ItemKind::File => FolderItem::file(name),
    }
}

fn fold_top(stack: &mut Vec<(usize, FolderItem)>) -> Result<()> {
    let (_, child) = stack.pop().ok_or_else(|| invalid_format("unbalanced tree"))?;
    let (_, parent) = stack
        .last_mut()
        .ok_or_else(|| invalid_format("subtree has no parent"))?;
    parent.add_child(child);
    Ok(())
}

fn invalid_format(message: &str) -> Error {
    Error::InvalidFormat { message: message.to_string() }
}
