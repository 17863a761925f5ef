//! Extension points.
//!
//! Extensions are loaded explicitly by the host at startup and registered
//! here - there is no directory scanning or runtime module discovery. The
//! capability surface is fixed: an extension contributes one menu entry and,
//! when activated, runs against a read-only view of the document and yields
//! something the editor knows how to present.

use crate::state::{MenuAction, MenuEntry};

/// What an extension produced. Currently only a notice message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionOutcome {
    Notice(String),
}

pub trait Extension {
    /// Stable identifier referenced by menu entries.
    fn id(&self) -> &'static str;

    /// Label shown in the Tools menu.
    fn menu_label(&self) -> &'static str;

    /// Run against the current document. The document is read-only by
    /// contract; extensions never edit.
    fn run(&self, lines: &[String]) -> ExtensionOutcome;
}

/// The set of extensions the host chose to load.
#[derive(Default)]
pub struct ExtensionRegistry {
    extensions: Vec<Box<dyn Extension>>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the extensions that ship in-tree.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(DocumentStats));
        registry
    }

    pub fn register(&mut self, extension: Box<dyn Extension>) {
        tracing::debug!(id = extension.id(), "extension registered");
        self.extensions.push(extension);
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&dyn Extension> {
        self.extensions
            .iter()
            .find(|e| e.id() == id)
            .map(Box::as_ref)
    }

    /// Menu entries for every registered extension, in registration order.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        self.extensions
            .iter()
            .map(|e| MenuEntry {
                label: e.menu_label().to_string(),
                action: MenuAction::Extension(e.id().to_string()),
            })
            .collect()
    }
}

/// Built-in extension: line/word/character counts for the document.
struct DocumentStats;

impl Extension for DocumentStats {
    fn id(&self) -> &'static str {
        "document-stats"
    }

    fn menu_label(&self) -> &'static str {
        "Document Statistics"
    }

    fn run(&self, lines: &[String]) -> ExtensionOutcome {
        let words: usize = lines.iter().map(|l| l.split_whitespace().count()).sum();
        let chars: usize = lines.iter().map(|l| l.chars().count()).sum();
        ExtensionOutcome::Notice(format!(
            "{} lines, {} words, {} characters",
            lines.len(),
            words,
            chars
        ))
    }
}
