//! Show and edit operations over a project document
//!
//! The document-level functions (`show`, `begin_edit`, `apply_edit`) are
//! pure. `lookup` and `edit_key` add the store and editor around them for a
//! single CLI invocation: load, resolve, edit, save.

use crate::buffer;
use crate::document::{get_key_data, list_subkeys, set_key_data, storage_path, Document, KeyData};
use crate::editor::{EditorLauncher, TempBuffer};
use crate::error::Result;
use crate::store::ProjectStore;
use std::path::PathBuf;

/// Info fields at a key path.
pub fn show<S: AsRef<str>>(document: &Document, segments: &[S]) -> KeyData {
    get_key_data(document, &storage_path(segments))
}

/// Sub-keys available below a key path.
pub fn subkeys<S: AsRef<str>>(document: &Document, segments: &[S]) -> Vec<String> {
    list_subkeys(document, &storage_path(segments))
}

/// Edit buffer text for a key path.
pub fn begin_edit<S: AsRef<str>>(document: &Document, segments: &[S]) -> String {
    buffer::serialize(&show(document, segments))
}

/// Store edited info fields at a key path.
pub fn apply_edit<S: AsRef<str>>(document: &mut Document, segments: &[S], data: &KeyData) {
    set_key_data(document, &storage_path(segments), data);
}

/// Result of looking up a key for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowOutcome {
    /// The project document has no top-level keys.
    ProjectNotFound,
    /// The key is missing or all its fields are empty.
    Empty { subkeys: Vec<String> },
    Found { data: KeyData, subkeys: Vec<String> },
}

/// Load a project and look up a key path.
pub fn lookup<S: AsRef<str>>(
    store: &dyn ProjectStore,
    project: &str,
    segments: &[S],
) -> ShowOutcome {
    let document = store.load(project);
    if document.is_empty() {
        tracing::debug!(
            "Project '{}' not found at {}",
            project,
            store.location(project).display()
        );
        return ShowOutcome::ProjectNotFound;
    }

    let data = show(&document, segments);
    let subkeys = subkeys(&document, segments);
    if data.is_empty() {
        ShowOutcome::Empty { subkeys }
    } else {
        ShowOutcome::Found { data, subkeys }
    }
}

/// Result of a completed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// Where the project was saved
    pub location: PathBuf,
    /// The fields as stored
    pub data: KeyData,
}

/// Edit a key interactively and save the project.
///
/// Nothing is saved if the buffer can't be created or read back, or if the
/// editor fails.
pub fn edit_key<S: AsRef<str>>(
    store: &dyn ProjectStore,
    editor: &dyn EditorLauncher,
    project: &str,
    segments: &[S],
) -> Result<EditOutcome> {
    let mut document = store.load(project);

    let buffer = TempBuffer::create(&begin_edit(&document, segments))?;
    editor.edit(buffer.path())?;
    let data = buffer::parse(&buffer.read()?);

    apply_edit(&mut document, segments, &data);
    let location = store.save(project, &document)?;

    Ok(EditOutcome { location, data })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecallError;
    use crate::store::mock::MemoryStore;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    /// Editor that replaces the buffer with fixed text.
    struct ScriptedEditor(&'static str);

    impl EditorLauncher for ScriptedEditor {
        fn edit(&self, path: &Path) -> Result<()> {
            std::fs::write(path, self.0).unwrap();
            Ok(())
        }
    }

    /// Editor that checks what it was given and leaves it alone.
    struct ExpectingEditor(String);

    impl EditorLauncher for ExpectingEditor {
        fn edit(&self, path: &Path) -> Result<()> {
            assert_eq!(std::fs::read_to_string(path).unwrap(), self.0);
            Ok(())
        }
    }

    struct FailingEditor;

    impl EditorLauncher for FailingEditor {
        fn edit(&self, _path: &Path) -> Result<()> {
            Err(RecallError::EditorLaunch {
                program: "broken".into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            })
        }
    }

    fn seeded() -> Document {
        Document::from_yaml_str(
            r#"
info:
  infoShort: A sample app
app:
  infoShort: application
  keys:
    db:
      infoShort: database
      infoLong: postgres 15
    cache: {}
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_show_and_subkeys() {
        let document = seeded();
        let root: [&str; 0] = [];
        assert_eq!(show(&document, &root).info_short, "A sample app");
        assert_eq!(subkeys(&document, &root), vec!["app"]);
        assert_eq!(show(&document, &["app", "db"]).info_long, "postgres 15");
        assert_eq!(subkeys(&document, &["app"]), vec!["db", "cache"]);
    }

    #[test]
    fn test_begin_and_apply_edit() {
        let mut document = seeded();
        let text = begin_edit(&document, &["app", "db"]);
        assert_eq!(
            text,
            "infoShort:\ndatabase\n\ninfoLong:\npostgres 15\n\nexample:\n\n"
        );

        let edited = buffer::parse(&text.replace("postgres 15", "postgres 16"));
        apply_edit(&mut document, &["app", "db"], &edited);
        assert_eq!(show(&document, &["app", "db"]).info_long, "postgres 16");
        assert_eq!(subkeys(&document, &["app"]), vec!["db", "cache"]);
    }

    #[test]
    fn test_lookup_outcomes() {
        let store = MemoryStore::new().with_project("demo", seeded());

        assert_eq!(
            lookup(&store, "nope", &["app"]),
            ShowOutcome::ProjectNotFound
        );
        assert_eq!(
            lookup(&store, "demo", &["app", "cache"]),
            ShowOutcome::Empty { subkeys: vec![] }
        );
        assert_eq!(
            lookup(&store, "demo", &["app"]),
            ShowOutcome::Found {
                data: KeyData::new("application", "", ""),
                subkeys: vec!["db".into(), "cache".into()],
            }
        );
    }

    #[test]
    fn test_lookup_empty_node_still_lists_children() {
        let mut document = Document::new();
        apply_edit(&mut document, &["x", "y"], &KeyData::new("a", "b", "c"));
        let store = MemoryStore::new().with_project("p", document);

        assert_eq!(
            lookup(&store, "p", &["x"]),
            ShowOutcome::Empty {
                subkeys: vec!["y".into()]
            }
        );
    }

    #[test]
    fn test_edit_key_creates_project() {
        let store = MemoryStore::new();
        let editor = ScriptedEditor("infoShort:\nhello\n\ninfoLong:\n\nexample:\nfoo\n");

        let outcome = edit_key(&store, &editor, "fresh", &["x", "y"]).unwrap();
        assert_eq!(outcome.data, KeyData::new("hello", "", "foo"));
        assert_eq!(outcome.location, PathBuf::from("memory://fresh"));

        let saved = store.get("fresh").unwrap();
        assert_eq!(show(&saved, &["x", "y"]), KeyData::new("hello", "", "foo"));
        assert_eq!(subkeys(&saved, &["x"]), vec!["y"]);
    }

    #[test]
    fn test_edit_key_unchanged_buffer_keeps_data() {
        let document = seeded();
        let expected = begin_edit(&document, &["app", "db"]);
        let store = MemoryStore::new().with_project("demo", document.clone());

        let outcome = edit_key(&store, &ExpectingEditor(expected), "demo", &["app", "db"]).unwrap();
        assert_eq!(outcome.data, KeyData::new("database", "postgres 15", ""));

        let saved = store.get("demo").unwrap();
        assert_eq!(show(&saved, &["app"]), show(&document, &["app"]));
        assert_eq!(subkeys(&saved, &["app"]), vec!["db", "cache"]);
    }

    #[test]
    fn test_edit_root_info() {
        let store = MemoryStore::new().with_project("demo", seeded());
        let editor = ScriptedEditor("# general info\ninfoShort:\nRenamed\n");
        let root: [&str; 0] = [];

        edit_key(&store, &editor, "demo", &root).unwrap();

        let saved = store.get("demo").unwrap();
        assert_eq!(show(&saved, &root), KeyData::new("Renamed", "", ""));
        assert_eq!(show(&saved, &["app"]).info_short, "application");
    }

    #[test]
    fn test_editor_failure_saves_nothing() {
        let store = MemoryStore::new().with_project("demo", seeded());

        let err = edit_key(&store, &FailingEditor, "demo", &["app"]).unwrap_err();
        assert!(matches!(err, RecallError::EditorLaunch { .. }));
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.get("demo").unwrap(), seeded());
    }
}
