//! Integration tests for loading knowledge documents from a directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use logic_theorist::schema::{SchemaDiagnosticCode, SchemaError, load_knowledge_file};
use rstest::{fixture, rstest};
use tempfile::TempDir;
use test_helpers::load_fixture;

/// A temporary directory opened as a capability handle.
struct Workspace {
    _tmp: TempDir,
    dir: Dir,
}

#[fixture]
fn workspace() -> Workspace {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = Utf8Path::from_path(tmp.path()).expect("temp dir path is UTF-8");
    let dir = Dir::open_ambient_dir(root, ambient_authority()).expect("open temp dir");
    Workspace { _tmp: tmp, dir }
}

impl Workspace {
    fn write_fixture(&self, name: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from(name);
        self.dir
            .write(&path, load_fixture(name))
            .expect("write fixture");
        path
    }
}

#[rstest]
fn loads_documents_from_directory(workspace: Workspace) {
    let path = workspace.write_fixture("valid_multi.yaml");
    let docs = load_knowledge_file(&workspace.dir, &path).expect("file should load");
    assert_eq!(docs.len(), 3);
}

#[rstest]
fn nested_paths_are_resolved_inside_the_directory(workspace: Workspace) {
    workspace.dir.create_dir("kb").expect("create subdir");
    let path = Utf8PathBuf::from("kb/minimal.yaml");
    workspace
        .dir
        .write(&path, load_fixture("valid_minimal.yaml"))
        .expect("write fixture");
    let docs = load_knowledge_file(&workspace.dir, &path).expect("file should load");
    let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["minimal"]);
}

#[rstest]
fn diagnostics_name_the_file_path(workspace: Workspace) {
    let path = workspace.write_fixture("invalid_blank_because.yaml");
    let error = load_knowledge_file(&workspace.dir, &path).expect_err("file should fail");
    let diagnostic = error.diagnostic().expect("diagnostic should be present");
    assert_eq!(diagnostic.code, SchemaDiagnosticCode::ValidationFailure);
    assert_eq!(diagnostic.location.source, "invalid_blank_because.yaml");
    assert_eq!(diagnostic.location.line, 7);
}

#[rstest]
fn missing_file_is_an_io_error(workspace: Workspace) {
    let absent = Utf8PathBuf::from("absent.yaml");
    let error = load_knowledge_file(&workspace.dir, &absent).expect_err("file is absent");
    assert!(
        matches!(&error, SchemaError::Io { path, .. } if path.as_str() == "absent.yaml"),
        "expected an I/O error, got: {error}"
    );
    assert!(error.diagnostic().is_none());
    let message = error.to_string();
    assert!(message.starts_with("failed to read knowledge file"));
}
