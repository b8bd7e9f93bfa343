use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use enterprise_forge_codegen::{compile, ArtifactWriter, CompileError, Settings};
use enterprise_forge_core::types::Enterprise;
use enterprise_forge_registry::Registry;

/// The CRM definition used throughout the pipeline tests.
const CRM_DEFINITION: &str = r#"
// Customer relationship management
/* Keys are generated under Keys/ */
{
  "definition": {
    "version": "1.0",
    "name": "Crm",
    "description": "Customers and their orders",
    "entryPoint": "document"
  },
  "enterprise": {
    "name": "crm",
    "title": "Crm",
    "description": "Customer relationship management",
    "entities": [
      { "name": "Customer", "fields": [ { "name": "Id", "type": "int" }, { "name": "Name", "type": "string" } ] },
      { "name": "Order", "fields": [ { "name": "Id", "type": "long" }, { "name": "CustomerId", "type": "int" } ] }
    ],
    "keys": [
      { "name": "CustomerKey", "fields": [ { "name": "Id", "type": "int" } ] }
    ]
  }
}
"#;

#[derive(Default)]
struct Recorder {
    written: RefCell<Vec<(PathBuf, String, String)>>,
}

impl ArtifactWriter for Recorder {
    fn write(&self, path: &Path, enterprise: &Enterprise, source: &str) -> io::Result<()> {
        self.written.borrow_mut().push((
            path.to_path_buf(),
            enterprise.name().to_string(),
            source.to_string(),
        ));
        Ok(())
    }
}

struct ReadOnly;

impl ArtifactWriter for ReadOnly {
    fn write(&self, _path: &Path, _enterprise: &Enterprise, _source: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }
}

fn definitions() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("crm.definition"), CRM_DEFINITION).unwrap();
    dir
}

#[test]
fn compiles_every_entity_and_key() {
    let dir = definitions();
    let out = dir.path().join("out");
    let settings = Settings::new("crm", dir.path(), &out);
    let recorder = Recorder::default();

    let report = compile(&settings, &Registry::new(), &recorder).unwrap();

    assert_eq!(report.enterprise.title().as_str(), "Crm");
    assert_eq!(
        report.artifacts,
        [
            out.join("Customer.cs"),
            out.join("Order.cs"),
            out.join("Keys").join("CustomerKey.cs"),
        ]
    );

    let written = recorder.written.borrow();
    assert_eq!(written.len(), 3);
    assert!(written.iter().all(|(_, enterprise, _)| enterprise == "crm"));
    assert_eq!(
        written[0].2,
        "namespace Domain\n{\n    public class Customer\n    {\n        public int Id { get; set; }\n        public string Name { get; set; }\n    }\n}\n"
    );
    assert_eq!(
        written[2].2,
        "namespace Domain\n{\n    public sealed record CustomerKey(int Id);\n}\n"
    );
}

#[test]
fn namespace_setting_is_applied() {
    let dir = definitions();
    let mut settings = Settings::new("Crm", dir.path(), dir.path().join("out"));
    settings.namespace = Some("Contoso.Crm".into());
    let recorder = Recorder::default();

    compile(&settings, &Registry::new(), &recorder).unwrap();

    assert!(recorder
        .written
        .borrow()
        .iter()
        .all(|(_, _, source)| source.starts_with("namespace Contoso.Crm\n")));
}

#[test]
fn repeated_compiles_are_byte_identical() {
    let dir = definitions();
    let settings = Settings::new("Crm", dir.path(), dir.path().join("out"));
    let first = Recorder::default();
    let second = Recorder::default();

    compile(&settings, &Registry::new(), &first).unwrap();
    compile(&settings, &Registry::new(), &second).unwrap();

    assert_eq!(*first.written.borrow(), *second.written.borrow());
}

#[test]
fn missing_definition_is_not_found() {
    let dir = definitions();
    let settings = Settings::new("Missing", dir.path(), dir.path().join("out"));

    let err = compile(&settings, &Registry::new(), &Recorder::default()).unwrap_err();
    assert_eq!(err.kind(), "not_found");
}

#[test]
fn malformed_definition_is_a_parse_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("crm.definition"), "{ \"definition\": [ }").unwrap();
    let settings = Settings::new("Crm", dir.path(), dir.path().join("out"));

    let err = compile(&settings, &Registry::new(), &Recorder::default()).unwrap_err();
    assert_eq!(err.kind(), "parse");
}

#[test]
fn invalid_enterprise_is_a_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    let source = CRM_DEFINITION.replace(r#""type": "long""#, r#""type": """#);
    fs::write(dir.path().join("crm.definition"), source).unwrap();
    let settings = Settings::new("Crm", dir.path(), dir.path().join("out"));

    let err = compile(&settings, &Registry::new(), &Recorder::default()).unwrap_err();
    assert_eq!(err.kind(), "load");
    assert!(err
        .to_string()
        .contains("enterprise.entities[1].fields[0].type"));
}

#[test]
fn write_failure_stops_compile() {
    let dir = definitions();
    let settings = Settings::new("Crm", dir.path(), dir.path().join("out"));

    let err = compile(&settings, &Registry::new(), &ReadOnly).unwrap_err();
    match err {
        CompileError::Write { path, source } => {
            assert!(path.ends_with("Customer.cs"));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("expected Write, got {other:?}"),
    }
}
