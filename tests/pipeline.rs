use schema2sql::error::Error;
use schema2sql::parser::ParseError;
use schema2sql::{Dialect, Schema, generate, parse};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const JSON_SCHEMA: &str = r#"[
  {
    "tableName": "departments",
    "columns": [
      { "name": "dept_id", "type": "INT" },
      { "name": "title", "type": "VARCHAR(100)" }
    ]
  },
  {
    "tableName": "employees",
    "columns": [
      { "name": "emp_id", "type": "INT" },
      { "name": "name" },
      { "name": "dept_id", "type": "INT" }
    ],
    "relationships": [
      { "relationshipType": "many-to-one", "relatedTable": "departments",
        "foreignKey": "dept_id", "relatedForeignKey": "" },
      { "relationshipType": "One-To-Many", "relatedTable": "tasks", "foreignKey": "emp_id" }
    ]
  }
]"#;

const XML_SCHEMA: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<schema>
  <table name="departments">
    <columns>
      <column name="dept_id" type="INT"/>
      <column name="title" type="VARCHAR(100)"/>
    </columns>
  </table>
  <table name="employees">
    <columns>
      <column name="emp_id" type="INT"/>
      <column name="name"/>
      <column name="dept_id" type="INT"/>
    </columns>
    <relationships>
      <relationship relationshipType="many-to-one" relatedTable="departments" foreignKey="dept_id"/>
      <relationship relationshipType="One-To-Many" relatedTable="tasks" foreignKey="emp_id"/>
    </relationships>
  </table>
</schema>"#;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn load_both() -> Vec<Schema> {
    let dir = tempfile::tempdir().unwrap();
    let json = write(&dir, "schema.json", JSON_SCHEMA);
    let xml = write(&dir, "schema.xml", XML_SCHEMA);
    vec![
        parse(Some(json.as_path()), Some("json")).unwrap(),
        parse(Some(xml.as_path()), Some("XML")).unwrap(),
    ]
}

#[test]
fn test_both_formats_yield_same_tables() {
    let schemas = load_both();
    assert_eq!(schemas[0].label, "JSON Schema");
    assert_eq!(schemas[1].label, "XML Schema");
    for schema in &schemas {
        assert_eq!(schema.tables.len(), 2);
        assert_eq!(schema.tables[1].columns[1].typ, "VARCHAR(255)");
        assert_eq!(schema.tables[1].relationships.len(), 2);
    }
}

#[test]
fn test_relationship_absent_fields_differ_by_format() {
    let schemas = load_both();
    let json_rel = &schemas[0].tables[1].relationships[1];
    let xml_rel = &schemas[1].tables[1].relationships[1];
    assert_eq!(json_rel.through_table, None);
    assert_eq!(xml_rel.through_table.as_deref(), Some(""));
}

#[test]
fn test_generate_all_dialects() {
    for schema in load_both() {
        let mysql = generate(Some(&schema), Some(Dialect::MySql)).unwrap();
        assert!(mysql.starts_with("SET FOREIGN_KEY_CHECKS=0;"));
        assert!(mysql.ends_with("SET FOREIGN_KEY_CHECKS=1;\n"));
        assert!(mysql.contains("PRIMARY KEY (dept_id)"));
        assert!(mysql.contains("PRIMARY KEY (emp_id)"));
        assert!(mysql.contains("FOREIGN KEY (dept_id) REFERENCES departments(id)"));
        assert_eq!(mysql.matches("FOREIGN KEY").count(), 1);

        let postgres = generate(Some(&schema), Some(Dialect::Postgres)).unwrap();
        assert!(postgres.contains("\"dept_id\" SERIAL"));
        assert!(postgres.contains("\"title\" VARCHAR(100)"));
        assert!(postgres.contains("FOREIGN KEY (\"dept_id\") REFERENCES \"departments\"(\"id\")"));
        assert_eq!(postgres.matches("FOREIGN KEY").count(), 1);

        let oracle = generate(Some(&schema), Some(Dialect::Oracle)).unwrap();
        assert!(oracle.contains("CREATE TABLE employees ("));
        assert!(oracle.contains("title VARCHAR2(100)"));
        assert!(oracle.contains("name VARCHAR2(255)"));
        assert!(oracle.contains("dept_id INT"));
        assert!(oracle.contains("FOREIGN KEY (dept_id) REFERENCES departments(id)"));
        assert_eq!(oracle.matches("FOREIGN KEY").count(), 1);
    }
}

#[test]
fn test_edit_then_regenerate() {
    let mut schema = load_both().remove(0);
    assert!(schema.update_column("employees", 1, "full_name", "VARCHAR(80)"));
    assert!(!schema.update_column("employees", 9, "x", "INT"));

    let sql = generate(Some(&schema), Some(Dialect::MySql)).unwrap();
    assert!(sql.contains("full_name VARCHAR(80)"));
    assert!(!sql.contains("  name VARCHAR(255)"));
}

#[test]
fn test_missing_table_name_fails_for_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let json = write(&dir, "bad.json", r#"[{ "columns": [] }]"#);
    let xml = write(&dir, "bad.xml", r#"<schema><table><columns/></table></schema>"#);

    assert!(matches!(
        parse(Some(json.as_path()), Some("json")),
        Err(Error::Parse(ParseError::MissingTableName))
    ));
    assert!(matches!(
        parse(Some(xml.as_path()), Some("xml")),
        Err(Error::Parse(ParseError::MissingTableAttr))
    ));
}

#[test]
fn test_unreadable_content_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let xml_as_json = write(&dir, "schema.json", XML_SCHEMA);
    let err = parse(Some(xml_as_json.as_path()), Some("json")).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::Json(_))));
    assert!(err.to_string().starts_with("Parsing failed: "));

    // A directory exists but cannot be read as a file
    let err = parse(Some(dir.path()), Some("xml")).unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::Io { .. })));
}

#[test]
fn test_empty_schema_boilerplate() {
    let dir = tempfile::tempdir().unwrap();
    let json = write(&dir, "empty.json", "[]");
    let schema = parse(Some(json.as_path()), Some("json")).unwrap();

    assert_eq!(
        generate(Some(&schema), Some(Dialect::MySql)).unwrap(),
        "SET FOREIGN_KEY_CHECKS=0;\n\nSET FOREIGN_KEY_CHECKS=1;\n"
    );
    assert_eq!(generate(Some(&schema), Some(Dialect::Postgres)).unwrap(), "");
    assert_eq!(generate(Some(&schema), Some(Dialect::Oracle)).unwrap(), "");
}
