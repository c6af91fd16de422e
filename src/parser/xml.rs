//! XML schema descriptions.
//!
//! ```xml
//! <schema>
//!   <table name="users">
//!     <columns><column name="user_id" type="INT"/></columns>
//!     <relationships>
//!       <relationship relationshipType="many-to-one" relatedTable="departments" foreignKey="dept_id"/>
//!     </relationships>
//!   </table>
//! </schema>
//! ```

use super::{Format, ParseError, SchemaParser, is_blank};
use crate::ast::{Column, DEFAULT_COLUMN_TYPE, Relationship, Schema, Table};
use roxmltree::{Document, Node, ParsingOptions};

pub const LABEL: &str = "XML Schema";

#[derive(Debug, Clone, Copy, Default)]
pub struct XmlParser;

impl SchemaParser for XmlParser {
    fn format(&self) -> Format {
        Format::Xml
    }

    fn parse_str(&self, input: &str) -> Result<Schema, ParseError> {
        // Doctype declarations are rejected outright, so no entity expansion.
        let mut options = ParsingOptions::default();
        options.allow_dtd = false;
        let doc = Document::parse_with_options(input, options).map_err(|e| {
            tracing::error!(error = %e, "malformed XML schema");
            ParseError::Xml(e)
        })?;

        let root = doc.root_element();
        let root_name = root.tag_name().name();
        if !root_name.eq_ignore_ascii_case("schema") {
            tracing::error!(root = root_name, "unexpected XML root element");
            return Err(ParseError::RootNotSchema(root_name.to_string()));
        }

        let tables = root
            .children()
            .filter(|n| n.has_tag_name("table"))
            .map(parse_table)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(tables = tables.len(), "parsed XML schema");
        Ok(Schema::with_tables(LABEL, tables))
    }
}

fn parse_table(node: Node<'_, '_>) -> Result<Table, ParseError> {
    let name = attr(node, "name");
    if is_blank(&name) {
        tracing::error!("<table> without a name attribute");
        return Err(ParseError::MissingTableAttr);
    }
    tracing::debug!(table = %name, "parsing table");

    let columns = section(node, "columns", "column")
        .map(|col| {
            let column_name = attr(col, "name");
            if is_blank(&column_name) {
                tracing::error!(table = %name, "<column> without a name attribute");
                return Err(ParseError::MissingColumnName {
                    table: name.clone(),
                });
            }
            let typ = attr(col, "type");
            Ok(Column {
                name: column_name,
                typ: if is_blank(&typ) {
                    DEFAULT_COLUMN_TYPE.to_string()
                } else {
                    typ
                },
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // Missing attributes read as empty strings, unlike the JSON reader.
    let relationships = section(node, "relationships", "relationship")
        .map(|rel| Relationship {
            relationship_type: Some(attr(rel, "relationshipType")),
            related_table: Some(attr(rel, "relatedTable")),
            through_table: Some(attr(rel, "throughTable")),
            foreign_key: Some(attr(rel, "foreignKey")),
            related_foreign_key: Some(attr(rel, "relatedForeignKey")),
        })
        .collect();

    Ok(Table {
        name,
        columns,
        relationships,
    })
}

/// `item` elements below the first `container` element nested in `table`.
fn section<'a, 'input: 'a>(
    table: Node<'a, 'input>,
    container: &'static str,
    item: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    table
        .descendants()
        .find(|n| n.has_tag_name(container))
        .into_iter()
        .flat_map(move |c| c.descendants().filter(move |n| n.has_tag_name(item)))
}

/// Attribute value as written; absent attributes read as empty.
fn attr(node: Node<'_, '_>, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}
