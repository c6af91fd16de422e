use anyhow::{Context, bail};
use clap::Parser;
use schema2sql::{Dialect, Format, Schema};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate SQL DDL from a JSON or XML schema description.
#[derive(Debug, Parser)]
#[command(name = "schema2sql", version)]
struct CommandLine {
    /// Schema description file (.json or .xml)
    input: PathBuf,

    /// Input format; detected from the file extension when omitted
    #[arg(short, long, value_parser = parse_format)]
    format: Option<Format>,

    /// Target dialect: mysql, postgres, oracle
    #[arg(short, long, default_value = "mysql", value_parser = parse_dialect)]
    dialect: Dialect,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Rename a column before generating: TABLE:INDEX:NAME:TYPE
    #[arg(long = "rename", value_parser = parse_rename)]
    renames: Vec<Rename>,

    /// Print the parsed schema as JSON instead of SQL
    #[arg(long)]
    dump_model: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct Rename {
    table: String,
    index: usize,
    name: String,
    typ: String,
}

fn parse_format(s: &str) -> Result<Format, String> {
    Format::from_label(Some(s)).map_err(|e| e.to_string())
}

fn parse_dialect(s: &str) -> Result<Dialect, String> {
    Dialect::from_str(s).ok_or_else(|| format!("Unsupported dialect: {s}"))
}

fn parse_rename(s: &str) -> Result<Rename, String> {
    let parts: Vec<&str> = s.splitn(4, ':').collect();
    let [table, index, name, typ] = parts[..] else {
        return Err(format!("expected TABLE:INDEX:NAME:TYPE, got '{s}'"));
    };
    let index = index
        .parse::<usize>()
        .map_err(|_| format!("invalid column index '{index}'"))?;
    Ok(Rename {
        table: table.to_string(),
        index,
        name: name.to_string(),
        typ: typ.to_string(),
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "schema2sql=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CommandLine::parse();

    let format = match args.format {
        Some(format) => format,
        None => match Format::detect(&args.input) {
            Some(format) => format,
            None => bail!(
                "Cannot determine schema format from file name: {}",
                args.input.display()
            ),
        },
    };

    let parsed = schema2sql::parse(Some(args.input.as_path()), Some(format.as_str()))
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    let mut session = Schema::new("session");
    session.set_parsed_schema(parsed);
    let Some(schema) = session.parsed_schema_mut() else {
        bail!("No schema loaded.");
    };

    for rename in &args.renames {
        schema.update_column(&rename.table, rename.index, &rename.name, &rename.typ);
    }

    let text = if args.dump_model {
        serde_json::to_string_pretty(&*schema)?
    } else {
        schema2sql::generate(Some(&*schema), Some(args.dialect))?
    };

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "saved");
        }
        None => print!("{}", text),
    }

    Ok(())
}
