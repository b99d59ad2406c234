use std::error::Error;

use clap::{Args, ValueEnum};
use gdl_version::{record_fingerprint, to_canonical_json_bytes, to_toml_string, VersionRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Toml,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print every field of the record instead of the version string.
    #[arg(long)]
    pub long: bool,
    /// Output format for the full record.
    #[arg(long, value_enum, default_value_t = Format::Text, requires = "long")]
    pub format: Format,
}

pub fn run(args: &ShowArgs) -> Result<(), Box<dyn Error>> {
    let record = VersionRecord::current();
    if !args.long {
        println!("{}", record.full_version);
        return Ok(());
    }
    print!("{}", render(&record, args.format)?);
    Ok(())
}

pub fn render(record: &VersionRecord, format: Format) -> Result<String, Box<dyn Error>> {
    let rendered = match format {
        Format::Text => {
            let mut out = String::new();
            for (field, value) in record.fields() {
                out.push_str(&format!("{field:<22}{value}\n"));
            }
            out.push_str(&format!("{:<22}{}\n", "fingerprint", record_fingerprint(record)?));
            out
        }
        Format::Json => {
            let mut json = String::from_utf8(to_canonical_json_bytes(record)?)?;
            json.push('\n');
            json
        }
        Format::Toml => to_toml_string(record)?,
    };
    Ok(rendered)
}
