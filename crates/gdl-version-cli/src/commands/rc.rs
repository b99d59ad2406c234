use std::error::Error;

use clap::Args;
use gdl_version::autoversion;

#[derive(Args, Debug)]
pub struct RcArgs {
    /// Product name written to the string table.
    #[arg(long, default_value = "GDL")]
    pub product: String,
}

pub fn run(args: &RcArgs) -> Result<(), Box<dyn Error>> {
    print!("{}", render(&args.product));
    Ok(())
}

/// Escapes text for a resource-script string literal.
fn escape_rc_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '"' => out.push_str("\"\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            other => out.push(other),
        }
    }
    out
}

/// Renders a `VERSIONINFO` resource using the compiled-in tuple.
pub fn render(product: &str) -> String {
    let tuple = autoversion::RC_FILEVERSION
        .iter()
        .map(|part| part.to_string())
        .collect::<Vec<_>>()
        .join(",");
    // Resource scripts take the NUL terminator as an escape inside the literal.
    let string = autoversion::RC_FILEVERSION_STRING.replace('\0', "\\0");
    let product = escape_rc_string(product);
    let mut out = String::new();
    out.push_str("1 VERSIONINFO\n");
    out.push_str(&format!("FILEVERSION {tuple}\n"));
    out.push_str(&format!("PRODUCTVERSION {tuple}\n"));
    out.push_str("BEGIN\n");
    out.push_str("  BLOCK \"StringFileInfo\"\n");
    out.push_str("  BEGIN\n");
    out.push_str("    BLOCK \"040904B0\"\n");
    out.push_str("    BEGIN\n");
    out.push_str(&format!("      VALUE \"ProductName\", \"{product}\\0\"\n"));
    out.push_str(&format!("      VALUE \"FileVersion\", \"{string}\"\n"));
    out.push_str(&format!("      VALUE \"ProductVersion\", \"{string}\"\n"));
    out.push_str("    END\n");
    out.push_str("  END\n");
    out.push_str("  BLOCK \"VarFileInfo\"\n");
    out.push_str("  BEGIN\n");
    out.push_str("    VALUE \"Translation\", 0x409, 1200\n");
    out.push_str("  END\n");
    out.push_str("END\n");
    out
}
