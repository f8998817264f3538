use std::io::Write;

use fuelfind_core::SearchResult;

const RESULTS_HEADER: &str = "\n======================= Resultados =======================";
const RESULTS_FOOTER: &str = "\n==========================================================";

/// Writes the payload as pretty JSON. `framed` wraps it in the result
/// separators used by the interactive session.
pub(crate) fn write_payload<W: Write>(
    out: &mut W,
    payload: &SearchResult,
    framed: bool,
) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(payload)?;
    if framed {
        writeln!(out, "{RESULTS_HEADER}")?;
        writeln!(out, "{json}")?;
        writeln!(out, "{RESULTS_FOOTER}")?;
    } else {
        writeln!(out, "{json}")?;
    }
    Ok(())
}
