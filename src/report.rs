//! Text output of ranked results.

use std::io::Write;

use crate::error::Result;
use crate::resistance::Resistance;
use crate::search::Ranking;
use crate::value::{format_ohms, format_value};

const SEPARATOR_WIDTH: usize = 40;

/// Writes one result: a summary line, an empty line, then the schematic.
///
/// Format:
/// ```text
/// 110Ω (-40Ω/-26.667%): (220||220)Ω
///
/// ─┬─[220Ω]─┬─
///  └─[220Ω]─┘
/// ```
pub fn write_result<W: Write>(r: &Resistance, target: f64, writer: &mut W) -> Result<()> {
    let deviation = r.deviation_from(target);
    let sign = if deviation >= 0.0 { '+' } else { '-' };
    writeln!(
        writer,
        "{} ({}{}Ω/{}{}%): {}",
        format_ohms(r.value()),
        sign,
        format_value(deviation.abs()),
        sign,
        format_value(deviation.abs() / target * 100.0),
        r
    )?;
    writeln!(writer)?;
    writeln!(writer, "{}", r.schematic())?;
    Ok(())
}

/// Writes every result of `ranking`, separated by a rule of `=`.
pub fn write_ranking<W: Write>(ranking: &Ranking, writer: &mut W) -> Result<()> {
    for (idx, r) in ranking.iter().enumerate() {
        if idx > 0 {
            writeln!(writer, "{}", "=".repeat(SEPARATOR_WIDTH))?;
        }
        write_result(r, ranking.target(), writer)?;
    }
    Ok(())
}
