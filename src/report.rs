use crate::global::SPACE_NAMES;
use crate::sim::SimReport;
use serde_json::{json, Value};
use std::io::{self, Write};

pub fn write_banner<W: Write>(w: &mut W, games: u32, moves: u32) -> io::Result<()> {
    writeln!(w, "MONOSIM")?;
    writeln!(w, "RUNNING {} GAMES", games)?;
    writeln!(w, "PLAYING {} MOVES", moves)
}

/// The plain format: each list of 40 counts, one per line, under its header
pub fn write_text<W: Write>(w: &mut W, rep: &SimReport) -> io::Result<()> {
    writeln!(w, "DONE!")?;
    writeln!(w, "LANDS")?;
    for c in rep.counts.lands().iter() {
        writeln!(w, "{}", c)?;
    }
    writeln!(w, "ENDS")?;
    for c in rep.counts.ends().iter() {
        writeln!(w, "{}", c)?;
    }
    Ok(())
}

pub fn to_json(rep: &SimReport) -> Value {
    json!({
        "games": rep.games,
        "moves": rep.moves,
        "seed": rep.seed,
        "shuffled": rep.shuffled,
        "lands": rep.counts.lands().to_vec(),
        "ends": rep.counts.ends().to_vec(),
    })
}

pub fn write_json<W: Write>(w: &mut W, rep: &SimReport) -> io::Result<()> {
    writeln!(w, "{}", to_json(rep))
}

/// One row per space with its name and the share of all turns that ended there
pub fn write_table<W: Write>(w: &mut W, rep: &SimReport) -> io::Result<()> {
    let total = rep.counts.total_ends();
    writeln!(
        w,
        "{:>2}  {:<22} {:>10} {:>10} {:>7}",
        "#", "SPACE", "LANDS", "ENDS", "ENDS%"
    )?;
    for (pos, name) in SPACE_NAMES.iter().enumerate() {
        let ends = rep.counts.ends()[pos];
        let pct = if total == 0 {
            0.0
        } else {
            ends as f64 * 100.0 / total as f64
        };
        writeln!(
            w,
            "{:>2}  {:<22} {:>10} {:>10} {:>6.2}%",
            pos,
            name,
            rep.counts.lands()[pos],
            ends,
            pct
        )?;
    }
    Ok(())
}
