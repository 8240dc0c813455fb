//! Human-readable hat contents report

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::table::HatTable;

/// First line of every hat contents report
pub const HAT_CONTENTS_HEADER: &str = "Hat Number: (1's, 2's, 3's)";

/// Write one `position: (ones, twos, threes)` line per hat, in ascending order.
///
/// # Examples
///
/// ```
/// use sticks::hats::{HatTable, write_hat_contents};
///
/// let table = HatTable::new(3).unwrap();
/// let mut out = Vec::new();
/// write_hat_contents(&table, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Hat Number: (1's, 2's, 3's)\n1: (1, 0, 0)\n2: (1, 1, 0)\n3: (1, 1, 1)\n"
/// );
/// ```
pub fn write_hat_contents<W: Write>(table: &HatTable, mut writer: W) -> crate::Result<()> {
    writeln!(writer, "{HAT_CONTENTS_HEADER}")?;
    for hat in table.iter() {
        let [ones, twos, threes] = hat.counts();
        writeln!(writer, "{}: ({ones}, {twos}, {threes})", hat.position())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the report to `path`, replacing any existing file
pub fn write_hat_contents_file(table: &HatTable, path: &Path) -> crate::Result<()> {
    let file = File::create(path).map_err(|source| crate::Error::Io {
        operation: format!("create hat contents file {}", path.display()),
        source,
    })?;
    write_hat_contents(table, BufWriter::new(file))
}
