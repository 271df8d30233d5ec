use std::io::Write;

use crate::error::Result;
use crate::inventory::Inventory;

pub fn write_inventory<W: Write>(out: &mut W, inventory: &Inventory) -> Result<()> {
    writeln!(out, "======= The Current Inventory: =======")?;
    writeln!(out, "ID\tCD Title (by: Artist)\n")?;
    for record in inventory {
        writeln!(out, "{}\t{} (by:{})", record.id, record.title, record.artist)?;
    }
    writeln!(out, "======================================")?;
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, inventory: &Inventory) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, inventory.records()).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::CdRecord;

    #[test]
    fn table_test() {
        let inventory: Inventory = vec![
            CdRecord::new(1, "Abbey Road", "Beatles"),
            CdRecord::new(2, "Blue", "Joni Mitchell"),
        ]
        .into_iter()
        .collect();

        let mut out = vec![];
        write_inventory(&mut out, &inventory).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "======= The Current Inventory: =======\n\
             ID\tCD Title (by: Artist)\n\n\
             1\tAbbey Road (by:Beatles)\n\
             2\tBlue (by:Joni Mitchell)\n\
             ======================================\n"
        );
    }

    #[test]
    fn json_test() {
        let inventory: Inventory = vec![CdRecord::new(1, "Abbey Road", "Beatles")].into_iter().collect();
        let mut out = vec![];
        write_json(&mut out, &inventory).unwrap();

        let parsed: Vec<CdRecord> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, inventory.records());
    }
}
