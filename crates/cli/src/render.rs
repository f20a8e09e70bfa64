//! Fixed-width table output.

use std::io::{self, Write};

use sweetshop_inventory::{Entity, Sweet};

const RULE_WIDTH: usize = 65;

pub fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

pub fn header(out: &mut impl Write) -> io::Result<()> {
    rule(out)?;
    writeln!(
        out,
        "{:<5} {:<20} {:<15} {:<10} {:<10}",
        "ID", "Name", "Category", "Price", "Quantity"
    )?;
    rule(out)
}

pub fn row(sweet: &Sweet) -> String {
    format!(
        "{:<5} {:<20} {:<15} ${:<9.2} {:<10}",
        sweet.id(),
        sweet.name(),
        sweet.category(),
        sweet.price(),
        sweet.quantity()
    )
}

/// Header plus one row per sweet.
pub fn table(out: &mut impl Write, sweets: &[Sweet]) -> io::Result<()> {
    header(out)?;
    for sweet in sweets {
        writeln!(out, "{}", row(sweet))?;
    }
    Ok(())
}
