//! Kind table listing.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;
use wlid::{abbreviate_kind, KindTable};

use crate::output::print_output;

use super::CommandContext;

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,

    #[tabled(rename = "Abbreviation")]
    abbreviation: String,
}

pub fn list(ctx: &CommandContext) -> Result<()> {
    print_output(&rows(KindTable::global()), ctx.format);
    Ok(())
}

fn rows(table: &KindTable) -> Vec<KindRow> {
    table
        .iter()
        .map(|kind| KindRow {
            kind,
            abbreviation: abbreviate_kind(kind),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_cover_table() {
        let table = KindTable::global();
        let rows = rows(table);
        assert_eq!(rows.len(), table.len());

        let hpa = rows
            .iter()
            .find(|row| row.kind == "HorizontalPodAutoscaler")
            .unwrap();
        assert_eq!(hpa.abbreviation, "horizontalpodautoscaler");
    }
}
