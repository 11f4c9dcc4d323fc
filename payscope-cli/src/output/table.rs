//! Table output formatting using the `tabled` crate

use super::OutputConfig;
use tabled::{
    builder::Builder,
    settings::{object::Columns, style::Style, Alignment, Modify, Width},
    Table,
};

/// Table output formatter
pub struct TableOutput;

impl TableOutput {
    /// Build a table from pre-rendered rows. Columns listed in `right` are
    /// right-aligned.
    pub fn from_rows(
        headers: &[&str],
        rows: &[Vec<String>],
        right: &[usize],
        config: &OutputConfig,
    ) -> String {
        if rows.is_empty() {
            return "(no records)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(headers.iter().copied());
        for row in rows {
            builder.push_record(row.iter().map(|s| s.as_str()));
        }

        let mut table = builder.build();
        for &col in right {
            table.with(Modify::new(Columns::single(col)).with(Alignment::right()));
        }
        Self::finish(table, config)
    }

    /// Format a two-column key/value table
    pub fn key_value(pairs: &[(&str, String)], config: &OutputConfig) -> String {
        let mut builder = Builder::default();
        for (key, value) in pairs {
            builder.push_record([*key, value.as_str()]);
        }

        let mut table = builder.build();
        table.with(Modify::new(Columns::first()).with(Alignment::right()));
        Self::finish(table, config)
    }

    fn finish(mut table: Table, config: &OutputConfig) -> String {
        if config.compact {
            table.with(Style::blank());
        } else {
            table.with(Style::rounded());
        }

        if config.should_wrap() {
            table.with(Width::wrap(config.effective_width()));
        }

        table.to_string()
    }
}
