//! Item listing writers (CSV and JSON Lines).

use std::io::Write;

use crate::data::Datum;
use crate::error::DatasetError;

/// Output format for item listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ItemFormat {
    /// `impath,label,classname,domain` with a header row.
    #[default]
    Csv,
    /// One JSON object per line.
    Jsonl,
}

impl ItemFormat {
    pub fn from_name(name: &str) -> Result<Self, DatasetError> {
        match name {
            "csv" => Ok(Self::Csv),
            "jsonl" | "json-lines" => Ok(Self::Jsonl),
            other => Err(DatasetError::UnsupportedFormat(format!(
                "'{}' (supported: csv, jsonl)",
                other
            ))),
        }
    }
}

/// Write `items` to `writer` in the given format.
pub fn write_items<W: Write>(
    writer: W,
    items: &[Datum],
    format: ItemFormat,
) -> Result<(), DatasetError> {
    match format {
        ItemFormat::Csv => write_csv(writer, items),
        ItemFormat::Jsonl => write_jsonl(writer, items),
    }
}

fn write_csv<W: Write>(writer: W, items: &[Datum]) -> Result<(), DatasetError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for item in items {
        wtr.serialize(item).map_err(|source| DatasetError::ItemWrite {
            message: source.to_string(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_jsonl<W: Write>(mut writer: W, items: &[Datum]) -> Result<(), DatasetError> {
    for item in items {
        serde_json::to_writer(&mut writer, item).map_err(|source| DatasetError::ItemWrite {
            message: source.to_string(),
        })?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
