//! Attribute schema of the exported layer.

use shapefile::dbase::{FieldName, TableWriterBuilder};

use crate::config::{
    CITY_FIELD, CITY_FIELD_WIDTH, FREQUENCY_FIELD, FREQUENCY_FIELD_WIDTH, IP_FIELD,
    IP_FIELD_WIDTH,
};
use crate::error_handling::ExportError;

/// dBASE field types used by the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Fixed-width text
    Character,
    /// Integer stored as a numeric field with no decimals
    Integer,
}

/// One attribute column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportField {
    /// dBASE field name (at most 11 bytes)
    pub name: &'static str,
    /// Storage type
    pub kind: FieldKind,
    /// Width in bytes
    pub width: u8,
}

/// Fields of every exported feature, in column order.
pub const EXPORT_SCHEMA: [ExportField; 3] = [
    ExportField {
        name: IP_FIELD,
        kind: FieldKind::Character,
        width: IP_FIELD_WIDTH,
    },
    ExportField {
        name: CITY_FIELD,
        kind: FieldKind::Character,
        width: CITY_FIELD_WIDTH,
    },
    ExportField {
        name: FREQUENCY_FIELD,
        kind: FieldKind::Integer,
        width: FREQUENCY_FIELD_WIDTH,
    },
];

/// Declares every schema field on a dBASE table builder.
///
/// Fails on the first field whose name dBASE rejects; no features are
/// written in that case.
pub(crate) fn table_builder(schema: &[ExportField]) -> Result<TableWriterBuilder, ExportError> {
    let mut builder = TableWriterBuilder::new();
    for field in schema {
        let name = FieldName::try_from(field.name).map_err(|e| ExportError::Schema {
            field: field.name.to_string(),
            reason: format!("{:?}", e),
        })?;
        builder = match field.kind {
            FieldKind::Character => builder.add_character_field(name, field.width),
            FieldKind::Integer => builder.add_numeric_field(name, field.width, 0),
        };
    }
    Ok(builder)
}
