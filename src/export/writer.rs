//! Point shapefile writer.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use shapefile::dbase::{FieldValue, Record};
use shapefile::{Point, ShapeWriter};

use super::projection::SpatialReference;
use super::schema::{table_builder, EXPORT_SCHEMA};
use super::types::{ExportOptions, ExportSummary};
use crate::aggregate::{AggregateEntry, AggregationTable};
use crate::config::{
    CITY_FIELD, CITY_FIELD_WIDTH, DBF_CODE_PAGE, FREQUENCY_FIELD, FREQUENCY_FIELD_WIDTH,
    IP_FIELD, IP_FIELD_WIDTH,
};
use crate::error_handling::ExportError;

/// Exports the aggregation table as a point shapefile.
///
/// Steps, in order:
/// 1. Resolve the coordinate reference system (fails before touching disk).
/// 2. Remove whatever is at `output_dir` and recreate it empty.
/// 3. Declare the attribute schema and create `<layer>.shp/.shx/.dbf`.
/// 4. Write one point per entry at (longitude, latitude), ordered by
///    descending hit count then IP.
/// 5. Drop the writer so it rewrites the file headers, then flush and sync
///    each component.
/// 6. Write the `.prj` and `.cpg` sidecars.
///
/// # Errors
///
/// Any failure aborts the export and is returned as an `ExportError`; there
/// is no partial-output mode.
pub fn export_shapefile(
    table: &AggregationTable,
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError> {
    let srs = SpatialReference::from_epsg(options.epsg)?;

    prepare_output_dir(&options.output_dir)?;

    let builder = table_builder(&EXPORT_SCHEMA)?;
    let shp_path = options.component_path("shp");
    let shx_path = options.component_path("shx");
    let dbf_path = options.component_path("dbf");
    let mut shp = create_component(&shp_path)?;
    let mut shx = create_component(&shx_path)?;
    let mut dbf = create_component(&dbf_path)?;

    let mut writer = shapefile::Writer::new(
        ShapeWriter::with_shx(&mut shp, &mut shx),
        builder.build_with_dest(&mut dbf),
    );
    let mut features_written = 0;
    for entry in table.ranked() {
        let point = Point::new(entry.longitude, entry.latitude);
        writer
            .write_shape_and_record(&point, &feature_record(entry))
            .map_err(|source| ExportError::Feature {
                ip: entry.ip.clone(),
                source,
            })?;
        features_written += 1;
    }
    // Header rewrites land in the buffers; their I/O errors surface on flush
    drop(writer);

    finalize_component(&shp_path, shp)?;
    finalize_component(&shx_path, shx)?;
    finalize_component(&dbf_path, dbf)?;
    log::info!(
        "Wrote {} point features to {}",
        features_written,
        shp_path.display()
    );

    let prj_path = options.component_path("prj");
    write_sidecar(&prj_path, srs.to_esri_wkt())?;
    write_sidecar(&options.component_path("cpg"), DBF_CODE_PAGE)?;
    log::debug!(
        "Projection EPSG:{} ({}) written to {}",
        srs.epsg(),
        srs.name(),
        prj_path.display()
    );

    Ok(ExportSummary {
        shp_path,
        prj_path,
        features_written,
    })
}

/// Attribute values of one feature, keyed by schema field name.
///
/// Text values are cut to their field width on a character boundary, since
/// dBASE would otherwise cut them mid-character.
fn feature_record(entry: &AggregateEntry) -> Record {
    debug_assert!(
        entry.hit_count.to_string().len() <= usize::from(FREQUENCY_FIELD_WIDTH),
        "hit count {} does not fit the frequency field",
        entry.hit_count
    );
    let mut record = Record::default();
    record.insert(
        IP_FIELD.to_string(),
        FieldValue::Character(Some(fit_to_width(&entry.ip, IP_FIELD_WIDTH).to_string())),
    );
    record.insert(
        CITY_FIELD.to_string(),
        FieldValue::Character(Some(
            fit_to_width(&entry.city, CITY_FIELD_WIDTH).to_string(),
        )),
    );
    record.insert(
        FREQUENCY_FIELD.to_string(),
        FieldValue::Numeric(Some(entry.hit_count as f64)),
    );
    record
}

/// Longest prefix of `value` that fits in `width` bytes without splitting a character.
fn fit_to_width(value: &str, width: u8) -> &str {
    let mut end = usize::from(width);
    if value.len() <= end {
        return value;
    }
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

/// Removes any previous output at `dir` (file or directory) and creates it empty.
fn prepare_output_dir(dir: &Path) -> Result<(), ExportError> {
    let removed = match fs::symlink_metadata(dir) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(dir).map(|_| true),
        Ok(_) => fs::remove_file(dir).map(|_| true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
    .map_err(|source| ExportError::Cleanup {
        path: dir.to_path_buf(),
        source,
    })?;
    if removed {
        log::info!("Removed previous output at {}", dir.display());
    }

    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

fn create_component(path: &Path) -> Result<BufWriter<File>, ExportError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ExportError::Create {
            path: path.to_path_buf(),
            source,
        })
}

/// Flushes a component and syncs it to disk.
fn finalize_component(path: &Path, mut dest: BufWriter<File>) -> Result<(), ExportError> {
    flush_component(path, &mut dest)?;
    dest.get_ref()
        .sync_all()
        .map_err(|source| ExportError::Finalize {
            path: path.to_path_buf(),
            source,
        })
}

fn flush_component<W: Write>(path: &Path, dest: &mut W) -> Result<(), ExportError> {
    dest.flush().map_err(|source| ExportError::Finalize {
        path: path.to_path_buf(),
        source,
    })
}

fn write_sidecar(path: &Path, content: &str) -> Result<(), ExportError> {
    fs::write(path, content).map_err(|source| ExportError::Sidecar {
        path: path.to_path_buf(),
        source,
    })
}
