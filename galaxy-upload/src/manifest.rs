//! Upload manifest construction.
//!
//! A manifest entry pairs a galaxy's image location with the metadata
//! shown on the classification platform. Building one from a catalog
//! row involves a few platform conventions:
//!
//! - non-finite floats become the `-999` flag value (the JSON encoder
//!   cannot carry NaN)
//! - survey lookup URLs are added and wrapped in new-tab markdown
//! - every metadata key except the operator fields is prefixed with
//!   `!`, which hides it from classifiers until they finish and discuss
//! - a `metadata_message` notice and a hidden `#upload_date` stamp are
//!   appended

use crate::errors::{UploadError, UploadResult};
use crate::links;
use galaxy_table::{Table, TableResult, Value};
use serde_json::{json, Map};
use std::path::PathBuf;

/// Catalog columns worth showing to classifiers, plus the image location.
pub const UPLOAD_COLS: [&str; 10] = [
    "iauname",
    "nsa_id",
    "ra",
    "dec",
    "petrotheta",
    "petroth50",
    "petroth90",
    "redshift",
    "nsa_version",
    "file_loc",
];

/// Metadata field read by the retirement engine; never `!`-prefixed.
pub const RETIREMENT_LIMIT_COL: &str = "#retirement_limit";
/// Names the uploading tool, for posterity; never `!`-prefixed.
pub const UPLOADER_COL: &str = "#uploader";

/// Flag value standing in for NaN/inf/missing cells.
pub const MISSING_FLAG: f64 = -999.0;

const METADATA_MESSAGE: &str = "You can access this galaxy's metadata if you chose to discuss it with other volunteers by pressing \"Done and Talk\" at the end of your classification.";

/// One galaxy ready for upload: image file plus platform metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    pub file_loc: PathBuf,
    pub key_data: Map<String, serde_json::Value>,
}

/// Restricts a catalog to [`UPLOAD_COLS`] and stamps the operator
/// columns every upload carries.
pub fn prepare_upload_catalog(
    catalog: &Table,
    retirement_limit: i64,
    uploader: &str,
) -> TableResult<Table> {
    let mut upload_catalog = catalog.select(&UPLOAD_COLS)?;
    let n = upload_catalog.n_rows();
    upload_catalog.add_column(RETIREMENT_LIMIT_COL, vec![Value::Int(retirement_limit); n])?;
    upload_catalog.add_column(UPLOADER_COL, vec![Value::from(uploader); n])?;
    Ok(upload_catalog)
}

/// Builds one manifest entry per catalog row.
///
/// Requires `ra`, `dec`, and `file_loc` columns; every column is
/// included in the metadata (the platform shows all of it, so the
/// catalog should already be filtered to presentable columns, e.g. via
/// [`prepare_upload_catalog`]).
pub fn build_manifest(catalog: &Table) -> UploadResult<Vec<ManifestEntry>> {
    let file_locs = catalog.column("file_loc")?;
    let ra_col = catalog.column("ra")?;
    let dec_col = catalog.column("dec")?;

    let mut manifest = Vec::with_capacity(catalog.n_rows());
    for row in 0..catalog.n_rows() {
        let file_loc = file_locs[row]
            .as_str()
            .map(PathBuf::from)
            .ok_or_else(|| UploadError::bad_row(row, "file_loc is not a string"))?;
        let ra = ra_col[row]
            .as_degrees()
            .ok_or_else(|| UploadError::bad_row(row, "ra is not numeric"))?;
        let dec = dec_col[row]
            .as_degrees()
            .ok_or_else(|| UploadError::bad_row(row, "dec is not numeric"))?;

        let mut key_data = Map::new();
        for name in catalog.column_names() {
            let cell = catalog.value(name, row)?;
            key_data.insert(metadata_key(name), cell_to_json(cell));
        }

        for (column, url, link_text) in [
            (
                "decals_search",
                links::coords_to_decals_skyviewer(ra, dec),
                "Click to view in DECALS",
            ),
            (
                "sdss_search",
                links::coords_to_sdss_navigate(ra, dec),
                "Click to view in SDSS",
            ),
            (
                "panstarrs_dr1_search",
                links::coords_to_panstarrs(ra, dec),
                "Click to view in PANSTARRS DR1",
            ),
            (
                "simbad_search",
                links::coords_to_simbad(ra, dec, 10.0),
                "Click to search SIMBAD",
            ),
            (
                "nasa_ned_search",
                links::coords_to_ned(ra, dec, 10.0),
                "Click to search NASA NED",
            ),
            (
                "vizier_search",
                links::coords_to_vizier(ra, dec, 10.0),
                "Click to search VizieR",
            ),
        ] {
            key_data.insert(
                metadata_key(column),
                json!(links::wrap_url_in_new_tab_markdown(&url, link_text)),
            );
        }

        key_data.insert("metadata_message".to_string(), json!(METADATA_MESSAGE));
        key_data.insert(
            "#upload_date".to_string(),
            json!(chrono::Utc::now().format("%Y-%m-%d").to_string()),
        );

        manifest.push(ManifestEntry { file_loc, key_data });
    }
    Ok(manifest)
}

/// Hides a field from the classification view unless it is an operator
/// field the platform itself reads.
fn metadata_key(name: &str) -> String {
    if name.starts_with('#') {
        name.to_string()
    } else {
        format!("!{}", name)
    }
}

fn cell_to_json(cell: &Value) -> serde_json::Value {
    match cell {
        Value::Int(v) => json!(v),
        Value::Float(v) if v.is_finite() => json!(v),
        // NaN and infinities cannot ride through JSON
        Value::Float(_) => json!(MISSING_FLAG),
        Value::Str(s) => json!(s),
        Value::Bool(b) => json!(b),
        Value::Angle(a) if a.degrees().is_finite() => json!(a.degrees()),
        Value::Angle(_) => json!(MISSING_FLAG),
        Value::Null => json!(MISSING_FLAG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Table {
        let mut t = Table::new();
        t.push_row(vec![
            ("iauname", Value::from("J094651")),
            ("ra", Value::from(146.714)),
            ("dec", Value::from(-0.333)),
            ("redshift", Value::from(0.019)),
            ("file_loc", Value::from("cutouts/J094651.png")),
        ])
        .unwrap();
        t.push_row(vec![
            ("iauname", Value::from("J094652")),
            ("ra", Value::from(146.8)),
            ("dec", Value::from(-0.3)),
            ("redshift", Value::from(f64::NAN)),
            ("file_loc", Value::from("cutouts/J094652.png")),
        ])
        .unwrap();
        t
    }

    #[test]
    fn test_manifest_entry_per_row() {
        let manifest = build_manifest(&catalog()).unwrap();
        assert_eq!(manifest.len(), 2);
        assert_eq!(
            manifest[0].file_loc,
            PathBuf::from("cutouts/J094651.png")
        );
    }

    #[test]
    fn test_metadata_keys_are_hidden() {
        let manifest = build_manifest(&catalog()).unwrap();
        let keys: Vec<&String> = manifest[0].key_data.keys().collect();

        assert!(manifest[0].key_data.contains_key("!iauname"));
        assert!(manifest[0].key_data.contains_key("!ra"));
        assert!(manifest[0].key_data.contains_key("!decals_search"));
        // the notice and the date stamp are the only unhidden extras
        assert!(manifest[0].key_data.contains_key("metadata_message"));
        assert!(manifest[0].key_data.contains_key("#upload_date"));
        assert!(!keys.iter().any(|k| k.as_str() == "iauname"));
    }

    #[test]
    fn test_operator_columns_not_hidden() {
        let prepared = {
            let mut t = catalog();
            t.add_column("nsa_id", vec![Value::Int(1), Value::Int(2)])
                .unwrap();
            t.add_column("petrotheta", vec![Value::from(4.0); 2]).unwrap();
            t.add_column("petroth50", vec![Value::from(2.0); 2]).unwrap();
            t.add_column("petroth90", vec![Value::from(8.0); 2]).unwrap();
            t.add_column("nsa_version", vec![Value::from("v1_0_1"); 2])
                .unwrap();
            prepare_upload_catalog(&t, 40, "galaxy-upload-test").unwrap()
        };
        let manifest = build_manifest(&prepared).unwrap();

        assert_eq!(
            manifest[0].key_data.get(RETIREMENT_LIMIT_COL),
            Some(&json!(40))
        );
        assert_eq!(
            manifest[0].key_data.get(UPLOADER_COL),
            Some(&json!("galaxy-upload-test"))
        );
        assert!(!manifest[0].key_data.contains_key("!#retirement_limit"));
    }

    #[test]
    fn test_nan_becomes_flag_value() {
        let manifest = build_manifest(&catalog()).unwrap();
        assert_eq!(
            manifest[1].key_data.get("!redshift"),
            Some(&json!(MISSING_FLAG))
        );
        // finite values pass through untouched
        assert_eq!(manifest[0].key_data.get("!redshift"), Some(&json!(0.019)));
    }

    #[test]
    fn test_search_links_are_markdown_wrapped() {
        let manifest = build_manifest(&catalog()).unwrap();
        let link = manifest[0]
            .key_data
            .get("!decals_search")
            .and_then(|v| v.as_str())
            .unwrap();
        assert!(link.starts_with("[Click to view in DECALS](+tab+http://"));
        assert!(link.contains("ra=146.714"));
    }

    #[test]
    fn test_missing_required_column() {
        let mut t = catalog();
        t.rename_column("file_loc", "png_loc").unwrap();
        assert!(build_manifest(&t).is_err());
    }

    #[test]
    fn test_prepare_requires_upload_cols() {
        // the fixture lacks most UPLOAD_COLS
        assert!(prepare_upload_catalog(&catalog(), 40, "test").is_err());
    }
}
