//! Cross-matching galaxies against a reference catalog.
//!
//! [`match_to_catalog`] assigns every subject galaxy its nearest
//! catalog counterpart by great-circle separation, then splits the
//! subjects at the matching radius: subjects closer than the radius are
//! merged with their counterpart's catalog row, the rest are returned
//! as-is. Both output tables carry `best_match` (catalog row ordinal)
//! and `sky_separation` (arcseconds).
//!
//! The inputs are never modified; the annotation columns are added to
//! an internal copy of the subjects table only.

use crate::errors::{MatchError, MatchResult};
use crate::neighbors::NeighborIndex;
use galaxy_core::angle::{validate_declination, validate_right_ascension};
use galaxy_core::Angle;
use galaxy_table::{join_on_index, JoinPolicy, Table, TableError, Value};

/// Name of the synthetic catalog-ordinal column.
pub const BEST_MATCH_COL: &str = "best_match";
/// Name of the synthetic separation column, in arcseconds.
pub const SKY_SEPARATION_COL: &str = "sky_separation";

/// Configuration for one cross-match.
///
/// ```
/// use galaxy_match::MatchConfig;
///
/// let config = MatchConfig {
///     radius: galaxy_core::Angle::from_arcseconds(5.0),
///     ..Default::default()
/// };
/// assert_eq!(config.subject_suffix, "_subject");
/// ```
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Matching radius. Subjects whose nearest counterpart lies at this
    /// separation or farther are unmatched (strictly-less-than wins).
    pub radius: Angle,
    /// How catalog rows without a matched subject are treated.
    pub policy: JoinPolicy,
    /// Suffix for subject-side column names that collide with catalog names.
    pub subject_suffix: String,
    /// Suffix for catalog-side column names that collide with subject names.
    pub catalog_suffix: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            radius: Angle::from_arcseconds(10.0),
            policy: JoinPolicy::Inner,
            subject_suffix: "_subject".to_string(),
            catalog_suffix: String::new(),
        }
    }
}

impl MatchConfig {
    /// Sets the join policy from its configuration-file name.
    ///
    /// # Errors
    /// `UnknownJoinPolicy` for anything but `"inner"` or `"right"`.
    pub fn with_policy_name(mut self, name: &str) -> MatchResult<Self> {
        self.policy = name.parse().map_err(|e| match e {
            TableError::UnknownJoinPolicy(s) => MatchError::UnknownJoinPolicy(s),
            other => MatchError::Table(other),
        })?;
        Ok(self)
    }
}

/// Matches each subject to its nearest catalog row and partitions the
/// subjects at the configured radius.
///
/// Returns `(matched, unmatched)`:
///
/// - `matched` — one row per subject within the radius, carrying the
///   subject columns (suffixed where they collide with catalog names),
///   the catalog columns of the nearest row (suffixed per the catalog
///   suffix), and the synthetic `best_match`/`sky_separation` columns.
///   Under [`JoinPolicy::Right`], catalog rows no subject matched are
///   appended with subject-side cells null.
/// - `unmatched` — the remaining subjects, with `best_match` and
///   `sky_separation` but no catalog columns.
///
/// For the inner policy the two tables partition the subjects exactly:
/// every subject row lands in one of them, none in both.
///
/// # Errors
/// [`MatchError::EmptyCatalog`] if `catalog` has no rows,
/// [`MatchError::InvalidCoordinate`] for any malformed `ra`/`dec` cell
/// in either table.
pub fn match_to_catalog(
    subjects: &Table,
    catalog: &Table,
    config: &MatchConfig,
) -> MatchResult<(Table, Table)> {
    if catalog.is_empty() {
        return Err(MatchError::EmptyCatalog);
    }

    let subject_coords = extract_coordinates(subjects, "subjects")?;
    let catalog_coords = extract_coordinates(catalog, "catalog")?;

    let index = NeighborIndex::new(&catalog_coords);
    let radius_arcsec = config.radius.arcseconds();

    let mut ordinals = Vec::with_capacity(subject_coords.len());
    let mut separations = Vec::with_capacity(subject_coords.len());
    let mut within = Vec::with_capacity(subject_coords.len());
    for &(ra, dec) in &subject_coords {
        let (ordinal, separation) = index.nearest(ra, dec);
        let arcsec = separation.arcseconds();
        ordinals.push(Value::Int(ordinal as i64));
        separations.push(Value::Float(arcsec));
        within.push(arcsec < radius_arcsec);
    }

    let mut annotated = subjects.clone();
    annotated.add_column(BEST_MATCH_COL, ordinals)?;
    annotated.add_column(SKY_SEPARATION_COL, separations)?;

    let matched_subjects = annotated.filter(|row| within[row.index()]);
    let unmatched = annotated.filter(|row| !within[row.index()]);

    let matched = join_on_index(
        &matched_subjects,
        BEST_MATCH_COL,
        catalog,
        config.policy,
        &config.subject_suffix,
        &config.catalog_suffix,
    )?;

    Ok((matched, unmatched))
}

/// Pulls validated `(ra_deg, dec_deg)` pairs out of a table.
///
/// Accepts bare floats (degrees) and unit-tagged angle cells alike, so
/// matching does not depend on which convention a catalog used.
fn extract_coordinates(table: &Table, side: &str) -> MatchResult<Vec<(f64, f64)>> {
    let ra_col = table.column("ra")?;
    let dec_col = table.column("dec")?;

    let mut coords = Vec::with_capacity(ra_col.len());
    for (row, (ra_cell, dec_cell)) in ra_col.iter().zip(dec_col.iter()).enumerate() {
        let ra_deg = ra_cell.as_degrees().ok_or_else(|| {
            MatchError::invalid_coordinate(
                side,
                "ra",
                row,
                format!("expected a numeric or angle cell, got {:?}", ra_cell),
            )
        })?;
        let dec_deg = dec_cell.as_degrees().ok_or_else(|| {
            MatchError::invalid_coordinate(
                side,
                "dec",
                row,
                format!("expected a numeric or angle cell, got {:?}", dec_cell),
            )
        })?;

        validate_right_ascension(Angle::from_degrees(ra_deg))
            .map_err(|e| MatchError::invalid_coordinate(side, "ra", row, e.to_string()))?;
        validate_declination(Angle::from_degrees(dec_deg))
            .map_err(|e| MatchError::invalid_coordinate(side, "dec", row, e.to_string()))?;

        coords.push((ra_deg, dec_deg));
    }
    Ok(coords)
}
