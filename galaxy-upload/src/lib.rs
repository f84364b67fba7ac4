//! Batch upload of galaxy subjects to a citizen-science platform.
//!
//! The pipeline's last mile: take a filtered catalog with image
//! locations, turn each row into a manifest entry (metadata, survey
//! lookup links, platform conventions), and push the lot into a subject
//! set in blocks — with one retry when the platform hands back a stale
//! set reference.
//!
//! The platform API itself sits behind the [`PlatformClient`] trait;
//! this crate sequences calls and owns the metadata conventions, not
//! the wire format.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`manifest`] | [`ManifestEntry`], [`build_manifest`], [`prepare_upload_catalog`] |
//! | [`links`] | Survey lookup URL builders (SIMBAD, SDSS, DECaLS, ...) |
//! | [`uploader`] | [`PlatformClient`], [`upload_manifest`], [`upload_catalog`] |
//! | [`errors`] | [`UploadError`] and [`UploadResult`] |

pub mod errors;
pub mod links;
pub mod manifest;
pub mod uploader;

pub use errors::{UploadError, UploadResult};
pub use manifest::{
    build_manifest, prepare_upload_catalog, ManifestEntry, MISSING_FLAG, RETIREMENT_LIMIT_COL,
    UPLOADER_COL, UPLOAD_COLS,
};
pub use uploader::{
    find_or_create_subject_set, upload_catalog, upload_manifest, PlatformClient, SubjectId,
    SubjectSetRef, UploadConfig,
};
