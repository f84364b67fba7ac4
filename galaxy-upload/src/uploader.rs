//! Block-batched subject upload.
//!
//! [`upload_manifest`] drives a [`PlatformClient`] through the standard
//! upload sequence: resolve (or create) the target subject set, create
//! subjects in blocks, link each block as it completes. Blocks keep the
//! final link call small and let a failed upload resume by set name.
//!
//! The platform occasionally invalidates a subject-set handle between
//! resolution and linking (another uploader touching the same set). A
//! [`UploadError::StaleSetReference`] from the client triggers one
//! re-resolution and retry of the affected block; a second failure
//! propagates.

use crate::errors::{UploadError, UploadResult};
use crate::manifest::ManifestEntry;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

/// Opaque platform identifier of a created subject.
pub type SubjectId = String;

/// Resolved handle to a subject set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectSetRef {
    pub id: String,
    pub name: String,
}

/// The platform boundary. Implementations own authentication, wire
/// format, and endpoint details; the uploader only sequences calls.
pub trait PlatformClient {
    /// Looks up a subject set by display name.
    fn find_subject_set(&mut self, project_id: &str, name: &str)
        -> UploadResult<Option<SubjectSetRef>>;

    /// Creates a subject set with the given display name.
    fn create_subject_set(&mut self, project_id: &str, name: &str) -> UploadResult<SubjectSetRef>;

    /// Creates one subject from a manifest entry, returning its id.
    fn create_subject(&mut self, project_id: &str, entry: &ManifestEntry)
        -> UploadResult<SubjectId>;

    /// Links already-created subjects into a set.
    fn link_subjects(&mut self, set: &SubjectSetRef, subjects: &[SubjectId]) -> UploadResult<()>;
}

/// Upload tuning knobs.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Platform project to upload into.
    pub project_id: String,
    /// Subjects created and linked per block.
    pub block_size: usize,
    /// Show an interactive progress bar.
    pub progress: bool,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            project_id: "5733".to_string(),
            block_size: 100,
            progress: true,
        }
    }
}

/// Uploads a manifest into the named subject set.
///
/// Subject-set names containing `TEST` short-circuit without talking to
/// the platform, so test manifests can flow through the full pipeline
/// safely. Each entry's image file must exist on disk.
///
/// Returns the created subject ids, in manifest order.
pub fn upload_manifest<C: PlatformClient>(
    client: &mut C,
    config: &UploadConfig,
    subject_set_name: &str,
    manifest: &[ManifestEntry],
) -> UploadResult<Vec<SubjectId>> {
    if subject_set_name.contains("TEST") {
        warn!(set = subject_set_name, "testing mode detected - not uploading");
        return Ok(Vec::new());
    }

    match config.project_id.as_str() {
        "5733" => info!("uploading to main project 5733"),
        "6490" => info!("uploading to mobile project 6490"),
        "8751" => info!("uploading to staging project 8751"),
        other => info!(project = other, "uploading to unknown project"),
    }
    info!(
        subjects = manifest.len(),
        set = subject_set_name,
        "starting upload"
    );

    let mut set = find_or_create_subject_set(client, &config.project_id, subject_set_name)?;

    let pbar = if config.progress {
        let pb = ProgressBar::new(manifest.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} subjects uploaded").unwrap_or_else(
                |_| ProgressStyle::default_bar(),
            ),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut uploaded = Vec::with_capacity(manifest.len());
    for block in manifest.chunks(config.block_size.max(1)) {
        let mut block_ids = Vec::with_capacity(block.len());
        for entry in block {
            if !entry.file_loc.exists() {
                return Err(UploadError::MissingSubjectFile(entry.file_loc.clone()));
            }
            block_ids.push(client.create_subject(&config.project_id, entry)?);
            pbar.inc(1);
        }

        match client.link_subjects(&set, &block_ids) {
            Ok(()) => {}
            Err(UploadError::StaleSetReference) => {
                warn!(set = %set.name, "stale subject set reference, re-resolving");
                set = find_or_create_subject_set(client, &config.project_id, subject_set_name)?;
                client.link_subjects(&set, &block_ids)?;
            }
            Err(other) => return Err(other),
        }
        info!(linked = block_ids.len(), "subjects linked");
        uploaded.extend(block_ids);
    }

    pbar.finish();
    info!(total = uploaded.len(), "upload complete");
    Ok(uploaded)
}

/// Selects the presentable columns of `catalog`, builds the manifest,
/// and uploads it: the one-call path from a filtered catalog to a
/// populated subject set.
pub fn upload_catalog<C: PlatformClient>(
    client: &mut C,
    config: &UploadConfig,
    catalog: &galaxy_table::Table,
    subject_set_name: &str,
    retirement_limit: i64,
    uploader: &str,
) -> UploadResult<Vec<SubjectId>> {
    let upload_catalog =
        crate::manifest::prepare_upload_catalog(catalog, retirement_limit, uploader)?;
    info!(
        galaxies = upload_catalog.n_rows(),
        set = subject_set_name,
        "preparing manifest"
    );
    let manifest = crate::manifest::build_manifest(&upload_catalog)?;
    upload_manifest(client, config, subject_set_name, &manifest)
}

/// Resolves a subject set by name, creating it when absent.
pub fn find_or_create_subject_set<C: PlatformClient>(
    client: &mut C,
    project_id: &str,
    name: &str,
) -> UploadResult<SubjectSetRef> {
    match client.find_subject_set(project_id, name)? {
        Some(set) => Ok(set),
        None => {
            info!(set = name, "subject set not found - creating it");
            client.create_subject_set(project_id, name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;
    use std::path::PathBuf;

    struct MockClient {
        sets: Vec<SubjectSetRef>,
        created: Vec<PathBuf>,
        linked: Vec<(String, Vec<SubjectId>)>,
        stale_failures_remaining: usize,
        next_id: usize,
    }

    impl MockClient {
        fn new() -> Self {
            Self {
                sets: Vec::new(),
                created: Vec::new(),
                linked: Vec::new(),
                stale_failures_remaining: 0,
                next_id: 0,
            }
        }
    }

    impl PlatformClient for MockClient {
        fn find_subject_set(
            &mut self,
            _project_id: &str,
            name: &str,
        ) -> UploadResult<Option<SubjectSetRef>> {
            Ok(self.sets.iter().find(|s| s.name == name).cloned())
        }

        fn create_subject_set(
            &mut self,
            _project_id: &str,
            name: &str,
        ) -> UploadResult<SubjectSetRef> {
            let set = SubjectSetRef {
                id: format!("set-{}", self.sets.len()),
                name: name.to_string(),
            };
            self.sets.push(set.clone());
            Ok(set)
        }

        fn create_subject(
            &mut self,
            _project_id: &str,
            entry: &ManifestEntry,
        ) -> UploadResult<SubjectId> {
            self.created.push(entry.file_loc.clone());
            self.next_id += 1;
            Ok(format!("subject-{}", self.next_id))
        }

        fn link_subjects(
            &mut self,
            set: &SubjectSetRef,
            subjects: &[SubjectId],
        ) -> UploadResult<()> {
            if self.stale_failures_remaining > 0 {
                self.stale_failures_remaining -= 1;
                return Err(UploadError::StaleSetReference);
            }
            self.linked.push((set.id.clone(), subjects.to_vec()));
            Ok(())
        }
    }

    fn manifest_of(dir: &std::path::Path, n: usize) -> Vec<ManifestEntry> {
        (0..n)
            .map(|i| {
                let file_loc = dir.join(format!("galaxy_{}.png", i));
                std::fs::write(&file_loc, b"png").unwrap();
                ManifestEntry {
                    file_loc,
                    key_data: Map::new(),
                }
            })
            .collect()
    }

    fn quiet_config(block_size: usize) -> UploadConfig {
        UploadConfig {
            block_size,
            progress: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_uploads_in_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = manifest_of(dir.path(), 5);
        let mut client = MockClient::new();

        let ids = upload_manifest(&mut client, &quiet_config(2), "galaxies", &manifest).unwrap();

        assert_eq!(ids.len(), 5);
        assert_eq!(client.created.len(), 5);
        // 2 + 2 + 1
        let block_sizes: Vec<usize> = client.linked.iter().map(|(_, ids)| ids.len()).collect();
        assert_eq!(block_sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_creates_missing_subject_set() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = manifest_of(dir.path(), 1);
        let mut client = MockClient::new();

        upload_manifest(&mut client, &quiet_config(100), "galaxies", &manifest).unwrap();
        assert_eq!(client.sets.len(), 1);
        assert_eq!(client.sets[0].name, "galaxies");
    }

    #[test]
    fn test_reuses_existing_subject_set() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = manifest_of(dir.path(), 1);
        let mut client = MockClient::new();
        client
            .create_subject_set("5733", "galaxies")
            .unwrap();

        upload_manifest(&mut client, &quiet_config(100), "galaxies", &manifest).unwrap();
        assert_eq!(client.sets.len(), 1);
    }

    #[test]
    fn test_test_set_short_circuits() {
        let mut client = MockClient::new();
        let manifest = vec![ManifestEntry {
            file_loc: PathBuf::from("does/not/exist.png"),
            key_data: Map::new(),
        }];

        let ids =
            upload_manifest(&mut client, &quiet_config(100), "TEST_run", &manifest).unwrap();
        assert!(ids.is_empty());
        assert!(client.created.is_empty());
        assert!(client.sets.is_empty());
    }

    #[test]
    fn test_missing_file_rejected() {
        let mut client = MockClient::new();
        let manifest = vec![ManifestEntry {
            file_loc: PathBuf::from("does/not/exist.png"),
            key_data: Map::new(),
        }];

        let result = upload_manifest(&mut client, &quiet_config(100), "galaxies", &manifest);
        assert!(matches!(result, Err(UploadError::MissingSubjectFile(_))));
    }

    #[test]
    fn test_stale_set_reference_retried_once() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = manifest_of(dir.path(), 3);
        let mut client = MockClient::new();
        client.stale_failures_remaining = 1;

        let ids = upload_manifest(&mut client, &quiet_config(100), "galaxies", &manifest).unwrap();
        assert_eq!(ids.len(), 3);
        assert_eq!(client.linked.len(), 1);
        // the set was re-resolved after the stale failure
        assert_eq!(client.sets.len(), 1);
    }

    #[test]
    fn test_stale_twice_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let manifest = manifest_of(dir.path(), 1);
        let mut client = MockClient::new();
        client.stale_failures_remaining = 2;

        let result = upload_manifest(&mut client, &quiet_config(100), "galaxies", &manifest);
        assert!(matches!(result, Err(UploadError::StaleSetReference)));
    }
}
