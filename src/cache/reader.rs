//! Cache reader

use crate::cache::{SCHEDULES_DIR, SECTIONS_DIR, SEMESTERS_FILE};
use crate::error::{Error, Result};
use crate::types::{JwId, Schedule, ScheduleMap, Section, Semester};
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads semesters, sections and schedules from a cache root
///
/// Nothing is memoized: every call goes back to disk.
#[derive(Debug, Clone)]
pub struct CacheReader {
    root: PathBuf,
}

impl CacheReader {
    /// Create a reader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Cache root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the semester list
    pub fn semesters_path(&self) -> PathBuf {
        self.root.join(SEMESTERS_FILE)
    }

    /// Location of one semester's section list
    pub fn sections_path(&self, semester_jw_id: JwId) -> PathBuf {
        self.root
            .join(SECTIONS_DIR)
            .join(format!("{semester_jw_id}.json"))
    }

    /// Location of one section's schedule
    pub fn schedule_path(&self, section_jw_id: JwId) -> PathBuf {
        self.root
            .join(SCHEDULES_DIR)
            .join(format!("{section_jw_id}.json"))
    }

    /// Read the semester list
    ///
    /// Fails with [`Error::NotFound`] when the file is absent.
    pub fn read_semesters(&self) -> Result<Vec<Semester>> {
        let path = self.semesters_path();
        let semesters = read_json::<Vec<Semester>>(&path)?
            .ok_or_else(|| Error::NotFound(path.clone()))?;
        debug!(path = %path.display(), count = semesters.len(), "read semesters");
        Ok(semesters)
    }

    /// Read the sections of one semester
    ///
    /// A semester without a cached section list yields an empty vector.
    pub fn read_sections(&self, semester_jw_id: JwId) -> Result<Vec<Section>> {
        let path = self.sections_path(semester_jw_id);
        match read_json::<Vec<Section>>(&path)? {
            Some(sections) => {
                debug!(semester = semester_jw_id, count = sections.len(), "read sections");
                Ok(sections)
            }
            None => {
                debug!(semester = semester_jw_id, path = %path.display(), "no sections cached");
                Ok(Vec::new())
            }
        }
    }

    /// Read the schedules for a set of sections
    ///
    /// Sections without a cached schedule are left out of the result.
    pub fn read_schedules(&self, section_jw_ids: &[JwId]) -> Result<ScheduleMap> {
        let mut schedules = ScheduleMap::new();
        for &id in section_jw_ids {
            if let Some(schedule) = read_json::<Schedule>(&self.schedule_path(id))? {
                schedules.insert(id, schedule);
            }
        }
        debug!(
            requested = section_jw_ids.len(),
            found = schedules.len(),
            "read schedules"
        );
        Ok(schedules)
    }
}

/// Read and parse one JSON document, `None` if the file does not exist
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(Error::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
}
