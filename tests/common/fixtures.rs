//! Cache fixtures for catalog-relay tests
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use catalog_relay::cache::{CacheReader, SCHEDULES_DIR, SECTIONS_DIR, SEMESTERS_FILE};
use catalog_relay::types::JwId;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A scraper cache laid out in a temporary directory
pub struct CacheFixture {
    dir: TempDir,
}

impl CacheFixture {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Cache root
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Reader over this cache
    pub fn reader(&self) -> CacheReader {
        CacheReader::new(self.dir.path())
    }

    /// Write a file relative to the cache root
    pub fn write_raw(&self, rel: &str, contents: &str) {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(path.parent().expect("relative path has a parent"))
            .expect("create cache dirs");
        fs::write(path, contents).expect("write cache file");
    }

    /// Write the semester list
    pub fn with_semesters(self, semesters: &Value) -> Self {
        self.write_raw(SEMESTERS_FILE, &semesters.to_string());
        self
    }

    /// Write one semester's section list
    pub fn with_sections(self, semester_jw_id: JwId, sections: &Value) -> Self {
        self.write_raw(
            &format!("{SECTIONS_DIR}/{semester_jw_id}.json"),
            &sections.to_string(),
        );
        self
    }

    /// Put a directory where a section's schedule file belongs, so reading it fails
    pub fn with_unreadable_schedule(self, section_jw_id: JwId) -> Self {
        fs::create_dir_all(
            self.dir
                .path()
                .join(format!("{SCHEDULES_DIR}/{section_jw_id}.json")),
        )
        .expect("create blocking dir");
        self
    }

    /// Write one section's schedule
    pub fn with_schedule(self, section_jw_id: JwId, schedule: &Value) -> Self {
        self.write_raw(
            &format!("{SCHEDULES_DIR}/{section_jw_id}.json"),
            &schedule.to_string(),
        );
        self
    }
}

/// Semester record as the scraper writes it
pub fn semester(id: JwId, name: &str) -> Value {
    json!({
        "id": id,
        "nameZh": name,
        "code": format!("S{id}"),
        "start": "2024-09-01",
        "end": "2025-01-15"
    })
}

/// Section record with a few passthrough fields
pub fn section(id: JwId) -> Value {
    json!({
        "id": id,
        "code": format!("{id:03}"),
        "credits": 3.0,
        "course": {"id": id * 10, "code": format!("C{id}"), "cn": "课程", "en": null}
    })
}

/// Schedule document for a section
pub fn schedule(section_jw_id: JwId) -> Value {
    json!({
        "result": {
            "lessonId": section_jw_id,
            "scheduleGroupList": [],
            "scheduleList": [{"weekday": 1, "startUnit": 1, "endUnit": 2}]
        }
    })
}

/// The single-semester cache used by the end-to-end scenario
pub fn fall_cache() -> CacheFixture {
    CacheFixture::new()
        .with_semesters(&json!([{"id": 123, "nameZh": "Fall"}]))
        .with_sections(123, &json!([{"id": 456}]))
        .with_schedule(456, &schedule(456))
}
