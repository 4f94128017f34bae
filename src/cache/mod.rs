//! Read access to the scraper's JSON cache
//!
//! The cache is a directory tree written by an upstream scraper. Only three
//! document families are relevant here:
//!
//! | Document  | Location under the cache root                          |
//! |-----------|--------------------------------------------------------|
//! | Semesters | `catalog/api/teach/semester/list.json`                 |
//! | Sections  | `catalog/api/teach/lesson/list-for-teach/{jwId}.json`  |
//! | Schedules | `jw/api/schedule-table/datum/{sectionId}.json`         |

mod reader;

pub use reader::CacheReader;

/// Semester list, relative to the cache root
pub const SEMESTERS_FILE: &str = "catalog/api/teach/semester/list.json";

/// Directory holding one section list per semester
pub const SECTIONS_DIR: &str = "catalog/api/teach/lesson/list-for-teach";

/// Flat directory holding one schedule document per section
pub const SCHEDULES_DIR: &str = "jw/api/schedule-table/datum";
