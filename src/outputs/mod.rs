//! Output generation.
//!
//! # Submodules
//!
//! - [`report`]: Writes the daily plain-text job report
//!
//! # Output Structure
//!
//! ```text
//! job_results/
//! ├── 181026_Result.txt
//! └── 191026_Result.txt   # one file per day, rewritten on each run
//! ```

pub mod report;
