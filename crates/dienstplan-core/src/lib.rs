//! # Dienstplan Core Library
//!
//! This library provides the core business logic for the Dienstplan
//! monthly shift planner. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary; any GUI is a thin
//! layer over the same core library.
//!
//! ## Architecture
//!
//! - **Plan**: one month's `(employee, day)` cell mapping plus daily
//!   staffing needs; absence of a key means "unassigned"
//! - **Engine**: constraint evaluation, fairness scoring and the greedy
//!   single-pass auto-planner (seedable for reproducible runs)
//! - **Diff/History**: forward/backward plan deltas underlying linear
//!   undo/redo; every edit commits as one transaction
//! - **Storage**: SQLite-backed roster and month snapshots plus TOML
//!   configuration
//!
//! ## Key Components
//!
//! - [`PlanSession`]: transactional editing state for one month
//! - [`AutoPlanner`]: the automatic shift assignment engine
//! - [`PlanDb`]: roster and plan persistence
//! - [`Config`]: application configuration management

pub mod calendar;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod plan;
pub mod roster;
pub mod session;
pub mod storage;
pub mod summary;
pub mod validate;

pub use calendar::MonthRef;
pub use catalog::{ShiftCatalog, ShiftClass, ShiftType};
pub use engine::{AutoPlanner, PlannerConfig};
pub use error::{ConfigError, CoreError, DatabaseError};
pub use plan::{Cell, CellKey, DailyNeeds, Plan};
pub use roster::Employee;
pub use session::PlanSession;
pub use storage::{Config, MonthBackup, PlanDb};
pub use summary::{month_summary, EmployeeSummary};
pub use validate::{validate_plan, CellWarning};
