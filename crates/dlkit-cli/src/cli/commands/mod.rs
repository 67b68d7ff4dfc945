//! CLI command handlers, one per file.

mod checksum;
mod classify;
mod forget;
mod format;
mod list;
mod record;
mod show;
mod verify;

pub use checksum::run_checksum;
pub use classify::run_classify;
pub use forget::run_forget;
pub use format::run_format;
pub use list::run_list;
pub use record::{run_record, RecordRequest};
pub use show::run_show;
pub use verify::run_verify;
