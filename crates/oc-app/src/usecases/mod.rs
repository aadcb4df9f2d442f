//! Business logic use cases
//!
//! 一个操作是否值得做成独立 Use Case，
//! 取决于“是否需要用户 / 系统再次做出决策”

pub mod copy_code;
pub mod extract_code;
pub mod get_clear_delay;
pub mod set_clear_delay;

pub use copy_code::{CopyCode, CopyOutcome};
pub use extract_code::ExtractCode;
pub use get_clear_delay::GetClearDelay;
pub use set_clear_delay::SetClearDelay;
