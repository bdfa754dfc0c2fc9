//! Wire protocol of the servo controller.
//!
//! ASCII, fire-and-forget: `#<joint>P<pulse>T<ms>` per joint, concatenated,
//! terminated by CR LF.

mod batch;
mod command;

pub use batch::{CommandBatch, LINE_END, MAX_FRAME_LEN};
pub use command::{encode, Command, MAX_COMMAND_LEN};
