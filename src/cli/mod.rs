mod command;
mod runner;
mod util;

pub use command::Command;
pub use runner::{OutputMode, run, run_to_writer, run_with_format};
pub use util::{parse_output_mode, parse_structure_arg};
