mod expand;
mod fs;
mod info;
mod root;

pub use expand::cmd_expand;
pub use fs::{cmd_copy, cmd_exists, cmd_mkdir};
pub use info::cmd_info;
pub use root::cmd_check_root;
