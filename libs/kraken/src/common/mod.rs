mod utils;

pub use utils::get_current_timestamp_str;
pub use utils::init_logger;
pub use utils::init_logger_exe;
