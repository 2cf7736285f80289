mod datetime;
mod logs;
mod shutdown;

pub use self::datetime::{jst, to_jst_date_string, to_jst_datetime_string};
pub use self::logs::Logger;
pub use self::shutdown::shutdown_signal;
