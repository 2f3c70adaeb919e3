pub mod day_type;
pub mod settings;
pub mod time_block;
pub mod work_day;
pub mod work_month;

pub use day_type::DayType;
pub use settings::PanSettings;
pub use time_block::TimeBlock;
pub use work_day::WorkDay;
pub use work_month::WorkMonth;
