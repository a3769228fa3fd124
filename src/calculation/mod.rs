//! Calendar and OB classification logic for the OB Interpretation Engine.
//!
//! This module contains all the calculation functions for classifying days,
//! including the Easter computation that anchors every moving holiday, the
//! Swedish and Norwegian holiday table builders, the merged holiday view,
//! storhelg period resolution and membership testing, partial boundary-day
//! detection, OB rate lookup, and the top-level OB category resolver.

mod easter;
mod holiday_table;
mod holiday_union;
mod ob_category;
mod ob_rates;
mod partial_boundary;
mod storhelg_membership;
mod storhelg_period;
mod weekday;

pub use easter::compute_easter;
pub use holiday_table::{HolidayTable, norwegian_holidays, swedish_holidays};
pub use holiday_union::{holidays_for_year, is_norwegian_holiday, is_swedish_holiday};
pub use ob_category::ob_category;
pub use ob_rates::ob_rates;
pub use partial_boundary::partial_storhelg_day;
pub use storhelg_membership::is_within_storhelg;
pub use storhelg_period::storhelg_period;
pub use weekday::{is_weekend, next_non_weekend};
