use crate::error::AppError;
use chrono::NaiveTime;

pub fn validate_create_shift(
    name: &str,
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Shift name is required"));
    }
    match (start_time, end_time) {
        (Some(_), None) | (None, Some(_)) => {
            return Err(AppError::validation(
                "Start and end time must be supplied together",
            ));
        }
        (Some(start), Some(end)) if start == end => {
            return Err(AppError::validation(
                "Start and end time must be distinct",
            ));
        }
        _ => {}
    }
    Ok(())
}
