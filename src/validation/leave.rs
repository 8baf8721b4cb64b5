use crate::error::AppError;
use chrono::NaiveDate;

pub fn validate_request_leave(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), AppError> {
    if start_date > end_date {
        return Err(AppError::validation(
            "Leave start date must not be after end date",
        ));
    }
    Ok(())
}
