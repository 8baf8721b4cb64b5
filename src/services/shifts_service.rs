use uuid::Uuid;

use crate::{
    db::Db,
    db::models::api::error_codes,
    db::models::shift::{NewShift, Shift},
    db::repositories::{AssignmentsRepo, ShiftsRepo},
    error::AppError,
    validation::shift::validate_create_shift,
};

pub struct ShiftsService;

impl ShiftsService {
    /// Creates a shift definition. The shift is active iff both times are
    /// supplied; a nameless shift or a half-open time pair is rejected.
    pub fn create(db: &Db, req: &crate::routes::shifts::CreateShiftRequest) -> Result<Shift, AppError> {
        validate_create_shift(&req.name, req.start_time, req.end_time)?;

        let new_shift = NewShift {
            name: req.name.trim().to_string(),
            description: req.description.clone(),
            start_time: req.start_time,
            end_time: req.end_time,
        };
        let active = req.start_time.is_some() && req.end_time.is_some();
        let created = ShiftsRepo::insert(db, new_shift, active);
        tracing::info!(shift_id = %created.id, name = %created.name, "Shift created");
        Ok(created)
    }

    pub fn get_by_id(db: &Db, shift_id: Uuid) -> Result<Shift, AppError> {
        ShiftsRepo::find_by_id(db, shift_id).ok_or_else(|| AppError::not_found("shift"))
    }

    pub fn list(db: &Db, include_inactive: bool) -> Vec<Shift> {
        if include_inactive {
            ShiftsRepo::list_all(db)
        } else {
            ShiftsRepo::list_active(db)
        }
    }

    /// Idempotent retirement. Existing assignments keep referencing the shift
    /// as historical records.
    pub fn deactivate(db: &Db, shift_id: Uuid) -> Result<Shift, AppError> {
        let shift =
            ShiftsRepo::set_inactive(db, shift_id).ok_or_else(|| AppError::not_found("shift"))?;
        tracing::info!(shift_id = %shift.id, "Shift deactivated");
        Ok(shift)
    }

    /// Hard deletion, permitted only while no assignment references the shift.
    pub fn delete(db: &Db, shift_id: Uuid) -> Result<(), AppError> {
        let _existing =
            ShiftsRepo::find_by_id(db, shift_id).ok_or_else(|| AppError::not_found("shift"))?;

        if AssignmentsRepo::references_shift(db, shift_id) {
            return Err(AppError::conflict_with_code(
                "Shift is referenced by assignments; deactivate it instead",
                None,
                error_codes::SHIFT_REFERENCED,
            ));
        }

        ShiftsRepo::delete_by_id(db, shift_id);
        tracing::info!(shift_id = %shift_id, "Shift deleted");
        Ok(())
    }
}
