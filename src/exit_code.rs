use crate::error::ExportError;

pub fn exit_code_for_error(err: &ExportError) -> i32 {
    match err {
        ExportError::Config(_) | ExportError::InvalidPattern(_) => 2,
        ExportError::FileNotFound(_) => 3,
        ExportError::PermissionDenied(_) => 4,
        ExportError::Database(_) => 5,
        ExportError::Json(_) => 6,
        ExportError::Io(_) => 7,
    }
}
