pub mod form_fields;
pub mod valid_uuid;
