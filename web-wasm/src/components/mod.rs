pub mod header;
pub mod drop_zone;
pub mod upload_form;
pub mod result_sections;
