mod classified_error;
mod field_error;
mod logger;
