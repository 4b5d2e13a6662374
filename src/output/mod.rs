mod csv_writer;

pub use csv_writer::{ write_record, write_record_to };
