pub mod read_hdr;
pub mod write_hdr;
