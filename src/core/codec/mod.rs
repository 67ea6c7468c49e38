pub mod rgbe;
