pub mod census;
pub mod pindah_sambung;
