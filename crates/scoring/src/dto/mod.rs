pub mod acft;
