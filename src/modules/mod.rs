pub mod kilos;
