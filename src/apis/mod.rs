pub mod donjon;
