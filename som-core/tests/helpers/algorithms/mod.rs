pub mod som;
