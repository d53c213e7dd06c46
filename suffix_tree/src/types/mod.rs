pub mod label_data;
pub mod node;
