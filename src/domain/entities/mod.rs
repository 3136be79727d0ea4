pub mod observation;
pub mod price;
pub mod product;
pub mod source_url;
