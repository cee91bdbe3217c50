pub mod cargo_unit;
pub mod shipping_company;
