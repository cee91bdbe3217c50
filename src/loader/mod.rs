pub mod parser;
pub mod plan_codec;
