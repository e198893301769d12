pub mod error;
pub mod function_object;
pub mod member;
pub mod object;
pub mod value;
