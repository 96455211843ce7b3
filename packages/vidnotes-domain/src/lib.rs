pub mod links;
pub mod query;
pub mod time_codec;
pub mod writegate;
