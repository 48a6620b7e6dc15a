pub mod engine;
pub mod export;
pub mod extract;
pub mod name;
pub mod normalize;
pub mod schema;

pub mod prelude {
    pub use crate::name::NamePair;
    pub use crate::schema::SchemaSpec;
}
