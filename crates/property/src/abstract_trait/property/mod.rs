mod repository;
mod service;

pub use self::repository::{
    DynPropertyCommandRepository, DynPropertyQueryRepository, PropertyCommandRepositoryTrait,
    PropertyQueryRepositoryTrait,
};
pub use self::service::{DynPropertyService, PropertyServiceTrait};
