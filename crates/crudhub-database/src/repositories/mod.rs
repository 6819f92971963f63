//! Repository implementations for every CrudHub resource.

pub mod category;
pub mod memory;
pub mod user;

use crudhub_core::traits::CrudRepository;
use crudhub_core::types::id::{CategoryId, UserId};
use crudhub_entity::{Category, CategoryChanges, NewCategory, NewUser, User, UserChanges};

pub use category::CategoryRepository;
pub use memory::{MemoryRecord, MemoryRepository};
pub use user::UserRepository;

/// Any repository able to serve the users resource.
pub type DynUserRepository =
    dyn CrudRepository<Id = UserId, Entity = User, Draft = NewUser, Patch = UserChanges>;

/// Any repository able to serve the categories resource.
pub type DynCategoryRepository = dyn CrudRepository<
        Id = CategoryId,
        Entity = Category,
        Draft = NewCategory,
        Patch = CategoryChanges,
    >;
