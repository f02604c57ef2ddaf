//! Configurations for test cases and examples. Not intended for actual use.

pub mod comment;
pub mod note;
pub mod post;
pub mod reminder;
pub mod task;

pub use comment::Entity as Comment;
pub use note::Entity as Note;
pub use post::Entity as Post;
pub use reminder::Entity as Reminder;
pub use task::Entity as Task;
