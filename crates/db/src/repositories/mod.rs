pub mod comment_repo;
pub mod project_repo;
pub mod task_repo;
pub mod user_repo;

pub use comment_repo::CommentRepo;
pub use project_repo::ProjectRepo;
pub use task_repo::{PriorityCount, StatusCount, TaskRepo, TaskStats};
pub use user_repo::UserRepo;
