pub mod comment;
pub mod project;
pub mod task;
pub mod user;

pub use comment::{Comment, CreateComment, UpdateComment};
pub use project::{CreateProject, Project, ProjectFilter, UpdateProject};
pub use task::{Attachment, AttachmentInput, CreateTask, Task, TaskFilter, UpdateTask};
pub use user::{CreateUser, UpdateUser, User};
