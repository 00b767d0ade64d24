use crate::domain::models::{
    club::Club, dj::Dj, event::Event, promoter::Promoter, user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, AppError>;
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait DjRepository: Send + Sync {
    async fn create(&self, dj: &Dj) -> Result<Dj, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Dj>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Dj>, AppError>;
    async fn list(&self) -> Result<Vec<Dj>, AppError>;
    async fn update(&self, dj: &Dj) -> Result<Dj, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ClubRepository: Send + Sync {
    async fn create(&self, club: &Club) -> Result<Club, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Club>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Club>, AppError>;
    async fn list(&self) -> Result<Vec<Club>, AppError>;
    async fn update(&self, club: &Club) -> Result<Club, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PromoterRepository: Send + Sync {
    async fn create(&self, promoter: &Promoter) -> Result<Promoter, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Promoter>, AppError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Promoter>, AppError>;
    async fn list(&self) -> Result<Vec<Promoter>, AppError>;
    async fn update(&self, promoter: &Promoter) -> Result<Promoter, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
