use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::models::{
    club::{Club, ClubPatch},
    dj::{Dj, DjPatch},
    event::{Event, EventPatch},
    moderation::ModerationStatus,
    promoter::{Promoter, PromoterPatch},
    user::{User, UserPatch},
};
use crate::domain::ports::{
    ClubRepository, DjRepository, EventRepository, PromoterRepository, UserRepository,
};
use crate::domain::services::consistency::{self, ConsistencyReport};
use crate::error::AppError;

/// One full set of repositories, all backed by the same store.
#[derive(Clone)]
pub struct RepoSet {
    pub events: Arc<dyn EventRepository>,
    pub djs: Arc<dyn DjRepository>,
    pub clubs: Arc<dyn ClubRepository>,
    pub promoters: Arc<dyn PromoterRepository>,
    pub users: Arc<dyn UserRepository>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionStatus {
    Loading,
    Remote,
    LocalOnly,
    Error,
}

#[derive(Serialize)]
pub struct SyncStatus {
    pub connection: ConnectionStatus,
    pub loading: bool,
    pub error: Option<String>,
    pub last_refresh: Option<DateTime<Utc>>,
}

struct Snapshot {
    events: Vec<Event>,
    djs: Vec<Dj>,
    clubs: Vec<Club>,
    promoters: Vec<Promoter>,
    users: Vec<User>,
    connection: ConnectionStatus,
    loading: bool,
    error: Option<String>,
    last_refresh: Option<DateTime<Utc>>,
}

struct Collections {
    events: Vec<Event>,
    djs: Vec<Dj>,
    clubs: Vec<Club>,
    promoters: Vec<Promoter>,
    users: Vec<User>,
}

impl Snapshot {
    fn install(&mut self, collections: Collections) {
        self.events = collections.events;
        self.djs = collections.djs;
        self.clubs = collections.clubs;
        self.promoters = collections.promoters;
        self.users = collections.users;
    }
}

/// Clears the loading flag on every exit path of the load protocol.
struct LoadingGuard<'a> {
    snapshot: &'a RwLock<Snapshot>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut snap = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        snap.loading = false;
    }
}

/// The single source of truth for the UI: owns the in-memory collections,
/// loads them via the remote-preferred/local-fallback protocol, and funnels
/// every mutation through one write lock so concurrent read-modify-write
/// cycles cannot lose updates.
pub struct CatalogService {
    local: RepoSet,
    remote: Option<RepoSet>,
    snapshot: RwLock<Snapshot>,
    write_lock: Mutex<()>,
}

impl CatalogService {
    pub fn new(local: RepoSet, remote: Option<RepoSet>) -> Self {
        Self {
            local,
            remote,
            snapshot: RwLock::new(Snapshot {
                events: Vec::new(),
                djs: Vec::new(),
                clubs: Vec::new(),
                promoters: Vec::new(),
                users: Vec::new(),
                connection: ConnectionStatus::Loading,
                loading: false,
                error: None,
                last_refresh: None,
            }),
            write_lock: Mutex::new(()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.snapshot.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.snapshot.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Repositories that mutations go through: the remote set while the
    /// catalog is connected to it, the local set otherwise.
    fn active_repos(&self) -> &RepoSet {
        let connection = self.read().connection;
        match (&self.remote, connection) {
            (Some(remote), ConnectionStatus::Remote) => remote,
            _ => &self.local,
        }
    }

    async fn load_all(repos: &RepoSet) -> Result<Collections, AppError> {
        let (events, djs, clubs, promoters, users) = tokio::try_join!(
            repos.events.list(),
            repos.djs.list(),
            repos.clubs.list(),
            repos.promoters.list(),
            repos.users.list(),
        )?;

        Ok(Collections { events, djs, clubs, promoters, users })
    }

    /// Reloads every collection. With `prefer_remote` (or while already
    /// connected remote) the remote store is tried first and a failure falls
    /// back to local; only when both stores fail does the catalog enter the
    /// error state, keeping whatever snapshot it had.
    pub async fn refresh(&self, prefer_remote: bool) -> Result<(), AppError> {
        {
            let mut snap = self.write();
            snap.loading = true;
            snap.error = None;
        }
        let _guard = LoadingGuard { snapshot: &self.snapshot };

        let try_remote = prefer_remote || self.read().connection == ConnectionStatus::Remote;

        if try_remote {
            if let Some(remote) = &self.remote {
                match Self::load_all(remote).await {
                    Ok(collections) => {
                        let mut snap = self.write();
                        snap.install(collections);
                        snap.connection = ConnectionStatus::Remote;
                        snap.last_refresh = Some(Utc::now());
                        info!("Catalog refreshed from remote store");
                        return Ok(());
                    }
                    Err(e) => {
                        warn!("Remote store unavailable, falling back to local: {}", e);
                    }
                }
            }
        }

        match Self::load_all(&self.local).await {
            Ok(collections) => {
                let mut snap = self.write();
                snap.install(collections);
                snap.connection = ConnectionStatus::LocalOnly;
                snap.last_refresh = Some(Utc::now());
                info!("Catalog refreshed from local store");
                Ok(())
            }
            Err(e) => {
                let mut snap = self.write();
                snap.connection = ConnectionStatus::Error;
                snap.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn status(&self) -> SyncStatus {
        let snap = self.read();
        SyncStatus {
            connection: snap.connection,
            loading: snap.loading,
            error: snap.error.clone(),
            last_refresh: snap.last_refresh,
        }
    }

    pub fn check_consistency(&self) -> ConsistencyReport {
        let snap = self.read();
        consistency::check(&snap.events, &snap.djs, &snap.clubs, &snap.promoters)
    }

    // ---- Collections and derived views ----

    pub fn events(&self) -> Vec<Event> {
        self.read().events.clone()
    }

    pub fn djs(&self) -> Vec<Dj> {
        self.read().djs.clone()
    }

    pub fn clubs(&self) -> Vec<Club> {
        self.read().clubs.clone()
    }

    pub fn promoters(&self) -> Vec<Promoter> {
        self.read().promoters.clone()
    }

    pub fn users(&self) -> Vec<User> {
        self.read().users.clone()
    }

    /// The public calendar: everything not rejected, in date order.
    pub fn calendar_events(&self) -> Vec<Event> {
        let snap = self.read();
        let mut events: Vec<Event> = snap
            .events
            .iter()
            .filter(|e| e.status != ModerationStatus::Rejected.as_str())
            .cloned()
            .collect();
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
        events
    }

    pub fn upcoming_events(&self) -> Vec<Event> {
        let today = Utc::now().date_naive();
        self.calendar_events()
            .into_iter()
            .filter(|e| e.date >= today)
            .take(10)
            .collect()
    }

    pub fn featured_events(&self) -> Vec<Event> {
        self.read()
            .events
            .iter()
            .filter(|e| e.status == ModerationStatus::Approved.as_str())
            .take(6)
            .cloned()
            .collect()
    }

    pub fn pending_events(&self) -> Vec<Event> {
        self.read()
            .events
            .iter()
            .filter(|e| e.status == ModerationStatus::Pending.as_str())
            .cloned()
            .collect()
    }

    pub fn pending_djs(&self) -> Vec<Dj> {
        self.read()
            .djs
            .iter()
            .filter(|d| d.status == ModerationStatus::Pending.as_str())
            .cloned()
            .collect()
    }

    pub fn pending_clubs(&self) -> Vec<Club> {
        self.read()
            .clubs
            .iter()
            .filter(|c| c.status == ModerationStatus::Pending.as_str())
            .cloned()
            .collect()
    }

    pub fn pending_promoters(&self) -> Vec<Promoter> {
        self.read()
            .promoters
            .iter()
            .filter(|p| p.status == ModerationStatus::Pending.as_str())
            .cloned()
            .collect()
    }

    // ---- Lookups (linear scans of the snapshot) ----

    pub fn find_event_by_id(&self, id: &str) -> Option<Event> {
        self.read().events.iter().find(|e| e.id == id).cloned()
    }

    pub fn find_event_by_slug(&self, slug: &str) -> Option<Event> {
        self.read().events.iter().find(|e| e.slug == slug).cloned()
    }

    pub fn find_dj_by_id(&self, id: &str) -> Option<Dj> {
        self.read().djs.iter().find(|d| d.id == id).cloned()
    }

    pub fn find_dj_by_slug(&self, slug: &str) -> Option<Dj> {
        self.read().djs.iter().find(|d| d.slug == slug).cloned()
    }

    pub fn find_club_by_id(&self, id: &str) -> Option<Club> {
        self.read().clubs.iter().find(|c| c.id == id).cloned()
    }

    pub fn find_club_by_slug(&self, slug: &str) -> Option<Club> {
        self.read().clubs.iter().find(|c| c.slug == slug).cloned()
    }

    pub fn find_promoter_by_id(&self, id: &str) -> Option<Promoter> {
        self.read().promoters.iter().find(|p| p.id == id).cloned()
    }

    pub fn find_promoter_by_slug(&self, slug: &str) -> Option<Promoter> {
        self.read().promoters.iter().find(|p| p.slug == slug).cloned()
    }

    pub fn find_user_by_id(&self, id: &str) -> Option<User> {
        self.read().users.iter().find(|u| u.id == id).cloned()
    }

    pub fn find_user_by_username(&self, username: &str) -> Option<User> {
        self.read().users.iter().find(|u| u.username == username).cloned()
    }

    // ---- Events ----

    pub async fn add_event(&self, event: Event) -> Result<Event, AppError> {
        let _guard = self.write_lock.lock().await;
        let created = self.active_repos().events.create(&event).await?;
        self.write().events.push(created.clone());
        Ok(created)
    }

    pub async fn update_event(&self, id: &str, patch: EventPatch) -> Result<Event, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut event = self
            .find_event_by_id(id)
            .ok_or_else(|| AppError::NotFound("Event not found".into()))?;
        event.apply_patch(patch);

        let updated = self.active_repos().events.update(&event).await?;

        let mut snap = self.write();
        let events = snap
            .events
            .iter()
            .map(|e| if e.id == id { updated.clone() } else { e.clone() })
            .collect();
        snap.events = events;
        Ok(updated)
    }

    pub async fn delete_event(&self, id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.active_repos().events.delete(id).await?;
        self.write().events.retain(|e| e.id != id);
        Ok(())
    }

    pub async fn set_event_status(
        &self,
        id: &str,
        status: ModerationStatus,
    ) -> Result<Event, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut event = self
            .find_event_by_id(id)
            .ok_or_else(|| AppError::NotFound("Event not found".into()))?;
        event.status = status.as_str().to_string();

        let updated = self.active_repos().events.update(&event).await?;

        let mut snap = self.write();
        let events = snap
            .events
            .iter()
            .map(|e| if e.id == id { updated.clone() } else { e.clone() })
            .collect();
        snap.events = events;
        Ok(updated)
    }

    // ---- DJs ----

    pub async fn add_dj(&self, dj: Dj) -> Result<Dj, AppError> {
        let _guard = self.write_lock.lock().await;
        let created = self.active_repos().djs.create(&dj).await?;
        self.write().djs.push(created.clone());
        Ok(created)
    }

    pub async fn update_dj(&self, id: &str, patch: DjPatch) -> Result<Dj, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut dj = self
            .find_dj_by_id(id)
            .ok_or_else(|| AppError::NotFound("DJ not found".into()))?;
        dj.apply_patch(patch);

        let updated = self.active_repos().djs.update(&dj).await?;

        let mut snap = self.write();
        let djs = snap
            .djs
            .iter()
            .map(|d| if d.id == id { updated.clone() } else { d.clone() })
            .collect();
        snap.djs = djs;
        Ok(updated)
    }

    pub async fn delete_dj(&self, id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.active_repos().djs.delete(id).await?;
        self.write().djs.retain(|d| d.id != id);
        Ok(())
    }

    pub async fn set_dj_status(&self, id: &str, status: ModerationStatus) -> Result<Dj, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut dj = self
            .find_dj_by_id(id)
            .ok_or_else(|| AppError::NotFound("DJ not found".into()))?;
        dj.status = status.as_str().to_string();

        let updated = self.active_repos().djs.update(&dj).await?;

        let mut snap = self.write();
        let djs = snap
            .djs
            .iter()
            .map(|d| if d.id == id { updated.clone() } else { d.clone() })
            .collect();
        snap.djs = djs;
        Ok(updated)
    }

    // ---- Clubs ----

    pub async fn add_club(&self, club: Club) -> Result<Club, AppError> {
        let _guard = self.write_lock.lock().await;
        let created = self.active_repos().clubs.create(&club).await?;
        self.write().clubs.push(created.clone());
        Ok(created)
    }

    pub async fn update_club(&self, id: &str, patch: ClubPatch) -> Result<Club, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut club = self
            .find_club_by_id(id)
            .ok_or_else(|| AppError::NotFound("Club not found".into()))?;
        club.apply_patch(patch);

        let updated = self.active_repos().clubs.update(&club).await?;

        let mut snap = self.write();
        let clubs = snap
            .clubs
            .iter()
            .map(|c| if c.id == id { updated.clone() } else { c.clone() })
            .collect();
        snap.clubs = clubs;
        Ok(updated)
    }

    pub async fn delete_club(&self, id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.active_repos().clubs.delete(id).await?;
        self.write().clubs.retain(|c| c.id != id);
        Ok(())
    }

    pub async fn set_club_status(
        &self,
        id: &str,
        status: ModerationStatus,
    ) -> Result<Club, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut club = self
            .find_club_by_id(id)
            .ok_or_else(|| AppError::NotFound("Club not found".into()))?;
        club.status = status.as_str().to_string();

        let updated = self.active_repos().clubs.update(&club).await?;

        let mut snap = self.write();
        let clubs = snap
            .clubs
            .iter()
            .map(|c| if c.id == id { updated.clone() } else { c.clone() })
            .collect();
        snap.clubs = clubs;
        Ok(updated)
    }

    // ---- Promoters ----

    pub async fn add_promoter(&self, promoter: Promoter) -> Result<Promoter, AppError> {
        let _guard = self.write_lock.lock().await;
        let created = self.active_repos().promoters.create(&promoter).await?;
        self.write().promoters.push(created.clone());
        Ok(created)
    }

    pub async fn update_promoter(
        &self,
        id: &str,
        patch: PromoterPatch,
    ) -> Result<Promoter, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut promoter = self
            .find_promoter_by_id(id)
            .ok_or_else(|| AppError::NotFound("Promoter not found".into()))?;
        promoter.apply_patch(patch);

        let updated = self.active_repos().promoters.update(&promoter).await?;

        let mut snap = self.write();
        let promoters = snap
            .promoters
            .iter()
            .map(|p| if p.id == id { updated.clone() } else { p.clone() })
            .collect();
        snap.promoters = promoters;
        Ok(updated)
    }

    pub async fn delete_promoter(&self, id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.active_repos().promoters.delete(id).await?;
        self.write().promoters.retain(|p| p.id != id);
        Ok(())
    }

    pub async fn set_promoter_status(
        &self,
        id: &str,
        status: ModerationStatus,
    ) -> Result<Promoter, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut promoter = self
            .find_promoter_by_id(id)
            .ok_or_else(|| AppError::NotFound("Promoter not found".into()))?;
        promoter.status = status.as_str().to_string();

        let updated = self.active_repos().promoters.update(&promoter).await?;

        let mut snap = self.write();
        let promoters = snap
            .promoters
            .iter()
            .map(|p| if p.id == id { updated.clone() } else { p.clone() })
            .collect();
        snap.promoters = promoters;
        Ok(updated)
    }

    // ---- Users ----

    pub async fn add_user(&self, user: User) -> Result<User, AppError> {
        let _guard = self.write_lock.lock().await;
        let created = self.active_repos().users.create(&user).await?;
        self.write().users.push(created.clone());
        Ok(created)
    }

    pub async fn update_user(&self, id: &str, patch: UserPatch) -> Result<User, AppError> {
        let _guard = self.write_lock.lock().await;
        let mut user = self
            .find_user_by_id(id)
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;
        user.apply_patch(patch);

        let updated = self.active_repos().users.update(&user).await?;

        let mut snap = self.write();
        let users = snap
            .users
            .iter()
            .map(|u| if u.id == id { updated.clone() } else { u.clone() })
            .collect();
        snap.users = users;
        Ok(updated)
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.active_repos().users.delete(id).await?;
        self.write().users.retain(|u| u.id != id);
        Ok(())
    }
}
