//! Hierarchy service — use-cases for managing users, houses, rooms and devices.

use tokio::sync::Mutex;

use hearth_domain::device::{Device, NewDevice};
use hearth_domain::error::HearthError;
use hearth_domain::hierarchy::{CascadeReport, HierarchyStore};
use hearth_domain::house::{House, HouseChanges, NewHouse};
use hearth_domain::id::{DeviceId, HouseId, RoomId, UserId};
use hearth_domain::room::{NewRoom, Room, RoomChanges};
use hearth_domain::user::{NewUser, User, UserChanges};

use crate::ports::HierarchyRepository;

fn log_cascade(kind: &'static str, id: u64, report: CascadeReport) {
    tracing::info!(
        kind,
        id,
        users = report.users,
        houses = report.houses,
        rooms = report.rooms,
        devices = report.devices,
        "deleted with descendants"
    );
}

/// Application service over a [`HierarchyRepository`], the in-memory
/// [`HierarchyStore`] unless told otherwise.
///
/// The whole repository sits behind one lock and every method holds it for
/// the full operation, so a cascade is never observed half done.
pub struct HierarchyService<R = HierarchyStore> {
    store: Mutex<R>,
}

impl Default for HierarchyService {
    fn default() -> Self {
        Self::new(HierarchyStore::new())
    }
}

impl<R: HierarchyRepository> HierarchyService<R> {
    /// Create a new service backed by the given repository.
    #[must_use]
    pub fn new(store: R) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    // -- users ----------------------------------------------------------------

    /// Create a user.
    #[tracing::instrument(skip(self, new), fields(user_name = %new.name))]
    pub async fn create_user(&self, new: NewUser) -> User {
        let user = self.store.lock().await.create_user(new);
        tracing::info!(id = %user.id, "user created");
        user
    }

    /// Look up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no user with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, HearthError> {
        self.store.lock().await.get_user(id)
    }

    /// List all users.
    pub async fn list_users(&self) -> Vec<User> {
        self.store.lock().await.list_users()
    }

    /// Replace a user's name and email.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no user with `id` exists.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_user(&self, id: UserId, changes: UserChanges) -> Result<User, HearthError> {
        self.store.lock().await.update_user(id, changes)
    }

    /// Delete a user and everything it owns.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no user with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<CascadeReport, HearthError> {
        let report = self.store.lock().await.delete_user(id)?;
        log_cascade("user", id.get(), report);
        Ok(report)
    }

    // -- houses ---------------------------------------------------------------

    /// Create a house owned by an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::InvalidParent`] when the owner does not exist.
    #[tracing::instrument(skip(self, new), fields(house_name = %new.name, user_id = %new.user_id))]
    pub async fn create_house(&self, new: NewHouse) -> Result<House, HearthError> {
        let house = self.store.lock().await.create_house(new)?;
        tracing::info!(id = %house.id, "house created");
        Ok(house)
    }

    /// Look up a house by id.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no house with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_house(&self, id: HouseId) -> Result<House, HearthError> {
        self.store.lock().await.get_house(id)
    }

    /// List all houses.
    pub async fn list_houses(&self) -> Vec<House> {
        self.store.lock().await.list_houses()
    }

    /// Replace a house's name and address.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no house with `id` exists.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_house(
        &self,
        id: HouseId,
        changes: HouseChanges,
    ) -> Result<House, HearthError> {
        self.store.lock().await.update_house(id, changes)
    }

    /// Delete a house with its rooms and devices.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no house with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn delete_house(&self, id: HouseId) -> Result<CascadeReport, HearthError> {
        let report = self.store.lock().await.delete_house(id)?;
        log_cascade("house", id.get(), report);
        Ok(report)
    }

    // -- rooms ----------------------------------------------------------------

    /// Create a room inside an existing house.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::InvalidParent`] when the house does not exist.
    #[tracing::instrument(skip(self, new), fields(room_name = %new.name, house_id = %new.house_id))]
    pub async fn create_room(&self, new: NewRoom) -> Result<Room, HearthError> {
        let room = self.store.lock().await.create_room(new)?;
        tracing::info!(id = %room.id, "room created");
        Ok(room)
    }

    /// Look up a room by id.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no room with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_room(&self, id: RoomId) -> Result<Room, HearthError> {
        self.store.lock().await.get_room(id)
    }

    /// List all rooms.
    pub async fn list_rooms(&self) -> Vec<Room> {
        self.store.lock().await.list_rooms()
    }

    /// Rename a room, moving it when `house_id` changes.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no room with `id` exists, or
    /// [`HearthError::InvalidParent`] when the target house does not exist.
    #[tracing::instrument(skip(self, changes), fields(house_id = %changes.house_id))]
    pub async fn update_room(&self, id: RoomId, changes: RoomChanges) -> Result<Room, HearthError> {
        self.store.lock().await.update_room(id, changes)
    }

    /// Delete a room with its devices.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no room with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn delete_room(&self, id: RoomId) -> Result<CascadeReport, HearthError> {
        let report = self.store.lock().await.delete_room(id)?;
        log_cascade("room", id.get(), report);
        Ok(report)
    }

    // -- devices --------------------------------------------------------------

    /// Create a device inside an existing room.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::InvalidParent`] when the room does not exist, or
    /// [`HearthError::InvalidType`] for an unsupported device type.
    #[tracing::instrument(skip(self, new), fields(device_name = %new.name, room_id = %new.room_id))]
    pub async fn create_device(&self, new: NewDevice) -> Result<Device, HearthError> {
        let device = self.store.lock().await.create_device(new)?;
        tracing::info!(id = %device.id, kind = %device.kind, "device created");
        Ok(device)
    }

    /// Look up a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, HearthError> {
        self.store.lock().await.get_device(id)
    }

    /// List all devices.
    pub async fn list_devices(&self) -> Vec<Device> {
        self.store.lock().await.list_devices()
    }

    /// Set a device's reading.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn update_device(&self, id: DeviceId, value: i64) -> Result<Device, HearthError> {
        self.store.lock().await.update_device(id, value)
    }

    /// Delete a device.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device with `id` exists.
    #[tracing::instrument(skip(self))]
    pub async fn delete_device(&self, id: DeviceId) -> Result<CascadeReport, HearthError> {
        let report = self.store.lock().await.delete_device(id)?;
        tracing::info!(%id, "device deleted");
        Ok(report)
    }
}
