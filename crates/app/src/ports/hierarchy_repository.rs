//! Storage port for the user → house → room → device hierarchy.

use hearth_domain::device::{Device, NewDevice};
use hearth_domain::error::HearthError;
use hearth_domain::hierarchy::{CascadeReport, HierarchyStore};
use hearth_domain::house::{House, HouseChanges, NewHouse};
use hearth_domain::id::{DeviceId, HouseId, RoomId, UserId};
use hearth_domain::room::{NewRoom, Room, RoomChanges};
use hearth_domain::user::{NewUser, User, UserChanges};

/// Repository holding the whole hierarchy.
///
/// Methods are synchronous: the service serializes every call behind one
/// lock, and an implementation must apply each call (cascades included)
/// completely or not at all. Lookups, updates and deletes of an unknown id
/// fail with [`HearthError::NotFound`]; a missing parent on create or room
/// move fails with [`HearthError::InvalidParent`].
#[allow(clippy::missing_errors_doc)]
pub trait HierarchyRepository: Send {
    /// Store a new user with no houses.
    fn create_user(&mut self, new: NewUser) -> User;

    /// Get a user by id.
    fn get_user(&self, id: UserId) -> Result<User, HearthError>;

    /// All users, in creation order.
    fn list_users(&self) -> Vec<User>;

    /// Replace a user's name and email.
    fn update_user(&mut self, id: UserId, changes: UserChanges) -> Result<User, HearthError>;

    /// Remove a user together with its houses, rooms and devices.
    fn delete_user(&mut self, id: UserId) -> Result<CascadeReport, HearthError>;

    /// Store a new house and link it to its owner.
    fn create_house(&mut self, new: NewHouse) -> Result<House, HearthError>;

    /// Get a house by id.
    fn get_house(&self, id: HouseId) -> Result<House, HearthError>;

    /// All houses, in creation order.
    fn list_houses(&self) -> Vec<House>;

    /// Replace a house's name and address.
    fn update_house(&mut self, id: HouseId, changes: HouseChanges) -> Result<House, HearthError>;

    /// Remove a house together with its rooms and devices.
    fn delete_house(&mut self, id: HouseId) -> Result<CascadeReport, HearthError>;

    /// Store a new room and link it to its house.
    fn create_room(&mut self, new: NewRoom) -> Result<Room, HearthError>;

    /// Get a room by id.
    fn get_room(&self, id: RoomId) -> Result<Room, HearthError>;

    /// All rooms, in creation order.
    fn list_rooms(&self) -> Vec<Room>;

    /// Rename a room, moving it when `house_id` changes.
    fn update_room(&mut self, id: RoomId, changes: RoomChanges) -> Result<Room, HearthError>;

    /// Remove a room together with its devices.
    fn delete_room(&mut self, id: RoomId) -> Result<CascadeReport, HearthError>;

    /// Store a new device and link it to its room. The room is checked
    /// before the type, which fails with [`HearthError::InvalidType`].
    fn create_device(&mut self, new: NewDevice) -> Result<Device, HearthError>;

    /// Get a device by id.
    fn get_device(&self, id: DeviceId) -> Result<Device, HearthError>;

    /// All devices, in creation order.
    fn list_devices(&self) -> Vec<Device>;

    /// Set a device's value, leaving every other field alone.
    fn update_device(&mut self, id: DeviceId, value: i64) -> Result<Device, HearthError>;

    /// Remove a device and unlink it from its room.
    fn delete_device(&mut self, id: DeviceId) -> Result<CascadeReport, HearthError>;
}

/// The in-memory store is the default backend.
impl HierarchyRepository for HierarchyStore {
    fn create_user(&mut self, new: NewUser) -> User {
        HierarchyStore::create_user(self, new)
    }

    fn get_user(&self, id: UserId) -> Result<User, HearthError> {
        HierarchyStore::get_user(self, id)
    }

    fn list_users(&self) -> Vec<User> {
        HierarchyStore::list_users(self)
    }

    fn update_user(&mut self, id: UserId, changes: UserChanges) -> Result<User, HearthError> {
        HierarchyStore::update_user(self, id, changes)
    }

    fn delete_user(&mut self, id: UserId) -> Result<CascadeReport, HearthError> {
        HierarchyStore::delete_user(self, id)
    }

    fn create_house(&mut self, new: NewHouse) -> Result<House, HearthError> {
        HierarchyStore::create_house(self, new)
    }

    fn get_house(&self, id: HouseId) -> Result<House, HearthError> {
        HierarchyStore::get_house(self, id)
    }

    fn list_houses(&self) -> Vec<House> {
        HierarchyStore::list_houses(self)
    }

    fn update_house(&mut self, id: HouseId, changes: HouseChanges) -> Result<House, HearthError> {
        HierarchyStore::update_house(self, id, changes)
    }

    fn delete_house(&mut self, id: HouseId) -> Result<CascadeReport, HearthError> {
        HierarchyStore::delete_house(self, id)
    }

    fn create_room(&mut self, new: NewRoom) -> Result<Room, HearthError> {
        HierarchyStore::create_room(self, new)
    }

    fn get_room(&self, id: RoomId) -> Result<Room, HearthError> {
        HierarchyStore::get_room(self, id)
    }

    fn list_rooms(&self) -> Vec<Room> {
        HierarchyStore::list_rooms(self)
    }

    fn update_room(&mut self, id: RoomId, changes: RoomChanges) -> Result<Room, HearthError> {
        HierarchyStore::update_room(self, id, changes)
    }

    fn delete_room(&mut self, id: RoomId) -> Result<CascadeReport, HearthError> {
        HierarchyStore::delete_room(self, id)
    }

    fn create_device(&mut self, new: NewDevice) -> Result<Device, HearthError> {
        HierarchyStore::create_device(self, new)
    }

    fn get_device(&self, id: DeviceId) -> Result<Device, HearthError> {
        HierarchyStore::get_device(self, id)
    }

    fn list_devices(&self) -> Vec<Device> {
        HierarchyStore::list_devices(self)
    }

    fn update_device(&mut self, id: DeviceId, value: i64) -> Result<Device, HearthError> {
        HierarchyStore::update_device(self, id, value)
    }

    fn delete_device(&mut self, id: DeviceId) -> Result<CascadeReport, HearthError> {
        HierarchyStore::delete_device(self, id)
    }
}
