//! Hierarchy store — the in-memory owner of every user, house, room and device.
//!
//! The store keeps the parent → children id lists and the child → parent ids
//! consistent on every create, update and delete. Deletes cascade down the
//! tree: user → houses → rooms → devices.
//!
//! Cascades are tolerant of a partially inconsistent graph: a child id that
//! no longer resolves is skipped, and a missing parent is not unlinked.

use std::collections::BTreeMap;

use crate::device::{Device, DeviceType, NewDevice};
use crate::error::{HearthError, InvalidParentError, NotFoundError};
use crate::house::{House, HouseChanges, NewHouse};
use crate::id::{DeviceId, HouseId, RoomId, Sequence, UserId};
use crate::room::{NewRoom, Room, RoomChanges};
use crate::user::{NewUser, User, UserChanges};

fn not_found(entity: &'static str, id: u64) -> HearthError {
    NotFoundError {
        entity,
        id: id.to_string(),
    }
    .into()
}

fn invalid_parent(entity: &'static str, id: u64) -> HearthError {
    InvalidParentError {
        entity,
        id: id.to_string(),
    }
    .into()
}

/// Number of records removed by a delete, per kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CascadeReport {
    pub users: usize,
    pub houses: usize,
    pub rooms: usize,
    pub devices: usize,
}

impl CascadeReport {
    /// Total number of records removed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.users + self.houses + self.rooms + self.devices
    }
}

/// Owns the four collections and the id sequences.
///
/// Records are keyed by id; since ids are handed out in increasing order,
/// iterating a collection yields records in insertion order.
#[derive(Debug, Default)]
pub struct HierarchyStore {
    users: BTreeMap<UserId, User>,
    houses: BTreeMap<HouseId, House>,
    rooms: BTreeMap<RoomId, Room>,
    devices: BTreeMap<DeviceId, Device>,
    user_ids: Sequence,
    house_ids: Sequence,
    room_ids: Sequence,
    device_ids: Sequence,
}

impl HierarchyStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- users ----------------------------------------------------------------

    /// Create a user with no houses.
    pub fn create_user(&mut self, new: NewUser) -> User {
        let id = UserId::new(self.user_ids.next_value());
        let user = User {
            id,
            name: new.name,
            email: new.email,
            houses: Vec::new(),
        };
        self.users.insert(id, user.clone());
        user
    }

    /// Look up a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no user with `id` exists.
    pub fn get_user(&self, id: UserId) -> Result<User, HearthError> {
        self.users
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("User", id.get()))
    }

    /// All users, in insertion order.
    #[must_use]
    pub fn list_users(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    /// Replace a user's name and email.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no user with `id` exists.
    pub fn update_user(&mut self, id: UserId, changes: UserChanges) -> Result<User, HearthError> {
        let user = self
            .users
            .get_mut(&id)
            .ok_or_else(|| not_found("User", id.get()))?;
        user.name = changes.name;
        user.email = changes.email;
        Ok(user.clone())
    }

    /// Delete a user together with every house, room and device it owns.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no user with `id` exists.
    pub fn delete_user(&mut self, id: UserId) -> Result<CascadeReport, HearthError> {
        let user = self
            .users
            .remove(&id)
            .ok_or_else(|| not_found("User", id.get()))?;

        let mut report = CascadeReport {
            users: 1,
            ..CascadeReport::default()
        };
        for house_id in user.houses {
            self.purge_house(house_id, &mut report);
        }
        Ok(report)
    }

    // -- houses ---------------------------------------------------------------

    /// Create a house and append it to its owner's house list.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::InvalidParent`] when `user_id` does not resolve.
    pub fn create_house(&mut self, new: NewHouse) -> Result<House, HearthError> {
        let owner = self
            .users
            .get_mut(&new.user_id)
            .ok_or_else(|| invalid_parent("User", new.user_id.get()))?;

        let id = HouseId::new(self.house_ids.next_value());
        owner.houses.push(id);

        let house = House {
            id,
            name: new.name,
            address: new.address,
            user_id: new.user_id,
            rooms: Vec::new(),
        };
        self.houses.insert(id, house.clone());
        Ok(house)
    }

    /// Look up a house by id.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no house with `id` exists.
    pub fn get_house(&self, id: HouseId) -> Result<House, HearthError> {
        self.houses
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("House", id.get()))
    }

    /// All houses, in insertion order.
    #[must_use]
    pub fn list_houses(&self) -> Vec<House> {
        self.houses.values().cloned().collect()
    }

    /// Replace a house's name and address. Owner and rooms are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no house with `id` exists.
    pub fn update_house(
        &mut self,
        id: HouseId,
        changes: HouseChanges,
    ) -> Result<House, HearthError> {
        let house = self
            .houses
            .get_mut(&id)
            .ok_or_else(|| not_found("House", id.get()))?;
        house.name = changes.name;
        house.address = changes.address;
        Ok(house.clone())
    }

    /// Delete a house with its rooms and devices, and unlink it from its owner.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no house with `id` exists.
    pub fn delete_house(&mut self, id: HouseId) -> Result<CascadeReport, HearthError> {
        let owner_id = self
            .houses
            .get(&id)
            .map(|house| house.user_id)
            .ok_or_else(|| not_found("House", id.get()))?;

        if let Some(owner) = self.users.get_mut(&owner_id) {
            owner.houses.retain(|house_id| *house_id != id);
        }

        let mut report = CascadeReport::default();
        self.purge_house(id, &mut report);
        Ok(report)
    }

    // -- rooms ----------------------------------------------------------------

    /// Create a room and append it to its house's room list.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::InvalidParent`] when `house_id` does not resolve.
    pub fn create_room(&mut self, new: NewRoom) -> Result<Room, HearthError> {
        let house = self
            .houses
            .get_mut(&new.house_id)
            .ok_or_else(|| invalid_parent("House", new.house_id.get()))?;

        let id = RoomId::new(self.room_ids.next_value());
        house.rooms.push(id);

        let room = Room {
            id,
            name: new.name,
            house_id: new.house_id,
            devices: Vec::new(),
        };
        self.rooms.insert(id, room.clone());
        Ok(room)
    }

    /// Look up a room by id.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no room with `id` exists.
    pub fn get_room(&self, id: RoomId) -> Result<Room, HearthError> {
        self.rooms
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("Room", id.get()))
    }

    /// All rooms, in insertion order.
    #[must_use]
    pub fn list_rooms(&self) -> Vec<Room> {
        self.rooms.values().cloned().collect()
    }

    /// Rename a room and, when `house_id` differs, move it to that house.
    ///
    /// The move removes the room id from the previous house's room list (if
    /// that house still exists) and appends it to the new one.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no room with `id` exists, or
    /// [`HearthError::InvalidParent`] when the target house does not exist.
    /// Nothing is modified on error.
    pub fn update_room(&mut self, id: RoomId, changes: RoomChanges) -> Result<Room, HearthError> {
        let current_house = self
            .rooms
            .get(&id)
            .map(|room| room.house_id)
            .ok_or_else(|| not_found("Room", id.get()))?;

        if changes.house_id != current_house {
            let target = self
                .houses
                .get_mut(&changes.house_id)
                .ok_or_else(|| invalid_parent("House", changes.house_id.get()))?;
            target.rooms.push(id);

            if let Some(previous) = self.houses.get_mut(&current_house) {
                previous.rooms.retain(|room_id| *room_id != id);
            }
        }

        let room = self
            .rooms
            .get_mut(&id)
            .ok_or_else(|| not_found("Room", id.get()))?;
        room.name = changes.name;
        room.house_id = changes.house_id;
        Ok(room.clone())
    }

    /// Delete a room with its devices, and unlink it from its house.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no room with `id` exists.
    pub fn delete_room(&mut self, id: RoomId) -> Result<CascadeReport, HearthError> {
        let house_id = self
            .rooms
            .get(&id)
            .map(|room| room.house_id)
            .ok_or_else(|| not_found("Room", id.get()))?;

        if let Some(house) = self.houses.get_mut(&house_id) {
            house.rooms.retain(|room_id| *room_id != id);
        }

        let mut report = CascadeReport::default();
        self.purge_room(id, &mut report);
        Ok(report)
    }

    // -- devices --------------------------------------------------------------

    /// Create a device and append it to its room's device list.
    ///
    /// The parent room is checked before the device type.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::InvalidParent`] when `room_id` does not resolve,
    /// or [`HearthError::InvalidType`] when the type is not supported.
    pub fn create_device(&mut self, new: NewDevice) -> Result<Device, HearthError> {
        let room = self
            .rooms
            .get_mut(&new.room_id)
            .ok_or_else(|| invalid_parent("Room", new.room_id.get()))?;
        let kind: DeviceType = new.kind.parse()?;

        let id = DeviceId::new(self.device_ids.next_value());
        room.devices.push(id);

        let device = Device {
            id,
            name: new.name,
            kind,
            room_id: new.room_id,
            value: new.value,
        };
        self.devices.insert(id, device.clone());
        Ok(device)
    }

    /// Look up a device by id.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device with `id` exists.
    pub fn get_device(&self, id: DeviceId) -> Result<Device, HearthError> {
        self.devices
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found("Device", id.get()))
    }

    /// All devices, in insertion order.
    #[must_use]
    pub fn list_devices(&self) -> Vec<Device> {
        self.devices.values().cloned().collect()
    }

    /// Set a device's reading. Name, type and room are never changed.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device with `id` exists.
    pub fn update_device(&mut self, id: DeviceId, value: i64) -> Result<Device, HearthError> {
        let device = self
            .devices
            .get_mut(&id)
            .ok_or_else(|| not_found("Device", id.get()))?;
        device.value = value;
        Ok(device.clone())
    }

    /// Delete a device and unlink it from its room.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::NotFound`] when no device with `id` exists.
    pub fn delete_device(&mut self, id: DeviceId) -> Result<CascadeReport, HearthError> {
        let device = self
            .devices
            .remove(&id)
            .ok_or_else(|| not_found("Device", id.get()))?;

        if let Some(room) = self.rooms.get_mut(&device.room_id) {
            room.devices.retain(|device_id| *device_id != id);
        }

        Ok(CascadeReport {
            devices: 1,
            ..CascadeReport::default()
        })
    }

    // -- cascade --------------------------------------------------------------

    fn purge_house(&mut self, id: HouseId, report: &mut CascadeReport) {
        let Some(house) = self.houses.remove(&id) else {
            return;
        };
        report.houses += 1;
        for room_id in house.rooms {
            self.purge_room(room_id, report);
        }
    }

    fn purge_room(&mut self, id: RoomId, report: &mut CascadeReport) {
        let Some(room) = self.rooms.remove(&id) else {
            return;
        };
        report.rooms += 1;
        for device_id in room.devices {
            if self.devices.remove(&device_id).is_some() {
                report.devices += 1;
            }
        }
    }
}
