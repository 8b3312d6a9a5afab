//! StoreEntity implementation for the UserProfile record.
//!
//! The profile store stands in for the remote user service's own storage;
//! this crate only seeds it and reads it through the
//! [`UserDirectory`](crate::directory::UserDirectory) capability.

use crate::directory::DirectoryError;
use crate::framework::StoreEntity;
use crate::model::{UserProfile, UserProfileCreate, UserProfileUpdate};
use async_trait::async_trait;

#[async_trait]
impl StoreEntity for UserProfile {
    type Id = crate::model::UserId;
    type Create = UserProfileCreate;
    type Update = UserProfileUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = DirectoryError;

    fn from_create_params(id: Self::Id, params: UserProfileCreate) -> Result<Self, DirectoryError> {
        Ok(Self {
            user_id: id,
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            phone: params.phone,
        })
    }

    async fn on_update(
        &mut self,
        update: UserProfileUpdate,
        _ctx: &(),
    ) -> Result<(), DirectoryError> {
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), DirectoryError> {
        Ok(())
    }
}
