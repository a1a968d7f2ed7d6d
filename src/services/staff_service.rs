use std::fmt::Display;

use serde::Serialize;

use crate::error::ApiError;
use crate::models::StaffMember;
use crate::services::api_client::{path_segment, ApiClient, RequestOptions};

/// Personal: /personal
pub struct StaffApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StaffApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<StaffMember>, ApiError> {
        self.client.dispatch_list("/personal", RequestOptions::get()).await
    }

    pub async fn by_role(&self, role: impl Display) -> Result<Vec<StaffMember>, ApiError> {
        let path = format!("/personal/rol/{}", path_segment(role));
        self.client.dispatch_list(&path, RequestOptions::get()).await
    }

    pub async fn create<B>(&self, member: &B) -> Result<StaffMember, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let options = RequestOptions::post().json(member)?;
        self.client.dispatch_as("/personal", options).await
    }

    pub async fn update<B>(&self, id: impl Display, member: &B) -> Result<StaffMember, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/personal/{}", path_segment(id));
        let options = RequestOptions::put().json(member)?;
        self.client.dispatch_as(&path, options).await
    }
}
