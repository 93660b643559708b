//! KYB sub-client: company lifecycle and membership.

use crate::client::UnblockClient;
use crate::domain::kyb::wire::{
    AddCompanyUserBody, CompanyResponse, CompanyUserResponse, CreateCompanyBody,
    UpdateCompanyBody,
};
use crate::domain::kyb::{
    AddCompanyUserRequest, Company, CompanyMember, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::error::SdkError;
use crate::http::{path_segment, AuthMode};

pub struct Kyb<'a> {
    pub(crate) client: &'a UnblockClient,
}

impl<'a> Kyb<'a> {
    pub async fn create_company(&self, request: &CreateCompanyRequest) -> Result<Company, SdkError> {
        let resp: CompanyResponse = self
            .client
            .http
            .post("/company", Some(&CreateCompanyBody::from(request)), AuthMode::Session)
            .await?;
        Ok(resp.into())
    }

    pub async fn update_company(
        &self,
        company_id: &str,
        request: &UpdateCompanyRequest,
    ) -> Result<Company, SdkError> {
        let path = format!("/company/{}", path_segment(company_id));
        let resp: CompanyResponse = self
            .client
            .http
            .patch(&path, &UpdateCompanyBody::from(request), AuthMode::Session)
            .await?;
        Ok(resp.into())
    }

    pub async fn add_company_user(
        &self,
        company_id: &str,
        request: &AddCompanyUserRequest,
    ) -> Result<CompanyMember, SdkError> {
        let path = format!("/company/{}/user", path_segment(company_id));
        let resp: CompanyUserResponse = self
            .client
            .http
            .post(&path, Some(&AddCompanyUserBody::from(request)), AuthMode::Session)
            .await?;
        Ok(resp.into())
    }

    pub async fn remove_company_user(&self, company_id: &str, user_id: &str) -> Result<(), SdkError> {
        let path = format!(
            "/company/{}/user/{}",
            path_segment(company_id),
            path_segment(user_id)
        );
        let _: serde_json::Value = self.client.http.delete(&path, AuthMode::Session).await?;
        Ok(())
    }
}
