//! KYC sub-client: applicant, documents, verification for the session user.

use crate::client::UnblockClient;
use crate::domain::kyc::wire::{
    ApplicantBody, ApplicantResponse, DocumentBody, DocumentResponse, VerificationResponse,
};
use crate::domain::kyc::{
    CreateApplicantRequest, DocumentUpload, KycApplicant, KycVerification, OnboardingOutcome,
    OnboardingRequest, UploadDocumentRequest,
};
use crate::error::SdkError;
use crate::http::{path_segment, AuthMode};

pub struct Kyc<'a> {
    pub(crate) client: &'a UnblockClient,
}

impl<'a> Kyc<'a> {
    pub async fn create_applicant(
        &self,
        request: &CreateApplicantRequest,
    ) -> Result<KycApplicant, SdkError> {
        let user_id = self.client.http.require_user_id().await?;
        let path = format!("/user/{}/kyc/applicant", path_segment(&user_id));
        let resp: ApplicantResponse = self
            .client
            .http
            .put(&path, &ApplicantBody::from(request), AuthMode::Session)
            .await?;
        Ok(resp.into())
    }

    pub async fn upload_document(
        &self,
        request: &UploadDocumentRequest,
    ) -> Result<DocumentUpload, SdkError> {
        let user_id = self.client.http.require_user_id().await?;
        let path = format!("/user/{}/kyc/document", path_segment(&user_id));
        let resp: DocumentResponse = self
            .client
            .http
            .put(&path, &DocumentBody::from(request), AuthMode::Session)
            .await?;
        Ok(resp.into())
    }

    pub async fn start_verification(&self) -> Result<KycVerification, SdkError> {
        let user_id = self.client.http.require_user_id().await?;
        let path = format!("/user/{}/kyc/verification", path_segment(&user_id));
        let resp: VerificationResponse = self
            .client
            .http
            .post(&path, None::<&()>, AuthMode::Session)
            .await?;
        Ok(resp.into())
    }

    pub async fn verification_status(&self) -> Result<KycVerification, SdkError> {
        let user_id = self.client.http.require_user_id().await?;
        let path = format!("/user/{}/kyc/verification", path_segment(&user_id));
        let resp: VerificationResponse = self.client.http.get(&path, AuthMode::Session).await?;
        Ok(resp.into())
    }

    /// Create the applicant, upload the document, then start verification.
    ///
    /// Stops at the first failing step and returns its error unchanged.
    pub async fn onboard(&self, request: &OnboardingRequest) -> Result<OnboardingOutcome, SdkError> {
        let applicant = self.create_applicant(&request.applicant).await?;
        let document = self.upload_document(&request.document).await?;
        let verification = self.start_verification().await?;
        tracing::debug!(status = %verification.status, "kyc onboarding submitted");

        Ok(OnboardingOutcome {
            applicant,
            document,
            verification,
        })
    }
}
