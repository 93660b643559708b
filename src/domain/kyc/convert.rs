//! Conversions between KYC DTOs and wire types.

use super::wire::{
    ApplicantBody, ApplicantResponse, DocumentBody, DocumentResponse, VerificationResponse,
};
use super::{
    CreateApplicantRequest, DocumentUpload, KycApplicant, KycVerification, UploadDocumentRequest,
};
use crate::shared::wire::AddressBody;

impl From<&CreateApplicantRequest> for ApplicantBody {
    fn from(r: &CreateApplicantRequest) -> Self {
        Self {
            address: AddressBody::from(&r.address),
            date_of_birth: r.date_of_birth,
            source_of_funds: r.source_of_funds,
            source_of_funds_description: r.source_of_funds_description.clone(),
        }
    }
}

impl From<ApplicantResponse> for KycApplicant {
    fn from(r: ApplicantResponse) -> Self {
        Self {
            applicant_id: r.applicant_id,
            created: r.created,
        }
    }
}

impl From<&UploadDocumentRequest> for DocumentBody {
    fn from(r: &UploadDocumentRequest) -> Self {
        Self {
            content: r.content.clone(),
            filename: r.filename.clone(),
            document_type: r.document_type,
            document_side: r.document_side,
            country: r.country.clone(),
        }
    }
}

impl From<DocumentResponse> for DocumentUpload {
    fn from(r: DocumentResponse) -> Self {
        Self {
            upload_id: r.upload_id,
            document_type: r.document_type,
        }
    }
}

impl From<VerificationResponse> for KycVerification {
    fn from(r: VerificationResponse) -> Self {
        Self {
            status: r.status,
            started_at: r.verification_started_at,
            completed_at: r.verification_completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kyc::{DocumentSide, DocumentType, SourceOfFunds};
    use crate::shared::Address;
    use chrono::NaiveDate;
    use serde_json::json;

    fn applicant() -> CreateApplicantRequest {
        CreateApplicantRequest {
            address: Address {
                address_line_1: "1 Main St".into(),
                address_line_2: None,
                city: "London".into(),
                post_code: "N1 9GU".into(),
                country: "GB".into(),
            },
            date_of_birth: NaiveDate::from_ymd_opt(1990, 3, 7).unwrap(),
            source_of_funds: SourceOfFunds::Salary,
            source_of_funds_description: None,
        }
    }

    #[test]
    fn test_applicant_body_formats_date_of_birth() {
        let body = serde_json::to_value(ApplicantBody::from(&applicant())).unwrap();
        assert_eq!(
            body,
            json!({
                "address": {
                    "address_line_1": "1 Main St",
                    "city": "London",
                    "post_code": "N1 9GU",
                    "country": "GB"
                },
                "date_of_birth": "1990-03-07",
                "source_of_funds": "SALARY"
            })
        );
    }

    #[test]
    fn test_document_body_field_names() {
        let request = UploadDocumentRequest {
            content: "aGVsbG8=".into(),
            filename: "passport.png".into(),
            document_type: DocumentType::Passport,
            document_side: Some(DocumentSide::FrontSide),
            country: "GB".into(),
        };
        let body = serde_json::to_value(DocumentBody::from(&request)).unwrap();
        assert_eq!(body["document_type"], "PASSPORT");
        assert_eq!(body["document_side"], "FRONT_SIDE");
        assert_eq!(body["filename"], "passport.png");
    }

    #[test]
    fn test_verification_renames_timestamps() {
        let wire: VerificationResponse = serde_json::from_value(json!({
            "status": "PENDING",
            "verification_started_at": "2024-01-15T10:30:00Z"
        }))
        .unwrap();
        let verification = KycVerification::from(wire);
        assert_eq!(verification.started_at.as_deref(), Some("2024-01-15T10:30:00Z"));
        assert!(verification.completed_at.is_none());

        let out = serde_json::to_value(&verification).unwrap();
        assert_eq!(out["startedAt"], "2024-01-15T10:30:00Z");
    }
}
