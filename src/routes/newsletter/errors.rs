use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::newsletter::NewsletterError;
use crate::routes::helpers::ErrorBody;

impl NewsletterError {
    /// Message shown to the visitor. Provider details stay in the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            NewsletterError::InvalidEmail(_) => "Μη έγκυρη διεύθυνση email",
            NewsletterError::AlreadySubscribed => "Αυτή η διεύθυνση email είναι ήδη εγγεγραμμένη",
            NewsletterError::Unavailable => {
                "Η υπηρεσία newsletter δεν είναι διαθέσιμη αυτή τη στιγμή"
            }
            NewsletterError::Rejected { .. } => "Αποτυχία εγγραφής. Παρακαλώ δοκιμάστε ξανά.",
            NewsletterError::UnknownProvider(_) => "Άγνωστος πάροχος newsletter",
            NewsletterError::UnexpectedError(_) => "Κάτι πήγε στραβά. Παρακαλώ δοκιμάστε ξανά.",
        }
    }
}

impl ResponseError for NewsletterError {
    fn status_code(&self) -> StatusCode {
        match self {
            NewsletterError::InvalidEmail(_) | NewsletterError::AlreadySubscribed => {
                StatusCode::BAD_REQUEST
            }
            NewsletterError::UnknownProvider(_) => StatusCode::NOT_FOUND,
            // The provider's status is passed through as-is.
            NewsletterError::Rejected { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            NewsletterError::Unavailable | NewsletterError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.user_message(),
        })
    }
}
